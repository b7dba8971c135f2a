use std::process::ExitCode;

use clap::Parser;
use place_distances::{init_tracing, Args};

fn main() -> ExitCode {
  let args = Args::parse();
  init_tracing(&args.log_level);

  match args.execute() {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("error: {e}");
      ExitCode::FAILURE
    }
  }
}
