pub mod compute;
pub mod error;
pub mod generate;
pub mod places;
pub mod report;

use std::{
  io::Write,
  path::{Path, PathBuf},
};

use compute::{pair_distances, summarize, Point};
use error::{Error, Result};
use generate::{generate_places, places_file_path, GenerationMethod};
use report::Report;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/*********************
*  Argument Parsing  *
*********************/
use clap::{builder::ValueParser, Parser, Subcommand};
use regex::Regex;

/// Pairwise great-circle distances between places
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
  #[command(subcommand)]
  command: Option<Command>,
  #[command(flatten)]
  run: RunArgs,
  /// Log filter used when RUST_LOG is not set
  #[arg(long, default_value = "warn", global = true)]
  pub log_level: String,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Remove saved place files that match the generated naming convention from a directory
  Clean {
    /// Directory holding saved place files
    #[clap(default_value = ".", value_parser = dir_name_parser())]
    dir: PathBuf,
  },
}

#[derive(Debug, clap::Args)]
pub struct RunArgs {
  /// Number of random places to generate instead of reading the input file
  #[arg(short, long, value_parser = min_usize_parser(2))]
  number: Option<usize>,
  /// CSV file with `name,latitude,longitude` rows after a header row
  #[arg(short, long, default_value = "places.csv")]
  input: PathBuf,
  /// Seed of the random number generator, drawn at random when omitted
  #[arg(short, long, requires = "number")]
  seed: Option<u64>,
  /// Random sampling method
  #[arg(short, long, value_enum, default_value_t = GenerationMethod::Uniform)]
  method: GenerationMethod,
  /// Also save generated places as CSV into this directory
  #[arg(long, requires = "number", value_parser = dir_name_parser())]
  save_dir: Option<PathBuf>,
}

impl Args {
  pub fn execute(&self) -> Result<()> {
    match &self.command {
      None => {
        let mut out = std::io::BufWriter::new(std::io::stdout().lock());
        self.run.execute(&mut out)?;
        out.flush()?;
        Ok(())
      }
      Some(Command::Clean { dir }) => {
        let mut out = std::io::stdout().lock();
        clean(dir, &mut out).map(|_| ())
      }
    }
  }
}

impl RunArgs {
  pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
    let places = self.places()?;
    let pairs = pair_distances(&places);
    info!(places = places.len(), pairs = pairs.len(), "computed pair distances");

    let summary = summarize(&pairs).ok_or(Error::TooFewPoints(places.len()))?;
    debug!(total_km = summary.total_km, average_km = summary.average_km, "summarized");

    writeln!(out, "{}", Report::new(pairs, summary))?;
    Ok(())
  }

  fn places(&self) -> Result<Vec<Point>> {
    let Some(number) = self.number else {
      return places::read_places(&self.input);
    };

    let seed = self.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, method = ?self.method, number, "generating places");
    let places = generate_places(&mut ChaCha8Rng::seed_from_u64(seed), self.method, number);

    if let Some(dir) = &self.save_dir {
      let path = places_file_path(dir, self.method, seed, number);
      places::write_places(&path, &places)?;
      info!(path = %path.display(), "saved generated places");
    }

    Ok(places)
  }
}

/// Delete files in `dir` named like `places_<method>_<seed>_<number>.csv`, returning the removed paths.
pub fn clean<W: Write>(dir: &Path, out: &mut W) -> Result<Vec<PathBuf>> {
  let re = Regex::new(&format!(r"^places_({})_(\d+)_(\d+)$", GenerationMethod::lowercase_options().join("|")))?;

  let mut removed = vec![];
  let entries = dir.read_dir().map_err(Error::io(dir))?;
  for path in entries.filter_map(|x| x.ok().map(|x| x.path()).filter(|x| x.is_file())) {
    if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
      continue;
    }
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
      continue;
    };
    if re.is_match(stem) {
      std::fs::remove_file(&path).map_err(Error::io(&path))?;
      writeln!(out, "Removed file: {}", path.to_string_lossy())?;
      removed.push(path);
    }
  }

  Ok(removed)
}

pub fn init_tracing(default_filter: &str) {
  use tracing_subscriber::prelude::*;
  use tracing_subscriber::{fmt, EnvFilter};

  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(default_filter))
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::registry().with(filter).with(fmt::layer().with_writer(std::io::stderr).with_target(false)).init();
}

pub fn min_usize_parser(min: usize) -> ValueParser {
  ValueParser::new(move |s: &str| match s.parse::<usize>().map_err(|_| "must be an unsigned integer")? {
    val if val < min => Err(format!("must be >= {min}")),
    val => Ok(val),
  })
}

pub fn dir_name_parser() -> ValueParser {
  ValueParser::new(|s: &str| {
    let path_buf = PathBuf::from(s);
    if path_buf.is_dir() {
      Ok(path_buf)
    } else {
      Err("must be directory name")
    }
  })
}
