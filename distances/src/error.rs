use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),

  #[error("failed to write output: {0}")]
  Write(#[from] std::io::Error),

  #[error("invalid file name pattern: {0}")]
  Pattern(#[from] regex::Error),

  /// Row is missing one of `name`, `latitude`, `longitude`
  #[error("line {line}: missing {field} column")]
  MissingField { line: u64, field: &'static str },

  #[error("line {line}: {field} is not a number: {value:?}")]
  InvalidCoordinate { line: u64, field: &'static str, value: String },

  /// Distances need at least one pair
  #[error("at least 2 places are required, got {0}")]
  TooFewPoints(usize),
}

impl Error {
  pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
    let path = path.into();
    move |source| Self::Io { path, source }
  }
}
