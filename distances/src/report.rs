use std::fmt::{self, Display};

use crate::compute::{format_distance, PairDistance, Summary};

/// Rendered result of a run: every pair sorted by distance, then the summary line.
pub struct Report<'a> {
  pairs: Vec<PairDistance<'a>>,
  summary: Summary<'a>,
  width: usize,
}

impl<'a> Report<'a> {
  /// Sorting is stable, pairs at equal distance keep their pairing order.
  pub fn new(mut pairs: Vec<PairDistance<'a>>, summary: Summary<'a>) -> Self {
    pairs.sort_by(|x, y| x.km.total_cmp(&y.km));
    let width = pairs.iter().flat_map(|p| [p.a, p.b]).map(|p| p.name.chars().count()).max().unwrap_or(0) + 2;
    Self { pairs, summary, width }
  }

  pub fn pairs(&self) -> &[PairDistance<'a>] {
    &self.pairs
  }
}

impl Display for Report<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let width = self.width;
    for PairDistance { a, b, km } in &self.pairs {
      writeln!(f, "{:<width$} {:<width$} {}", a.name, b.name, format_distance(*km))?;
    }

    let Summary { average_km, closest, .. } = self.summary;
    write!(
      f,
      "\nAverage distance: {}. Closest pair: {} \u{2013} {} {}.",
      format_distance(average_km),
      closest.a.name,
      closest.b.name,
      format_distance(closest.km)
    )
  }
}
