/// Mean Earth radius used for all reported distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A named place, coordinates in degrees
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
  pub name: String,
  pub latitude: f64,
  pub longitude: f64,
}

impl Point {
  pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
    Self { name: name.into(), latitude, longitude }
  }
}

/// Distance between one unordered pair of places
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDistance<'a> {
  pub a: &'a Point,
  pub b: &'a Point,
  pub km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<'a> {
  pub total_km: f64,
  pub average_km: f64,
  /// First pair, in pairing order, whose distance deviates least from `average_km`
  pub closest: PairDistance<'a>,
}

pub fn haversine(a: &Point, b: &Point) -> f64 {
  haversine_with_radius(a, b, EARTH_RADIUS_KM)
}

/// Great-circle distance on a sphere of the given radius. Out of range coordinates are not rejected.
pub fn haversine_with_radius(a: &Point, b: &Point, radius: f64) -> f64 {
  let lat1 = a.latitude.to_radians();
  let lat2 = b.latitude.to_radians();
  let dlat = (b.latitude - a.latitude).to_radians();
  let dlon = (b.longitude - a.longitude).to_radians();

  let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
  let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

  radius * c
}

/// Index pairs `(i, j)` with `i < j`, ordered by `i` then `j`.
///
/// This order is what [`pair_distances`] produces and what [`summarize`] uses to break ties.
pub fn pair_indices(n: usize) -> impl Iterator<Item = (usize, usize)> {
  (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

pub fn pair_distances(points: &[Point]) -> Vec<PairDistance<'_>> {
  pair_indices(points.len())
    .map(|(i, j)| {
      let (a, b) = (&points[i], &points[j]);
      PairDistance { a, b, km: haversine(a, b) }
    })
    .collect()
}

/// `None` when there are no pairs to average.
pub fn summarize<'a>(pairs: &[PairDistance<'a>]) -> Option<Summary<'a>> {
  let (first, rest) = pairs.split_first()?;

  let total_km: f64 = pairs.iter().map(|p| p.km).sum();
  let average_km = total_km / pairs.len() as f64;

  let mut closest = *first;
  let mut best = (first.km - average_km).abs();
  for pair in rest {
    let deviation = (pair.km - average_km).abs();
    if deviation < best {
      closest = *pair;
      best = deviation;
    }
  }

  Some(Summary { total_km, average_km, closest })
}

pub fn format_distance(km: f64) -> String {
  format!("{km:.1} km")
}
