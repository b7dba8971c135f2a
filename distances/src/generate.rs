use std::path::{Path, PathBuf};

use clap::ValueEnum;
use rand::Rng;

use crate::compute::Point;

macros::generation_method_enum!(Uniform, Cluster);

/// Generate `number` places named `Place0`, `Place1`, ...
///
/// The caller owns the random source, seed it for reproducible output.
pub fn generate_places<R: Rng>(rng: &mut R, method: GenerationMethod, number: usize) -> Vec<Point> {
  match method {
    GenerationMethod::Uniform => generate_uniform_places(rng, number),
    GenerationMethod::Cluster => generate_cluster_places(rng, number),
  }
}

fn generate_uniform_places<R: Rng>(rng: &mut R, number: usize) -> Vec<Point> {
  (0..number)
    .map(|i| {
      let lat = rng.random_range(-90. ..90.);
      let lon = rng.random_range(-180. ..180.);
      Point::new(format!("Place{i}"), lat, lon)
    })
    .collect()
}

fn generate_cluster_places<R: Rng>(rng: &mut R, number: usize) -> Vec<Point> {
  let lat_r = rng.random_range(10. ..90.);
  let lon_r = rng.random_range(20. ..180.);

  (0..number)
    .map(|i| {
      let lat = rng.random_range(-lat_r..lat_r);
      let lon = rng.random_range(-lon_r..lon_r);
      Point::new(format!("Place{i}"), lat, lon)
    })
    .collect()
}

/// Where a generated set is saved: `places_<method>_<seed>_<number>.csv`
pub fn places_file_path(dir: &Path, method: GenerationMethod, seed: u64, number: usize) -> PathBuf {
  dir.join(format!("places_{}_{seed}_{number}.csv", method.to_lowercase_string()))
}

mod macros {
  macro_rules! generation_method_enum {($($variant:ident),+ $(,)?) => {
  #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
  pub enum GenerationMethod {
    #[default]
    $($variant),+
  }

  impl GenerationMethod {
    pub fn to_lowercase_string(&self) -> String {
      format!("{self:?}").to_lowercase()
    }

    pub fn lowercase_options() -> Vec<String> {
      vec![$(GenerationMethod::$variant.to_lowercase_string()),+]
    }
  }
  };}
  pub(crate) use generation_method_enum;
}

#[cfg(test)]
mod test {
  use super::*;
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;
  use rstest::rstest;

  #[rstest]
  #[case(GenerationMethod::Uniform)]
  #[case(GenerationMethod::Cluster)]
  fn same_seed_same_places(#[case] method: GenerationMethod) {
    let a = generate_places(&mut ChaCha8Rng::seed_from_u64(42), method, 50);
    let b = generate_places(&mut ChaCha8Rng::seed_from_u64(42), method, 50);
    let c = generate_places(&mut ChaCha8Rng::seed_from_u64(43), method, 50);
    assert_eq!(a, b);
    assert_ne!(a, c);
  }

  #[rstest]
  #[case(GenerationMethod::Uniform)]
  #[case(GenerationMethod::Cluster)]
  fn coordinates_in_range(#[case] method: GenerationMethod) {
    let places = generate_places(&mut ChaCha8Rng::seed_from_u64(7), method, 1000);
    assert_eq!(places.len(), 1000);
    for p in &places {
      assert!((-90. ..90.).contains(&p.latitude), "{p:?}");
      assert!((-180. ..180.).contains(&p.longitude), "{p:?}");
    }
  }

  #[test]
  fn names_follow_index() {
    let places = generate_places(&mut ChaCha8Rng::seed_from_u64(0), GenerationMethod::Uniform, 3);
    let names: Vec<_> = places.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Place0", "Place1", "Place2"]);
  }

  #[test]
  fn nothing_requested() {
    assert!(generate_places(&mut ChaCha8Rng::seed_from_u64(0), GenerationMethod::Cluster, 0).is_empty());
  }

  #[test]
  fn file_name_convention() {
    let path = places_file_path(Path::new("data"), GenerationMethod::Cluster, 12, 100);
    assert_eq!(path, Path::new("data/places_cluster_12_100.csv"));
    assert_eq!(GenerationMethod::lowercase_options(), ["uniform", "cluster"]);
  }
}
