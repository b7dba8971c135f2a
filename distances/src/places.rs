use std::{
  fs::File,
  io::{Read, Write},
  path::Path,
};

use tracing::debug;

use crate::{
  compute::Point,
  error::{Error, Result},
};

const HEADER: [&str; 3] = ["name", "latitude", "longitude"];

/// Read places from a `name,latitude,longitude` CSV file. The header row is skipped.
pub fn read_places(path: impl AsRef<Path>) -> Result<Vec<Point>> {
  let path = path.as_ref();
  let file = File::open(path).map_err(Error::io(path))?;
  let places = read_places_from(file)?;
  debug!(path = %path.display(), count = places.len(), "read places");
  Ok(places)
}

pub fn read_places_from<R: Read>(reader: R) -> Result<Vec<Point>> {
  let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

  let mut places = vec![];
  for record in reader.records() {
    let record = record?;
    let line = record.position().map_or(0, |p| p.line());

    let field = |i: usize| record.get(i).ok_or(Error::MissingField { line, field: HEADER[i] });
    let coordinate = |i: usize| -> Result<f64> {
      let value = field(i)?;
      value.trim().parse().map_err(|_| Error::InvalidCoordinate { line, field: HEADER[i], value: value.into() })
    };

    places.push(Point::new(field(0)?, coordinate(1)?, coordinate(2)?));
  }

  Ok(places)
}

pub fn write_places(path: impl AsRef<Path>, places: &[Point]) -> Result<()> {
  let path = path.as_ref();
  let file = File::create(path).map_err(Error::io(path))?;
  write_places_to(file, places)?;
  debug!(path = %path.display(), count = places.len(), "wrote places");
  Ok(())
}

pub fn write_places_to<W: Write>(writer: W, places: &[Point]) -> Result<()> {
  let mut writer = csv::Writer::from_writer(writer);
  writer.write_record(HEADER)?;
  for Point { name, latitude, longitude } in places {
    writer.write_record([name.as_str(), latitude.to_string().as_str(), longitude.to_string().as_str()])?;
  }
  writer.flush().map_err(|e| Error::Csv(e.into()))
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::compute::pair_distances;
  use crate::generate::{generate_places, GenerationMethod};
  use approx::assert_abs_diff_eq;
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  #[test]
  fn reads_rows_after_header() {
    let csv = "name,lat,lon\nLondon,51.5074,-0.1278\nParis, 48.8566 ,2.3522\n\"Rio, Brazil\",-22.9068,-43.1729,extra\n";
    let places = read_places_from(csv.as_bytes()).unwrap();
    assert_eq!(
      places,
      [
        Point::new("London", 51.5074, -0.1278),
        Point::new("Paris", 48.8566, 2.3522),
        Point::new("Rio, Brazil", -22.9068, -43.1729),
      ]
    );
  }

  #[test]
  fn header_only() {
    assert!(read_places_from("name,latitude,longitude\n".as_bytes()).unwrap().is_empty());
  }

  #[test]
  fn bad_coordinate_reports_line() {
    let csv = "name,latitude,longitude\nA,1.0,2.0\nB,north,2.0\n";
    match read_places_from(csv.as_bytes()) {
      Err(Error::InvalidCoordinate { line, field, value }) => {
        assert_eq!((line, field, value.as_str()), (3, "latitude", "north"));
      }
      other => panic!("unexpected result: {other:?}"),
    }
  }

  #[test]
  fn short_row_reports_missing_column() {
    let csv = "name,latitude,longitude\nA,1.0\n";
    match read_places_from(csv.as_bytes()) {
      Err(Error::MissingField { line, field }) => assert_eq!((line, field), (2, "longitude")),
      other => panic!("unexpected result: {other:?}"),
    }
  }

  #[test]
  fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_places(dir.path().join("places.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound), "{err}");
  }

  #[test]
  fn file_round_trip_keeps_distances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.csv");
    let places = generate_places(&mut ChaCha8Rng::seed_from_u64(2024), GenerationMethod::Uniform, 25);

    write_places(&path, &places).unwrap();
    let read_back = read_places(&path).unwrap();
    assert_eq!(read_back.len(), places.len());

    let expected = pair_distances(&places);
    let actual = pair_distances(&read_back);
    assert_eq!(expected.len(), actual.len());
    for (e, a) in expected.iter().zip(&actual) {
      assert_eq!((&e.a.name, &e.b.name), (&a.a.name, &a.b.name));
      assert_abs_diff_eq!(e.km, a.km, epsilon = 1e-9);
    }
  }
}
