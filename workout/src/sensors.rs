//! Sensor packages stored as CSV.
//!
//! One package per row without header: workout code followed by its values,
//! e.g. `SWM,720,1,80,25,40`. Rows may have different length.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    pub fn read(&self) -> Result<crate::Workout, crate::Error> {
        crate::read_package(&self.workout_type, &self.data)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("failed to read sensor data. Reason: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: empty package")]
    EmptyRow { line: u64 },

    #[error("line {line}: `{value}` is not a number")]
    NotANumber { line: u64, value: String },
}

/// Packages used when no sensor data is given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Lazily parse packages from CSV source.
pub fn read_packages(source: impl Read) -> impl Iterator<Item = Result<Package, SensorError>> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source)
        .into_records()
        .map(|record| parse_record(record?))
}

fn parse_record(record: StringRecord) -> Result<Package, SensorError> {
    let line = record.position().map(|this| this.line()).unwrap_or_default();

    let mut fields = record.iter();

    let workout_type = match fields.next() {
        Some(code) if !code.is_empty() => code.to_owned(),
        _ => return Err(SensorError::EmptyRow { line }),
    };

    let data = fields
        .map(|value| {
            value.parse::<f64>().map_err(|_| SensorError::NotANumber {
                line,
                value: value.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Package { workout_type, data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexible_rows() {
        let input = "SWM,720,1,80,25,40\nRUN, 15000, 1, 75\nWLK,9000,1,75,180\n";

        let packages = read_packages(input.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(packages, sample_packages());
    }

    #[test]
    fn test_bad_number() {
        let input = "RUN,15000,one,75\n";

        let result = read_packages(input.as_bytes()).next().unwrap();

        assert!(matches!(
            result,
            Err(SensorError::NotANumber { line: 1, ref value }) if value == "one"
        ));
    }

    #[test]
    fn test_empty_code() {
        let input = "RUN,15000,1,75\n,1,2,3\n";

        let results = read_packages(input.as_bytes()).collect::<Vec<_>>();

        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(SensorError::EmptyRow { line: 2 })));
    }

    #[test]
    fn test_package_dispatch() {
        let workouts = sample_packages()
            .iter()
            .map(Package::read)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(workouts.len(), 3);
        assert!(Package::new("XYZ", Vec::new()).read().is_err());
    }
}
