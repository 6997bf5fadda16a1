//! Sensor packages dispatching.
//!
//! Every package consists of workout type code and positional values:
//!
//! | code  | workout           | values                                            |
//! |-------|-------------------|---------------------------------------------------|
//! | `RUN` | [`Running`]       | action, duration, weight                          |
//! | `WLK` | [`SportsWalking`] | action, duration, weight, height                  |
//! | `SWM` | [`Swimming`]      | action, duration, weight, length_pool, count_pool |

use std::str::FromStr;

use crate::{Error, Running, SportsWalking, Swimming, Training, TrainingRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkoutType {
    Swimming,
    Running,
    Walking,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [Self::Swimming, Self::Running, Self::Walking];

    /// Code used by sensors
    pub const fn code(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::Walking => "WLK",
        }
    }

    /// Number of values expected in package
    pub const fn arity(self) -> usize {
        match self {
            WorkoutType::Swimming => 5,
            WorkoutType::Running => 3,
            WorkoutType::Walking => 4,
        }
    }
}

impl FromStr for WorkoutType {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|this| this.code() == code)
            .ok_or_else(|| Error::UnrecognizedWorkoutType(code.to_owned()))
    }
}

/// Training built from sensor package
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    Walking(SportsWalking),
}

impl Workout {
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Workout::Swimming(_) => WorkoutType::Swimming,
            Workout::Running(_) => WorkoutType::Running,
            Workout::Walking(_) => WorkoutType::Walking,
        }
    }

    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Swimming(this) => this,
            Workout::Running(this) => this,
            Workout::Walking(this) => this,
        }
    }
}

impl Training for Workout {
    fn record(&self) -> &TrainingRecord {
        self.as_training().record()
    }

    fn training_type(&self) -> &'static str {
        self.as_training().training_type()
    }

    fn len_step(&self) -> f64 {
        self.as_training().len_step()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Self::Walking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}

/// Build training from data received from sensors.
///
/// Values are bound positionally: `action`, `duration`, `weight` first,
/// then workout specific fields.
///
/// # Errors
/// - [`Error::UnrecognizedWorkoutType`] - unknown `workout_type` code
/// - [`Error::Arity`] - number of values doesn't match workout type
/// - [`Error::NotACount`] - steps, strokes or laps are not whole numbers
/// - [`Error::InvalidDuration`] - duration is not positive
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, Error> {
    let kind = workout_type.parse::<WorkoutType>()?;

    if data.len() != kind.arity() {
        return Err(Error::Arity {
            workout_type: kind.code(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let record = TrainingRecord::new(count("action", data[0])?, data[1], data[2])?;

    let workout = match kind {
        WorkoutType::Running => Running::new(record).into(),
        WorkoutType::Walking => SportsWalking::new(record, data[3]).into(),
        WorkoutType::Swimming => {
            Swimming::new(record, data[3], count("count_pool", data[4])?).into()
        }
    };

    tracing::debug!(code = kind.code(), ?workout, "package dispatched");

    Ok(workout)
}

fn count(field: &'static str, value: f64) -> Result<u64, Error> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        return Ok(value as u64);
    }

    Err(Error::NotACount { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for kind in WorkoutType::ALL {
            assert_eq!(kind.code().parse::<WorkoutType>(), Ok(kind));
        }

        assert_eq!(
            "run".parse::<WorkoutType>(),
            Err(Error::UnrecognizedWorkoutType("run".to_owned()))
        );
    }

    #[test]
    fn test_dispatch_swimming() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

        assert_eq!(workout.workout_type(), WorkoutType::Swimming);
        assert_eq!(
            workout,
            Workout::Swimming(Swimming::new(
                TrainingRecord::new(720, 1.0, 80.0).unwrap(),
                25.0,
                40
            ))
        );
    }

    #[test]
    fn test_dispatch_running() {
        let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();

        assert_eq!(
            workout,
            Workout::Running(Running::new(TrainingRecord::new(15000, 1.0, 75.0).unwrap()))
        );
    }

    #[test]
    fn test_dispatch_walking() {
        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        assert_eq!(
            workout,
            Workout::Walking(SportsWalking::new(
                TrainingRecord::new(9000, 1.0, 75.0).unwrap(),
                180.0
            ))
        );
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(
            read_package("XYZ", &[1.0, 1.0, 1.0]),
            Err(Error::UnrecognizedWorkoutType("XYZ".to_owned()))
        );
        assert_ne!(
            read_package("XYZ", &[]).unwrap_err().to_string(),
            Error::NotImplemented("spent_calories").to_string()
        );
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]),
            Err(Error::Arity {
                workout_type: "RUN",
                expected: 3,
                actual: 4,
            })
        );
        assert_eq!(
            read_package("SWM", &[720.0, 1.0, 80.0]),
            Err(Error::Arity {
                workout_type: "SWM",
                expected: 5,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_counts_must_be_whole() {
        assert_eq!(
            read_package("RUN", &[15000.5, 1.0, 75.0]),
            Err(Error::NotACount {
                field: "action",
                value: 15000.5,
            })
        );
        assert_eq!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -40.0]),
            Err(Error::NotACount {
                field: "count_pool",
                value: -40.0,
            })
        );
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(
            read_package("WLK", &[9000.0, 0.0, 75.0, 180.0]),
            Err(Error::InvalidDuration(0.0))
        );
    }

    #[test]
    fn test_workout_delegates_to_variant() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let Workout::Swimming(swimming) = workout else {
            panic!("expected swimming");
        };

        assert_eq!(workout.len_step(), swimming.len_step());
        assert_eq!(workout.build_summary(), swimming.build_summary());
        assert_eq!(workout.training_type(), "Swimming");
    }
}
