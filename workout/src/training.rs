use crate::{Error, SummaryReport};

/// Default distance covered by one action (step) in meters
pub const LEN_STEP: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

/// Raw sensor readings shared by every kind of training.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrainingRecord {
    action: u64,
    duration: f64,
    weight: f64,
}

impl TrainingRecord {
    /// # Params
    /// - `action` - number of steps or strokes
    /// - `duration` - training duration in hours, must be positive
    /// - `weight` - weight of person in kilograms
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, Error> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(Error::InvalidDuration(duration));
        }

        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    pub const fn action(&self) -> u64 {
        self.action
    }

    pub const fn duration(&self) -> f64 {
        self.duration
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// A bare record has no calorie formula, only workout variants do.
    pub fn spent_calories(&self) -> Result<f64, Error> {
        Err(Error::NotImplemented("spent_calories"))
    }
}

/// Common calculations for every training.
///
/// Distance and mean speed come with default formulas based on
/// [`Training::len_step`], calories are specific to each workout and must be provided.
pub trait Training {
    fn record(&self) -> &TrainingRecord;

    /// Name used in the summary message
    fn training_type(&self) -> &'static str;

    /// Distance covered by one action in meters
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        self.record().action() as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.record().duration()
    }

    /// Spent energy in kilocalories
    fn spent_calories(&self) -> f64;

    fn build_summary(&self) -> SummaryReport {
        SummaryReport {
            training_type: self.training_type().to_owned(),
            duration: self.record().duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// Training duration in minutes
#[inline]
pub(crate) fn duration_in_minutes(record: &TrainingRecord) -> f64 {
    record.duration() * MIN_IN_HOUR
}
