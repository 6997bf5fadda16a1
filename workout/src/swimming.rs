use crate::training::{M_IN_KM, Training, TrainingRecord};

/// Distance covered by one stroke in meters
pub const LEN_STROKE: f64 = 1.38;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Swimming {
    pub record: TrainingRecord,
    /// Pool length in meters
    pub length_pool: f64,
    /// How many times the pool was swum through
    pub count_pool: u64,
}

impl Swimming {
    pub const fn new(record: TrainingRecord, length_pool: f64, count_pool: u64) -> Self {
        Self {
            record,
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn record(&self) -> &TrainingRecord {
        &self.record
    }

    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn len_step(&self) -> f64 {
        LEN_STROKE
    }

    /// Speed comes from pool geometry, stroke count is ignored
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.record.duration()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.record.weight()
    }
}
