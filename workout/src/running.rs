use crate::training::{M_IN_KM, Training, TrainingRecord, duration_in_minutes};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Running {
    pub record: TrainingRecord,
}

impl Running {
    pub const fn new(record: TrainingRecord) -> Self {
        Self { record }
    }
}

impl Training for Running {
    fn record(&self) -> &TrainingRecord {
        &self.record
    }

    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * self.record.weight()
            / M_IN_KM
            * duration_in_minutes(&self.record)
    }
}
