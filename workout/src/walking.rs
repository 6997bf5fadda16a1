use crate::training::{Training, TrainingRecord, duration_in_minutes};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SportsWalking {
    pub record: TrainingRecord,
    /// Height of person in centimeters. Expected to be positive
    pub height: f64,
}

impl SportsWalking {
    pub const fn new(record: TrainingRecord, height: f64) -> Self {
        Self { record, height }
    }
}

impl Training for SportsWalking {
    fn record(&self) -> &TrainingRecord {
        &self.record
    }

    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.record.weight();

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + floor_div(self.mean_speed().powi(2), self.height)
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * duration_in_minutes(&self.record)
    }
}

/// Floored division of floats.
///
/// Quotient is derived from the float remainder, so results near integer
/// boundaries differ from a plain `(a / b).floor()`.
pub(crate) fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let rem = dividend % divisor;
    let mut div = (dividend - rem) / divisor;

    if rem != 0.0 && (divisor < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(dividend / divisor);
    }

    let floored = div.floor();

    match div - floored > 0.5 {
        true => floored + 1.0,
        false => floored,
    }
}
