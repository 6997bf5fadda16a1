use thiserror::Error;

/// Errors produced while turning sensor packages into trainings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Package code is not one of `SWM`, `RUN` or `WLK`.
    #[error("unrecognized workout type `{0}`: check the data received from the sensors")]
    UnrecognizedWorkoutType(String),

    /// Calculation was requested from a type that has no formula for it.
    #[error("`{0}` is not implemented for a bare training record, use a workout variant")]
    NotImplemented(&'static str),

    #[error("workout type `{workout_type}` expects {expected} values, got {actual}")]
    Arity {
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Counter fields (steps, strokes, laps) must be non-negative whole numbers.
    #[error("`{field}` must be a non-negative whole number, got {value}")]
    NotACount { field: &'static str, value: f64 },

    #[error("training duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),
}
