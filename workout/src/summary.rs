use std::fmt;

/// Computed metrics of a single training.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryReport {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Kilocalories
    pub calories: f64,
}

impl SummaryReport {
    /// Human readable one line message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        } = self;

        write!(
            f,
            "Training type: {training_type}; \
             Duration: {duration:.3} h.; \
             Distance: {distance:.3} km; \
             Avg speed: {speed:.3} km/h; \
             Calories burned: {calories:.3}."
        )
    }
}
