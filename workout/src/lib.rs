//! # Workout statistics
//!
//! Distance, mean speed and spent calories for trainings recorded by sensors.
//!
//! Distance is counted from actions (steps or strokes):
//!
//! ```notrust
//! distance [km] = action * LEN_STEP / 1000
//! ```
//!
//! where `LEN_STEP` is `0.65` m for running and walking and `1.38` m for a swimming stroke.
//!
//! Calories:
//!
//! - Running - `(18 * speed - 20) * weight / 1000 * minutes`
//! - Walking - `(0.035 * weight + (speed^2 // height) * 0.029 * weight) * minutes`
//! - Swimming - `(speed + 1.1) * 2 * weight`, speed is taken from pool length and laps count

mod error;
mod package;
mod running;
#[cfg(feature = "csv")]
pub mod sensors;
mod summary;
mod swimming;
mod training;
mod walking;

pub use self::error::*;
pub use self::package::*;
pub use self::running::*;
pub use self::summary::*;
pub use self::swimming::*;
pub use self::training::*;
pub use self::walking::*;
