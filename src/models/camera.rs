//! Camera sampling parameters.

use qtty::time::Seconds;
use serde::{Deserialize, Serialize};

use crate::core::error::{ModelError, ModelResult};

/// A high-speed camera characterized by its frame rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub name: String,
    /// Frames captured per second of wall time.
    pub frames_per_second: f64,
}

impl Camera {
    pub fn new(name: impl Into<String>, frames_per_second: f64) -> Self {
        Self {
            name: name.into(),
            frames_per_second,
        }
    }

    /// Interval between consecutive frames.
    ///
    /// # Errors
    /// `InvalidInput` if the frame rate is NaN, infinite, or not strictly
    /// positive.
    pub fn frame_period(&self) -> ModelResult<Seconds> {
        if !self.frames_per_second.is_finite() || self.frames_per_second <= 0.0 {
            return Err(ModelError::InvalidInput(format!(
                "frame rate of camera '{}' must be finite and strictly positive, got {}",
                self.name, self.frames_per_second
            )));
        }
        Ok(Seconds::new(1.0 / self.frames_per_second))
    }
}

impl Default for Camera {
    /// The 450 Hz camera of the motivating feasibility question.
    fn default() -> Self {
        Self::new("450 Hz high-speed camera", 450.0)
    }
}
