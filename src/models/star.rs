//! Target star parameters.

use qtty::angular::Arcseconds;
use qtty::length::nominal::SolarRadiuses;
use qtty::length::{Kilometer, Parsecs};
use serde::{Deserialize, Serialize};

use crate::algorithms::angular_size;
use crate::core::error::ModelResult;

/// A star described by its physical radius and distance.
///
/// # Examples
///
/// ```
/// use occulting::models::Star;
/// use qtty::length::nominal::SolarRadiuses;
/// use qtty::length::Parsecs;
///
/// let sun_twin = Star::new("sun twin", SolarRadiuses::new(1.0), Parsecs::new(10.0));
/// let diameter = sun_twin.angular_diameter().unwrap();
/// assert!(diameter.value() < 1e-3); // under a milliarcsecond
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub name: String,
    pub radius: SolarRadiuses,
    pub distance: Parsecs,
}

impl Star {
    pub fn new(name: impl Into<String>, radius: SolarRadiuses, distance: Parsecs) -> Self {
        Self {
            name: name.into(),
            radius,
            distance,
        }
    }

    /// Apparent angular diameter of the stellar disk.
    pub fn angular_diameter(&self) -> ModelResult<Arcseconds> {
        angular_size::angular_diameter(
            self.radius.to::<Kilometer>(),
            self.distance.to::<Kilometer>(),
        )
    }
}
