//! Occulting body parameters.

use qtty::angular::Arcseconds;
use qtty::length::Kilometers;
use qtty::time::Days;
use serde::{Deserialize, Serialize};

use crate::algorithms::{angular_size, limb_velocity, LimbVelocitySource};
use crate::core::domain::LimbVelocity;
use crate::core::error::ModelResult;

/// A foreground body whose limb occults the star.
///
/// The default is the Moon; any other body (another moon, an asteroid with a
/// known orbit) is modeled by substituting its radius, distance, and sidereal
/// period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccultingBody {
    pub name: String,
    pub radius: Kilometers,
    pub distance: Kilometers,
    pub sidereal_period: Days,
}

impl OccultingBody {
    /// The Moon: mean radius, mean distance, sidereal month.
    pub fn moon() -> Self {
        Self {
            name: "Moon".to_string(),
            radius: Kilometers::new(1_737.4),
            distance: Kilometers::new(384_472.0),
            sidereal_period: Days::new(27.3),
        }
    }

    /// Apparent angular diameter of the body itself.
    ///
    /// For the Moon this is about half a degree; it is logged by the survey
    /// binary as a sanity check on the configured geometry.
    pub fn apparent_diameter(&self) -> ModelResult<Arcseconds> {
        angular_size::angular_diameter(self.radius, self.distance)
    }

    /// Mean angular rate of the body against the stars.
    pub fn mean_motion(&self) -> ModelResult<LimbVelocity> {
        self.limb_velocity(1.0)
    }

    /// Relative limb rate for a given grazing-angle factor in `(0, 1]`.
    pub fn limb_velocity(&self, grazing_factor: f64) -> ModelResult<LimbVelocity> {
        limb_velocity(&LimbVelocitySource::MeanOrbital {
            period: self.sidereal_period,
            grazing_factor,
        })
    }
}

impl Default for OccultingBody {
    fn default() -> Self {
        Self::moon()
    }
}
