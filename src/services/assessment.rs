//! Forward feasibility assessment for a single star.

use qtty::angular::Arcseconds;
use qtty::time::Seconds;
use serde::{Deserialize, Serialize};

use crate::algorithms::{evaluate_sampling, partial_phase_duration};
use crate::core::domain::{FeasibilityVerdict, FrameCount, LimbVelocity, MarginalBand};
use crate::core::error::ModelResult;
use crate::models::{Camera, Star};

/// Everything the report layer needs about one star's occultation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarAssessment {
    pub star: Star,
    /// Apparent diameter of the stellar disk, arcseconds.
    pub angular_diameter: Arcseconds,
    /// Duration of the partial phase, seconds.
    pub duration: Seconds,
    pub frame_count: FrameCount,
    pub verdict: FeasibilityVerdict,
}

/// Runs the complete forward chain for one star.
///
/// Angular size from the star's radius and distance, partial-phase duration
/// from the limb rate, then frame quantization against the camera.
///
/// # Arguments
/// * `star` - Target star
/// * `rate` - Relative limb rate, already resolved from its source
/// * `camera` - Sampling camera
/// * `band` - Marginal frame-count band
pub fn assess_star(
    star: &Star,
    rate: LimbVelocity,
    camera: &Camera,
    band: MarginalBand,
) -> ModelResult<StarAssessment> {
    let angular_diameter = star.angular_diameter()?;
    let duration = partial_phase_duration(angular_diameter, rate)?;
    let sampling = evaluate_sampling(duration, camera.frame_period()?, band)?;

    Ok(StarAssessment {
        star: star.clone(),
        angular_diameter,
        duration,
        frame_count: sampling.frame_count,
        verdict: sampling.verdict,
    })
}
