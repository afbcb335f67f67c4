//! Recovery of stellar size from a measured partial phase.
//!
//! The forward relationship is linear, so the inverse is a multiplication,
//! not a fit: `diameter = rate * duration`. Composed with the angular-size
//! inverse this turns a timed ingress or egress into a physical radius.

use qtty::angular::Arcseconds;
use qtty::length::Kilometers;
use qtty::time::Seconds;

use crate::algorithms::angular_size;
use crate::core::domain::LimbVelocity;
use crate::core::error::{ModelError, ModelResult};

/// Angular diameter implied by a measured partial-phase duration.
///
/// Exact inverse of [`partial_phase_duration`]: for any valid diameter `a`
/// and rate `v`, recovering from `partial_phase_duration(a, v)` returns `a`
/// up to floating-point rounding.
///
/// A zero duration is accepted and recovers a zero diameter; an unresolved
/// event places only an upper bound on the star.
///
/// [`partial_phase_duration`]: crate::algorithms::partial_phase_duration
pub fn recover_angular_diameter(
    duration: Seconds,
    rate: LimbVelocity,
) -> ModelResult<Arcseconds> {
    if !duration.value().is_finite() || duration.value() < 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "measured duration must be finite and non-negative, got {} s",
            duration.value()
        )));
    }
    if !rate.value().is_finite() || rate.value() <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "limb rate must be finite and strictly positive, got {} arcsec/s",
            rate.value()
        )));
    }

    Ok(rate * duration)
}

/// Physical radius implied by a measured duration, rate, and known distance.
pub fn recover_physical_radius(
    duration: Seconds,
    rate: LimbVelocity,
    distance: Kilometers,
) -> ModelResult<Kilometers> {
    let diameter = recover_angular_diameter(duration, rate)?;
    angular_size::physical_radius(diameter, distance)
}
