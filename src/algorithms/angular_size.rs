//! Conversion between physical size and apparent angular diameter.
//!
//! Stellar angular diameters are tiny fractions of a radian at any
//! astronomical distance, so the conversion uses the small-angle form
//! `diameter = 2 * radius / distance` and refuses inputs for which that
//! approximation is no longer valid. A ratio past the limit is treated as a
//! unit mismatch in the caller rather than as a physically meaningful target.

use qtty::angular::{Arcsecond, Arcseconds, Radian, Radians};
use qtty::length::Kilometers;
use qtty::Simplify;

use crate::core::error::{ModelError, ModelResult};

/// Largest half-angle (radians) the small-angle form is accepted for.
pub const SMALL_ANGLE_LIMIT: Radians = Radians::new(0.01);

/// Computes the apparent angular diameter of an object on the sky.
///
/// # Arguments
/// * `radius` - Intrinsic radius of the object
/// * `distance` - Distance from the observer to the object
///
/// # Returns
/// Full apparent diameter in arcseconds, the angular extent a limb sweeps
/// while covering or uncovering the disk.
///
/// # Errors
/// * `InvalidInput` if `radius` is negative or either quantity is NaN,
///   infinite, or `distance` is not strictly positive
/// * `UnrealisticApproximation` if `radius / distance` exceeds
///   [`SMALL_ANGLE_LIMIT`]
///
/// # Examples
///
/// ```
/// use occulting::algorithms::angular_diameter;
/// use qtty::length::Kilometers;
///
/// // The Moon: radius 1737.4 km at 384472 km.
/// let moon = angular_diameter(Kilometers::new(1737.4), Kilometers::new(384_472.0)).unwrap();
/// assert!((moon.value() - 1864.0).abs() < 1.0);
/// ```
pub fn angular_diameter(radius: Kilometers, distance: Kilometers) -> ModelResult<Arcseconds> {
    if !radius.value().is_finite() || radius.value() < 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "radius must be finite and non-negative, got {} km",
            radius.value()
        )));
    }
    require_positive_distance(distance)?;

    let ratio = (radius / distance).simplify().value();
    if ratio > SMALL_ANGLE_LIMIT.value() {
        return Err(ModelError::UnrealisticApproximation(format!(
            "radius/distance ratio {:.4} rad exceeds the small-angle limit {} rad; \
             check the input units",
            ratio,
            SMALL_ANGLE_LIMIT.value()
        )));
    }

    Ok(Radians::new(2.0 * ratio).to::<Arcsecond>())
}

/// Recovers the physical radius implied by an apparent diameter and distance.
///
/// Exact algebraic inverse of [`angular_diameter`]:
/// `radius = diameter / 2 * distance`.
///
/// # Errors
/// * `InvalidInput` if `diameter` is negative or either quantity is NaN,
///   infinite, or `distance` is not strictly positive
/// * `UnrealisticApproximation` if the implied half-angle exceeds
///   [`SMALL_ANGLE_LIMIT`]
pub fn physical_radius(diameter: Arcseconds, distance: Kilometers) -> ModelResult<Kilometers> {
    if !diameter.value().is_finite() || diameter.value() < 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "angular diameter must be finite and non-negative, got {} arcsec",
            diameter.value()
        )));
    }
    require_positive_distance(distance)?;

    let half_angle = diameter.to::<Radian>().value() / 2.0;
    if half_angle > SMALL_ANGLE_LIMIT.value() {
        return Err(ModelError::UnrealisticApproximation(format!(
            "half-angle {:.4} rad exceeds the small-angle limit {} rad",
            half_angle,
            SMALL_ANGLE_LIMIT.value()
        )));
    }

    Ok(distance * half_angle)
}

fn require_positive_distance(distance: Kilometers) -> ModelResult<()> {
    if !distance.value().is_finite() || distance.value() <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "distance must be finite and strictly positive, got {} km",
            distance.value()
        )));
    }
    Ok(())
}
