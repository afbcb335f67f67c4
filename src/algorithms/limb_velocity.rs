//! Relative angular rate of the occulting limb.
//!
//! Callers with ephemeris access supply the rate directly. Without one, the
//! rate is estimated from the occulting body's mean orbital motion scaled by
//! a grazing-angle factor in `(0, 1]`: 1.0 is a limb moving perpendicular to
//! the star's relative path, values near zero model a nearly tangential
//! graze. A factor of exactly zero implies no occultation progression at all
//! and is rejected as degenerate rather than producing an infinite duration
//! downstream.

use qtty::angular::{Arcsecond, Degrees};
use qtty::time::{Days, Second};

use crate::core::domain::LimbVelocity;
use crate::core::error::{ModelError, ModelResult};

/// How the relative limb rate is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimbVelocitySource {
    /// A rate already computed by the caller, e.g. from an ephemeris.
    Direct(LimbVelocity),
    /// Closed-form estimate from a mean orbital period and grazing factor.
    MeanOrbital {
        /// Sidereal period of the occulting body.
        period: Days,
        /// Effective fraction of the mean motion seen at the contact point,
        /// in `(0, 1]`.
        grazing_factor: f64,
    },
}

/// Resolves a [`LimbVelocitySource`] into a strictly positive rate.
///
/// # Errors
/// * `InvalidInput` for a non-positive or non-finite direct rate or period,
///   or a grazing factor outside `[0, 1]` or NaN
/// * `DegenerateGeometry` for a grazing factor of exactly zero
pub fn limb_velocity(source: &LimbVelocitySource) -> ModelResult<LimbVelocity> {
    match *source {
        LimbVelocitySource::Direct(rate) => {
            if !rate.value().is_finite() || rate.value() <= 0.0 {
                return Err(ModelError::InvalidInput(format!(
                    "limb rate must be finite and strictly positive, got {} arcsec/s",
                    rate.value()
                )));
            }
            Ok(rate)
        }
        LimbVelocitySource::MeanOrbital {
            period,
            grazing_factor,
        } => {
            if !period.value().is_finite() || period.value() <= 0.0 {
                return Err(ModelError::InvalidInput(format!(
                    "orbital period must be finite and strictly positive, got {} d",
                    period.value()
                )));
            }
            if grazing_factor.is_nan() || !(0.0..=1.0).contains(&grazing_factor) {
                return Err(ModelError::InvalidInput(format!(
                    "grazing factor must lie in [0, 1], got {}",
                    grazing_factor
                )));
            }
            if grazing_factor == 0.0 {
                return Err(ModelError::DegenerateGeometry(
                    "grazing factor of 0 means the limb never crosses the star".to_string(),
                ));
            }

            let full_turn = Degrees::new(360.0).to::<Arcsecond>();
            let rate: LimbVelocity = full_turn / period.to::<Second>();
            Ok(rate * grazing_factor)
        }
    }
}
