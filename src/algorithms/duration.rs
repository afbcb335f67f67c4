//! Partial-phase duration of an occultation ingress or egress.

use qtty::angular::Arcseconds;
use qtty::time::Seconds;
use qtty::Simplify;

use crate::core::domain::LimbVelocity;
use crate::core::error::{ModelError, ModelResult};

/// Time during which the star is partially, not fully, occulted.
///
/// The limb sweeps the star's full angular diameter at the relative rate, so
/// `duration = diameter / rate`. Both inputs must be strictly positive and
/// finite; the result is always finite and positive.
///
/// # Examples
///
/// ```
/// use occulting::algorithms::partial_phase_duration;
/// use occulting::LimbVelocity;
/// use qtty::angular::{Arcsecond, MilliArcseconds};
///
/// // A 1 mas star swept at the lunar mean rate lasts under two milliseconds.
/// let diameter = MilliArcseconds::new(1.0).to::<Arcsecond>();
/// let duration = partial_phase_duration(diameter, LimbVelocity::new(0.55)).unwrap();
/// assert!((duration.value() - 0.00182).abs() < 0.00001);
/// ```
pub fn partial_phase_duration(
    diameter: Arcseconds,
    rate: LimbVelocity,
) -> ModelResult<Seconds> {
    if !diameter.value().is_finite() || diameter.value() <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "angular diameter must be finite and strictly positive, got {} arcsec",
            diameter.value()
        )));
    }
    if !rate.value().is_finite() || rate.value() <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "limb rate must be finite and strictly positive, got {} arcsec/s",
            rate.value()
        )));
    }

    Ok((diameter / rate).simplify())
}
