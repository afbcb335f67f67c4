//! Frame quantization of a partial-phase duration.
//!
//! A camera with a fixed frame period samples the partial phase at most
//! `floor(duration / frame_period)` times. The count, classified against a
//! [`MarginalBand`], is the decision output of the whole model, so the
//! boundary cases are pinned down exactly here: a zero duration is legal and
//! unresolvable, one frame is never enough, and counts are never capped.

use qtty::time::Seconds;
use qtty::Simplify;

use crate::core::domain::{FrameCount, MarginalBand, SamplingAssessment};
use crate::core::error::{ModelError, ModelResult};

/// Frame counts above this are reported but almost certainly mean the input
/// geometry is unrealistic.
const PLAUSIBLE_FRAME_LIMIT: FrameCount = 1_000_000;

/// Counts the whole frames inside a partial phase and classifies the result.
///
/// # Arguments
/// * `duration` - Partial-phase duration; zero is legal and unresolvable
/// * `frame_period` - Camera frame period, strictly positive
/// * `band` - Inclusive frame-count band classified as marginal
///
/// # Returns
/// The frame count together with its [`FeasibilityVerdict`].
///
/// Counts above a million are returned unchanged with a logged warning; a
/// graze that slow is a sign of inconsistent inputs, not a computation bug.
///
/// [`FeasibilityVerdict`]: crate::FeasibilityVerdict
pub fn evaluate_sampling(
    duration: Seconds,
    frame_period: Seconds,
    band: MarginalBand,
) -> ModelResult<SamplingAssessment> {
    if !duration.value().is_finite() || duration.value() < 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "duration must be finite and non-negative, got {} s",
            duration.value()
        )));
    }
    if !frame_period.value().is_finite() || frame_period.value() <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "frame period must be finite and strictly positive, got {} s",
            frame_period.value()
        )));
    }

    let frames = (duration / frame_period).simplify().value().floor();
    let frame_count = frames as FrameCount;

    if frame_count > PLAUSIBLE_FRAME_LIMIT {
        log::warn!(
            "{} frames in a single partial phase; the occultation geometry is unrealistic",
            frame_count
        );
    }

    Ok(SamplingAssessment {
        frame_count,
        verdict: band.classify(frame_count),
    })
}
