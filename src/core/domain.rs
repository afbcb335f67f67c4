//! Domain types for occultation sampling outcomes.
//!
//! This module provides the value types shared across the model: the relative
//! limb rate alias, the marginal-band configuration, and the classification
//! returned by the sampling evaluator. Everything here is a plain value; an
//! evaluation never mutates shared state.

use qtty::angular::Arcsecond;
use qtty::frequency::Frequency;
use qtty::time::Second;
use serde::{Deserialize, Serialize};

/// Relative angular rate of the occulting limb across the star's position,
/// in arcseconds per second.
pub type LimbVelocity = Frequency<Arcsecond, Second>;

/// Number of whole camera frames falling inside a time interval.
pub type FrameCount = u64;

/// Classification of a partial-phase sampling scenario.
///
/// # Examples
///
/// ```
/// use occulting::FeasibilityVerdict;
///
/// let v = FeasibilityVerdict::Resolvable;
/// assert_eq!(v.to_string(), "resolvable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeasibilityVerdict {
    /// One frame or fewer inside the partial phase; the event cannot
    /// constrain the stellar diameter.
    Unresolvable,
    /// Frame count inside the configured marginal band; timing recovery is
    /// possible but poorly conditioned.
    Marginal,
    /// Frame count above the marginal band; multiple independent samples.
    Resolvable,
}

impl std::fmt::Display for FeasibilityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FeasibilityVerdict::Unresolvable => "unresolvable",
            FeasibilityVerdict::Marginal => "marginal",
            FeasibilityVerdict::Resolvable => "resolvable",
        };
        write!(f, "{}", label)
    }
}

/// Inclusive frame-count band classified as marginal.
///
/// Counts of one or fewer are always unresolvable, so the band must start at
/// two or above. Counts that fall between one and the band are still reported
/// as unresolvable: a band of `(3, 4)` treats two frames as too few, not as
/// marginal.
///
/// # Examples
///
/// ```
/// use occulting::{FeasibilityVerdict, MarginalBand};
///
/// let band = MarginalBand::default();
/// assert_eq!(band.classify(2), FeasibilityVerdict::Marginal);
/// assert_eq!(band.classify(4), FeasibilityVerdict::Resolvable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginalBand {
    min_frames: FrameCount,
    max_frames: FrameCount,
}

impl MarginalBand {
    /// Creates a band after validating `2 <= min_frames <= max_frames`.
    pub fn new(min_frames: FrameCount, max_frames: FrameCount) -> crate::ModelResult<Self> {
        if min_frames < 2 {
            return Err(crate::ModelError::InvalidInput(format!(
                "marginal band must start at 2 or more frames, got {}",
                min_frames
            )));
        }
        if min_frames > max_frames {
            return Err(crate::ModelError::InvalidInput(format!(
                "marginal band is inverted: {} > {}",
                min_frames, max_frames
            )));
        }
        Ok(Self {
            min_frames,
            max_frames,
        })
    }

    /// Lower edge of the band (inclusive).
    pub fn min_frames(&self) -> FrameCount {
        self.min_frames
    }

    /// Upper edge of the band (inclusive).
    pub fn max_frames(&self) -> FrameCount {
        self.max_frames
    }

    /// Classifies a frame count against this band.
    pub fn classify(&self, frame_count: FrameCount) -> FeasibilityVerdict {
        if frame_count <= 1 || frame_count < self.min_frames {
            FeasibilityVerdict::Unresolvable
        } else if frame_count <= self.max_frames {
            FeasibilityVerdict::Marginal
        } else {
            FeasibilityVerdict::Resolvable
        }
    }
}

impl Default for MarginalBand {
    /// The conventional band: 2 or 3 frames is marginal.
    fn default() -> Self {
        Self {
            min_frames: 2,
            max_frames: 3,
        }
    }
}

/// Outcome of quantizing a partial-phase duration against a frame period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingAssessment {
    /// Whole frames inside the partial phase.
    pub frame_count: FrameCount,
    /// Classification of that count against the marginal band.
    pub verdict: FeasibilityVerdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_band_is_two_to_three() {
        let band = MarginalBand::default();
        assert_eq!(band.min_frames(), 2);
        assert_eq!(band.max_frames(), 3);
    }

    #[test]
    fn band_rejects_start_below_two() {
        assert!(MarginalBand::new(1, 3).is_err());
        assert!(MarginalBand::new(0, 0).is_err());
    }

    #[test]
    fn band_rejects_inverted_edges() {
        assert!(MarginalBand::new(4, 2).is_err());
    }

    #[test]
    fn classification_covers_all_regions() {
        let band = MarginalBand::default();
        assert_eq!(band.classify(0), FeasibilityVerdict::Unresolvable);
        assert_eq!(band.classify(1), FeasibilityVerdict::Unresolvable);
        assert_eq!(band.classify(2), FeasibilityVerdict::Marginal);
        assert_eq!(band.classify(3), FeasibilityVerdict::Marginal);
        assert_eq!(band.classify(4), FeasibilityVerdict::Resolvable);
        assert_eq!(band.classify(1_000_000), FeasibilityVerdict::Resolvable);
    }

    #[test]
    fn counts_below_a_raised_band_stay_unresolvable() {
        let band = MarginalBand::new(3, 5).unwrap();
        assert_eq!(band.classify(2), FeasibilityVerdict::Unresolvable);
        assert_eq!(band.classify(3), FeasibilityVerdict::Marginal);
        assert_eq!(band.classify(6), FeasibilityVerdict::Resolvable);
    }

    #[test]
    fn verdict_serializes_lowercase() {
        let json = serde_json::to_string(&FeasibilityVerdict::Marginal).unwrap();
        assert_eq!(json, "\"marginal\"");
    }
}
