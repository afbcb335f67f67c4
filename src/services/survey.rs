//! Feasibility sweep over a radius × distance grid.
//!
//! The original feasibility question was asked for a whole family of stars
//! at once: which combinations of stellar radius and distance leave enough
//! partial-phase frames to be worth pointing the camera at? This service
//! evaluates every cell of such a grid and rolls the results up into a
//! summary the external report layer can table or plot.

use qtty::length::nominal::SolarRadiuses;
use qtty::length::{Kilometer, Parsecs};
use qtty::time::Seconds;
use serde::{Deserialize, Serialize};

use crate::algorithms::{angular_size, evaluate_sampling, partial_phase_duration};
use crate::core::domain::{FeasibilityVerdict, FrameCount, LimbVelocity, MarginalBand};
use crate::core::error::{ModelError, ModelResult};
use crate::models::Camera;

/// Rectangular sweep over stellar radius and distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyGrid {
    pub radius_min: SolarRadiuses,
    pub radius_max: SolarRadiuses,
    pub radius_steps: usize,
    pub distance_min: Parsecs,
    pub distance_max: Parsecs,
    pub distance_steps: usize,
}

impl SurveyGrid {
    /// Validates the grid bounds and step counts.
    pub fn validate(&self) -> ModelResult<()> {
        for (label, min, max) in [
            ("radius", self.radius_min.value(), self.radius_max.value()),
            (
                "distance",
                self.distance_min.value(),
                self.distance_max.value(),
            ),
        ] {
            if !min.is_finite() || !max.is_finite() || min <= 0.0 {
                return Err(ModelError::InvalidInput(format!(
                    "{} bounds must be finite and strictly positive, got [{}, {}]",
                    label, min, max
                )));
            }
            if min >= max {
                return Err(ModelError::InvalidInput(format!(
                    "{} bounds are inverted or empty: [{}, {}]",
                    label, min, max
                )));
            }
        }
        if self.radius_steps < 2 || self.distance_steps < 2 {
            return Err(ModelError::InvalidInput(format!(
                "grid needs at least 2 steps per axis, got {} x {}",
                self.radius_steps, self.distance_steps
            )));
        }
        Ok(())
    }
}

impl Default for SurveyGrid {
    /// 0.1–30 solar radii against 1–100 parsecs, 100 steps per axis.
    fn default() -> Self {
        Self {
            radius_min: SolarRadiuses::new(0.1),
            radius_max: SolarRadiuses::new(30.0),
            radius_steps: 100,
            distance_min: Parsecs::new(1.0),
            distance_max: Parsecs::new(100.0),
            distance_steps: 100,
        }
    }
}

/// One evaluated grid point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyCell {
    pub radius: SolarRadiuses,
    pub distance: Parsecs,
    /// Partial-phase duration at this grid point, seconds.
    pub duration: Seconds,
    pub frame_count: FrameCount,
    pub verdict: FeasibilityVerdict,
}

/// Dataset-level rollup of a finished survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySummary {
    pub total_cells: usize,
    pub resolvable: usize,
    pub marginal: usize,
    pub unresolvable: usize,
    /// Cells dropped because their geometry failed the small-angle check.
    pub skipped: usize,
    pub resolvable_fraction: f64,
    pub shortest_duration: Option<Seconds>,
    pub longest_duration: Option<Seconds>,
}

/// A completed sweep: every cell plus the rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilitySurvey {
    /// Limb rate the sweep was evaluated at, arcsec/s.
    pub limb_rate: LimbVelocity,
    /// Frame period of the sampling camera, seconds.
    pub frame_period: Seconds,
    pub cells: Vec<SurveyCell>,
    pub summary: SurveySummary,
}

/// Evaluates the full grid against one limb rate and camera.
///
/// Cells are emitted row-major: distances outermost, radii innermost, both
/// ascending. Grid points that fail the small-angle sanity check are logged
/// and skipped rather than failing the whole sweep; any other validation
/// error aborts, since it means the rate, camera, or band is unusable for
/// every cell.
pub fn run_survey(
    grid: &SurveyGrid,
    rate: LimbVelocity,
    camera: &Camera,
    band: MarginalBand,
) -> ModelResult<FeasibilitySurvey> {
    grid.validate()?;
    let frame_period = camera.frame_period()?;

    let radii = linspace(
        grid.radius_min.value(),
        grid.radius_max.value(),
        grid.radius_steps,
    );
    let distances = linspace(
        grid.distance_min.value(),
        grid.distance_max.value(),
        grid.distance_steps,
    );

    let mut cells = Vec::with_capacity(radii.len() * distances.len());
    let mut skipped = 0usize;

    for &distance_pc in &distances {
        let distance = Parsecs::new(distance_pc);
        for &radius_rsun in &radii {
            let radius = SolarRadiuses::new(radius_rsun);
            let diameter = match angular_size::angular_diameter(
                radius.to::<Kilometer>(),
                distance.to::<Kilometer>(),
            ) {
                Ok(d) => d,
                Err(ModelError::UnrealisticApproximation(reason)) => {
                    log::warn!(
                        "skipping grid point ({} Rsun, {} pc): {}",
                        radius_rsun,
                        distance_pc,
                        reason
                    );
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let duration = partial_phase_duration(diameter, rate)?;
            let sampling = evaluate_sampling(duration, frame_period, band)?;

            cells.push(SurveyCell {
                radius,
                distance,
                duration,
                frame_count: sampling.frame_count,
                verdict: sampling.verdict,
            });
        }
    }

    let summary = summarize(&cells, skipped);
    log::info!(
        "survey finished: {} cells, {} resolvable, {} marginal, {} unresolvable, {} skipped",
        summary.total_cells,
        summary.resolvable,
        summary.marginal,
        summary.unresolvable,
        summary.skipped
    );

    Ok(FeasibilitySurvey {
        limb_rate: rate,
        frame_period,
        cells,
        summary,
    })
}

/// Evenly spaced values from `min` to `max` inclusive.
fn linspace(min: f64, max: f64, steps: usize) -> Vec<f64> {
    let step = (max - min) / (steps - 1) as f64;
    (0..steps).map(|i| min + step * i as f64).collect()
}

fn summarize(cells: &[SurveyCell], skipped: usize) -> SurveySummary {
    let mut resolvable = 0;
    let mut marginal = 0;
    let mut unresolvable = 0;
    let mut shortest: Option<Seconds> = None;
    let mut longest: Option<Seconds> = None;

    for cell in cells {
        match cell.verdict {
            FeasibilityVerdict::Resolvable => resolvable += 1,
            FeasibilityVerdict::Marginal => marginal += 1,
            FeasibilityVerdict::Unresolvable => unresolvable += 1,
        }
        shortest = Some(match shortest {
            Some(s) if s.value() <= cell.duration.value() => s,
            _ => cell.duration,
        });
        longest = Some(match longest {
            Some(l) if l.value() >= cell.duration.value() => l,
            _ => cell.duration,
        });
    }

    let total_cells = cells.len();
    SurveySummary {
        total_cells,
        resolvable,
        marginal,
        unresolvable,
        skipped,
        resolvable_fraction: if total_cells > 0 {
            resolvable as f64 / total_cells as f64
        } else {
            0.0
        },
        shortest_duration: shortest,
        longest_duration: longest,
    }
}
