//! Higher-level evaluation services built on the pure algorithms.
//!
//! - [`assessment`]: the full forward pipeline for a single star
//! - [`survey`]: batch sweep over a radius × distance grid

pub mod assessment;
pub mod survey;


pub use assessment::{assess_star, StarAssessment};
pub use survey::{run_survey, FeasibilitySurvey, SurveyCell, SurveyGrid, SurveySummary};
