//! # Occulting
//!
//! Timing and resolvability model for stellar occultations by the Moon.
//!
//! This crate answers a feasibility question: can a high-speed camera collect
//! several independent frames while the lunar limb is only partially covering
//! a star? If the start and end of that partial phase can be timed, the
//! star's angular diameter (and with a known distance, its physical radius)
//! falls out of the limb's relative angular rate.
//!
//! ## Features
//!
//! - **Angular sizes**: convert a physical radius and distance into an
//!   apparent diameter, and back
//! - **Limb rate**: relative angular velocity of the occulting limb, either
//!   supplied directly or derived from a body's mean orbital motion and a
//!   grazing-angle factor
//! - **Partial-phase timing**: duration of the ingress/egress sweep across
//!   the stellar disk
//! - **Sampling feasibility**: frames captured within that duration and a
//!   resolvable / marginal / unresolvable verdict
//! - **Inverse solving**: recover an angular diameter from a measured
//!   partial-phase duration
//! - **Survey sweeps**: batch evaluation over a radius × distance grid for
//!   the external report layer
//!
//! ## Architecture
//!
//! - [`core`]: domain value types and the error taxonomy
//! - [`algorithms`]: the pure per-evaluation computations
//! - [`models`]: configured entities (star, occulting body, camera)
//! - [`services`]: single-target assessment and grid surveys
//! - [`config`]: TOML configuration for cameras, bodies, and grids
//!
//! All quantities are strongly typed via `qtty`; angles cross the API as
//! arcseconds, times as seconds, lengths as kilometres (with parsec and
//! solar-radius entry points where astronomy makes those natural). Every
//! operation is a pure function over value types: no shared state, no I/O,
//! safe to call from any number of threads.

pub mod algorithms;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

pub use crate::core::domain::{
    FeasibilityVerdict, FrameCount, LimbVelocity, MarginalBand, SamplingAssessment,
};
pub use crate::core::error::{ModelError, ModelResult};
