//! Pure occultation computations.
//!
//! Each algebraic relationship of the timing model is a named, validated
//! operation:
//!
//! - [`angular_size`]: physical radius and distance ↔ apparent diameter
//! - [`limb_velocity`]: relative angular rate of the occulting limb
//! - [`duration`]: partial-phase duration of an ingress or egress
//! - [`sampling`]: frame quantization and the feasibility verdict
//! - [`inverse`]: angular diameter recovered from a measured duration
//!
//! All functions are pure and validate their own preconditions; see
//! [`crate::ModelError`] for the failure taxonomy.

pub mod angular_size;
pub mod duration;
pub mod inverse;
pub mod limb_velocity;
pub mod sampling;

pub use angular_size::{angular_diameter, physical_radius};
pub use duration::partial_phase_duration;
pub use inverse::{recover_angular_diameter, recover_physical_radius};
pub use limb_velocity::{limb_velocity, LimbVelocitySource};
pub use sampling::evaluate_sampling;
