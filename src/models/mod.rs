//! Configured entities: the star being occulted, the occulting body, and the
//! camera doing the sampling.
//!
//! These carry the numbers a single evaluation needs; all physics lives in
//! [`crate::algorithms`]. Alternate bodies or cameras are modeled by
//! constructing different values, not by editing constants.

pub mod body;
pub mod camera;
pub mod star;

pub use body::OccultingBody;
pub use camera::Camera;
pub use star::Star;
