//! Campuswalk Viewer
//!
//! Camera-side collaborators of the movement core: the first-person
//! camera the session steers, the cosmetic camera shake, and the
//! proximity collider overlay. Everything here is strictly downstream of
//! physics — it reads resolved positions and tick events, and the one
//! thing it writes (the shake offset) is scoped to the render call and
//! removed before the next tick can observe it.

pub mod camera;
pub mod overlay;
pub mod shake;

pub use camera::WalkCamera;
pub use overlay::{OverlayDelta, ProximityOverlay};
pub use shake::CameraShake;
