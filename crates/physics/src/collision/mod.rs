//! Collision detection for first-person movement.
//!
//! Everything collides as an oriented bounding box:
//!
//! - [`Obb`]: the primitive — SAT intersection, point containment,
//!   world-space construction from mesh bounds
//! - [`CollisionWorld`]: the static collider registry built from the scene
//! - [`PlayerBody`]: the one dynamic OBB, derived from the camera eye
//!
//! Intersection is binary: a probe either overlaps a collider or it does
//! not. Movement resolution works by testing candidate positions, not by
//! computing contacts.

mod body;
mod obb;
mod world;

pub use body::{BodyMetrics, PlayerBody};
pub use obb::Obb;
pub use world::{Collider, CollisionWorld};
