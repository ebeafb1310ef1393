//! Campuswalk Physics
//!
//! Collision detection and first-person movement for the campus
//! walkthrough viewer. Every collision volume is an oriented bounding box
//! and every query is a binary separating-axis test; movement is resolved
//! by testing candidate positions rather than computing contacts.
//!
//! # Architecture
//!
//! - **Collision**: the OBB primitive, the static collider registry built
//!   from scene geometry, and the player's dynamic body
//! - **Movement**: the per-tick resolver — horizontal sliding, gravity,
//!   floor/ceiling clamping, jump and bunny-hop
//!
//! The crate is renderer-agnostic: it consumes a per-frame delta time, a
//! camera look direction and input flags, and produces the resolved eye
//! position. Feedback (camera shake, debug overlays) lives downstream and
//! only ever reads from here.

pub mod collision;
pub mod movement;

// Re-export commonly used types
pub use collision::{BodyMetrics, Collider, CollisionWorld, Obb, PlayerBody};
pub use movement::{
    HopState, MoveInput, MovementConfig, MovementResolver, MovementState, TickEvents,
};
