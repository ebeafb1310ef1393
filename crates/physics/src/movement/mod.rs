//! First-person movement resolution.
//!
//! Movement is resolved once per simulation tick, always in the same
//! order: horizontal sliding against the collision world, vertical
//! integration with ceiling/floor clamping, jump, fly. Input handlers
//! never touch any of this directly — they set [`MoveInput`] flags, and
//! the tick is the single consumer.
//!
//! # Key Types
//!
//! - [`MovementConfig`]: per-scene tuning constants
//! - [`MovementState`]: the authoritative simulation state (eye position,
//!   vertical velocity, grounding, bunny-hop)
//! - [`MovementResolver`]: the per-tick resolution algorithm
//! - [`TickEvents`]: read-only feedback signals for shake/overlay/prompts

mod config;
mod hop;
mod resolver;
mod state;

pub use config::MovementConfig;
pub use hop::HopState;
pub use resolver::{MovementResolver, TickEvents};
pub use state::{MoveInput, MovementState};
