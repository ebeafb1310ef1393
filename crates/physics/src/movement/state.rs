//! Movement input and simulation state.
//!
//! `MoveInput` is pure intent: input handlers (keyboard, touch joystick)
//! only set its flags, and the tick function is the sole consumer. All
//! mutable simulation state lives in `MovementState`, owned by the active
//! first-person session and reset when the session restarts.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::hop::HopState;

/// Directional and modifier input flags for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    /// Move toward the camera facing.
    pub forward: bool,
    /// Move away from the camera facing.
    pub backward: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
    /// Run modifier.
    pub run: bool,
    /// Jump key held (the resolver edge-detects it).
    pub jump: bool,
    /// Fly escape modifier.
    pub fly: bool,
    /// Crouch modifier.
    pub crouch: bool,
}

impl MoveInput {
    /// Camera-local 2D movement direction derived from the four flags:
    /// forward is -Z, backward +Z, left -X, right +X. Normalized to unit
    /// length; zero when no direction is held.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.forward {
            dir.y -= 1.0;
        }
        if self.backward {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }

    /// Whether any directional flag is held.
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Per-session simulation state for the first-person walker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementState {
    /// Authoritative eye (camera) position. The resolver reads and writes
    /// this every tick; nothing else may move it.
    pub eye: Vec3,

    /// Signed vertical velocity (meters/second, up positive).
    pub vertical_velocity: f32,

    /// Whether a jump is currently allowed. Set when grounding, cleared
    /// only by jumping.
    pub can_jump: bool,

    /// Whether the last tick ended standing on a floor (mesh or fallback
    /// plane). Landing events are the false-to-true edge of this flag.
    pub grounded: bool,

    /// Bunny-hop state (speed multiplier plus jump edge detection).
    pub hop: HopState,
}

impl MovementState {
    /// Fresh state at the given eye position.
    pub fn new(eye: Vec3) -> Self {
        Self {
            eye,
            vertical_velocity: 0.0,
            can_jump: false,
            grounded: false,
            hop: HopState::default(),
        }
    }

    /// Reinitialize for a new first-person session at `eye`.
    pub fn reset(&mut self, eye: Vec3) {
        *self = Self::new(eye);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_zero_without_input() {
        assert_eq!(MoveInput::default().direction(), Vec2::ZERO);
    }

    #[test]
    fn test_direction_forward() {
        let input = MoveInput {
            forward: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_direction_diagonal_normalized() {
        let input = MoveInput {
            forward: true,
            right: true,
            ..Default::default()
        };
        let dir = input.direction();
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!(dir.x > 0.0 && dir.y < 0.0);
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let input = MoveInput {
            forward: true,
            backward: true,
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::ZERO);
        assert!(input.any_direction());
    }

    #[test]
    fn test_state_reset() {
        let mut state = MovementState::new(Vec3::ZERO);
        state.vertical_velocity = -5.0;
        state.can_jump = true;
        state.grounded = true;

        state.reset(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(state.eye, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(state.vertical_velocity, 0.0);
        assert!(!state.can_jump);
        assert!(!state.grounded);
    }
}
