//! Input intent collection.
//!
//! Keyboard and touch-joystick handlers write here, and *only* here: a
//! handler may set or clear a flag but never touches simulation state.
//! The tick function takes a snapshot each frame and is the single
//! consumer (edge detection for jump happens inside the resolver, so a
//! handler simply mirrors key-down/key-up).

use campuswalk_physics::MoveInput;

/// Shared intent flags between input handlers and the tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    input: MoveInput,
}

impl InputState {
    /// Fresh, all-clear input state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_forward(&mut self, held: bool) {
        self.input.forward = held;
    }

    pub fn set_backward(&mut self, held: bool) {
        self.input.backward = held;
    }

    pub fn set_left(&mut self, held: bool) {
        self.input.left = held;
    }

    pub fn set_right(&mut self, held: bool) {
        self.input.right = held;
    }

    pub fn set_run(&mut self, held: bool) {
        self.input.run = held;
    }

    pub fn set_jump(&mut self, held: bool) {
        self.input.jump = held;
    }

    pub fn set_fly(&mut self, held: bool) {
        self.input.fly = held;
    }

    pub fn set_crouch(&mut self, held: bool) {
        self.input.crouch = held;
    }

    /// Drop every held flag, e.g. when the window loses focus or the
    /// session leaves first-person mode.
    pub fn release_all(&mut self) {
        self.input = MoveInput::default();
    }

    /// The flags as the tick consumes them.
    pub fn snapshot(&self) -> MoveInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handlers_set_only_flags() {
        let mut input = InputState::new();
        input.set_forward(true);
        input.set_run(true);

        let snapshot = input.snapshot();
        assert!(snapshot.forward);
        assert!(snapshot.run);
        assert!(!snapshot.jump);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::new();
        input.set_forward(true);
        input.set_jump(true);
        input.release_all();

        assert_eq!(input.snapshot(), MoveInput::default());
    }
}
