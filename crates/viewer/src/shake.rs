//! Camera shake.
//!
//! Purely cosmetic: a small oscillating bob while walking or running plus
//! a decaying dip on hard landings. The offset exists only between
//! `apply` and `remove` around the render call — the session's
//! authoritative eye position must never see it, so `apply` records the
//! pre-shake position and `remove` restores it verbatim. Use
//! [`CameraShake::with_applied`] to make the pairing impossible to miss.

use glam::Vec3;

use crate::camera::WalkCamera;

/// Camera shake state and tuning.
#[derive(Debug, Clone)]
pub struct CameraShake {
    /// Bob oscillation frequency while walking (radians/second of phase).
    pub walk_frequency: f32,
    /// Bob oscillation frequency while running.
    pub run_frequency: f32,
    /// Peak bob offset (meters).
    pub amplitude: f32,
    /// Downward landing speed that triggers the landing dip (m/s).
    pub landing_trigger_speed: f32,
    /// Landing dip per m/s of impact above the trigger (meters).
    pub landing_dip_scale: f32,
    /// Largest landing dip allowed (meters).
    pub landing_dip_max: f32,
    /// Exponential decay rate of the landing dip (1/seconds).
    pub landing_decay: f32,

    phase: f32,
    /// Eases toward 1 while moving and back to 0 at rest, so the bob
    /// fades out instead of freezing mid-swing.
    bob_weight: f32,
    landing_dip: f32,
    saved_eye: Option<Vec3>,
}

impl Default for CameraShake {
    fn default() -> Self {
        Self {
            walk_frequency: 9.0,
            run_frequency: 14.0,
            amplitude: 0.035,
            landing_trigger_speed: 6.0,
            landing_dip_scale: 0.012,
            landing_dip_max: 0.18,
            landing_decay: 7.0,

            phase: 0.0,
            bob_weight: 0.0,
            landing_dip: 0.0,
            saved_eye: None,
        }
    }
}

impl CameraShake {
    /// Shake with the given landing trigger speed and default tuning.
    pub fn new(landing_trigger_speed: f32) -> Self {
        Self {
            landing_trigger_speed,
            ..Default::default()
        }
    }

    /// Advance the oscillators. Call once per tick, after physics.
    pub fn advance(&mut self, dt: f32, moving: bool, running: bool) {
        let frequency = if running {
            self.run_frequency
        } else {
            self.walk_frequency
        };

        if moving {
            self.phase += frequency * dt;
            self.bob_weight = (self.bob_weight + 4.0 * dt).min(1.0);
        } else {
            self.bob_weight = (self.bob_weight - 4.0 * dt).max(0.0);
        }

        self.landing_dip *= (-self.landing_decay * dt).exp();
        if self.landing_dip < 1e-4 {
            self.landing_dip = 0.0;
        }
    }

    /// Feed a touchdown. Speeds at or below the trigger are ignored.
    pub fn trigger_landing(&mut self, impact_speed: f32) {
        if impact_speed > self.landing_trigger_speed {
            let dip = (impact_speed - self.landing_trigger_speed) * self.landing_dip_scale;
            self.landing_dip = dip.min(self.landing_dip_max).max(self.landing_dip);
        }
    }

    /// The current cosmetic offset.
    pub fn offset(&self) -> Vec3 {
        let bob_y = self.phase.sin() * self.amplitude;
        let sway_x = (self.phase * 0.5).cos() * self.amplitude * 0.5;

        Vec3::new(sway_x, bob_y, 0.0) * self.bob_weight + Vec3::new(0.0, -self.landing_dip, 0.0)
    }

    /// Add the offset to the camera for the render call. A second apply
    /// without a remove is a no-op.
    pub fn apply(&mut self, camera: &mut WalkCamera) {
        if self.saved_eye.is_some() {
            return;
        }
        self.saved_eye = Some(camera.eye);
        camera.eye += self.offset();
    }

    /// Restore the camera to the exact pre-shake position.
    pub fn remove(&mut self, camera: &mut WalkCamera) {
        if let Some(eye) = self.saved_eye.take() {
            camera.eye = eye;
        }
    }

    /// Run `render` with the shake applied; the camera is restored before
    /// this returns, whatever the closure does.
    pub fn with_applied<R>(
        &mut self,
        camera: &mut WalkCamera,
        render: impl FnOnce(&WalkCamera) -> R,
    ) -> R {
        self.apply(camera);
        let result = render(camera);
        self.remove(camera);
        result
    }
}

// ============================================================================
// Tests
// ============================================================================
