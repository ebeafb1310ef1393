//! The walkthrough's first-person camera.
//!
//! The camera is a collaborator of the movement core, not part of it: the
//! session reads `look_direction()` to steer movement and writes the
//! resolved eye position back each tick. Orientation is yaw/pitch only —
//! the walker never rolls.

use glam::{Mat4, Vec3};

/// First-person camera state.
#[derive(Debug, Clone)]
pub struct WalkCamera {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Yaw in radians; 0 looks along -Z, positive turns counterclockwise
    /// seen from above.
    pub yaw: f32,
    /// Pitch in radians, positive looking up. Clamped short of vertical.
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl Default for WalkCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov: 75.0,
            near: 0.1,
            far: 2000.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl WalkCamera {
    /// Pitch stops just short of straight up/down so the horizontal
    /// movement frame never degenerates completely.
    const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

    /// Create a camera at the given eye position.
    pub fn new(eye: Vec3) -> Self {
        Self {
            eye,
            ..Default::default()
        }
    }

    /// Apply a look delta (radians), clamping pitch and wrapping yaw.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw = (self.yaw + yaw_delta).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + pitch_delta).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Unit look direction for the current yaw/pitch.
    pub fn look_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Write the resolved eye position from the session.
    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    /// View matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.eye + self.look_direction(), Vec3::Y)
    }

    /// Projection matrix for rendering.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = WalkCamera::default();
        let look = camera.look_direction();
        assert!((look.z + 1.0).abs() < 1e-5);
        assert!(look.x.abs() < 1e-5);
        assert!(look.y.abs() < 1e-5);
    }

    #[test]
    fn test_quarter_turn() {
        let mut camera = WalkCamera::default();
        camera.rotate(FRAC_PI_2, 0.0);

        let look = camera.look_direction();
        assert!((look.x + 1.0).abs() < 1e-5, "look={look:?}");
        assert!(look.z.abs() < 1e-5);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut camera = WalkCamera::default();
        camera.rotate(0.0, 10.0);
        assert!(camera.pitch < FRAC_PI_2);

        camera.rotate(0.0, -20.0);
        assert!(camera.pitch > -FRAC_PI_2);
    }

    #[test]
    fn test_view_matrix_valid() {
        let camera = WalkCamera::new(Vec3::new(1.0, 1.6, 3.0));
        assert!(camera.view_matrix().determinant().abs() > 1e-4);
    }
}
