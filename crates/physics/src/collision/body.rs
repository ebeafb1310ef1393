//! The player's dynamic collision body.
//!
//! One OBB tracking the camera: its center is derived every tick from the
//! authoritative eye position, never the other way around. Until the body
//! is initialized (first entry into first-person mode) every probe
//! constructor returns `None`, so all collision queries degenerate to
//! "no collision" instead of failing.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::obb::Obb;

/// Vertical half-thickness of the head/foot probe boxes.
const PROBE_HALF_THICKNESS: f32 = 0.05;

/// Fixed player dimensions used to derive the body OBB from the eye
/// position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Horizontal capsule-equivalent radius (meters).
    pub radius: f32,
    /// Total body height, feet to crown (meters).
    pub height: f32,
    /// Eye height above the feet (meters).
    pub eye_height: f32,
}

impl BodyMetrics {
    /// Feet Y for a given eye position.
    #[inline]
    pub fn feet_y(&self, eye: Vec3) -> f32 {
        eye.y - self.eye_height
    }

    /// Body-center position for a given eye position: feet plus half the
    /// body height.
    #[inline]
    pub fn center_for_eye(&self, eye: Vec3) -> Vec3 {
        Vec3::new(eye.x, self.feet_y(eye) + self.height * 0.5, eye.z)
    }

    /// Half-extents of the body box: `(radius, height/2, radius)`.
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.radius, self.height * 0.5, self.radius)
    }
}

/// The player's collision body.
///
/// Rotation is always identity — there is no roll/pitch collision — but the
/// OBB machinery is kept general for future non-identity bodies.
#[derive(Debug, Clone)]
pub struct PlayerBody {
    metrics: BodyMetrics,
    obb: Option<Obb>,
}

impl PlayerBody {
    /// Create an uninitialized body with the given dimensions.
    pub fn new(metrics: BodyMetrics) -> Self {
        Self { metrics, obb: None }
    }

    /// Initialize the body from the current eye position.
    ///
    /// Idempotent: once the body exists, later calls are ignored (a
    /// first-person session constructs it exactly once).
    pub fn init(&mut self, eye: Vec3) {
        if self.obb.is_some() {
            return;
        }
        self.obb = Some(Obb::new(
            self.metrics.center_for_eye(eye),
            self.metrics.half_extents(),
            Quat::IDENTITY,
        ));
    }

    /// Recompute the body from the latest eye position. No-op while
    /// uninitialized.
    pub fn update(&mut self, eye: Vec3) {
        if let Some(obb) = &mut self.obb {
            obb.set_center(self.metrics.center_for_eye(eye));
        }
    }

    /// Whether `init` has run.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.obb.is_some()
    }

    /// The body's dimensions.
    #[inline]
    pub fn metrics(&self) -> BodyMetrics {
        self.metrics
    }

    /// The current body volume, if initialized.
    #[inline]
    pub fn obb(&self) -> Option<&Obb> {
        self.obb.as_ref()
    }

    /// Full body volume positioned at a candidate eye position. Used by
    /// horizontal resolution to test a desired position before committing.
    pub fn volume_at(&self, eye: Vec3) -> Option<Obb> {
        self.obb?;
        Some(Obb::axis_aligned(
            self.metrics.center_for_eye(eye),
            self.metrics.half_extents(),
        ))
    }

    /// Thin probe at head height plus `clearance`, for ceiling checks while
    /// ascending and for pre-jump clearance tests.
    pub fn head_probe(&self, eye: Vec3, clearance: f32) -> Option<Obb> {
        self.obb?;
        let crown_y = self.metrics.feet_y(eye) + self.metrics.height + clearance;
        Some(Obb::axis_aligned(
            Vec3::new(eye.x, crown_y, eye.z),
            Vec3::new(self.metrics.radius, PROBE_HALF_THICKNESS, self.metrics.radius),
        ))
    }

    /// Thin probe at foot height, for grounding checks while falling or
    /// stationary.
    pub fn foot_probe(&self, eye: Vec3) -> Option<Obb> {
        self.obb?;
        Some(Obb::axis_aligned(
            Vec3::new(eye.x, self.metrics.feet_y(eye), eye.z),
            Vec3::new(self.metrics.radius, PROBE_HALF_THICKNESS, self.metrics.radius),
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
