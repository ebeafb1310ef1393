//! Oriented bounding box primitive.
//!
//! The OBB is the only collision shape in the engine: static colliders are
//! built from scene-mesh bounds, and the player body plus all movement
//! probes are OBBs too. Intersection is a binary separating-axis test; no
//! contact manifold or impulse is ever computed.

use glam::{Quat, Vec3};

/// Cross products of near-parallel edge pairs are degenerate and must be
/// skipped rather than normalized (squared-length threshold).
const PARALLEL_AXIS_EPSILON: f32 = 1e-6;

/// An oriented bounding box.
///
/// Represented by a world-space center, non-negative half-extents along the
/// box's own axes, and a rotation. The three orthonormal world-space axes
/// are derived from the rotation and cached; they are recomputed whenever
/// the rotation changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    center: Vec3,
    half_extents: Vec3,
    rotation: Quat,
    axes: [Vec3; 3],
}

impl Obb {
    /// Create an OBB from center, half-extents and rotation.
    ///
    /// Half-extents are clamped to be non-negative.
    pub fn new(center: Vec3, half_extents: Vec3, rotation: Quat) -> Self {
        let rotation = rotation.normalize();
        Self {
            center,
            half_extents: half_extents.abs(),
            rotation,
            axes: Self::derive_axes(rotation),
        }
    }

    /// Create an axis-aligned OBB (identity rotation).
    pub fn axis_aligned(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center, half_extents, Quat::IDENTITY)
    }

    /// Build a world-space OBB from a mesh's local bounding box and its
    /// decomposed world transform.
    ///
    /// The local center and half-extents are scaled by the world scale, the
    /// center is rotated by the world rotation and translated by the world
    /// position. Rotation does not change the extents' magnitudes, only the
    /// box's orientation axes, which come from the world rotation alone.
    pub fn from_local_bounds(
        local_min: Vec3,
        local_max: Vec3,
        translation: Vec3,
        rotation: Quat,
        scale: Vec3,
    ) -> Self {
        let local_center = (local_min + local_max) * 0.5;
        let local_half = (local_max - local_min) * 0.5;

        let center = translation + rotation * (local_center * scale);
        let half_extents = (local_half * scale).abs();

        Self::new(center, half_extents, rotation)
    }

    fn derive_axes(rotation: Quat) -> [Vec3; 3] {
        [rotation * Vec3::X, rotation * Vec3::Y, rotation * Vec3::Z]
    }

    /// World-space center.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Half-extents along the box's own axes (always non-negative).
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Current rotation.
    #[inline]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// The box's orthonormal world-space axes.
    #[inline]
    pub fn axes(&self) -> &[Vec3; 3] {
        &self.axes
    }

    /// Move the box without changing its orientation.
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    /// Change the box's orientation. The cached axes are recomputed so they
    /// stay orthonormal.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
        self.axes = Self::derive_axes(self.rotation);
    }

    /// Radius of the box projected onto a unit axis: the sum of
    /// `|axis . box_axis_i| * extent_i` over the three box axes.
    fn projected_radius(&self, axis: Vec3) -> f32 {
        self.axes[0].dot(axis).abs() * self.half_extents.x
            + self.axes[1].dot(axis).abs() * self.half_extents.y
            + self.axes[2].dot(axis).abs() * self.half_extents.z
    }

    /// Test whether `axis` separates the two boxes.
    fn is_separating_axis(&self, other: &Obb, separation: Vec3, axis: Vec3) -> bool {
        let distance = separation.dot(axis).abs();
        distance > self.projected_radius(axis) + other.projected_radius(axis)
    }

    /// Separating-axis intersection test against another OBB.
    ///
    /// Checks the 15 candidate axes: the three face axes of each box and
    /// the nine pairwise edge cross products. Cross products of parallel
    /// axis pairs are degenerate (near-zero length) and are excluded from
    /// the candidate set. Absence of any separating axis means the boxes
    /// intersect.
    pub fn intersects(&self, other: &Obb) -> bool {
        let separation = other.center - self.center;

        for axis in self.axes.iter().chain(other.axes.iter()) {
            if self.is_separating_axis(other, separation, *axis) {
                return false;
            }
        }

        for a in &self.axes {
            for b in &other.axes {
                let cross = a.cross(*b);
                if cross.length_squared() < PARALLEL_AXIS_EPSILON {
                    continue;
                }
                if self.is_separating_axis(other, separation, cross.normalize()) {
                    return false;
                }
            }
        }

        true
    }

    /// Test whether a world-space point lies inside the box.
    ///
    /// The point is transformed into the box's local frame by projecting
    /// the offset onto each axis and comparing against the extents.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let offset = point - self.center;

        self.axes[0].dot(offset).abs() <= self.half_extents.x
            && self.axes[1].dot(offset).abs() <= self.half_extents.y
            && self.axes[2].dot(offset).abs() <= self.half_extents.z
    }

    /// World-space vertical span `(min_y, max_y)` of the box.
    ///
    /// Computed from the support extent along the world Y axis, so it is
    /// exact for rotated boxes as well. Used for floor/ceiling clamping.
    pub fn vertical_reach(&self) -> (f32, f32) {
        let reach = self.projected_radius(Vec3::Y);
        (self.center.y - reach, self.center.y + reach)
    }

    /// The eight world-space corners of the box, for wireframe rendering.
    pub fn corners(&self) -> [Vec3; 8] {
        let x = self.axes[0] * self.half_extents.x;
        let y = self.axes[1] * self.half_extents.y;
        let z = self.axes[2] * self.half_extents.z;
        let c = self.center;

        [
            c - x - y - z,
            c + x - y - z,
            c + x + y - z,
            c - x + y - z,
            c - x - y + z,
            c + x - y + z,
            c + x + y + z,
            c - x + y + z,
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================
