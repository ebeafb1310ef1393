//! Collision world containing the static collider registry.
//!
//! The world is built once after the scene model finishes loading and is
//! mutated only through explicit add/remove calls (e.g. when an object is
//! deleted from the scene). Queries are linear scans over the registry,
//! which is fine for a few hundred campus colliders; all queries go through
//! `CollisionWorld` methods so a spatial partition (grid/BVH) can replace
//! the scan later without changing the contract.

use glam::Vec3;

use super::obb::Obb;

/// A static collider in the world.
///
/// Ids are assigned in registration order and never reused, so external
/// tools (debug overlays) can track colliders across removals.
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    /// Unique identifier for this collider.
    pub id: u32,
    /// The collision volume.
    pub obb: Obb,
}

/// The collision world: an ordered, append-only registry of static OBBs
/// (except explicit removal by nearest-center match or full clear).
#[derive(Debug, Default)]
pub struct CollisionWorld {
    colliders: Vec<Collider>,
    next_id: u32,
}

impl CollisionWorld {
    /// Create an empty collision world.
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a collider. Returns its id.
    pub fn add(&mut self, obb: Obb) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.colliders.push(Collider { id, obb });
        id
    }

    /// Remove the first collider whose center lies within `epsilon` of
    /// `point`. Returns the removed collider's id, if any.
    ///
    /// Used when an object is deleted from the scene: the deleter knows the
    /// object's world position but not its registry id.
    pub fn remove_near(&mut self, point: Vec3, epsilon: f32) -> Option<u32> {
        let index = self
            .colliders
            .iter()
            .position(|c| c.obb.center().distance_squared(point) <= epsilon * epsilon)?;
        Some(self.colliders.remove(index).id)
    }

    /// Remove all colliders.
    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    /// The registered colliders, in registration order. For diagnostics and
    /// debug visualization.
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Number of registered colliders.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Test a probe volume against every collider. True if any intersects.
    pub fn intersects_any(&self, probe: &Obb) -> bool {
        self.colliders.iter().any(|c| c.obb.intersects(probe))
    }

    /// All colliders intersecting a probe volume.
    ///
    /// Vertical resolution needs every hit (lowest ceiling, highest floor),
    /// not just the first.
    pub fn intersecting<'a>(&'a self, probe: &'a Obb) -> impl Iterator<Item = &'a Collider> {
        self.colliders.iter().filter(move |c| c.obb.intersects(probe))
    }

    /// Test whether a world-space point is inside any collider.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.colliders.iter().any(|c| c.obb.contains_point(point))
    }
}

// ============================================================================
// Tests
// ============================================================================
