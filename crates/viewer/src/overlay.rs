//! Proximity collider debug overlay.
//!
//! When collider visualization is toggled on, wireframes are shown for
//! every collider within a fixed radius of the player. The overlay tracks
//! which collider ids are currently on screen and reports only the delta
//! between "should be visible" and "currently visible", so a renderer
//! never rebuilds the whole wireframe set frame after frame.

use std::collections::HashSet;

use glam::Vec3;

use campuswalk_physics::CollisionWorld;

/// Ids to start and stop drawing this frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayDelta {
    /// Colliders entering the radius; draw their wireframes.
    pub show: Vec<u32>,
    /// Colliders that left the radius (or the registry); remove them.
    pub hide: Vec<u32>,
}

impl OverlayDelta {
    /// No changes this frame.
    pub fn is_empty(&self) -> bool {
        self.show.is_empty() && self.hide.is_empty()
    }
}

/// Incremental visibility tracking for collider wireframes.
#[derive(Debug)]
pub struct ProximityOverlay {
    radius: f32,
    visible: HashSet<u32>,
}

impl ProximityOverlay {
    /// Track colliders within `radius` of the player.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            visible: HashSet::new(),
        }
    }

    /// Ids currently drawn.
    pub fn visible_ids(&self) -> &HashSet<u32> {
        &self.visible
    }

    /// Recompute visibility around the player and return the delta.
    pub fn update(&mut self, eye: Vec3, world: &CollisionWorld) -> OverlayDelta {
        let radius_sq = self.radius * self.radius;
        let should: HashSet<u32> = world
            .colliders()
            .iter()
            .filter(|c| c.obb.center().distance_squared(eye) <= radius_sq)
            .map(|c| c.id)
            .collect();

        let mut delta = OverlayDelta {
            show: should.difference(&self.visible).copied().collect(),
            hide: self.visible.difference(&should).copied().collect(),
        };
        delta.show.sort_unstable();
        delta.hide.sort_unstable();

        if !delta.is_empty() {
            log::trace!(
                "collider overlay: +{} -{} ({} visible)",
                delta.show.len(),
                delta.hide.len(),
                should.len()
            );
        }

        self.visible = should;
        delta
    }

    /// Hide everything, e.g. when the visualization toggle turns off.
    pub fn clear(&mut self) -> OverlayDelta {
        let mut hide: Vec<u32> = self.visible.drain().collect();
        hide.sort_unstable();
        OverlayDelta {
            show: Vec::new(),
            hide,
        }
    }

    /// Wireframe corners for a visible collider, for the renderer.
    pub fn wireframe(world: &CollisionWorld, id: u32) -> Option<[Vec3; 8]> {
        world
            .colliders()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.obb.corners())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use campuswalk_physics::Obb;

    fn world_with_boxes(centers: &[Vec3]) -> CollisionWorld {
        let mut world = CollisionWorld::new();
        for &center in centers {
            world.add(Obb::axis_aligned(center, Vec3::ONE));
        }
        world
    }

    #[test]
    fn test_first_update_shows_nearby() {
        let world = world_with_boxes(&[
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(50.0, 0.0, 0.0),
        ]);
        let mut overlay = ProximityOverlay::new(10.0);

        let delta = overlay.update(Vec3::ZERO, &world);
        assert_eq!(delta.show, vec![0]);
        assert!(delta.hide.is_empty());
    }

    #[test]
    fn test_unchanged_set_is_quiet() {
        let world = world_with_boxes(&[Vec3::new(2.0, 0.0, 0.0)]);
        let mut overlay = ProximityOverlay::new(10.0);

        overlay.update(Vec3::ZERO, &world);
        let delta = overlay.update(Vec3::new(0.5, 0.0, 0.0), &world);
        assert!(delta.is_empty());
    }

    #[test]
    fn test_walking_swaps_visibility_incrementally() {
        let world = world_with_boxes(&[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(30.0, 0.0, 0.0),
        ]);
        let mut overlay = ProximityOverlay::new(10.0);

        overlay.update(Vec3::ZERO, &world);
        assert!(overlay.visible_ids().contains(&0));

        // Move next to the far box: one hide, one show.
        let delta = overlay.update(Vec3::new(28.0, 0.0, 0.0), &world);
        assert_eq!(delta.show, vec![1]);
        assert_eq!(delta.hide, vec![0]);
    }

    #[test]
    fn test_removed_collider_gets_hidden() {
        let mut world = world_with_boxes(&[Vec3::new(2.0, 0.0, 0.0)]);
        let mut overlay = ProximityOverlay::new(10.0);
        overlay.update(Vec3::ZERO, &world);

        world.remove_near(Vec3::new(2.0, 0.0, 0.0), 0.1);
        let delta = overlay.update(Vec3::ZERO, &world);
        assert_eq!(delta.hide, vec![0]);
    }

    #[test]
    fn test_clear_hides_all() {
        let world = world_with_boxes(&[
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
        ]);
        let mut overlay = ProximityOverlay::new(10.0);
        overlay.update(Vec3::ZERO, &world);

        let delta = overlay.clear();
        assert_eq!(delta.hide, vec![0, 1]);
        assert!(overlay.visible_ids().is_empty());
    }

    #[test]
    fn test_wireframe_lookup() {
        let world = world_with_boxes(&[Vec3::new(5.0, 0.0, 0.0)]);
        assert!(ProximityOverlay::wireframe(&world, 0).is_some());
        assert!(ProximityOverlay::wireframe(&world, 99).is_none());
    }
}
