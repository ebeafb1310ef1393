//! Named campus areas for the walkthrough prompt.
//!
//! Regions are axis-aligned rectangles in the XZ plane — data only, fed
//! from a per-scene table. The session tests the resolved eye position
//! against them each tick and reports only *changes* of the matched name
//! (including leaving into no-match), which is what drives the UI
//! cross-fade; the fade itself is not this crate's business.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A named rectangular area, XZ projection only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Display name shown by the prompt UI.
    pub name: String,
    /// Minimum (x, z) corner.
    pub min: Vec2,
    /// Maximum (x, z) corner.
    pub max: Vec2,
}

impl Region {
    /// Create a region from its XZ corners.
    pub fn new(name: &str, min: Vec2, max: Vec2) -> Self {
        Self {
            name: name.to_string(),
            min,
            max,
        }
    }

    /// Whether a world position falls inside this region (Y is ignored).
    pub fn contains_xz(&self, position: Vec3) -> bool {
        position.x >= self.min.x
            && position.x <= self.max.x
            && position.z >= self.min.y
            && position.z <= self.max.y
    }
}

/// A transition between matched region names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionChange {
    /// Name left, if any.
    pub from: Option<String>,
    /// Name entered, if any.
    pub to: Option<String>,
}

/// Ordered region list with current-match tracking. Overlapping regions
/// resolve to the first match in table order.
#[derive(Debug, Default)]
pub struct RegionTable {
    regions: Vec<Region>,
    current: Option<usize>,
}

impl RegionTable {
    /// Create a table from a per-scene region list.
    pub fn new(regions: Vec<Region>) -> Self {
        Self {
            regions,
            current: None,
        }
    }

    /// The regions in table order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Name of the currently matched region, if any.
    pub fn current_name(&self) -> Option<&str> {
        self.current.map(|i| self.regions[i].name.as_str())
    }

    /// Re-test the position and report a change if the matched name
    /// differs from the previous tick's.
    pub fn update(&mut self, position: Vec3) -> Option<RegionChange> {
        let matched = self
            .regions
            .iter()
            .position(|r| r.contains_xz(position));

        if matched == self.current {
            return None;
        }

        let change = RegionChange {
            from: self.current.map(|i| self.regions[i].name.clone()),
            to: matched.map(|i| self.regions[i].name.clone()),
        };
        self.current = matched;
        Some(change)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RegionTable {
        RegionTable::new(vec![
            Region::new("Library", Vec2::new(-10.0, -10.0), Vec2::new(0.0, 0.0)),
            Region::new("Quad", Vec2::new(0.0, -10.0), Vec2::new(20.0, 10.0)),
        ])
    }

    #[test]
    fn test_contains_ignores_y() {
        let region = Region::new("Any", Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0));
        assert!(region.contains_xz(Vec3::new(2.0, 100.0, 3.0)));
        assert!(!region.contains_xz(Vec3::new(6.0, 0.0, 3.0)));
    }

    #[test]
    fn test_enter_leave_switch() {
        let mut table = table();

        // Nowhere yet: no change event for staying nowhere.
        assert_eq!(table.update(Vec3::new(100.0, 0.0, 100.0)), None);

        // Enter the library.
        let change = table.update(Vec3::new(-5.0, 1.6, -5.0)).unwrap();
        assert_eq!(change.from, None);
        assert_eq!(change.to, Some("Library".to_string()));

        // Staying put is quiet.
        assert_eq!(table.update(Vec3::new(-4.0, 1.6, -5.0)), None);

        // Walk straight into the quad.
        let change = table.update(Vec3::new(5.0, 1.6, -5.0)).unwrap();
        assert_eq!(change.from, Some("Library".to_string()));
        assert_eq!(change.to, Some("Quad".to_string()));

        // Leave everything: transition to no-match is also a change.
        let change = table.update(Vec3::new(100.0, 1.6, 100.0)).unwrap();
        assert_eq!(change.from, Some("Quad".to_string()));
        assert_eq!(change.to, None);
    }

    #[test]
    fn test_overlap_first_match_wins() {
        let mut table = RegionTable::new(vec![
            Region::new("Inner", Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0)),
            Region::new("Outer", Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0)),
        ]);

        let change = table.update(Vec3::new(2.0, 0.0, 2.0)).unwrap();
        assert_eq!(change.to, Some("Inner".to_string()));
    }
}
