//! Collider classification and collision-world construction.
//!
//! Every mesh in the loaded scene is classified by a three-tier rule,
//! tried in order, first match wins:
//!
//! 1. The name contains the reserved `COLLIDER` marker — always a
//!    collider, and the mesh is hidden (invisible collision volume).
//! 2. The name contains a structural keyword (case-insensitive) — a
//!    collider that stays visible.
//! 3. Auto-detect: any remaining mesh with both geometry and an *opaque*
//!    material. Translucent materials (glass, foliage cards) are excluded
//!    here so the player never bumps into something they can see through;
//!    tiers 1 and 2 still win over the material, which keeps glass walls
//!    collidable when named accordingly.

use campuswalk_physics::CollisionWorld;

use crate::scene::SceneMesh;

/// Reserved marker for invisible collision volumes.
pub const COLLIDER_MARKER: &str = "COLLIDER";

/// Structural name fragments that always mean "collider".
pub const COLLIDER_KEYWORDS: [&str; 8] = [
    "roof",
    "ceiling",
    "top",
    "wall",
    "floor",
    "building",
    "structure",
    "collide",
];

/// Which tier classified a mesh as a collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderKind {
    /// Reserved marker in the name; mesh is hidden.
    Marker,
    /// Structural keyword in the name.
    Keyword,
    /// Opaque renderable mesh caught by the fallback tier.
    Auto,
}

/// Classify one mesh. `None` means the mesh does not collide.
pub fn classify(mesh: &SceneMesh) -> Option<ColliderKind> {
    if mesh.name.contains(COLLIDER_MARKER) {
        return Some(ColliderKind::Marker);
    }

    let lower = mesh.name.to_lowercase();
    if COLLIDER_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Some(ColliderKind::Keyword);
    }

    match (&mesh.geometry, &mesh.material) {
        (Some(_), Some(material)) if !material.is_translucent() => Some(ColliderKind::Auto),
        _ => None,
    }
}

/// Outcome of a collision-world build, for diagnostics.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Colliders registered.
    pub built: usize,
    /// Marker meshes hidden from rendering.
    pub hidden: usize,
    /// Names of meshes that matched a tier but violated the geometry
    /// precondition (logged and skipped).
    pub skipped: Vec<String>,
}

/// Build the collision world from the loaded scene.
///
/// Call once, after the model has finished loading and its world
/// transforms are valid. Marker meshes are hidden as a side effect.
pub fn build_collision_world(meshes: &mut [SceneMesh]) -> (CollisionWorld, BuildReport) {
    let mut world = CollisionWorld::new();
    let mut report = BuildReport::default();

    for mesh in meshes.iter_mut() {
        let Some(kind) = classify(mesh) else {
            continue;
        };

        if kind == ColliderKind::Marker {
            mesh.visible = false;
            report.hidden += 1;
        }

        match mesh.collider_obb() {
            Ok(obb) => {
                world.add(obb);
                report.built += 1;
            }
            Err(err) => {
                log::warn!("skipping collider mesh: {err}");
                report.skipped.push(mesh.name.clone());
            }
        }
    }

    log::info!(
        "collision world built: {} colliders ({} hidden, {} skipped)",
        report.built,
        report.hidden,
        report.skipped.len()
    );

    (world, report)
}

// ============================================================================
// Tests
// ============================================================================
