//! Scene-mesh data contract.
//!
//! The asset loader hands the collision build a flat list of meshes, each
//! with a name, optional geometry, optional material and a decomposed
//! world transform. This crate never parses model files; it consumes this
//! contract after the loader guarantees the world transforms are valid
//! (one frame after load completes).

use std::sync::OnceLock;

use glam::{Quat, Vec3};
use thiserror::Error;

use campuswalk_physics::Obb;

/// Violations of the mesh input contract.
///
/// These are never fatal: the collision build logs the offending mesh and
/// skips it rather than aborting the whole registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// A mesh flagged for collision carries no geometry at all.
    #[error("mesh {0:?} has no geometry")]
    MissingGeometry(String),

    /// A mesh's geometry has no vertices, so no bounds exist.
    #[error("mesh {0:?} has empty geometry")]
    EmptyGeometry(String),
}

/// Local-space axis-aligned bounds of a mesh's geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalBounds {
    pub min: Vec3,
    pub max: Vec3,
}

/// Mesh vertex data with lazily computed, cached local bounds.
#[derive(Debug)]
pub struct MeshGeometry {
    positions: Vec<[f32; 3]>,
    bounds: OnceLock<Option<LocalBounds>>,
}

impl MeshGeometry {
    /// Wrap a vertex position buffer.
    pub fn new(positions: Vec<[f32; 3]>) -> Self {
        Self {
            positions,
            bounds: OnceLock::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// The local bounding box, computed on first use and cached.
    /// `None` when the geometry has no vertices.
    pub fn local_bounds(&self) -> Option<LocalBounds> {
        *self.bounds.get_or_init(|| {
            let first = self.positions.first()?;
            let mut min = Vec3::from_array(*first);
            let mut max = min;
            for p in &self.positions[1..] {
                let v = Vec3::from_array(*p);
                min = min.min(v);
                max = max.max(v);
            }
            Some(LocalBounds { min, max })
        })
    }
}

/// Material facts the collision build cares about.
#[derive(Debug, Clone, Copy)]
pub struct MaterialInfo {
    /// The material is flagged transparent.
    pub transparent: bool,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl MaterialInfo {
    /// A plain opaque material.
    pub fn opaque() -> Self {
        Self {
            transparent: false,
            opacity: 1.0,
        }
    }

    /// Glass, foliage cards, and other see-through surfaces.
    pub fn is_translucent(&self) -> bool {
        self.transparent || self.opacity < 1.0
    }
}

/// One mesh from the loaded scene, as delivered by the asset loader.
#[derive(Debug)]
pub struct SceneMesh {
    /// Node name from the model file. Drives collider classification.
    pub name: String,
    /// Vertex data; absent on empty/utility nodes.
    pub geometry: Option<MeshGeometry>,
    /// Render material; absent on non-rendered nodes.
    pub material: Option<MaterialInfo>,
    /// World translation.
    pub translation: Vec3,
    /// World rotation.
    pub rotation: Quat,
    /// World scale.
    pub scale: Vec3,
    /// Whether the mesh is rendered. Marker colliders get hidden.
    pub visible: bool,
}

impl SceneMesh {
    /// A mesh with geometry and an opaque material at the identity
    /// transform; adjust fields after construction.
    pub fn new(name: &str, positions: Vec<[f32; 3]>) -> Self {
        Self {
            name: name.to_string(),
            geometry: Some(MeshGeometry::new(positions)),
            material: Some(MaterialInfo::opaque()),
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            visible: true,
        }
    }

    /// Build this mesh's world-space collision volume.
    ///
    /// Fails (softly — callers log and skip) when the mesh violates the
    /// geometry precondition.
    pub fn collider_obb(&self) -> Result<Obb, MeshError> {
        let geometry = self
            .geometry
            .as_ref()
            .ok_or_else(|| MeshError::MissingGeometry(self.name.clone()))?;
        let bounds = geometry
            .local_bounds()
            .ok_or_else(|| MeshError::EmptyGeometry(self.name.clone()))?;

        Ok(Obb::from_local_bounds(
            bounds.min,
            bounds.max,
            self.translation,
            self.rotation,
            self.scale,
        ))
    }
}

/// Vertex buffer for a unit-ish box, handy for synthetic scenes and tests.
pub fn box_positions(half: Vec3) -> Vec<[f32; 3]> {
    let mut positions = Vec::with_capacity(8);
    for &x in &[-half.x, half.x] {
        for &y in &[-half.y, half.y] {
            for &z in &[-half.z, half.z] {
                positions.push([x, y, z]);
            }
        }
    }
    positions
}

// ============================================================================
// Tests
// ============================================================================
