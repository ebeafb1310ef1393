//! Campuswalk Game
//!
//! The glue between the asset-loading/rendering collaborators and the
//! physics core:
//!
//! - Scene-mesh data contract and collider classification
//! - Named-region table for area prompts
//! - Input intent collection (handlers set flags, the tick consumes them)
//! - The walk session: per-tick orchestration and the collision debug
//!   facade
//!
//! ```text
//! input flags ──► WalkSession::tick ──► resolved eye ──► camera
//!                     │                        │
//!                     ▼                        ▼
//!               CollisionWorld          feedback (read-only):
//!               (built once from        shake, overlay, prompts
//!                classified meshes)
//! ```

pub mod classify;
pub mod input;
pub mod region;
pub mod scene;
pub mod session;

pub use classify::{build_collision_world, classify, BuildReport, ColliderKind};
pub use input::InputState;
pub use region::{Region, RegionChange, RegionTable};
pub use scene::{box_positions, MaterialInfo, MeshError, MeshGeometry, SceneMesh};
pub use session::{CollisionDebug, TickOutput, WalkSession};

// Re-export physics types for convenience
pub use campuswalk_physics::{
    CollisionWorld, MoveInput, MovementConfig, MovementResolver, MovementState, Obb, PlayerBody,
};
