//! The first-person walk session.
//!
//! One session owns everything the simulation mutates: the collision
//! world, the player body, the movement state and the region table. A
//! tick runs to completion on the frame callback — horizontal resolution,
//! then vertical, then feedback reads — and nothing else ever writes the
//! authoritative eye position.

use glam::Vec3;

use campuswalk_physics::{
    Collider, CollisionWorld, MoveInput, MovementConfig, MovementResolver, MovementState, Obb,
    PlayerBody, TickEvents,
};

use crate::region::{RegionChange, RegionTable};

/// Everything a frame needs to know after one tick, read-only.
#[derive(Debug, Clone, Default)]
pub struct TickOutput {
    /// The resolved eye position to write to the camera.
    pub eye: Vec3,
    /// Whether the tick ended grounded.
    pub grounded: bool,
    /// A jump impulse fired this tick.
    pub jumped: bool,
    /// Horizontal movement was fully blocked this tick.
    pub blocked: bool,
    /// Downward speed at touchdown, on the landing tick only.
    pub landing_speed: Option<f32>,
    /// Area-name transition, if the matched region changed.
    pub region_change: Option<RegionChange>,
}

/// Explicit debug access to the collision registry.
///
/// External tooling gets this interface injected instead of reaching into
/// globals: adding and removing volumes, listing the registry, and
/// point-testing the world.
pub trait CollisionDebug {
    /// Register an extra collision volume. Returns its id.
    fn add_collider(&mut self, obb: Obb) -> u32;
    /// Remove the collider nearest to `point` within `epsilon`.
    fn remove_collider_near(&mut self, point: Vec3, epsilon: f32) -> Option<u32>;
    /// Empty the registry.
    fn clear_colliders(&mut self);
    /// The current registry contents.
    fn colliders(&self) -> &[Collider];
    /// Whether a world-space point is inside any collider.
    fn test_point(&self, point: Vec3) -> bool;
}

/// The active walkthrough session.
#[derive(Debug)]
pub struct WalkSession {
    resolver: MovementResolver,
    world: CollisionWorld,
    body: PlayerBody,
    state: MovementState,
    regions: RegionTable,
    active: bool,

    /// Show collider wireframes near the player.
    pub show_colliders: bool,
    /// Log blocked movement and landings.
    pub log_collisions: bool,
}

impl WalkSession {
    /// Create a session over a built collision world and region table.
    pub fn new(config: MovementConfig, world: CollisionWorld, regions: RegionTable) -> Self {
        let body = PlayerBody::new(config.body_metrics());
        Self {
            resolver: MovementResolver::new(config),
            world,
            body,
            state: MovementState::new(Vec3::ZERO),
            regions,
            active: false,
            show_colliders: false,
            log_collisions: false,
        }
    }

    /// Movement tuning in effect.
    pub fn config(&self) -> &MovementConfig {
        &self.resolver.config
    }

    /// The collision world (read access for overlays and diagnostics).
    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    /// The authoritative eye position.
    pub fn eye(&self) -> Vec3 {
        self.state.eye
    }

    /// Whether first-person mode is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The region table.
    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Enter first-person mode at the given eye position.
    ///
    /// The player body is constructed on the first entry only; the
    /// movement state resets on every entry.
    pub fn enter_first_person(&mut self, eye: Vec3) {
        self.body.init(eye);
        self.state.reset(eye);
        self.active = true;
        log::debug!("first-person session entered at {eye:?}");
    }

    /// Leave first-person mode. State is kept for inspection; re-entering
    /// resets it.
    pub fn exit_first_person(&mut self) {
        self.active = false;
    }

    /// Advance the simulation by one tick.
    ///
    /// `look_dir` is the camera's look direction this frame; `dt` the
    /// frame delta in seconds. While inactive this is a no-op that
    /// reports the current position.
    pub fn tick(&mut self, input: &MoveInput, look_dir: Vec3, dt: f32) -> TickOutput {
        if !self.active {
            return TickOutput {
                eye: self.state.eye,
                ..Default::default()
            };
        }

        let events: TickEvents =
            self.resolver
                .resolve(&mut self.state, &mut self.body, input, look_dir, &self.world, dt);

        if self.log_collisions {
            if events.blocked {
                log::info!("movement blocked at {:?}", self.state.eye);
            }
            if let Some(speed) = events.landing_speed {
                log::info!("landed at {:?} ({speed:.1} m/s)", self.state.eye);
            }
        }

        // Feedback reads run strictly after physics writes.
        let region_change = self.regions.update(self.state.eye);

        TickOutput {
            eye: self.state.eye,
            grounded: events.grounded,
            jumped: events.jumped,
            blocked: events.blocked,
            landing_speed: events.landing_speed,
            region_change,
        }
    }
}

impl CollisionDebug for WalkSession {
    fn add_collider(&mut self, obb: Obb) -> u32 {
        self.world.add(obb)
    }

    fn remove_collider_near(&mut self, point: Vec3, epsilon: f32) -> Option<u32> {
        self.world.remove_near(point, epsilon)
    }

    fn clear_colliders(&mut self) {
        self.world.clear();
    }

    fn colliders(&self) -> &[Collider] {
        self.world.colliders()
    }

    fn test_point(&self, point: Vec3) -> bool {
        self.world.contains_point(point)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;
    const LOOK: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    fn session() -> WalkSession {
        let regions = RegionTable::new(vec![Region::new(
            "Quad",
            Vec2::new(-100.0, -100.0),
            Vec2::new(100.0, -2.0),
        )]);
        WalkSession::new(MovementConfig::default(), CollisionWorld::new(), regions)
    }

    fn standing_eye(session: &WalkSession) -> Vec3 {
        let config = session.config();
        Vec3::new(0.0, config.ground_height + config.eye_height, 0.0)
    }

    #[test]
    fn test_tick_inactive_is_noop() {
        let mut session = session();
        let before = session.eye();

        let out = session.tick(&MoveInput::default(), LOOK, DT);
        assert_eq!(out.eye, before);
        assert!(!out.grounded);
    }

    #[test]
    fn test_enter_resets_state_but_not_body() {
        let mut session = session();
        session.enter_first_person(Vec3::new(0.0, 1.6, 0.0));
        assert!(session.is_active());

        // Walk away, leave, re-enter elsewhere.
        let input = MoveInput {
            forward: true,
            ..Default::default()
        };
        for _ in 0..30 {
            session.tick(&input, LOOK, DT);
        }
        session.exit_first_person();

        session.enter_first_person(Vec3::new(5.0, 1.6, 5.0));
        assert_eq!(session.eye(), Vec3::new(5.0, 1.6, 5.0));
    }

    #[test]
    fn test_tick_moves_and_reports_region_change() {
        let mut session = session();
        session.enter_first_person(standing_eye(&session));

        let input = MoveInput {
            forward: true,
            run: true,
            ..Default::default()
        };

        // Walking -Z crosses into the "Quad" region at z = -2.
        let mut entered = None;
        for _ in 0..120 {
            let out = session.tick(&input, LOOK, DT);
            if let Some(change) = out.region_change {
                entered = change.to;
                break;
            }
        }

        assert_eq!(entered, Some("Quad".to_string()));
        assert!(session.eye().z < -2.0 + 0.5);
    }

    #[test]
    fn test_debug_facade_roundtrip() {
        let mut session = session();

        let id = session.add_collider(Obb::axis_aligned(
            Vec3::new(3.0, 1.0, 0.0),
            Vec3::ONE,
        ));
        assert_eq!(session.colliders().len(), 1);
        assert!(session.test_point(Vec3::new(3.0, 1.0, 0.0)));
        assert!(!session.test_point(Vec3::new(8.0, 1.0, 0.0)));

        let removed = session.remove_collider_near(Vec3::new(3.0, 1.0, 0.0), 0.5);
        assert_eq!(removed, Some(id));
        assert!(session.colliders().is_empty());

        session.add_collider(Obb::axis_aligned(Vec3::ZERO, Vec3::ONE));
        session.add_collider(Obb::axis_aligned(Vec3::new(4.0, 0.0, 0.0), Vec3::ONE));
        session.clear_colliders();
        assert!(session.colliders().is_empty());
    }

    #[test]
    fn test_debug_collider_blocks_movement() {
        let mut session = session();
        session.enter_first_person(standing_eye(&session));

        // Drop a wall right in front of the player via the facade.
        session.add_collider(Obb::axis_aligned(
            Vec3::new(0.0, 1.5, -1.0),
            Vec3::new(50.0, 1.5, 0.25),
        ));

        let input = MoveInput {
            forward: true,
            ..Default::default()
        };
        for _ in 0..120 {
            session.tick(&input, LOOK, DT);
        }

        // Stopped at the wall instead of passing through.
        assert!(session.eye().z > -1.0, "z={}", session.eye().z);
    }
}
