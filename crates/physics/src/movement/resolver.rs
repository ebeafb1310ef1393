//! Per-tick movement resolution.
//!
//! The resolver turns directional intent plus the camera facing into a
//! resolved eye position, testing candidate positions against the
//! collision world. Horizontal motion slides: blocked full displacement
//! falls back to axis-only moves, then to progressively scaled retries,
//! and finally freezes in place. Vertical motion integrates gravity and
//! clamps against ceiling/floor probes plus an absolute fallback ground
//! plane. Nothing in here panics; every blocked branch has a defined
//! fallback.

use glam::Vec3;

use crate::collision::{CollisionWorld, PlayerBody};

use super::config::MovementConfig;
use super::state::{MoveInput, MovementState};

/// Scale factors tried, in order, when neither the full displacement nor
/// an axis-only displacement is collision-free.
const SLIDE_SCALES: [f32; 4] = [0.8, 0.6, 0.4, 0.2];

/// Upper bound on a single tick's delta time. A hitched frame integrates
/// as several short steps' worth of gravity at most, instead of one huge
/// displacement that could tunnel.
const MAX_DELTA_TIME: f32 = 0.1;

/// Read-only feedback signals produced by one resolved tick.
///
/// The feedback layer (shake, overlay, prompts) consumes these; it never
/// touches the authoritative state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    /// Downward speed at touchdown, present only on the airborne-to-
    /// grounded transition.
    pub landing_speed: Option<f32>,
    /// Horizontal movement was requested but every slide fallback failed;
    /// the player did not move this tick.
    pub blocked: bool,
    /// A jump impulse was applied this tick.
    pub jumped: bool,
    /// The tick ended standing on a floor or the fallback ground plane.
    pub grounded: bool,
}

/// Resolves desired movement against the collision world.
#[derive(Debug, Clone)]
pub struct MovementResolver {
    /// Movement tuning shared by the whole session.
    pub config: MovementConfig,
}

impl MovementResolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    /// Advance the movement state by one tick.
    ///
    /// `look_dir` is the camera's current look direction; only its
    /// flattened horizontal component steers movement. Resolution order is
    /// fixed: horizontal sliding, then vertical integration and clamping,
    /// then jump, then the fly escape. The player body is recomputed from
    /// the resolved eye position before returning.
    pub fn resolve(
        &self,
        state: &mut MovementState,
        body: &mut PlayerBody,
        input: &MoveInput,
        look_dir: Vec3,
        world: &CollisionWorld,
        dt: f32,
    ) -> TickEvents {
        let dt = dt.min(MAX_DELTA_TIME);
        let mut events = TickEvents::default();

        self.resolve_horizontal(state, body, input, look_dir, world, dt, &mut events);
        self.resolve_vertical(state, body, input, world, dt, &mut events);
        self.resolve_jump(state, body, input, world, &mut events);

        if input.fly {
            // Escape hatch: straight up, and jumping stays available.
            state.vertical_velocity = self.config.fly_velocity;
            state.can_jump = true;
            state.grounded = false;
        }

        events.grounded = state.grounded;
        body.update(state.eye);
        events
    }

    // ========================================================================
    // Horizontal Resolution
    // ========================================================================

    fn resolve_horizontal(
        &self,
        state: &mut MovementState,
        body: &PlayerBody,
        input: &MoveInput,
        look_dir: Vec3,
        world: &CollisionWorld,
        dt: f32,
        events: &mut TickEvents,
    ) {
        let dir = input.direction();
        if dir == glam::Vec2::ZERO {
            return;
        }

        let forward = Vec3::new(look_dir.x, 0.0, look_dir.z).normalize_or_zero();
        if forward == Vec3::ZERO {
            // Looking straight up or down: no horizontal reference frame.
            return;
        }
        let right = forward.cross(Vec3::Y).normalize();

        let speed = self.config.base_speed(input.run) * state.hop.multiplier();
        let step = forward * (-dir.y * speed * dt) + right * (dir.x * speed * dt);

        let delta = Vec3::new(step.x, 0.0, step.z);
        if delta == Vec3::ZERO {
            return;
        }

        match self.slide(state.eye, delta, body, world) {
            Some(resolved) => state.eye = resolved,
            None => {
                events.blocked = true;
                log::debug!("horizontal movement blocked at {:?}", state.eye);
            }
        }
    }

    /// Find a collision-free candidate for a horizontal displacement:
    /// the full delta, then X-only, then Z-only, then the same trio at
    /// each reduced scale. `None` means the player stays put this tick.
    fn slide(
        &self,
        eye: Vec3,
        delta: Vec3,
        body: &PlayerBody,
        world: &CollisionWorld,
    ) -> Option<Vec3> {
        let clear = |candidate: Vec3| match body.volume_at(candidate) {
            Some(probe) => !world.intersects_any(&probe),
            // Before first-person init every query is "no collision".
            None => true,
        };

        let full = eye + delta;
        if clear(full) {
            return Some(full);
        }

        let x_only = eye + Vec3::new(delta.x, 0.0, 0.0);
        if delta.x != 0.0 && clear(x_only) {
            return Some(x_only);
        }
        let z_only = eye + Vec3::new(0.0, 0.0, delta.z);
        if delta.z != 0.0 && clear(z_only) {
            return Some(z_only);
        }

        for scale in SLIDE_SCALES {
            let scaled = delta * scale;

            let full = eye + scaled;
            if clear(full) {
                return Some(full);
            }
            let x_only = eye + Vec3::new(scaled.x, 0.0, 0.0);
            if scaled.x != 0.0 && clear(x_only) {
                return Some(x_only);
            }
            let z_only = eye + Vec3::new(0.0, 0.0, scaled.z);
            if scaled.z != 0.0 && clear(z_only) {
                return Some(z_only);
            }
        }

        None
    }

    // ========================================================================
    // Vertical Resolution
    // ========================================================================

    fn resolve_vertical(
        &self,
        state: &mut MovementState,
        body: &PlayerBody,
        input: &MoveInput,
        world: &CollisionWorld,
        dt: f32,
        events: &mut TickEvents,
    ) {
        let was_grounded = state.grounded;

        state.vertical_velocity -= self.config.gravity * dt;
        let next_y = state.eye.y + state.vertical_velocity * dt;
        let candidate = Vec3::new(state.eye.x, next_y, state.eye.z);

        let metrics = body.metrics();
        let mut grounded = false;

        if state.vertical_velocity > 0.0 {
            // Ascending: probe a thin volume at head height.
            let ceiling = body
                .head_probe(candidate, self.config.head_clearance)
                .and_then(|probe| {
                    world
                        .intersecting(&probe)
                        .map(|c| c.obb.vertical_reach().0)
                        .min_by(f32::total_cmp)
                });

            match ceiling {
                Some(ceiling_bottom) => {
                    // Stop just below the lowest intersecting ceiling.
                    state.vertical_velocity = 0.0;
                    state.eye.y = ceiling_bottom
                        - metrics.height
                        - self.config.head_clearance
                        + metrics.eye_height;
                }
                None => state.eye.y = next_y,
            }
        } else {
            // Falling or stationary: probe at foot height.
            let floor = body.foot_probe(candidate).and_then(|probe| {
                world
                    .intersecting(&probe)
                    .map(|c| c.obb.vertical_reach().1)
                    .max_by(f32::total_cmp)
            });

            match floor {
                Some(floor_top) => {
                    let impact = -state.vertical_velocity;
                    state.vertical_velocity = 0.0;
                    state.can_jump = true;
                    state.eye.y = floor_top + metrics.eye_height + self.config.stand_off;
                    grounded = true;

                    if !was_grounded {
                        events.landing_speed = Some(impact);
                        state.hop.on_land(input.any_direction());
                    }
                }
                None => state.eye.y = next_y,
            }
        }

        // Absolute ground plane, enforced independently of mesh collisions
        // so a gap in collision geometry can never swallow the player.
        let crouch_drop = if input.crouch { self.config.crouch_drop } else { 0.0 };
        let min_eye = self.config.ground_height + metrics.eye_height - crouch_drop;
        if state.eye.y < min_eye {
            let impact = (-state.vertical_velocity).max(0.0);
            state.eye.y = min_eye;
            state.vertical_velocity = 0.0;
            state.can_jump = true;
            grounded = true;

            if !was_grounded {
                events.landing_speed = Some(impact);
                state.hop.on_land(input.any_direction());
            }
        }

        state.grounded = grounded;
    }

    // ========================================================================
    // Jump
    // ========================================================================

    fn resolve_jump(
        &self,
        state: &mut MovementState,
        body: &PlayerBody,
        input: &MoveInput,
        world: &CollisionWorld,
        events: &mut TickEvents,
    ) {
        // The edge detector must see the flag every tick, held or not.
        let edge = state.hop.jump_edge(input.jump);
        if !edge || !state.can_jump {
            return;
        }

        // Require headroom at the apex the jump would reach.
        let rise = self.config.jump_strength * self.config.jump_strength
            / (2.0 * self.config.gravity);
        let apex = state.eye + Vec3::new(0.0, rise, 0.0);
        let head_blocked = body
            .head_probe(apex, self.config.head_clearance)
            .is_some_and(|probe| world.intersects_any(&probe));
        if head_blocked {
            return;
        }

        state.vertical_velocity = self.config.jump_strength;
        state.can_jump = false;
        state.grounded = false;
        events.jumped = true;

        if input.run {
            state
                .hop
                .boost(self.config.hop_factor, self.config.hop_max);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
