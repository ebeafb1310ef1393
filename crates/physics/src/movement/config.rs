//! Movement configuration.
//!
//! One struct parameterizes every scene variant of the walkthrough —
//! speeds, player dimensions, gravity, jump and bunny-hop tuning — instead
//! of each scene carrying its own copy of the constants.

use serde::{Deserialize, Serialize};

use crate::collision::BodyMetrics;

/// Configuration for first-person movement physics.
///
/// All values are metric (meters, seconds) unless noted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    // ========================================================================
    // Player Dimensions
    // ========================================================================
    /// Horizontal collision radius (meters).
    pub player_radius: f32,

    /// Body height, feet to crown (meters).
    pub player_height: f32,

    /// Eye height above the feet (meters).
    pub eye_height: f32,

    // ========================================================================
    // Speeds
    // ========================================================================
    /// Base walking speed (meters/second).
    pub walk_speed: f32,

    /// Running speed (meters/second).
    pub run_speed: f32,

    // ========================================================================
    // Gravity and Jumping
    // ========================================================================
    /// Gravity magnitude (meters/second^2), applied downward.
    pub gravity: f32,

    /// Upward velocity applied by a jump (meters/second).
    pub jump_strength: f32,

    /// Upward velocity applied by the fly escape input (meters/second).
    pub fly_velocity: f32,

    /// Bunny-hop multiplier growth per running jump (> 1).
    pub hop_factor: f32,

    /// Bunny-hop multiplier cap.
    pub hop_max: f32,

    // ========================================================================
    // Vertical Resolution
    // ========================================================================
    /// World Y of the absolute fallback ground plane. Enforced even where
    /// collision geometry has gaps, so the player can never fall through
    /// the world.
    pub ground_height: f32,

    /// How far the camera drops below normal eye height while crouching.
    pub crouch_drop: f32,

    /// Clearance kept between the crown and a ceiling (meters).
    pub head_clearance: f32,

    /// Stand-off added above a floor surface when clamping onto it.
    pub stand_off: f32,

    // ========================================================================
    // Feedback
    // ========================================================================
    /// Downward speed at touchdown above which the landing camera shake
    /// fires (meters/second).
    pub landing_shake_speed: f32,

    /// Radius of the proximity collider debug overlay (meters).
    pub debug_radius: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            player_radius: 0.4,
            player_height: 1.8,
            eye_height: 1.6,

            walk_speed: 4.0,
            run_speed: 8.0,

            gravity: 18.0,
            jump_strength: 7.0,
            fly_velocity: 12.0,
            hop_factor: 1.12,
            hop_max: 1.8,

            ground_height: 0.0,
            crouch_drop: 0.6,
            head_clearance: 0.15,
            stand_off: 0.02,

            landing_shake_speed: 6.0,
            debug_radius: 25.0,
        }
    }
}

impl MovementConfig {
    /// Tuning used by the campus walkthrough scenes: a slightly floatier
    /// jump and a wider debug radius for the large outdoor model.
    pub fn campus() -> Self {
        Self {
            walk_speed: 4.5,
            run_speed: 9.0,
            jump_strength: 7.5,
            debug_radius: 35.0,
            ..Default::default()
        }
    }

    /// The player dimensions as collision-body metrics.
    pub fn body_metrics(&self) -> BodyMetrics {
        BodyMetrics {
            radius: self.player_radius,
            height: self.player_height,
            eye_height: self.eye_height,
        }
    }

    /// Base speed for the current run flag, before bunny-hop scaling.
    pub fn base_speed(&self, running: bool) -> f32 {
        if running {
            self.run_speed
        } else {
            self.walk_speed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_sane() {
        let config = MovementConfig::default();
        assert!(config.walk_speed > 0.0);
        assert!(config.run_speed > config.walk_speed);
        assert!(config.gravity > 0.0);
        assert!(config.hop_factor > 1.0);
        assert!(config.hop_max >= config.hop_factor);
        assert!(config.eye_height < config.player_height);
    }

    #[test]
    fn test_base_speed() {
        let config = MovementConfig::default();
        assert_eq!(config.base_speed(false), config.walk_speed);
        assert_eq!(config.base_speed(true), config.run_speed);
    }

    #[test]
    fn test_body_metrics() {
        let config = MovementConfig::default();
        let metrics = config.body_metrics();
        assert_eq!(metrics.radius, config.player_radius);
        assert_eq!(metrics.height, config.player_height);
        assert_eq!(metrics.eye_height, config.eye_height);
    }
}
