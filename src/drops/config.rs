//! Buoyancy tuning.
//!
//! The literal values encode feel, not correctness: they were tuned against
//! crates splashing down from high altitude and are exposed as a resource so
//! hosts can re-tune them without touching the controller.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Default buoyancy tuning values.
pub mod constants {
    /// Target clearance above the water surface at rest (world units).
    ///
    /// The portion of the container that should sit above the waterline.
    pub const FLOAT_HEIGHT: f32 = 0.1;

    /// Vertical-speed magnitude below which a drop counts as landed (units/s).
    ///
    /// Until the splash has slowed to this, no restoring force is applied.
    pub const LANDING_THRESHOLD: f32 = 0.1;

    /// Smoothing time constant for the restoring impulse (seconds).
    ///
    /// Larger values settle more slowly but overshoot less.
    pub const SMOOTH_TIME: f32 = 0.5;

    /// Gravity acceleration used to scale the restoring impulse (units/s²).
    pub const GRAVITY: f32 = 9.81;

    /// Per-tick velocity retention factor while floating.
    pub const VELOCITY_DAMPING: f32 = 0.98;

    /// Vertical speed clamp while floating (units/s).
    pub const MAX_VERTICAL_SPEED: f32 = 1.0;

    /// Rigid-body linear damping applied once the drop is in water.
    pub const WATER_LINEAR_DAMPING: f32 = 1.0;

    /// Rigid-body angular damping applied once the drop is in water.
    pub const WATER_ANGULAR_DAMPING: f32 = 0.5;
}

/// Runtime buoyancy configuration resource.
#[derive(Resource, Clone, Copy, Debug, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct BuoyancyConfig {
    /// Target clearance above the surface at rest.
    pub float_height: f32,

    /// Vertical-speed magnitude below which a drop counts as landed.
    pub landing_threshold: f32,

    /// Smoothing time constant for the restoring impulse.
    pub smooth_time: f32,

    /// Gravity acceleration used to scale the restoring impulse.
    pub gravity: f32,

    /// Per-tick velocity retention factor while floating.
    pub velocity_damping: f32,

    /// Vertical speed clamp while floating.
    pub max_vertical_speed: f32,

    /// Linear damping applied to the rigid body once in water.
    pub water_linear_damping: f32,

    /// Angular damping applied to the rigid body once in water.
    pub water_angular_damping: f32,

    /// Freeze rotation once in water so the container does not tumble.
    pub lock_rotation: bool,
}

impl Default for BuoyancyConfig {
    fn default() -> Self {
        Self {
            float_height: constants::FLOAT_HEIGHT,
            landing_threshold: constants::LANDING_THRESHOLD,
            smooth_time: constants::SMOOTH_TIME,
            gravity: constants::GRAVITY,
            velocity_damping: constants::VELOCITY_DAMPING,
            max_vertical_speed: constants::MAX_VERTICAL_SPEED,
            water_linear_damping: constants::WATER_LINEAR_DAMPING,
            water_angular_damping: constants::WATER_ANGULAR_DAMPING,
            lock_rotation: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_constants() {
        let config = BuoyancyConfig::default();
        assert_eq!(config.float_height, constants::FLOAT_HEIGHT);
        assert_eq!(config.landing_threshold, constants::LANDING_THRESHOLD);
        assert_eq!(config.smooth_time, constants::SMOOTH_TIME);
        assert_eq!(config.gravity, constants::GRAVITY);
        assert!(config.lock_rotation);
    }
}
