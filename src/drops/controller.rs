//! Per-drop water interaction: state machine and force model.
//!
//! The controller is pure data-in, data-out: it reads the sampled surface
//! height and the body's kinematics, mutates the velocity it is handed, and
//! reports the impulse the host should apply. Everything entity-shaped stays
//! in [`super::plugin`], which keeps this logic testable without an app.

use bevy::math::Vec3;
use bevy::prelude::*;

use super::config::BuoyancyConfig;

/// Water-interaction phase of a tracked drop.
///
/// Progression is monotonic: a drop never returns to an earlier phase, even
/// if something later lifts it above the surface line. Re-entering `Airborne`
/// would make the parachute/registry bookkeeping flicker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect)]
pub enum DropState {
    /// Falling under host gravity, no water contact yet.
    #[default]
    Airborne,
    /// Crossed the surface line but still splashing down too fast to float.
    Touching,
    /// Landing detected; floating treatment starts this tick.
    Settling,
    /// Bobbing around the resting height under the damped restoring force.
    Floating,
}

/// What one controller tick asks the host to do.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepOutput {
    /// Impulse to apply to the rigid body this tick.
    pub impulse: Vec3,
    /// The drop crossed the surface line this tick. The caller must register
    /// it with the active set and shed the parachute, exactly once.
    pub contacted: bool,
}

/// Controller component driving one drop from first water contact to a
/// stable float.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
pub struct DropBuoyancy {
    state: DropState,
}

impl DropBuoyancy {
    /// Current phase of the drop.
    pub fn state(&self) -> DropState {
        self.state
    }

    /// Whether the drop has touched water at some point of its lifetime.
    pub fn in_water(&self) -> bool {
        self.state != DropState::Airborne
    }

    /// Advance the state machine by one fixed tick.
    ///
    /// `surface` is the local water-surface height, `None` when the position
    /// does not intersect any water volume. While airborne with no valid
    /// water below, this is a no-op; after contact the restoring force only
    /// kicks in once the splash has slowed below the landing threshold, so
    /// the controller never fights the initial impact.
    pub fn advance(
        &mut self,
        config: &BuoyancyConfig,
        dt: f32,
        surface: Option<f32>,
        position: Vec3,
        velocity: &mut Vec3,
        mass: f32,
    ) -> StepOutput {
        let mut out = StepOutput::default();

        if self.state == DropState::Airborne {
            match surface {
                Some(level) if position.y <= level => {
                    self.state = DropState::Touching;
                    out.contacted = true;
                }
                _ => return out,
            }
        }

        // Wet from here on. A failed query means the drop drifted out of the
        // water volume; leave it to the host for this tick.
        let Some(level) = surface else {
            return out;
        };

        match self.state {
            DropState::Touching => {
                if velocity.y.abs() >= config.landing_threshold {
                    // Still splashing down under host gravity.
                    return out;
                }
                self.state = DropState::Settling;
            }
            DropState::Settling => self.state = DropState::Floating,
            _ => {}
        }

        let target_y = level + config.float_height;
        let displacement = target_y - position.y;
        out.impulse.y = displacement * config.gravity * mass * (dt / config.smooth_time);

        *velocity *= config.velocity_damping;
        velocity.y = velocity
            .y
            .clamp(-config.max_vertical_speed, config.max_vertical_speed);

        out
    }
}
