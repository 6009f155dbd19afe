//! Bevy wiring for the drop buoyancy subsystem.

use std::marker::PhantomData;

use bevy::prelude::*;
use bevy_log::{debug, info};
use bevy_rapier3d::prelude::*;

use crate::sets::SplashdownSet;
use crate::water::{FlatWaterSurface, WaterSurface};

use super::config::BuoyancyConfig;
use super::controller::{DropBuoyancy, DropState};
use super::parachute::{detach_parachute, Parachute};
use super::registry::ActiveDrops;
use super::spawn::{
    release_despawned_drops, teardown_on_shutdown, watch_spawned_drops, SupplyDrop, TeardownDrops,
};

/// Plugin that keeps airdropped containers floating once they touch water.
///
/// Generic over the water provider so hosts can plug in their own surface
/// model; [`FlatWaterSurface`] is the default. Runs on the fixed simulation
/// tick, one drop at a time.
pub struct SplashdownPlugin<W = FlatWaterSurface> {
    _water: PhantomData<W>,
}

impl<W> Default for SplashdownPlugin<W> {
    fn default() -> Self {
        Self {
            _water: PhantomData,
        }
    }
}

impl<W: WaterSurface + Resource + FromWorld> Plugin for SplashdownPlugin<W> {
    fn build(&self, app: &mut App) {
        app.init_resource::<BuoyancyConfig>()
            .init_resource::<ActiveDrops>()
            .init_resource::<W>()
            .register_type::<BuoyancyConfig>()
            .add_event::<TeardownDrops>()
            .configure_sets(
                FixedUpdate,
                (
                    SplashdownSet::Watch,
                    SplashdownSet::Advance,
                    SplashdownSet::Cleanup,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    watch_spawned_drops.in_set(SplashdownSet::Watch),
                    advance_drops::<W>.in_set(SplashdownSet::Advance),
                    release_despawned_drops.in_set(SplashdownSet::Cleanup),
                ),
            )
            .add_systems(Last, teardown_on_shutdown);
    }
}

/// Advance every tracked drop by one fixed tick.
///
/// Airborne drops cost one water query and nothing else. On the contact tick
/// the drop joins the active set, sheds its parachute, and gets its in-water
/// drag; from then on the controller's impulse and velocity shaping are
/// written back to the Rapier body.
#[allow(clippy::too_many_arguments)]
pub fn advance_drops<W: WaterSurface + Resource>(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    config: Res<BuoyancyConfig>,
    water: Res<W>,
    mut registry: ResMut<ActiveDrops>,
    mut drops: Query<
        (
            Entity,
            &Transform,
            &mut Velocity,
            &mut ExternalImpulse,
            &mut Damping,
            &ReadMassProperties,
            &mut DropBuoyancy,
        ),
        With<SupplyDrop>,
    >,
    children: Query<&Children>,
    parachutes: Query<(), With<Parachute>>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (drop, transform, mut velocity, mut impulse, mut damping, mass, mut buoyancy) in
        drops.iter_mut()
    {
        let position = transform.translation;
        let surface = water.surface_height(position);

        let mut linvel = velocity.linvel;
        let out = buoyancy.advance(
            &config,
            dt,
            surface,
            position,
            &mut linvel,
            mass.get().mass,
        );

        if out.contacted {
            registry.add(drop);
            let shed = detach_parachute(&mut commands, drop, &children, &parachutes);
            info!(
                "Drop {} touched water at y = {:.2} (parachute shed: {})",
                drop, position.y, shed
            );

            damping.linear_damping = config.water_linear_damping;
            damping.angular_damping = config.water_angular_damping;
            if config.lock_rotation {
                commands.entity(drop).insert(LockedAxes::ROTATION_LOCKED);
            }
        }

        if buoyancy.state() == DropState::Settling {
            debug!("Drop {} landed, settling toward float height", drop);
        }

        if out.impulse != Vec3::ZERO {
            impulse.impulse += out.impulse;
        }
        if linvel != velocity.linvel {
            velocity.linvel = linvel;
        }
    }
}
