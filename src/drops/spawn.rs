//! Reaction to drop spawn/despawn notifications from the host.

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_log::{debug, info};

use super::controller::DropBuoyancy;
use super::registry::ActiveDrops;

/// Marker for airdropped containers this crate should watch.
///
/// The host tags the entity at spawn; everything else (controller, registry
/// membership, parachute shedding) follows from that.
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
pub struct SupplyDrop;

/// Host notification that the drop subsystem is shutting down.
///
/// Sending this tears down every remaining controller and empties the active
/// set, the same path taken on [`AppExit`].
#[derive(Event, Debug, Default)]
pub struct TeardownDrops;

/// Attach a buoyancy controller to every newly spawned drop.
///
/// Registration with [`ActiveDrops`] is deliberately NOT done here: drops
/// that never reach water (landing on an island, despawned mid-air) must not
/// appear in the active set.
pub fn watch_spawned_drops(
    mut commands: Commands,
    spawned: Query<Entity, (Added<SupplyDrop>, Without<DropBuoyancy>)>,
) {
    for drop in spawned.iter() {
        debug!("Watching drop {} for water contact", drop);
        commands.entity(drop).insert(DropBuoyancy::default());
    }
}

/// Release registry entries for drops the host has despawned.
///
/// The despawn is authoritative: no further host calls are made for the
/// entity, the membership just goes away.
pub fn release_despawned_drops(
    mut despawned: RemovedComponents<SupplyDrop>,
    mut registry: ResMut<ActiveDrops>,
) {
    for drop in despawned.read() {
        if registry.remove(drop) {
            log::debug!("Released despawned drop {} from the active set", drop);
        }
    }
}

/// Tear down the subsystem on shutdown.
///
/// Strips the controller from every still-live drop and empties the active
/// set. Members whose entities are already gone need no work at all, which is
/// the common case when the whole app is going down.
pub fn teardown_on_shutdown(
    mut commands: Commands,
    mut teardown: EventReader<TeardownDrops>,
    mut app_exit: EventReader<AppExit>,
    mut registry: ResMut<ActiveDrops>,
    controllers: Query<Entity, With<DropBuoyancy>>,
) {
    if teardown.is_empty() && app_exit.is_empty() {
        return;
    }
    teardown.clear();
    app_exit.clear();

    for drop in controllers.iter() {
        commands.entity(drop).remove::<DropBuoyancy>();
    }

    let released = registry.drain().count();
    if released > 0 {
        info!("Tore down {} drops still floating", released);
    }
}
