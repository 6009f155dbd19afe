//! Parachute detachment.

use bevy::prelude::*;
use bevy_log::debug;

/// Marker for the parachute accessory spawned as a child of a drop.
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
pub struct Parachute;

/// Despawn the parachute hanging under `drop`, if any.
///
/// A plain despawn, nothing else: removal must not ripple into game logic the
/// way a scripted destruction would. Missing parachutes are the normal case
/// (already shed, or the drop never had one) and leave the world untouched.
/// Returns whether a parachute was removed.
pub fn detach_parachute(
    commands: &mut Commands,
    drop: Entity,
    children: &Query<&Children>,
    parachutes: &Query<(), With<Parachute>>,
) -> bool {
    let mut detached = false;
    for child in children.iter_descendants(drop) {
        if parachutes.contains(child) {
            commands.entity(child).despawn();
            debug!("Detached parachute {} from drop {}", child, drop);
            detached = true;
        }
    }
    detached
}
