//! Bookkeeping for drops currently in the water.

use std::collections::HashSet;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

/// The set of drops that have touched water and are under buoyancy control.
///
/// Membership starts at first water contact, not at spawn: a drop that lands
/// on dry ground never shows up here. Entries are released when the host
/// despawns the drop and in bulk at subsystem teardown. Members may point at
/// entities the host has already despawned; that is the common case during
/// teardown, not an error.
#[derive(Resource, Debug, Default)]
pub struct ActiveDrops {
    drops: HashSet<Entity>,
}

impl ActiveDrops {
    /// Insert a drop into the active set. Re-adding is a no-op.
    /// Returns whether the drop was newly inserted.
    pub fn add(&mut self, drop: Entity) -> bool {
        self.drops.insert(drop)
    }

    /// Remove a drop if present. Returns whether it was a member.
    pub fn remove(&mut self, drop: Entity) -> bool {
        self.drops.remove(&drop)
    }

    pub fn contains(&self, drop: Entity) -> bool {
        self.drops.contains(&drop)
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.drops.iter().copied()
    }

    /// Empty the set, yielding every former member.
    pub fn drain(&mut self) -> impl Iterator<Item = Entity> + '_ {
        self.drops.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut registry = ActiveDrops::default();
        let drop = Entity::from_raw(1);

        assert!(registry.add(drop));
        assert!(!registry.add(drop));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(drop));
    }

    #[test]
    fn test_remove_missing_is_a_noop() {
        let mut registry = ActiveDrops::default();
        assert!(!registry.remove(Entity::from_raw(7)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_drain_empties_the_set() {
        let mut registry = ActiveDrops::default();
        for index in 0..3 {
            registry.add(Entity::from_raw(index));
        }

        assert_eq!(registry.drain().count(), 3);
        assert!(registry.is_empty());
    }
}
