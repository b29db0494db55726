//! Ownership and bulk management of live gameplay entities.
//!
//! The Bevy `World` owns every entity; membership in the logical sets is
//! expressed with marker components:
//!
//! | Set | Membership |
//! |-----|------------|
//! | `All` | every entity spawned through [`EntityRegistry::add`] ([`GameEntity`]) |
//! | `Meteors` | entities carrying [`Meteor`] |
//! | `Lasers` | entities carrying [`Laser`] |
//!
//! Player and explosion effects are in `All` only.  All structural changes go
//! through `Commands`, so removals requested while a system is still scanning
//! a query take effect at the next sync point and never disturb the scan.

use crate::meteor::Meteor;
use crate::player::Laser;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

/// Marker for every entity owned by the gameplay registry.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct GameEntity;

/// Logical entity sets used for targeted queries and bulk clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntitySet {
    All,
    Meteors,
    Lasers,
}

/// System parameter bundling the registry operations.
#[derive(SystemParam)]
pub struct EntityRegistry<'w, 's> {
    commands: Commands<'w, 's>,
    all: Query<'w, 's, Entity, With<GameEntity>>,
    meteors: Query<'w, 's, Entity, With<Meteor>>,
    lasers: Query<'w, 's, Entity, With<Laser>>,
}

impl EntityRegistry<'_, '_> {
    /// Spawn `bundle` into `All`; the typed set follows from the bundle's
    /// marker component.
    pub fn add<B: Bundle>(&mut self, bundle: B) -> Entity {
        self.commands.spawn((GameEntity, bundle)).id()
    }

    /// Despawn `entity`.  Removing an entity twice, or one that is already
    /// gone, is a no-op.
    pub fn remove(&mut self, entity: Entity) {
        if let Ok(mut entity_commands) = self.commands.get_entity(entity) {
            entity_commands.try_despawn();
        }
    }

    /// Despawn every member of `set`.
    pub fn clear(&mut self, set: EntitySet) {
        let members: Vec<Entity> = match set {
            EntitySet::All => self.all.iter().collect(),
            EntitySet::Meteors => self.meteors.iter().collect(),
            EntitySet::Lasers => self.lasers.iter().collect(),
        };
        for entity in members {
            self.remove(entity);
        }
    }

    /// Number of live members of `set` as of the last sync point.
    pub fn len(&self, set: EntitySet) -> usize {
        match set {
            EntitySet::All => self.all.iter().count(),
            EntitySet::Meteors => self.meteors.iter().count(),
            EntitySet::Lasers => self.lasers.iter().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meteor::MeteorMotion;
    use bevy::ecs::system::RunSystemOnce;

    fn laser() -> Laser {
        Laser {
            nominal_speed: 500.0,
        }
    }

    fn meteor() -> Meteor {
        Meteor::new(MeteorMotion {
            direction: Vec2::new(0.0, -1.0),
            speed: 400.0,
            spin_deg: 40.0,
        })
    }

    /// `(All, Meteors, Lasers)` sizes.
    fn sizes(world: &mut World) -> (usize, usize, usize) {
        world
            .run_system_once(|registry: EntityRegistry| {
                (
                    registry.len(EntitySet::All),
                    registry.len(EntitySet::Meteors),
                    registry.len(EntitySet::Lasers),
                )
            })
            .unwrap()
    }

    #[test]
    fn typed_sets_are_subsets_of_all() {
        let mut world = World::new();
        world
            .run_system_once(|mut registry: EntityRegistry| {
                registry.add(laser());
                registry.add(meteor());
                registry.add(meteor());
                registry.add(Transform::default());
            })
            .unwrap();
        assert_eq!(sizes(&mut world), (4, 2, 1));
    }

    #[test]
    fn clearing_a_set_despawns_only_its_members() {
        let mut world = World::new();
        world
            .run_system_once(|mut registry: EntityRegistry| {
                registry.add(laser());
                registry.add(meteor());
                registry.add(Transform::default());
            })
            .unwrap();

        world
            .run_system_once(|mut registry: EntityRegistry| registry.clear(EntitySet::Meteors))
            .unwrap();
        assert_eq!(sizes(&mut world), (2, 0, 1));

        world
            .run_system_once(|mut registry: EntityRegistry| registry.clear(EntitySet::All))
            .unwrap();
        assert_eq!(sizes(&mut world), (0, 0, 0));
    }

    #[test]
    fn clear_all_leaves_unregistered_entities() {
        let mut world = World::new();
        let outsider = world.spawn(Transform::default()).id();
        world
            .run_system_once(|mut registry: EntityRegistry| {
                registry.add(meteor());
            })
            .unwrap();
        world
            .run_system_once(|mut registry: EntityRegistry| registry.clear(EntitySet::All))
            .unwrap();
        assert!(world.get_entity(outsider).is_ok());
        assert_eq!(sizes(&mut world), (0, 0, 0));
    }

    #[test]
    fn removing_twice_is_a_no_op() {
        let mut world = World::new();
        let entity = world.spawn((GameEntity, laser())).id();
        world
            .run_system_once(move |mut registry: EntityRegistry| {
                registry.remove(entity);
                registry.remove(entity);
            })
            .unwrap();
        world
            .run_system_once(move |mut registry: EntityRegistry| registry.remove(entity))
            .unwrap();
        assert!(world.get_entity(entity).is_err());
        assert_eq!(sizes(&mut world), (0, 0, 0));
    }
}
