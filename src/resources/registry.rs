//! Sprite registry resource.
//!
//! Maps stable [`SpriteId`]s to their ECS entities and hands out fresh ids.
//! The counter only ever increments, so an id released by a future
//! delete-sprite operation could never be reallocated to another sprite.
//! Lookups with stale ids simply miss.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

use crate::components::sprite::SpriteId;

/// Central registry of sprites keyed by their stable ids.
#[derive(Resource, Debug, Default)]
pub struct SpriteRegistry {
    entities: FxHashMap<SpriteId, Entity>,
    next_id: u64,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id and bind it to `entity`.
    pub fn register(&mut self, entity: Entity) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, entity);
        id
    }

    /// Look up the entity behind an id. `None` for ids the registry never
    /// issued (or a future removal already forgot).
    pub fn entity(&self, id: SpriteId) -> Option<Entity> {
        self.entities.get(&id).copied()
    }

    pub fn contains(&self, id: SpriteId) -> bool {
        self.entities.contains_key(&id)
    }

    /// All known ids in creation order.
    ///
    /// Ids are monotonic, so sorting them reproduces insertion order without
    /// keeping a separate list.
    pub fn ids(&self) -> Vec<SpriteId> {
        let mut ids: Vec<SpriteId> = self.entities.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
