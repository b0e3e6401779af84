//! World container for entities
//!
//! The World holds the ordered object list of one environment. Entity order
//! is fixed at build time and doubles as the animation index.

use crate::Entity;

/// A handle to an entity in the world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityHandle(usize);

impl EntityHandle {
    /// Get the raw index of this handle
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An ordered collection of entities
///
/// Entities are only ever appended; nothing is removed before teardown, so
/// handles stay valid for the lifetime of the world.
#[derive(Clone, Debug, Default)]
pub struct World {
    /// All entities in the world
    entities: Vec<Entity>,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Create a world with pre-allocated capacity for entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Add an entity to the world, returning its handle
    pub fn add_entity(&mut self, entity: Entity) -> EntityHandle {
        let handle = EntityHandle(self.entities.len());
        self.entities.push(entity);
        handle
    }

    /// Get a reference to an entity by handle
    pub fn get_entity(&self, handle: EntityHandle) -> Option<&Entity> {
        self.entities.get(handle.0)
    }

    /// Get a mutable reference to an entity by handle
    pub fn get_entity_mut(&mut self, handle: EntityHandle) -> Option<&mut Entity> {
        self.entities.get_mut(handle.0)
    }

    /// Find the first entity with the given name
    pub fn find_by_name(&self, name: &str) -> Option<(EntityHandle, &Entity)> {
        self.iter_with_handles()
            .find(|(_, e)| e.name.as_deref() == Some(name))
    }

    /// Get all entities as a slice
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Get the number of entities
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Check if the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Check whether any entity changed since the last `clear_all_dirty`
    pub fn has_dirty_entities(&self) -> bool {
        self.entities.iter().any(|e| e.is_dirty())
    }

    /// Clear dirty flags on every entity
    pub fn clear_all_dirty(&mut self) {
        for entity in &mut self.entities {
            entity.clear_dirty();
        }
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Iterate over handles and entities
    pub fn iter_with_handles(&self) -> impl Iterator<Item = (EntityHandle, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityHandle(i), e))
    }
}
