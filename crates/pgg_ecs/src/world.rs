//! World state storage.
//!
//! The [`GameWorld`] owns the entity allocator, the set of live entities and
//! one [`ComponentTable`] per [`ComponentKind`]. It holds no game logic:
//! systems receive it by reference, query it and mutate it.

use std::collections::BTreeSet;

use tracing::{trace, warn};

use crate::component::{Component, ComponentKind};
use crate::entity::{Entity, EntityAllocator};
use crate::error::WorldError;
use crate::query::{self, ComponentSet, EntitySet, QueryDescriptor};
use crate::storage::{ComponentTable, ComponentTables};

/// The entity-component store.
#[derive(Debug, Default)]
pub struct GameWorld {
    /// Entity ID allocator.
    allocator: EntityAllocator,
    /// Entities created and not yet deleted.
    live: BTreeSet<Entity>,
    /// One table per component kind.
    tables: ComponentTables,
}

impl GameWorld {
    /// Create a new empty world.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            live: BTreeSet::new(),
            tables: ComponentTables::new(),
        }
    }

    // -- Entity lifecycle --

    /// Allocate a new entity with no components.
    ///
    /// The returned id is strictly greater than every id handed out before.
    pub fn create_entity(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.live.insert(entity);
        entity
    }

    /// Delete an entity and every record attached to it.
    ///
    /// Deleting an entity that is already gone, or was never created, is a
    /// no-op. Returns `true` if the entity was alive.
    pub fn delete_entity(&mut self, entity: Entity) -> bool {
        let was_alive = self.live.remove(&entity);
        let dropped = self.tables.remove_entity(entity);
        trace!(%entity, was_alive, dropped, "deleted entity");
        was_alive
    }

    /// Returns `true` if `entity` was created and has not been deleted.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.live.contains(&entity)
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.live.len()
    }

    // -- Component operations --

    /// Attach `component` to `entity`, replacing any record of the same kind.
    ///
    /// Attaching to an entity that is not alive stores nothing and logs a
    /// warning; use [`GameWorld::try_add_component`] to get an error instead.
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if let Err(err) = self.try_add_component(entity, component) {
            warn!(%entity, kind = %T::KIND, %err, "dropped component for dead entity");
        }
    }

    /// Attach `component` to `entity`, returning the record it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EntityNotFound`] if `entity` is not alive.
    pub fn try_add_component<T: Component>(
        &mut self,
        entity: Entity,
        component: T,
    ) -> Result<Option<T>, WorldError> {
        if !self.is_alive(entity) {
            return Err(WorldError::EntityNotFound(entity));
        }
        Ok(T::table_mut(&mut self.tables).insert(entity, component))
    }

    /// Returns the `T` record attached to `entity`, if any.
    #[must_use]
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        T::table(&self.tables).get(entity)
    }

    /// Returns the `T` record attached to `entity` mutably, if any.
    #[must_use]
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        T::table_mut(&mut self.tables).get_mut(entity)
    }

    /// Like [`GameWorld::get_component`], but distinguishes a dead entity from
    /// a missing record.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EntityNotFound`] or
    /// [`WorldError::ComponentNotFound`].
    pub fn try_get_component<T: Component>(&self, entity: Entity) -> Result<&T, WorldError> {
        if !self.is_alive(entity) {
            return Err(WorldError::EntityNotFound(entity));
        }
        self.get_component(entity)
            .ok_or(WorldError::ComponentNotFound {
                entity,
                kind: T::KIND,
            })
    }

    /// Detach and return the `T` record of `entity`, if any.
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        T::table_mut(&mut self.tables).remove(entity)
    }

    /// Returns `true` if `entity` carries a `T` record.
    #[must_use]
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        T::table(&self.tables).contains(entity)
    }

    /// Returns `true` if `entity` carries a record of `kind`.
    #[must_use]
    pub fn has_kind(&self, entity: Entity, kind: ComponentKind) -> bool {
        self.tables.erased(kind).contains_entity(entity)
    }

    /// Direct access to the table for `T`, for single-kind passes.
    #[must_use]
    pub fn table<T: Component>(&self) -> &ComponentTable<T> {
        T::table(&self.tables)
    }

    /// Returns the number of records stored under `kind`.
    #[must_use]
    pub fn kind_count(&self, kind: ComponentKind) -> usize {
        self.tables.erased(kind).entity_count()
    }

    // -- Query --

    /// Returns the entities that carry a record of every kind in `kinds`.
    ///
    /// An empty `kinds` slice matches nothing.
    #[must_use]
    pub fn entities_with(&self, kinds: &[ComponentKind]) -> EntitySet {
        query::matching_entities(&self.tables, kinds)
    }

    /// Runs a [`QueryDescriptor`].
    #[must_use]
    pub fn run_query(&self, descriptor: &QueryDescriptor) -> EntitySet {
        self.entities_with(descriptor.kinds())
    }

    /// Typed form of [`GameWorld::entities_with`]:
    /// `world.query::<(Transform, Renderable)>()`.
    #[must_use]
    pub fn query<Q: ComponentSet>(&self) -> EntitySet {
        self.entities_with(&Q::kinds())
    }
}
