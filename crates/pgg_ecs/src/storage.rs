//! Per-kind component storage.
//!
//! Storage is column-major: every [`ComponentKind`] has its own
//! [`ComponentTable`] mapping entity to record, so a pass over one kind only
//! touches entities that actually carry it. [`ComponentTables`] bundles one
//! table per kind and is owned by the [`GameWorld`](crate::GameWorld).

use std::collections::HashMap;
use std::collections::hash_map;

use crate::component::ComponentKind;
use crate::components::{PlayerInfo, ProvinceInfo, Renderable, Selected, Transform};
use crate::entity::Entity;

/// Sparse storage for the records of a single kind.
#[derive(Debug, Clone)]
pub struct ComponentTable<T> {
    rows: HashMap<Entity, T>,
}

impl<T> ComponentTable<T> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Store `value` for `entity`, returning the record it replaced.
    pub fn insert(&mut self, entity: Entity, value: T) -> Option<T> {
        self.rows.insert(entity, value)
    }

    /// Returns the record stored for `entity`.
    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.rows.get(&entity)
    }

    /// Returns the record stored for `entity` mutably.
    #[must_use]
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.rows.get_mut(&entity)
    }

    /// Remove and return the record stored for `entity`.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        self.rows.remove(&entity)
    }

    /// Returns `true` if `entity` has a record in this table.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.rows.contains_key(&entity)
    }

    /// Returns the number of records stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the entities that have a record in this table.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.rows.keys().copied()
    }

    /// Iterate over `(entity, record)` pairs in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, Entity, T> {
        self.rows.iter()
    }
}

impl<T> Default for ComponentTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased view of a [`ComponentTable`], used where the store has to
/// handle every kind uniformly (queries by kind, cascading deletes).
pub trait ErasedTable {
    /// Returns `true` if `entity` has a record in this table.
    fn contains_entity(&self, entity: Entity) -> bool;

    /// Returns the number of records stored.
    fn entity_count(&self) -> usize;

    /// Iterate over the entities that have a record in this table.
    fn entity_iter(&self) -> Box<dyn Iterator<Item = Entity> + '_>;

    /// Drop the record stored for `entity`, if any.
    fn remove_entity(&mut self, entity: Entity) -> bool;
}

impl<T> ErasedTable for ComponentTable<T> {
    fn contains_entity(&self, entity: Entity) -> bool {
        self.contains(entity)
    }

    fn entity_count(&self) -> usize {
        self.len()
    }

    fn entity_iter(&self) -> Box<dyn Iterator<Item = Entity> + '_> {
        Box::new(self.entities())
    }

    fn remove_entity(&mut self, entity: Entity) -> bool {
        self.remove(entity).is_some()
    }
}

/// One table per [`ComponentKind`].
#[derive(Debug, Clone, Default)]
pub struct ComponentTables {
    pub(crate) transforms: ComponentTable<Transform>,
    pub(crate) renderables: ComponentTable<Renderable>,
    pub(crate) players: ComponentTable<PlayerInfo>,
    pub(crate) provinces: ComponentTable<ProvinceInfo>,
    pub(crate) selected: ComponentTable<Selected>,
}

impl ComponentTables {
    /// Create a set of empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for `kind` behind its erased interface.
    #[must_use]
    pub fn erased(&self, kind: ComponentKind) -> &dyn ErasedTable {
        match kind {
            ComponentKind::Transform => &self.transforms,
            ComponentKind::Renderable => &self.renderables,
            ComponentKind::PlayerInfo => &self.players,
            ComponentKind::ProvinceInfo => &self.provinces,
            ComponentKind::Selected => &self.selected,
        }
    }

    /// Returns the table for `kind` mutably behind its erased interface.
    pub fn erased_mut(&mut self, kind: ComponentKind) -> &mut dyn ErasedTable {
        match kind {
            ComponentKind::Transform => &mut self.transforms,
            ComponentKind::Renderable => &mut self.renderables,
            ComponentKind::PlayerInfo => &mut self.players,
            ComponentKind::ProvinceInfo => &mut self.provinces,
            ComponentKind::Selected => &mut self.selected,
        }
    }

    /// Remove `entity` from every table. Returns the number of records dropped.
    pub fn remove_entity(&mut self, entity: Entity) -> usize {
        ComponentKind::ALL
            .into_iter()
            .filter(|&kind| self.erased_mut(kind).remove_entity(entity))
            .count()
    }
}
