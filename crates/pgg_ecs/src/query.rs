//! Multi-kind entity queries.
//!
//! A query names a set of [`ComponentKind`]s and yields exactly the entities
//! that carry a record of every one of them. Queries can be expressed three
//! ways, all resolving to [`matching_entities`]:
//!
//! - a slice of kinds, via [`GameWorld::entities_with`](crate::GameWorld::entities_with);
//! - a [`QueryDescriptor`] built up kind by kind;
//! - a tuple of record types implementing [`ComponentSet`], e.g.
//!   `world.query::<(Transform, Renderable)>()`.

use std::collections::BTreeSet;

use crate::component::{Component, ComponentKind};
use crate::entity::Entity;
use crate::storage::ComponentTables;

/// The result of a query. Iteration follows entity id order, but callers that
/// need a semantic order should sort by a record field.
pub type EntitySet = BTreeSet<Entity>;

/// Describes the kinds an entity must carry to match a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDescriptor {
    required: Vec<ComponentKind>,
}

impl QueryDescriptor {
    /// Create a new empty query descriptor. An empty query matches nothing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            required: Vec::new(),
        }
    }

    /// Require a kind.
    #[must_use]
    pub fn with(mut self, kind: ComponentKind) -> Self {
        self.required.push(kind);
        self
    }

    /// Require the kind of record type `T`.
    #[must_use]
    pub fn with_component<T: Component>(self) -> Self {
        self.with(T::KIND)
    }

    /// Returns the required kinds in the order they were added.
    #[must_use]
    pub fn kinds(&self) -> &[ComponentKind] {
        &self.required
    }

    /// Returns `true` if no kind has been required.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }
}

/// A compile-time set of record types, implemented for tuples of
/// [`Component`]s up to arity five.
pub trait ComponentSet {
    /// The kinds of every member of the set.
    fn kinds() -> Vec<ComponentKind>;
}

macro_rules! impl_component_set {
    ($($ty:ident),+) => {
        impl<$($ty: Component),+> ComponentSet for ($($ty,)+) {
            fn kinds() -> Vec<ComponentKind> {
                vec![$($ty::KIND),+]
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);

/// Returns the entities that have a record for every kind in `kinds`.
///
/// The running result is seeded from one table's key set and intersected with
/// each remaining table, stopping as soon as it becomes empty. Tables are
/// visited smallest first; intersection is order-independent so only the
/// amount of work changes. An empty `kinds` slice yields an empty set rather
/// than every entity.
#[must_use]
pub fn matching_entities(tables: &ComponentTables, kinds: &[ComponentKind]) -> EntitySet {
    let mut ordered: Vec<_> = kinds.iter().map(|&kind| tables.erased(kind)).collect();
    ordered.sort_by_key(|table| table.entity_count());

    let Some((seed, rest)) = ordered.split_first() else {
        return EntitySet::new();
    };

    let mut result: EntitySet = seed.entity_iter().collect();
    for table in rest {
        if result.is_empty() {
            break;
        }
        result.retain(|&entity| table.contains_entity(entity));
    }
    result
}
