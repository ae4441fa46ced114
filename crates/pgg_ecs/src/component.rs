//! Core [`Component`] trait and the closed set of component kinds.
//!
//! Every record stored in the [`GameWorld`](crate::GameWorld) belongs to
//! exactly one [`ComponentKind`]. The set of kinds is fixed at compile time:
//! each kind owns one concrete [`ComponentTable`] inside [`ComponentTables`],
//! and the [`Component`] trait maps a Rust type to that table without any
//! runtime type lookup.
//!
//! Adding a kind means adding its record type, a [`ComponentKind`] variant, a
//! field in [`ComponentTables`] and one [`impl_component!`] line. Existing
//! kinds are untouched.

use std::fmt;

use crate::storage::{ComponentTable, ComponentTables};

/// Tag naming one category of attachable data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Pixel-space position and size.
    Transform,
    /// How the entity is drawn.
    Renderable,
    /// Player identity, colour, turn rank and treasury.
    PlayerInfo,
    /// Province name, owner, resources and neighbours.
    ProvinceInfo,
    /// Marker for the currently selected entity.
    Selected,
}

impl ComponentKind {
    /// Every kind known to the store, in declaration order.
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Transform,
        ComponentKind::Renderable,
        ComponentKind::PlayerInfo,
        ComponentKind::ProvinceInfo,
        ComponentKind::Selected,
    ];

    /// A human-readable name for this kind (e.g. `"Transform"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::Transform => "Transform",
            ComponentKind::Renderable => "Renderable",
            ComponentKind::PlayerInfo => "PlayerInfo",
            ComponentKind::ProvinceInfo => "ProvinceInfo",
            ComponentKind::Selected => "Selected",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The core component trait.
///
/// Implementors are record types with a fixed [`ComponentKind`]. The two
/// accessor functions resolve the kind's table statically; use
/// [`impl_component!`] rather than writing them by hand.
pub trait Component: Sized + 'static {
    /// The kind this record type is stored under.
    const KIND: ComponentKind;

    /// Returns this kind's table.
    fn table(tables: &ComponentTables) -> &ComponentTable<Self>;

    /// Returns this kind's table mutably.
    fn table_mut(tables: &mut ComponentTables) -> &mut ComponentTable<Self>;
}

/// Implements [`Component`] for a record type stored in the named
/// [`ComponentTables`] field.
///
/// ```ignore
/// impl_component!(Transform, Transform, transforms);
/// ```
#[macro_export]
macro_rules! impl_component {
    ($ty:ty, $kind:ident, $field:ident) => {
        impl $crate::component::Component for $ty {
            const KIND: $crate::component::ComponentKind =
                $crate::component::ComponentKind::$kind;

            fn table(
                tables: &$crate::storage::ComponentTables,
            ) -> &$crate::storage::ComponentTable<Self> {
                &tables.$field
            }

            fn table_mut(
                tables: &mut $crate::storage::ComponentTables,
            ) -> &mut $crate::storage::ComponentTable<Self> {
                &mut tables.$field
            }
        }
    };
}
