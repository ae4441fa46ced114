//! # pgg_ecs
//!
//! The entity-component store behind the strategy prototype.
//!
//! This crate provides:
//!
//! - [`Entity`]: opaque `u64` identifiers, never reused.
//! - [`EntityAllocator`]: monotonically increasing ID allocator.
//! - [`Component`] / [`ComponentKind`]: the closed set of record kinds.
//! - [`ComponentTable`] / [`ComponentTables`]: sparse per-kind storage.
//! - [`QueryDescriptor`] / [`ComponentSet`]: multi-kind queries.
//! - [`GameWorld`]: the store: lifecycle, attachment, lookup and queries.
//! - [`components`]: the record types (transform, renderable, player,
//!   province, selection marker) and the colour palette.

pub mod component;
pub mod components;
pub mod entity;
pub mod error;
pub mod query;
pub mod storage;
pub mod world;

pub use component::{Component, ComponentKind};
pub use entity::{Entity, EntityAllocator};
pub use error::WorldError;
pub use query::{ComponentSet, EntitySet, QueryDescriptor};
pub use storage::{ComponentTable, ComponentTables, ErasedTable};
pub use world::GameWorld;

pub use glam;
