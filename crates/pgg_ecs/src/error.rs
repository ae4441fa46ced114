//! Store error types.

use crate::component::ComponentKind;
use crate::entity::Entity;

/// Errors returned by the strict [`GameWorld`](crate::GameWorld) entry points.
///
/// The lenient API never fails: absence is reported as `None` or an empty set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The entity was never created or has already been deleted.
    #[error("{0} is not alive")]
    EntityNotFound(Entity),

    /// The entity is alive but carries no record of the requested kind.
    #[error("{entity} has no {kind} component")]
    ComponentNotFound {
        /// The entity that was looked up.
        entity: Entity,
        /// The kind that was missing.
        kind: ComponentKind,
    },
}
