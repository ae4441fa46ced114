//! Selection marker.

use crate::impl_component;

/// Marker for the entity the player currently has selected. Carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selected;

impl_component!(Selected, Selected, selected);
