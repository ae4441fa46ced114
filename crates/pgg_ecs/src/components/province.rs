//! Province component.
//!
//! [`ProvinceInfo`] turns a map tile into a game object with a name, an
//! optional owner, a resource stockpile and a neighbour set.

use std::collections::{BTreeMap, BTreeSet};

use crate::entity::Entity;
use crate::impl_component;

/// Game data attached to a province tile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProvinceInfo {
    /// Unique name, e.g. `"P-1-5"`.
    pub name: String,
    /// Owning player entity; `None` means neutral.
    pub owner: Option<Entity>,
    /// Resource stockpile keyed by resource name.
    pub resources: BTreeMap<String, i32>,
    /// Adjacent province entities.
    pub neighbors: BTreeSet<Entity>,
}

impl ProvinceInfo {
    /// A neutral province with no resources and no neighbours.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The canonical name of the province generated at grid cell `(x, y)`.
    #[must_use]
    pub fn grid_name(x: i32, y: i32) -> String {
        format!("P-{x}-{y}")
    }

    /// Returns `true` if no player owns this province.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.owner.is_none()
    }
}

impl_component!(ProvinceInfo, ProvinceInfo, provinces);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_neutral_and_empty() {
        let p = ProvinceInfo::new(ProvinceInfo::grid_name(1, 5));
        assert_eq!(p.name, "P-1-5");
        assert!(p.is_neutral());
        assert!(p.resources.is_empty());
        assert!(p.neighbors.is_empty());
    }
}
