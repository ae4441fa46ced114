//! Player identity component.

use crate::components::color::Color;
use crate::impl_component;

/// Starting treasury for a new player.
pub const DEFAULT_GOLD: i32 = 100;

/// Marks an entity as a player and holds its per-player state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    /// Display name.
    pub name: String,
    /// Colour used for the HUD and owned provinces.
    pub color: Color,
    /// Turn rank: 0 moves first, 1 second, and so on.
    pub turn_order: i32,
    /// Current treasury.
    pub gold: i32,
}

impl PlayerInfo {
    /// Create a player with the default starting gold.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, turn_order: i32) -> Self {
        Self {
            name: name.into(),
            color,
            turn_order,
            gold: DEFAULT_GOLD,
        }
    }

    /// Override the starting gold.
    #[must_use]
    pub fn with_gold(mut self, gold: i32) -> Self {
        self.gold = gold;
        self
    }
}

impl_component!(PlayerInfo, PlayerInfo, players);
