//! # pgg_systems
//!
//! Game systems that run against a [`GameWorld`](pgg_ecs::GameWorld). Each
//! system takes the world by reference on every call; none of them keeps a
//! handle to it.
//!
//! - [`config`]: [`GameConfig`] and the player roster.
//! - [`players`]: player entity setup.
//! - [`map_gen`]: one-shot province grid generation.
//! - [`turn`]: turn-order rotation.
//! - [`selection`]: click-to-select for provinces.
//! - [`render`]: the layer-ordered draw list.
//! - [`hud`]: turn and province panels.

pub mod config;
pub mod hud;
pub mod map_gen;
pub mod players;
pub mod render;
pub mod selection;
pub mod turn;

pub use config::{ConfigError, GameConfig, PlayerSpec};
pub use hud::{MenuPanel, ProvincePanel, TurnPanel};
pub use map_gen::MapGenerator;
pub use players::spawn_players;
pub use render::{DrawCommand, draw_list};
pub use turn::{TurnState, TurnSystem};
