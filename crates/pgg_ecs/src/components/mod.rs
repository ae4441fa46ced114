//! Record types for every component kind.

pub mod color;
pub mod player;
pub mod province;
pub mod renderable;
pub mod selected;
pub mod transform;

pub use color::{Color, ParseColorError, palette};
pub use player::{DEFAULT_GOLD, PlayerInfo};
pub use province::ProvinceInfo;
pub use renderable::{Renderable, Shape, layer};
pub use selected::Selected;
pub use transform::Transform;
