//! Render descriptor component.

use crate::components::color::{Color, palette};
use crate::impl_component;

/// Draw layers, lowest first. Higher layers are painted on top.
pub mod layer {
    pub const BACKGROUND: i32 = 0;
    pub const MAP: i32 = 1;
    pub const UNITS: i32 = 2;
}

/// Primitive used to draw an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Fills the whole transform box.
    Rectangle,
    /// Inscribed in the transform box, centred.
    Circle,
}

/// Everything the draw pass needs besides position: colour, shape and layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Renderable {
    pub color: Color,
    pub shape: Shape,
    pub layer: i32,
}

impl Renderable {
    /// A record drawn as `shape` in `color` on draw layer `layer`.
    #[must_use]
    pub const fn new(color: Color, shape: Shape, layer: i32) -> Self {
        Self {
            color,
            shape,
            layer,
        }
    }

    /// A neutral province tile on the map layer.
    #[must_use]
    pub const fn tile() -> Self {
        Self::new(palette::PROVINCE_NEUTRAL, Shape::Rectangle, layer::MAP)
    }
}

impl_component!(Renderable, Renderable, renderables);
