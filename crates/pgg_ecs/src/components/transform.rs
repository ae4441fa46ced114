//! 2D pixel-space transform component.
//!
//! [`Transform`] places an axis-aligned box on the map: its top-left corner
//! and its size, both in whole pixels. It is read by rendering (where to
//! draw) and by selection (which province is under the cursor).

use glam::IVec2;

use crate::impl_component;

/// Position and size of an entity in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform {
    /// Top-left corner.
    pub position: IVec2,
    /// Width and height.
    pub size: IVec2,
}

impl Transform {
    /// Create a transform from explicit coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            position: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// The square tile covering grid cell `(x, y)` for a given tile size.
    #[must_use]
    pub fn from_grid(x: i32, y: i32, tile_size: i32) -> Self {
        Self::new(x * tile_size, y * tile_size, tile_size, tile_size)
    }

    /// Centre point, rounded toward the top-left.
    #[must_use]
    pub fn center(&self) -> IVec2 {
        self.position + self.size / 2
    }

    /// Returns `true` if `point` lies inside the box. The right and bottom
    /// edges are exclusive so adjacent tiles never both claim a point.
    #[must_use]
    pub fn contains_point(&self, point: IVec2) -> bool {
        let max = self.position + self.size;
        point.cmpge(self.position).all() && point.cmplt(max).all()
    }
}

impl_component!(Transform, Transform, transforms);
