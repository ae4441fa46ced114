//! Draw pass.
//!
//! Rendering is reduced to producing a list of [`DrawCommand`]s: whatever
//! presents the frame only has to paint them in order. Entities are drawn
//! lowest layer first; order within a layer is not significant.

use pgg_ecs::GameWorld;
use pgg_ecs::components::{Color, Renderable, Shape, Transform};
use pgg_ecs::glam::IVec2;

/// A single primitive to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Axis-aligned filled rectangle.
    Rect {
        position: IVec2,
        size: IVec2,
        color: Color,
    },
    /// Filled circle.
    Circle {
        center: IVec2,
        radius: i32,
        color: Color,
    },
}

impl DrawCommand {
    /// The command that paints `renderable` inside `transform`.
    #[must_use]
    pub fn for_entity(transform: &Transform, renderable: &Renderable) -> Self {
        match renderable.shape {
            Shape::Rectangle => DrawCommand::Rect {
                position: transform.position,
                size: transform.size,
                color: renderable.color,
            },
            Shape::Circle => DrawCommand::Circle {
                center: transform.center(),
                radius: transform.size.min_element() / 2,
                color: renderable.color,
            },
        }
    }

    /// The fill colour.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Rect { color, .. } | DrawCommand::Circle { color, .. } => *color,
        }
    }
}

/// Build the draw list for every entity with a transform and a renderable.
#[must_use]
pub fn draw_list(world: &GameWorld) -> Vec<DrawCommand> {
    let mut drawables: Vec<(&Transform, &Renderable)> = world
        .query::<(Transform, Renderable)>()
        .into_iter()
        .filter_map(|e| {
            Some((
                world.get_component::<Transform>(e)?,
                world.get_component::<Renderable>(e)?,
            ))
        })
        .collect();
    drawables.sort_by_key(|(_, renderable)| renderable.layer);

    drawables
        .into_iter()
        .map(|(transform, renderable)| DrawCommand::for_entity(transform, renderable))
        .collect()
}
