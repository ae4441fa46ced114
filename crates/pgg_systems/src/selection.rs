//! Province selection.
//!
//! At most one entity carries the [`Selected`] marker at a time. Selecting a
//! point moves the marker to the province under it, or clears it when the
//! point hits no province.

use pgg_ecs::components::{ProvinceInfo, Selected, Transform};
use pgg_ecs::glam::IVec2;
use pgg_ecs::{Entity, GameWorld};
use tracing::debug;

/// Remove the selection marker from every entity. Returns how many lost it.
pub fn clear_selection(world: &mut GameWorld) -> usize {
    let selected = world.query::<(Selected,)>();
    for &entity in &selected {
        world.remove_component::<Selected>(entity);
    }
    selected.len()
}

/// The province whose transform contains `point`, if any.
#[must_use]
pub fn province_at(world: &GameWorld, point: IVec2) -> Option<Entity> {
    world
        .query::<(Transform, ProvinceInfo)>()
        .into_iter()
        .find(|&e| {
            world
                .get_component::<Transform>(e)
                .is_some_and(|t| t.contains_point(point))
        })
}

/// Select the province under `point`, replacing any previous selection.
pub fn select_at(world: &mut GameWorld, point: IVec2) -> Option<Entity> {
    clear_selection(world);
    let hit = province_at(world, point)?;
    world.add_component(hit, Selected);
    debug!(entity = %hit, x = point.x, y = point.y, "province selected");
    Some(hit)
}
