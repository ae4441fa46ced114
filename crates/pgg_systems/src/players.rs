//! Player setup.

use pgg_ecs::components::{PlayerInfo, palette};
use pgg_ecs::{Entity, GameWorld};
use tracing::info;

use crate::config::PlayerSpec;

/// Create one player entity per roster entry and return them in roster order.
///
/// Missing colours come from [`palette::PLAYERS`] by seat (wrapping after
/// four players) and missing turn ranks from the roster position.
pub fn spawn_players(world: &mut GameWorld, roster: &[PlayerSpec]) -> Vec<Entity> {
    let players: Vec<Entity> = roster
        .iter()
        .enumerate()
        .map(|(seat, spec)| {
            let color = spec
                .color
                .unwrap_or(palette::PLAYERS[seat % palette::PLAYERS.len()]);
            let turn_order = spec.turn_order.unwrap_or(seat as i32);
            let mut info = PlayerInfo::new(spec.name.clone(), color, turn_order);
            if let Some(gold) = spec.gold {
                info = info.with_gold(gold);
            }

            let entity = world.create_entity();
            world.add_component(entity, info);
            entity
        })
        .collect();

    info!(players = players.len(), "spawned players");
    players
}
