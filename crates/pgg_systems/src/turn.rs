//! Turn rotation.
//!
//! [`TurnSystem`] discovers the players on its first update, fixes their
//! order by turn rank, and then rotates a current-player pointer each time
//! [`TurnSystem::end_turn`] is called. A full rotation advances the turn
//! number.

use pgg_ecs::components::PlayerInfo;
use pgg_ecs::{Entity, GameWorld};
use tracing::{info, warn};

/// Lifecycle of the turn machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TurnState {
    /// No update has run yet.
    #[default]
    Uninitialized,
    /// Player order is fixed. `players` may be empty, in which case the
    /// machine is inert.
    Active {
        players: Vec<Entity>,
        current_index: usize,
        turn_number: u32,
    },
}

/// Rotates the current player over the ordered player list.
#[derive(Debug, Default)]
pub struct TurnSystem {
    state: TurnState,
}

impl TurnSystem {
    /// A machine that has not yet looked for players.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Returns `true` once the player order has been fixed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, TurnState::Active { .. })
    }

    /// Fix the player order on the first call; later calls do nothing.
    ///
    /// Players are sorted by [`PlayerInfo::turn_order`] ascending, ties broken
    /// by entity id. Finding no players still completes initialization.
    pub fn update(&mut self, world: &GameWorld) {
        if self.is_initialized() {
            return;
        }

        let mut ranked: Vec<(i32, Entity)> = world
            .query::<(PlayerInfo,)>()
            .into_iter()
            .filter_map(|e| world.get_component::<PlayerInfo>(e).map(|p| (p.turn_order, e)))
            .collect();
        ranked.sort();
        let players: Vec<Entity> = ranked.into_iter().map(|(_, e)| e).collect();

        if players.is_empty() {
            warn!("no players found; turn rotation is inert");
        } else {
            info!(players = players.len(), "turn order established");
        }

        self.state = TurnState::Active {
            players,
            current_index: 0,
            turn_number: 1,
        };
    }

    /// Pass the turn to the next player. Wrapping back to the first player
    /// starts a new turn. Does nothing when there are no players.
    pub fn end_turn(&mut self, world: &GameWorld) {
        let TurnState::Active {
            players,
            current_index,
            turn_number,
        } = &mut self.state
        else {
            return;
        };
        if players.is_empty() {
            return;
        }

        *current_index = (*current_index + 1) % players.len();
        if *current_index == 0 {
            *turn_number += 1;
            info!(turn = *turn_number, "new turn");
        }

        let current = players[*current_index];
        let name = world
            .get_component::<PlayerInfo>(current)
            .map_or("<unknown>", |p| p.name.as_str());
        info!(player = %current, name, "turn passes");
    }

    /// The player whose turn it is, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<Entity> {
        match &self.state {
            TurnState::Active {
                players,
                current_index,
                ..
            } => players.get(*current_index).copied(),
            TurnState::Uninitialized => None,
        }
    }

    /// Index of the current player in [`TurnSystem::players`].
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            TurnState::Active { current_index, .. } => Some(*current_index),
            TurnState::Uninitialized => None,
        }
    }

    /// The turn counter, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> Option<u32> {
        match &self.state {
            TurnState::Active { turn_number, .. } => Some(*turn_number),
            TurnState::Uninitialized => None,
        }
    }

    /// Players in turn order. Empty before initialization.
    #[must_use]
    pub fn players(&self) -> &[Entity] {
        match &self.state {
            TurnState::Active { players, .. } => players,
            TurnState::Uninitialized => &[],
        }
    }
}
