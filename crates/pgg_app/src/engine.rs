//! Engine driver.
//!
//! Each tick runs three phases in order:
//!
//! 1. Drain input events and apply them to the game state.
//! 2. Run the logic systems (map generation, then turns) while in game.
//! 3. Build the [`Frame`] to present.

use std::time::Instant;

use pgg_ecs::GameWorld;
use pgg_ecs::glam::IVec2;
use pgg_systems::hud::{self, MenuPanel, ProvincePanel, TurnPanel};
use pgg_systems::{ConfigError, DrawCommand, GameConfig, MapGenerator, TurnSystem, draw_list, selection, spawn_players};
use tracing::{debug, info, warn};

use crate::input::{InputEvent, InputSource};

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Menu,
    Game,
}

/// Everything needed to present one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Menu(MenuPanel),
    Game {
        commands: Vec<DrawCommand>,
        turn: Option<TurnPanel>,
        province: Option<ProvincePanel>,
    },
}

/// Owns the world, the systems and the tick counter.
#[derive(Debug)]
pub struct Engine {
    /// Current tick counter.
    tick_id: u64,
    /// Ticks to run before stopping (0 = unlimited).
    max_ticks: u64,
    config: GameConfig,
    world: GameWorld,
    state: GameState,
    map: MapGenerator,
    turns: TurnSystem,
    quit: bool,
}

impl Engine {
    /// Build an engine and spawn the configured players.
    #[must_use]
    pub fn new(config: GameConfig, max_ticks: u64) -> Self {
        let mut world = GameWorld::new();
        spawn_players(&mut world, &config.players);
        let map = MapGenerator::from_config(&config);

        Self {
            tick_id: 0,
            max_ticks,
            config,
            world,
            state: GameState::Menu,
            map,
            turns: TurnSystem::new(),
            quit: false,
        }
    }

    // -- Accessors --

    /// Returns the current tick counter.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    #[must_use]
    pub fn turns(&self) -> &TurnSystem {
        &self.turns
    }

    /// Returns `true` once a quit event has been seen.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    // -- Tick phases --

    /// Run one tick with the given input events.
    pub fn tick(&mut self, events: &[InputEvent]) -> Frame {
        self.tick_id += 1;
        debug!(tick_id = self.tick_id, events = events.len(), "tick start");

        for &event in events {
            self.handle_event(event);
        }

        if self.state == GameState::Game {
            self.map.update(&mut self.world);
            self.turns.update(&self.world);
        }

        self.frame()
    }

    fn handle_event(&mut self, event: InputEvent) {
        match (self.state, event) {
            (_, InputEvent::Quit) => {
                info!(tick_id = self.tick_id, "quit requested");
                self.quit = true;
            }
            (GameState::Menu, InputEvent::Confirm) => {
                info!(tick_id = self.tick_id, "entering game");
                self.state = GameState::Game;
            }
            (GameState::Game, InputEvent::EndTurn) => self.turns.end_turn(&self.world),
            (GameState::Game, InputEvent::Click { x, y }) => {
                selection::select_at(&mut self.world, IVec2::new(x, y));
            }
            (state, event) => debug!(?state, ?event, "input ignored"),
        }
    }

    /// The frame for the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        match self.state {
            GameState::Menu => Frame::Menu(MenuPanel::default()),
            GameState::Game => Frame::Game {
                commands: draw_list(&self.world),
                turn: hud::turn_panel(&self.world, &self.turns),
                province: hud::selected_province(&self.world),
            },
        }
    }

    // -- Loop --

    /// Run ticks at the configured frame rate until quit or `max_ticks`.
    ///
    /// Returns the last frame produced.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the frame rate has no
    /// representable frame time. No tick runs in that case.
    pub fn run(&mut self, input: &mut impl InputSource) -> Result<Frame, ConfigError> {
        let tick_duration = self.config.frame_duration()?;

        info!(
            fps = self.config.fps,
            max_ticks = self.max_ticks,
            "starting game loop"
        );

        let last = loop {
            let start = Instant::now();

            let events = input.poll(self.tick_id + 1);
            let frame = self.tick(&events);

            if self.quit {
                info!(ticks = self.tick_id, "game loop stopped by quit");
                break frame;
            }
            if self.max_ticks > 0 && self.tick_id >= self.max_ticks {
                info!(ticks = self.tick_id, "game loop complete");
                break frame;
            }

            let elapsed = start.elapsed();
            if elapsed < tick_duration {
                std::thread::sleep(tick_duration - elapsed);
            } else {
                warn!(
                    tick_id = self.tick_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = tick_duration.as_millis() as u64,
                    "tick exceeded frame budget"
                );
            }
        };

        Ok(last)
    }
}

#[cfg(test)]
mod tests {
    use pgg_ecs::components::{ProvinceInfo, Selected};
    use pgg_systems::PlayerSpec;

    use super::*;
    use crate::input::ScriptedInput;

    fn small_config() -> GameConfig {
        GameConfig {
            screen_width: 128,
            screen_height: 64,
            tile_size: 32,
            fps: 1000.0,
            skip_probability: 0.0,
            seed: Some(7),
            players: vec![PlayerSpec::named("Red"), PlayerSpec::named("Cyan")],
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_starts_in_menu_with_players_only() {
        let mut engine = Engine::new(small_config(), 0);
        assert_eq!(engine.state(), GameState::Menu);
        assert_eq!(engine.tick(&[]), Frame::Menu(MenuPanel::default()));
        assert_eq!(engine.world().entity_count(), 2);
        assert!(!engine.turns().is_initialized());
    }

    #[test]
    fn test_game_input_ignored_in_menu() {
        let mut engine = Engine::new(small_config(), 0);
        engine.tick(&[InputEvent::EndTurn, InputEvent::Click { x: 1, y: 1 }]);
        assert_eq!(engine.state(), GameState::Menu);
        assert!(engine.world().query::<(Selected,)>().is_empty());
    }

    #[test]
    fn test_confirm_generates_map_and_turns() {
        let mut engine = Engine::new(small_config(), 0);
        let frame = engine.tick(&[InputEvent::Confirm]);

        let Frame::Game { commands, turn, province } = frame else {
            panic!("expected game frame");
        };
        assert_eq!(commands.len(), 8);
        assert_eq!(turn.map(|t| t.player_name), Some("Red".to_string()));
        assert_eq!(province, None);
    }

    #[test]
    fn test_end_turn_and_click() {
        let mut engine = Engine::new(small_config(), 0);
        engine.tick(&[InputEvent::Confirm]);
        let frame = engine.tick(&[InputEvent::EndTurn, InputEvent::Click { x: 70, y: 40 }]);

        let Frame::Game { turn, province, .. } = frame else {
            panic!("expected game frame");
        };
        assert_eq!(turn.map(|t| t.player_name), Some("Cyan".to_string()));
        assert_eq!(province.map(|p| p.name), Some(ProvinceInfo::grid_name(2, 1)));
    }

    #[test]
    fn test_run_stops_at_max_ticks() {
        let mut engine = Engine::new(small_config(), 5);
        let mut input = ScriptedInput::default();
        let last = engine.run(&mut input).unwrap();
        assert_eq!(engine.tick_id(), 5);
        assert!(matches!(last, Frame::Menu(_)));
    }

    #[test]
    fn test_run_stops_on_quit() {
        let mut engine = Engine::new(small_config(), 0);
        let mut input: ScriptedInput = "confirm,wait,space,quit,space".parse().unwrap();
        engine.run(&mut input).unwrap();
        assert!(engine.quit_requested());
        assert_eq!(engine.tick_id(), 4);
        assert_eq!(input.remaining(), 1);
        assert_eq!(engine.turns().current_index(), Some(1));
    }

    #[test]
    fn test_run_refuses_unrepresentable_frame_time() {
        let config = GameConfig {
            fps: 1e-20,
            ..small_config()
        };
        let mut engine = Engine::new(config, 1);
        let mut input = ScriptedInput::default();
        assert!(matches!(
            engine.run(&mut input),
            Err(ConfigError::Invalid(_))
        ));
        assert_eq!(engine.tick_id(), 0);
    }
}
