//! Game configuration.
//!
//! [`GameConfig`] carries the screen, grid and pacing constants plus the
//! player roster. Every field has a default, so a JSON file only needs to
//! name the values it changes.

use std::path::Path;
use std::time::Duration;

use pgg_ecs::components::Color;
use serde::Deserialize;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`GameConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// One entry of the player roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerSpec {
    /// Display name.
    pub name: String,
    /// Colour; defaults to the palette colour for the player's seat.
    #[serde(default)]
    pub color: Option<Color>,
    /// Turn rank; defaults to the player's position in the roster.
    #[serde(default)]
    pub turn_order: Option<i32>,
    /// Starting gold; defaults to [`pgg_ecs::components::DEFAULT_GOLD`].
    #[serde(default)]
    pub gold: Option<i32>,
}

impl PlayerSpec {
    /// A player with every optional field left at its default.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            turn_order: None,
            gold: None,
        }
    }

    /// Set an explicit turn rank.
    #[must_use]
    pub fn with_turn_order(mut self, turn_order: i32) -> Self {
        self.turn_order = Some(turn_order);
        self
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window title.
    pub title: String,
    /// Screen width in pixels.
    pub screen_width: i32,
    /// Screen height in pixels.
    pub screen_height: i32,
    /// Side of one map tile in pixels.
    pub tile_size: i32,
    /// Target frames per second.
    pub fps: f64,
    /// Probability that a grid cell is left empty.
    pub skip_probability: f64,
    /// Seed for map generation; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Player roster.
    pub players: Vec<PlayerSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Procedural Generation Strategy Game".to_string(),
            screen_width: 1280,
            screen_height: 720,
            tile_size: 32,
            fps: 60.0,
            skip_probability: 0.1,
            seed: None,
            players: vec![PlayerSpec::named("Player 1"), PlayerSpec::named("Player 2")],
        }
    }
}

impl GameConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Number of tile columns that fit on screen.
    #[must_use]
    pub fn grid_width(&self) -> i32 {
        self.screen_width / self.tile_size
    }

    /// Number of tile rows that fit on screen.
    #[must_use]
    pub fn grid_height(&self) -> i32 {
        self.screen_height / self.tile_size
    }

    /// Time budget of one frame at the configured rate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `fps` is not positive or is so
    /// small that one frame does not fit in a [`Duration`].
    pub fn frame_duration(&self) -> Result<Duration, ConfigError> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fps must be positive, got {}",
                self.fps
            )));
        }
        Duration::try_from_secs_f64(1.0 / self.fps).map_err(|_| {
            ConfigError::Invalid(format!("fps {} gives an unrepresentable frame time", self.fps))
        })
    }

    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.screen_width < 0 || self.screen_height < 0 {
            return Err(ConfigError::Invalid(format!(
                "screen size must not be negative, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        self.frame_duration()?;
        if !(0.0..=1.0).contains(&self.skip_probability) {
            return Err(ConfigError::Invalid(format!(
                "skip_probability must be within [0, 1], got {}",
                self.skip_probability
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgg_ecs::components::palette;

    #[test]
    fn test_default_grid() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width(), 40);
        assert_eq!(config.grid_height(), 22);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "tile_size": 64, "seed": 7 }"#).unwrap();
        assert_eq!(config.tile_size, 64);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.screen_width, 1280);
        assert_eq!(config.players.len(), 2);
    }

    #[test]
    fn test_players_from_json() {
        let config = GameConfig::from_json_str(
            r##"{ "players": [
                { "name": "Red", "color": "#e63946", "turn_order": 1 },
                { "name": "Blue", "gold": 250 }
            ] }"##,
        )
        .unwrap();
        assert_eq!(config.players[0].color, Some(palette::PLAYER_ONE));
        assert_eq!(config.players[0].turn_order, Some(1));
        assert_eq!(config.players[1].gold, Some(250));
        assert_eq!(config.players[1].color, None);
    }

    #[test]
    fn test_bad_colour_is_a_parse_error() {
        let err = GameConfig::from_json_str(r#"{ "players": [ { "name": "X", "color": "red" } ] }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let err = GameConfig::from_json_str(r#"{ "tile_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = GameConfig {
            skip_probability: 1.5,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            fps: 0.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_tiny_fps() {
        let config = GameConfig {
            fps: 1e-20,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(config.frame_duration().is_err());
    }

    #[test]
    fn test_frame_duration() {
        let config = GameConfig {
            fps: 4.0,
            ..GameConfig::default()
        };
        assert_eq!(config.frame_duration().unwrap(), Duration::from_millis(250));
    }
}
