//! Tunable constants, loadable from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::entities::Rect;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Width × height of one entity kind, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Game loop period in milliseconds.
    pub tick_ms: u64,
    /// Enemy spawn period in milliseconds.
    pub spawn_ms: u64,
    /// Vertical offset new enemies appear at; negative means above the screen.
    pub spawn_y: i32,

    pub player: Size,
    pub player_spawn_x: i32,
    pub player_spawn_y: i32,
    /// Pixels per tick along each held axis.
    pub player_speed: i32,

    pub enemy: Size,
    pub enemy_speed: i32,

    pub projectile: Size,
    pub projectile_speed: i32,

    /// Directory holding `player.txt`, `enemy.txt` and `projectile.txt`.
    pub assets_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 800,
            screen_height: 600,
            tick_ms: 10,
            spawn_ms: 2000,
            spawn_y: -20,
            player: Size::new(80, 80),
            player_spawn_x: 400,
            player_spawn_y: 500,
            player_speed: 2,
            enemy: Size::new(50, 50),
            enemy_speed: 1,
            projectile: Size::new(15, 75),
            projectile_speed: 5,
            assets_dir: PathBuf::from("assets"),
            log_file: PathBuf::from("space_shooter.log"),
        }
    }
}

impl GameConfig {
    /// Read and validate a TOML file.  Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: i64) -> Result<(), ConfigError> {
            if value > 0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid { field, reason: format!("must be positive, got {value}") })
            }
        }

        positive("screen_width", self.screen_width.into())?;
        positive("screen_height", self.screen_height.into())?;
        positive("tick_ms", self.tick_ms as i64)?;
        positive("spawn_ms", self.spawn_ms as i64)?;
        positive("player.width", self.player.width.into())?;
        positive("player.height", self.player.height.into())?;
        positive("enemy.width", self.enemy.width.into())?;
        positive("enemy.height", self.enemy.height.into())?;
        positive("projectile.width", self.projectile.width.into())?;
        positive("projectile.height", self.projectile.height.into())?;
        positive("enemy_speed", self.enemy_speed.into())?;
        positive("projectile_speed", self.projectile_speed.into())?;

        if self.player_speed < 0 {
            return Err(ConfigError::Invalid {
                field: "player_speed",
                reason: format!("must not be negative, got {}", self.player_speed),
            });
        }
        // A step longer than the field skips it entirely.
        let at_most = |field: &'static str, value: i32, limit: i32| {
            if value > limit {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be at most {limit}, got {value}"),
                })
            } else {
                Ok(())
            }
        };
        at_most("player_speed", self.player_speed, self.screen_width.min(self.screen_height))?;
        at_most("enemy_speed", self.enemy_speed, self.screen_height)?;
        at_most("projectile_speed", self.projectile_speed, self.screen_height)?;

        if self.player.width > self.screen_width || self.player.height > self.screen_height {
            return Err(ConfigError::Invalid {
                field: "player",
                reason: "player does not fit on the screen".to_string(),
            });
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn spawn_period(&self) -> Duration {
        Duration::from_millis(self.spawn_ms)
    }

    /// The visible play field.
    pub fn field(&self) -> Rect {
        Rect::new(0, 0, self.screen_width, self.screen_height)
    }
}
