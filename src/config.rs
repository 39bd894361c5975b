//! Game tuning and startup validation
//!
//! All tunables live here so a session can be built from JSON. A config
//! that fails `validate` must never reach the simulation; `GameSession::new`
//! refuses to start with it.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A config problem that prevents the session from starting
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{0} bounds are inverted (min > max)")]
    InvertedBounds(&'static str),
    #[error("{0} must be at least 1")]
    ZeroSize(&'static str),
    #[error("config is not valid JSON: {0}")]
    Json(String),
}

/// Steady-state population rules for one enemy kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnPolicy {
    /// Maximum live instances of this kind
    pub max_count: u32,
    /// Seconds between ramp-up spawns
    pub spawn_interval: f32,
    /// Seconds before the first ramp-up spawn
    pub initial_delay: f32,
    /// Seconds between a consumption and its replacement spawn
    pub respawn_delay: f32,
}

impl SpawnPolicy {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("spawn_interval", self.spawn_interval),
            ("initial_delay", self.initial_delay),
            ("respawn_delay", self.respawn_delay),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field: name, value });
            }
        }
        Ok(())
    }
}

/// Player tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Movement speed (units/sec)
    pub move_speed: f32,
    /// Starting size
    pub start_size: u32,
    /// Where the player appears at session start
    pub spawn_position: Vec2,
}

/// Wandering enemy tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WanderConfig {
    /// Movement speed while in the Moving phase (units/sec)
    pub speed: f32,
    /// Size range: sampled uniformly from [min_size, max_size)
    pub min_size: u32,
    pub max_size: u32,
    /// Moving phase duration range (seconds)
    pub min_move_duration: f32,
    pub max_move_duration: f32,
    /// Idle phase duration range (seconds)
    pub min_idle_duration: f32,
    pub max_idle_duration: f32,
}

/// Complete game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub wander: WanderConfig,
    /// Population rules for wandering enemies
    pub wandering_spawns: SpawnPolicy,
    /// Population rules for stationary enemies (only `max_count` applies;
    /// they spawn once, synchronously, at session start)
    pub stationary_spawns: SpawnPolicy,
    /// Inset applied to the boundary so entities keep clear of the borders
    pub boundary_padding: f32,
    /// Sprite scale (and so contact diameter) per size unit
    pub scale_increment: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig {
                move_speed: 5.0,
                start_size: 3,
                spawn_position: Vec2::ZERO,
            },
            wander: WanderConfig {
                speed: 2.0,
                min_size: 1,
                max_size: 6,
                min_move_duration: 1.0,
                max_move_duration: 3.0,
                min_idle_duration: 0.5,
                max_idle_duration: 2.0,
            },
            wandering_spawns: SpawnPolicy {
                max_count: 10,
                spawn_interval: 2.0,
                initial_delay: 1.0,
                respawn_delay: 1.0,
            },
            stationary_spawns: SpawnPolicy {
                max_count: 8,
                spawn_interval: 0.0,
                initial_delay: 0.0,
                respawn_delay: 0.0,
            },
            boundary_padding: 0.5,
            scale_increment: 0.3,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every startup invariant. Any error here is fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player.move_speed <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "player.move_speed",
                value: self.player.move_speed,
            });
        }
        if self.player.start_size == 0 {
            return Err(ConfigError::ZeroSize("player.start_size"));
        }
        if self.scale_increment <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "scale_increment",
                value: self.scale_increment,
            });
        }
        if self.boundary_padding < 0.0 {
            return Err(ConfigError::Negative {
                field: "boundary_padding",
                value: self.boundary_padding,
            });
        }

        let w = &self.wander;
        if w.speed <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "wander.speed",
                value: w.speed,
            });
        }
        if w.min_size == 0 {
            return Err(ConfigError::ZeroSize("wander.min_size"));
        }
        if w.min_size > w.max_size {
            return Err(ConfigError::InvertedBounds("wander size"));
        }
        for (name, value) in [
            ("wander.min_move_duration", w.min_move_duration),
            ("wander.max_move_duration", w.max_move_duration),
            ("wander.min_idle_duration", w.min_idle_duration),
            ("wander.max_idle_duration", w.max_idle_duration),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field: name, value });
            }
        }
        if w.min_move_duration > w.max_move_duration {
            return Err(ConfigError::InvertedBounds("wander move duration"));
        }
        if w.min_idle_duration > w.max_idle_duration {
            return Err(ConfigError::InvertedBounds("wander idle duration"));
        }

        self.wandering_spawns.validate()?;
        self.stationary_spawns.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_negative_interval_is_fatal() {
        let mut config = GameConfig::default();
        config.wandering_spawns.spawn_interval = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { .. })
        ));
    }

    #[test]
    fn test_inverted_size_bounds_are_fatal() {
        let mut config = GameConfig::default();
        config.wander.min_size = 9;
        config.wander.max_size = 3;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedBounds("wander size"))
        );
    }

    #[test]
    fn test_inverted_duration_bounds_are_fatal() {
        let mut config = GameConfig::default();
        config.wander.min_idle_duration = 5.0;
        config.wander.max_idle_duration = 1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedBounds("wander idle duration"))
        );
    }

    #[test]
    fn test_zero_start_size_is_fatal() {
        let mut config = GameConfig::default();
        config.player.start_size = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroSize("player.start_size"))
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = GameConfig::from_json(&json).unwrap();
        assert_eq!(parsed.wandering_spawns.max_count, 10);
        assert_eq!(parsed.player.start_size, config.player.start_size);
    }

    #[test]
    fn test_garbage_json_is_rejected() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
