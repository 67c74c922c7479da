//! Gameplay limits supplied by the configuration provider.
//!
//! `Limits` carries the process-wide constants the Player operations clamp
//! against. Values are read once (usually from a TOML file at startup) and are
//! read-only afterwards.
//!
//! ```toml
//! max_health = 100
//! magazine_size = 20
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Default upper bound for `Player::health`.
pub const MAX_HEALTH: i32 = 100;

/// Default magazine capacity.
pub const MAGAZINE_SIZE: i32 = 20;

/// Errors raised while loading [`Limits`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid limits config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A limit was zero or negative.
    #[error("limit `{name}` must be positive, got {value}")]
    InvalidLimit { name: &'static str, value: i32 },
}

/// Read-only gameplay constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Upper bound for health.
    pub max_health: i32,
    /// Capacity of the magazine.
    pub magazine_size: i32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_health: MAX_HEALTH,
            magazine_size: MAGAZINE_SIZE,
        }
    }
}

impl Limits {
    /// Parse limits from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let limits: Limits = toml::from_str(source)?;
        limits.validate()?;
        tracing::info!(
            max_health = limits.max_health,
            magazine_size = limits.magazine_size,
            "loaded gameplay limits"
        );
        Ok(limits)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health <= 0 {
            return Err(ConfigError::InvalidLimit {
                name: "max_health",
                value: self.max_health,
            });
        }
        if self.magazine_size <= 0 {
            return Err(ConfigError::InvalidLimit {
                name: "magazine_size",
                value: self.magazine_size,
            });
        }
        Ok(())
    }
}
