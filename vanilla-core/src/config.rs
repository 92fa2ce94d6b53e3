//! Server configuration, read from a JSON5 file.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::fluid::FluidState;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/vanilla_config.json5");

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or created.
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid JSON5 for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// What a fluid writes into air directly below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownwardSpread {
    /// Flowing level 1, not falling.
    #[default]
    LevelOne,
    /// Level 1 with the falling flag set.
    Falling,
    /// A new source.
    Source,
}

impl DownwardSpread {
    /// The fluid state written below.
    #[must_use]
    pub const fn state(self) -> FluidState {
        match self {
            Self::LevelOne => FluidState::flowing(1),
            Self::Falling => FluidState {
                level: 1,
                falling: true,
            },
            Self::Source => FluidState::SOURCE,
        }
    }
}

/// Where a liquid block may be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// Anywhere.
    #[default]
    Always,
    /// Inside the world, onto air or a replaceable block that is not a liquid.
    Replaceable,
}

/// Fluid simulation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FluidConfig {
    /// Ticks between a neighbour change and the recomputation.
    pub recompute_delay_ticks: u32,
    /// Recomputations over this count in one game tick wait for the next.
    pub max_recomputations_per_tick: usize,
    /// State written into air below a fluid.
    pub downward_spread: DownwardSpread,
    /// Where liquids may be placed.
    pub placement_policy: PlacementPolicy,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            recompute_delay_ticks: 10,
            max_recomputations_per_tick: 65536,
            downward_spread: DownwardSpread::LevelOne,
            placement_policy: PlacementPolicy::Always,
        }
    }
}

/// Top level server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Name of the level, for logging.
    pub level_name: String,
    /// Lowest block y.
    pub min_y: i32,
    /// Number of block layers above `min_y`.
    pub height: u32,
    /// Game ticks per second.
    pub tick_rate: u32,
    /// Fluid simulation settings.
    pub fluid: FluidConfig,
}

impl ServerConfig {
    /// Reads the config at `path`, writing the default file there first if
    /// it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or created, does not parse,
    /// or fails [`ServerConfig::validate`].
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let config_str = if path.exists() {
            fs::read_to_string(path)?
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_CONFIG)?;
            log::info!("Created default config at {}", path.display());
            DEFAULT_CONFIG.to_string()
        };
        Self::parse(&config_str)
    }

    /// Parses and validates a JSON5 config.
    ///
    /// # Errors
    /// Returns an error if `source` does not parse or fails validation.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = serde_json5::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.height % 16 != 0 {
            return Err(ConfigError::Invalid(
                "height must be a positive multiple of 16",
            ));
        }
        if self.min_y % 16 != 0 {
            return Err(ConfigError::Invalid("min_y must be a multiple of 16"));
        }
        if !(1..=1000).contains(&self.tick_rate) {
            return Err(ConfigError::Invalid("tick_rate must be in range 1..=1000"));
        }
        if self.fluid.recompute_delay_ticks == 0 {
            return Err(ConfigError::Invalid(
                "fluid.recompute_delay_ticks must be at least 1",
            ));
        }
        if self.fluid.max_recomputations_per_tick == 0 {
            return Err(ConfigError::Invalid(
                "fluid.max_recomputations_per_tick must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            level_name: "world".to_string(),
            min_y: 0,
            height: 256,
            tick_rate: 20,
            fluid: FluidConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_matches_defaults() {
        let config = ServerConfig::parse(DEFAULT_CONFIG).expect("default config should parse");
        let defaults = ServerConfig::default();
        assert_eq!(config.level_name, defaults.level_name);
        assert_eq!(config.min_y, defaults.min_y);
        assert_eq!(config.height, defaults.height);
        assert_eq!(config.tick_rate, defaults.tick_rate);
        assert_eq!(config.fluid.recompute_delay_ticks, 10);
        assert_eq!(config.fluid.max_recomputations_per_tick, 65536);
        assert_eq!(config.fluid.downward_spread, DownwardSpread::LevelOne);
        assert_eq!(config.fluid.placement_policy, PlacementPolicy::Always);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = ServerConfig::parse("{ fluid: { downward_spread: \"falling\" } }")
            .expect("partial config should parse");
        assert_eq!(config.tick_rate, 20);
        assert_eq!(config.fluid.downward_spread, DownwardSpread::Falling);
        assert_eq!(config.fluid.recompute_delay_ticks, 10);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ServerConfig::parse("{ height: 100 }"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ServerConfig::parse("{ fluid: { recompute_delay_ticks: 0 } }"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ServerConfig::parse("{ fluid: { placement_policy: \"sometimes\" } }"),
            Err(ConfigError::Parse(_))
        ));
    }
}
