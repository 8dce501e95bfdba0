//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing CombatConfig
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text. Missing keys keep their defaults.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.seconds_per_tick.is_finite() && config.seconds_per_tick > 0.0,
            "seconds_per_tick must be positive, got {}",
            config.seconds_per_tick
        );
        anyhow::ensure!(config.unarmed_speed > 0, "unarmed_speed must be positive");
        anyhow::ensure!(
            config.spell_cast_speed > 0,
            "spell_cast_speed must be positive"
        );

        tracing::debug!(?config, "loaded combat config");
        Ok(config)
    }
}
