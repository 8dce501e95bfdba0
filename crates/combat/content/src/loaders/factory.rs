//! Content factory for building combat tables from data files.

use std::path::{Path, PathBuf};

use combat_core::{CombatConfig, CombatEnv, TablesSnapshot};

use crate::loaders::{
    AttackStyleLoader, BoostLoader, ConfigLoader, LoadResult, PrayerLoader, SpellLoader,
};

const BUNDLED_SPELLS: &str = include_str!("../../data/spells.ron");
const BUNDLED_BOOSTS: &str = include_str!("../../data/boosts.ron");
const BUNDLED_PRAYERS: &str = include_str!("../../data/prayers.ron");
const BUNDLED_STYLES: &str = include_str!("../../data/attack_styles.ron");
const BUNDLED_CONFIG: &str = include_str!("../../data/config.toml");

/// Loaded tables plus configuration; hands out a [`CombatEnv`] per calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub tables: TablesSnapshot,
    pub config: CombatConfig,
}

impl Content {
    pub fn env(&self) -> CombatEnv<'_> {
        CombatEnv::from_snapshot(&self.tables, &self.config)
    }
}

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── spells.ron
/// ├── boosts.ron
/// ├── prayers.ron
/// └── attack_styles.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Builds content from the data files compiled into this crate.
    pub fn bundled() -> LoadResult<Content> {
        let tables = TablesSnapshot::new(
            SpellLoader::parse(BUNDLED_SPELLS)?,
            BoostLoader::parse(BUNDLED_BOOSTS)?,
            PrayerLoader::parse(BUNDLED_PRAYERS)?,
            AttackStyleLoader::parse(BUNDLED_STYLES)?,
        );
        let config = ConfigLoader::parse(BUNDLED_CONFIG)?;

        tracing::info!("loaded bundled combat content");
        Ok(Content { tables, config })
    }

    /// Load every table and the config from the data directory.
    pub fn load(&self) -> LoadResult<Content> {
        let tables = TablesSnapshot::new(
            SpellLoader::load(&self.data_dir.join("spells.ron"))?,
            BoostLoader::load(&self.data_dir.join("boosts.ron"))?,
            PrayerLoader::load(&self.data_dir.join("prayers.ron"))?,
            AttackStyleLoader::load(&self.data_dir.join("attack_styles.ron"))?,
        );
        let config = self.load_config()?;

        tracing::info!(data_dir = %self.data_dir.display(), "loaded combat content");
        Ok(Content { tables, config })
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_content_loads() {
        let content = ContentFactory::bundled().unwrap();
        assert_eq!(content.tables.spells.len(), 40);
        assert_eq!(content.tables.boosts.len(), 16);
        assert_eq!(content.tables.prayers.len(), 19);
        assert_eq!(content.tables.styles.len(), 28);
        assert_eq!(content.config, CombatConfig::default());
    }

    #[test]
    fn missing_directory_reports_path() {
        let err = ContentFactory::new("/nonexistent/combat-data").load().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/combat-data"));
    }
}
