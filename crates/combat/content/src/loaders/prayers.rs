//! Prayer table loader.

use std::collections::BTreeMap;
use std::path::Path;

use combat_core::env::{PrayerDefinition, PrayerId};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Prayer table structure for RON files.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrayerCatalog {
    pub prayers: BTreeMap<PrayerId, PrayerDefinition>,
}

/// Loader for prayer multipliers from RON files.
pub struct PrayerLoader;

impl PrayerLoader {
    /// Load the prayer table from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a PrayerCatalog
    pub fn load(path: &Path) -> LoadResult<BTreeMap<PrayerId, PrayerDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse the prayer table from RON text. Every multiplier must be positive.
    pub fn parse(content: &str) -> LoadResult<BTreeMap<PrayerId, PrayerDefinition>> {
        let catalog: PrayerCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse prayer table RON: {}", e))?;

        for (id, definition) in &catalog.prayers {
            for (stat, multiplier) in &definition.effects {
                anyhow::ensure!(
                    multiplier.is_finite() && *multiplier > 0.0,
                    "prayer '{}' has an invalid {} multiplier {}",
                    id,
                    stat,
                    multiplier
                );
            }
        }

        tracing::debug!(count = catalog.prayers.len(), "loaded prayer table");
        Ok(catalog.prayers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::env::PrayerStat;

    #[test]
    fn parses_multipliers() {
        let text = r#"(prayers: { "Piety": (effects: { attack: 1.2, defence: 1.25 }) })"#;
        let prayers = PrayerLoader::parse(text).unwrap();

        let piety = &prayers[&PrayerId::Piety];
        assert_eq!(piety.effects[&PrayerStat::Attack], 1.2);
        assert_eq!(piety.effects[&PrayerStat::Defence], 1.25);
        assert!(!piety.effects.contains_key(&PrayerStat::Strength));
    }

    #[test]
    fn rejects_zero_multiplier() {
        let text = r#"(prayers: { "Piety": (effects: { attack: 0.0 }) })"#;
        assert!(PrayerLoader::parse(text).is_err());
    }

    #[test]
    fn rejects_unknown_stat() {
        let text = r#"(prayers: { "Piety": (effects: { luck: 1.1 }) })"#;
        assert!(PrayerLoader::parse(text).is_err());
    }
}
