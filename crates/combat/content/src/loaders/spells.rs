//! Spell table loader.

use std::collections::BTreeMap;
use std::path::Path;

use combat_core::env::{SpellDefinition, SpellId};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Spell table structure for RON files.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpellCatalog {
    pub spells: BTreeMap<SpellId, SpellDefinition>,
}

/// Loader for spell max hits from RON files.
pub struct SpellLoader;

impl SpellLoader {
    /// Load the spell table from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a SpellCatalog
    pub fn load(path: &Path) -> LoadResult<BTreeMap<SpellId, SpellDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse the spell table from RON text. Unknown spell names are rejected.
    pub fn parse(content: &str) -> LoadResult<BTreeMap<SpellId, SpellDefinition>> {
        let catalog: SpellCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell table RON: {}", e))?;

        tracing::debug!(count = catalog.spells.len(), "loaded spell table");
        Ok(catalog.spells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names() {
        let spells = SpellLoader::parse(
            r#"(spells: { "Fire Surge": (max_hit: 24), "Ice Barrage": (max_hit: 30) })"#,
        )
        .unwrap();

        assert_eq!(spells[&SpellId::FireSurge].max_hit, 24);
        assert_eq!(spells[&SpellId::IceBarrage].max_hit, 30);
    }

    #[test]
    fn rejects_unknown_spell() {
        let err = SpellLoader::parse(r#"(spells: { "Fire Storm": (max_hit: 24) })"#).unwrap_err();
        assert!(err.to_string().contains("Fire Storm"));
    }

    #[test]
    fn rejects_unknown_field() {
        let text = r#"(spells: { "Fire Surge": (max_hit: 24, speed: 5) })"#;
        assert!(SpellLoader::parse(text).is_err());
    }
}
