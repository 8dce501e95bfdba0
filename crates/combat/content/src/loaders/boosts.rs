//! Boost table loader.

use std::collections::BTreeMap;
use std::path::Path;

use combat_core::env::{BoostDefinition, BoostId};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Boost table structure for RON files.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoostCatalog {
    pub boosts: BTreeMap<BoostId, BoostDefinition>,
}

/// Loader for boost effects from RON files.
pub struct BoostLoader;

impl BoostLoader {
    /// Load the boost table from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a BoostCatalog
    pub fn load(path: &Path) -> LoadResult<BTreeMap<BoostId, BoostDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse the boost table from RON text.
    pub fn parse(content: &str) -> LoadResult<BTreeMap<BoostId, BoostDefinition>> {
        let catalog: BoostCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse boost table RON: {}", e))?;

        for (id, definition) in &catalog.boosts {
            for (level, effect) in &definition.effects {
                anyhow::ensure!(
                    effect.multiplier.is_finite() && effect.multiplier >= 0.0,
                    "boost '{}' has an invalid {} multiplier {}",
                    id,
                    level,
                    effect.multiplier
                );
            }
        }

        tracing::debug!(count = catalog.boosts.len(), "loaded boost table");
        Ok(catalog.boosts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::env::{BoostEffect, BoostableLevel};

    #[test]
    fn missing_fields_default_to_identity() {
        let boosts = BoostLoader::parse(
            r#"(boosts: { "Magic potion": (effects: { magic: (flat: 4) }) })"#,
        )
        .unwrap();

        let effect = boosts[&BoostId::MagicPotion].effects[&BoostableLevel::Magic];
        assert_eq!(effect, BoostEffect::new(1.0, 4));
    }

    #[test]
    fn rejects_negative_multiplier() {
        let err = BoostLoader::parse(
            r#"(boosts: { "Zamorak brew": (effects: { defence: (multiplier: -0.9) }) })"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Zamorak brew"));
    }

    #[test]
    fn rejects_unknown_boost() {
        let err = BoostLoader::parse(r#"(boosts: { "Elixir": (effects: {}) })"#).unwrap_err();
        assert!(err.to_string().contains("Elixir"));
    }
}
