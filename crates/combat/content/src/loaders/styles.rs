//! Attack style table loader.

use std::collections::BTreeMap;
use std::path::Path;

use combat_core::env::{AttackStyle, WeaponCategory};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Attack style table structure for RON files.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttackStyleCatalog {
    pub styles: BTreeMap<WeaponCategory, Vec<AttackStyle>>,
}

/// Loader for per-category attack styles from RON files.
pub struct AttackStyleLoader;

impl AttackStyleLoader {
    /// Load the attack style table from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an AttackStyleCatalog
    pub fn load(path: &Path) -> LoadResult<BTreeMap<WeaponCategory, Vec<AttackStyle>>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse the attack style table from RON text.
    ///
    /// Every category needs at least one style, and every style must describe
    /// a legal vertex.
    pub fn parse(content: &str) -> LoadResult<BTreeMap<WeaponCategory, Vec<AttackStyle>>> {
        let catalog: AttackStyleCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse attack style RON: {}", e))?;

        for (category, styles) in &catalog.styles {
            anyhow::ensure!(!styles.is_empty(), "category '{category}' has no attack styles");
            for style in styles {
                style.vertex().validate().map_err(|e| {
                    anyhow::anyhow!("style '{}' of '{}' is invalid: {}", style.name, category, e)
                })?;
            }
        }

        tracing::debug!(count = catalog.styles.len(), "loaded attack styles");
        Ok(catalog.styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{CombatClass, CombatStyle, DamageType};

    #[test]
    fn parses_styles_in_order() {
        let styles = AttackStyleLoader::parse(
            r#"(styles: { "Whip": [
                (name: "Flick", class: Melee, style: Accurate, damage_type: Slash),
                (name: "Lash", class: Melee, style: Controlled, damage_type: Slash),
            ] })"#,
        )
        .unwrap();

        let whip = &styles[&WeaponCategory::Whip];
        assert_eq!(whip.len(), 2);
        assert_eq!(whip[1].name, "Lash");
        let lash = whip[1].vertex();
        assert_eq!(lash.class, CombatClass::Melee);
        assert_eq!(lash.style, CombatStyle::Controlled);
        assert_eq!(lash.damage_type, DamageType::Slash);
    }

    #[test]
    fn rejects_illegal_vertex() {
        let text = r#"(styles: { "Bow": [
            (name: "Rapid", class: Ranged, style: Rapid, damage_type: Slash),
        ] })"#;
        let err = AttackStyleLoader::parse(text).unwrap_err();
        assert!(err.to_string().contains("Rapid"));
    }

    #[test]
    fn rejects_empty_category() {
        assert!(AttackStyleLoader::parse(r#"(styles: { "Bow": [] })"#).is_err());
    }
}
