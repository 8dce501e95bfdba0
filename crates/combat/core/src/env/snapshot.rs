//! Owned table snapshot implementing every oracle.
//!
//! Loaders (see the content crate) fill a [`TablesSnapshot`]; tests build one
//! directly with the `with_*` builders.

use std::collections::BTreeMap;

use super::{
    AttackStyle, AttackStyleOracle, BoostDefinition, BoostId, BoostOracle, PrayerDefinition,
    PrayerId, PrayerOracle, SpellDefinition, SpellId, SpellOracle, WeaponCategory,
};

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TablesSnapshot {
    pub spells: BTreeMap<SpellId, SpellDefinition>,
    pub boosts: BTreeMap<BoostId, BoostDefinition>,
    pub prayers: BTreeMap<PrayerId, PrayerDefinition>,
    pub styles: BTreeMap<WeaponCategory, Vec<AttackStyle>>,
}

impl TablesSnapshot {
    pub fn new(
        spells: BTreeMap<SpellId, SpellDefinition>,
        boosts: BTreeMap<BoostId, BoostDefinition>,
        prayers: BTreeMap<PrayerId, PrayerDefinition>,
        styles: BTreeMap<WeaponCategory, Vec<AttackStyle>>,
    ) -> Self {
        Self {
            spells,
            boosts,
            prayers,
            styles,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_spell(mut self, id: SpellId, max_hit: u32) -> Self {
        self.spells.insert(id, SpellDefinition::new(max_hit));
        self
    }

    pub fn with_boost(mut self, id: BoostId, definition: BoostDefinition) -> Self {
        self.boosts.insert(id, definition);
        self
    }

    pub fn with_prayer(mut self, id: PrayerId, definition: PrayerDefinition) -> Self {
        self.prayers.insert(id, definition);
        self
    }

    pub fn with_styles(mut self, category: WeaponCategory, styles: Vec<AttackStyle>) -> Self {
        self.styles.insert(category, styles);
        self
    }
}

impl SpellOracle for TablesSnapshot {
    fn spell(&self, id: SpellId) -> Option<&SpellDefinition> {
        self.spells.get(&id)
    }
}

impl BoostOracle for TablesSnapshot {
    fn boost(&self, id: BoostId) -> Option<&BoostDefinition> {
        self.boosts.get(&id)
    }
}

impl PrayerOracle for TablesSnapshot {
    fn prayer(&self, id: PrayerId) -> Option<&PrayerDefinition> {
        self.prayers.get(&id)
    }
}

impl AttackStyleOracle for TablesSnapshot {
    fn styles(&self, category: WeaponCategory) -> Option<&[AttackStyle]> {
        self.styles.get(&category).map(Vec::as_slice)
    }
}
