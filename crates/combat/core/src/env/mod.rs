//! Traits describing read-only game data.
//!
//! Oracles expose spell damage, boost and prayer effects, and per-category
//! attack styles. The [`CombatEnv`] aggregate bundles them with the
//! [`CombatConfig`] so the pipeline can reach everything it needs without
//! hard coupling to concrete table implementations.
mod boosts;
mod prayers;
mod snapshot;
mod spells;
mod styles;

pub use boosts::{BoostDefinition, BoostEffect, BoostId, BoostOracle, BoostableLevel};
pub use prayers::{PrayerDefinition, PrayerId, PrayerOracle, PrayerStat};
pub use snapshot::TablesSnapshot;
pub use spells::{SpellDefinition, SpellId, SpellOracle};
pub use styles::{AttackStyle, AttackStyleOracle, WeaponCategory};

use crate::config::CombatConfig;

/// Aggregates the read-only oracles and configuration of one calculation.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    spells: &'a dyn SpellOracle,
    boosts: &'a dyn BoostOracle,
    prayers: &'a dyn PrayerOracle,
    styles: &'a dyn AttackStyleOracle,
    config: &'a CombatConfig,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        spells: &'a dyn SpellOracle,
        boosts: &'a dyn BoostOracle,
        prayers: &'a dyn PrayerOracle,
        styles: &'a dyn AttackStyleOracle,
        config: &'a CombatConfig,
    ) -> Self {
        Self {
            spells,
            boosts,
            prayers,
            styles,
            config,
        }
    }

    /// Serves every oracle from one snapshot.
    pub fn from_snapshot(tables: &'a TablesSnapshot, config: &'a CombatConfig) -> Self {
        Self::new(tables, tables, tables, tables, config)
    }

    pub fn spells(&self) -> &'a dyn SpellOracle {
        self.spells
    }

    pub fn boosts(&self) -> &'a dyn BoostOracle {
        self.boosts
    }

    pub fn prayers(&self) -> &'a dyn PrayerOracle {
        self.prayers
    }

    pub fn styles(&self) -> &'a dyn AttackStyleOracle {
        self.styles
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.config
    }
}

impl core::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
