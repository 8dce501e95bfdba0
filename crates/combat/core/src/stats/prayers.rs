//! Prayer resolution.
//!
//! Active prayers fold into one multiplier per [`PrayerStat`]. Each stat may be
//! driven by at most one prayer; exclusivity between prayer groups is left to
//! the caller.

use std::collections::BTreeSet;

use strum::EnumCount;

use super::StatError;
use crate::env::{PrayerId, PrayerOracle, PrayerStat};

/// Per-stat multipliers from the active prayers. Unset stats are 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerMultipliers {
    values: [f64; PrayerStat::COUNT],
}

impl PrayerMultipliers {
    pub const NEUTRAL: Self = Self {
        values: [1.0; PrayerStat::COUNT],
    };

    #[inline]
    pub fn get(&self, stat: PrayerStat) -> f64 {
        self.values[stat as usize]
    }

    fn slot_mut(&mut self, stat: PrayerStat) -> &mut f64 {
        &mut self.values[stat as usize]
    }

    pub fn attack(&self) -> f64 {
        self.get(PrayerStat::Attack)
    }

    pub fn strength(&self) -> f64 {
        self.get(PrayerStat::Strength)
    }

    pub fn defence(&self) -> f64 {
        self.get(PrayerStat::Defence)
    }

    pub fn ranged_attack(&self) -> f64 {
        self.get(PrayerStat::RangedAttack)
    }

    pub fn ranged_strength(&self) -> f64 {
        self.get(PrayerStat::RangedStrength)
    }

    pub fn magic_attack(&self) -> f64 {
        self.get(PrayerStat::MagicAttack)
    }

    pub fn magic_strength(&self) -> f64 {
        self.get(PrayerStat::MagicStrength)
    }

    pub fn magic_defence(&self) -> f64 {
        self.get(PrayerStat::MagicDefence)
    }
}

impl Default for PrayerMultipliers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Folds every active prayer into one set of multipliers.
///
/// # Errors
///
/// - `StatError::UnknownPrayer` if a prayer has no definition in `table`
/// - `StatError::ConflictingPrayer` if two prayers set the same stat
pub fn resolve_prayers(
    active: &BTreeSet<PrayerId>,
    table: &(impl PrayerOracle + ?Sized),
) -> Result<PrayerMultipliers, StatError> {
    let mut multipliers = PrayerMultipliers::NEUTRAL;

    for &id in active {
        let definition = table
            .prayer(id)
            .ok_or_else(|| StatError::UnknownPrayer(id.to_string()))?;

        for (&stat, &value) in &definition.effects {
            let slot = multipliers.slot_mut(stat);
            if *slot != 1.0 && value != 1.0 {
                return Err(StatError::ConflictingPrayer {
                    prayer: id.to_string(),
                    stat: stat.into(),
                });
            }
            if value != 1.0 {
                *slot = value;
            }
        }
    }

    Ok(multipliers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PrayerDefinition, TablesSnapshot};

    fn table() -> TablesSnapshot {
        TablesSnapshot::empty()
            .with_prayer(
                PrayerId::Piety,
                PrayerDefinition::new([
                    (PrayerStat::Attack, 1.2),
                    (PrayerStat::Strength, 1.23),
                    (PrayerStat::Defence, 1.25),
                ]),
            )
            .with_prayer(
                PrayerId::Chivalry,
                PrayerDefinition::new([
                    (PrayerStat::Attack, 1.15),
                    (PrayerStat::Strength, 1.18),
                    (PrayerStat::Defence, 1.2),
                ]),
            )
            .with_prayer(
                PrayerId::EagleEye,
                PrayerDefinition::new([
                    (PrayerStat::RangedAttack, 1.15),
                    (PrayerStat::RangedStrength, 1.15),
                ]),
            )
    }

    #[test]
    fn no_prayers_is_neutral() {
        let multipliers = resolve_prayers(&BTreeSet::new(), &table()).unwrap();
        assert_eq!(multipliers, PrayerMultipliers::NEUTRAL);
    }

    #[test]
    fn disjoint_prayers_combine() {
        let active = BTreeSet::from([PrayerId::Piety, PrayerId::EagleEye]);
        let multipliers = resolve_prayers(&active, &table()).unwrap();

        assert_eq!(multipliers.strength(), 1.23);
        assert_eq!(multipliers.ranged_attack(), 1.15);
        assert_eq!(multipliers.magic_attack(), 1.0);
    }

    #[test]
    fn overlapping_prayers_conflict() {
        let active = BTreeSet::from([PrayerId::Piety, PrayerId::Chivalry]);
        let err = resolve_prayers(&active, &table()).unwrap_err();

        assert!(matches!(err, StatError::ConflictingPrayer { stat: "attack", .. }));
    }

    #[test]
    fn missing_definition_is_unknown_prayer() {
        let active = BTreeSet::from([PrayerId::Augury]);
        let err = resolve_prayers(&active, &table()).unwrap_err();

        assert_eq!(err, StatError::UnknownPrayer("Augury".into()));
    }
}
