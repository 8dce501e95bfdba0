//! Boost resolution.
//!
//! Boosts never stack: for every stat the highest of the base level and each
//! active boost's result wins, so a boost can never lower a level.

use std::collections::BTreeSet;

use super::{Level, Levels, StatError};
use crate::env::{BoostDefinition, BoostId, BoostOracle, BoostableLevel};

/// Applies every active boost to `base` and returns the boosted levels.
///
/// # Errors
///
/// Returns `StatError::UnknownBoost` if a boost has no definition in `table`.
///
/// # Example
/// ```
/// # use std::collections::BTreeSet;
/// # use combat_core::env::{BoostDefinition, BoostEffect, BoostId, BoostableLevel, TablesSnapshot};
/// # use combat_core::stats::{Levels, apply_boosts};
/// let table = TablesSnapshot::empty().with_boost(
///     BoostId::SuperStrength,
///     BoostDefinition::new([(BoostableLevel::Strength, BoostEffect::new(1.15, 5))]),
/// );
/// let base = Levels { strength: 99, ..Levels::default() };
/// let boosted = apply_boosts(&base, &BTreeSet::from([BoostId::SuperStrength]), &table).unwrap();
/// assert_eq!(boosted.strength, 118);
/// ```
pub fn apply_boosts(
    base: &Levels,
    active: &BTreeSet<BoostId>,
    table: &(impl BoostOracle + ?Sized),
) -> Result<Levels, StatError> {
    let mut result = *base;

    for &id in active {
        let definition = table
            .boost(id)
            .ok_or_else(|| StatError::UnknownBoost(id.to_string()))?;

        for (stat, boosted) in boosted_values(base, definition) {
            let current = level_mut(&mut result, stat);
            if boosted > i64::from(*current) {
                *current = boosted as Level;
            }
        }
    }

    Ok(result)
}

/// Per-stat values one boost produces from the unboosted levels.
fn boosted_values(
    base: &Levels,
    definition: &BoostDefinition,
) -> impl Iterator<Item = (BoostableLevel, i64)> {
    definition.effects.iter().map(|(&stat, effect)| {
        let level = f64::from(level_of(base, stat));
        let boosted = (level * effect.multiplier).floor() as i64 + i64::from(effect.flat);
        (stat, boosted)
    })
}

fn level_of(levels: &Levels, stat: BoostableLevel) -> Level {
    match stat {
        BoostableLevel::Attack => levels.attack,
        BoostableLevel::Strength => levels.strength,
        BoostableLevel::Defence => levels.defence,
        BoostableLevel::Magic => levels.magic,
        BoostableLevel::Ranged => levels.ranged,
        BoostableLevel::Mining => levels.mining,
    }
}

fn level_mut(levels: &mut Levels, stat: BoostableLevel) -> &mut Level {
    match stat {
        BoostableLevel::Attack => &mut levels.attack,
        BoostableLevel::Strength => &mut levels.strength,
        BoostableLevel::Defence => &mut levels.defence,
        BoostableLevel::Magic => &mut levels.magic,
        BoostableLevel::Ranged => &mut levels.ranged,
        BoostableLevel::Mining => &mut levels.mining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BoostEffect, TablesSnapshot};

    fn table() -> TablesSnapshot {
        TablesSnapshot::empty()
            .with_boost(
                BoostId::SuperStrength,
                BoostDefinition::new([(BoostableLevel::Strength, BoostEffect::flat(5))]),
            )
            .with_boost(
                BoostId::StrengthPotion,
                BoostDefinition::new([(BoostableLevel::Strength, BoostEffect::flat(2))]),
            )
            .with_boost(
                BoostId::ZamorakBrew,
                BoostDefinition::new([
                    (BoostableLevel::Attack, BoostEffect::new(1.2, 2)),
                    (BoostableLevel::Defence, BoostEffect::new(0.9, -2)),
                ]),
            )
    }

    fn base() -> Levels {
        Levels {
            attack: 80,
            strength: 10,
            defence: 70,
            ..Levels::default()
        }
    }

    #[test]
    fn highest_boost_wins_without_stacking() {
        let active = BTreeSet::from([BoostId::SuperStrength, BoostId::StrengthPotion]);
        let boosted = apply_boosts(&base(), &active, &table()).unwrap();

        // 10 + 5 beats 10 + 2, and the two are not summed
        assert_eq!(boosted.strength, 15);
    }

    #[test]
    fn draining_effects_never_lower_the_base_level() {
        let active = BTreeSet::from([BoostId::ZamorakBrew]);
        let boosted = apply_boosts(&base(), &active, &table()).unwrap();

        // floor(80 × 1.2) + 2
        assert_eq!(boosted.attack, 98);
        // floor(70 × 0.9) - 2 = 61 is below base
        assert_eq!(boosted.defence, 70);
    }

    #[test]
    fn untouched_stats_keep_base_level() {
        let active = BTreeSet::from([BoostId::SuperStrength]);
        let boosted = apply_boosts(&base(), &active, &table()).unwrap();

        assert_eq!(boosted.attack, 80);
        assert_eq!(boosted.magic, 1);
    }

    #[test]
    fn missing_definition_is_unknown_boost() {
        let active = BTreeSet::from([BoostId::SmellingSalts]);
        let err = apply_boosts(&base(), &active, &table()).unwrap_err();

        assert_eq!(err, StatError::UnknownBoost("Smelling salts".into()));
    }
}
