//! The combat calculation pipeline.
//!
//! ```text
//! ActorData ─▶ Actor ─▶ attack/defend values ─▶ rolls ─▶ accuracy
//!                            ▲                    ▲          ▲
//!                            └──── ActiveModifiers ┴──────────┘
//! accuracy + max hit ─▶ basic distribution ─▶ distribution hooks ─▶ CombatResult
//! ```

use super::{
    AttackValues, CombatClass, CombatError, CombatValues, HitTracker, MaxHitData, Vertex,
    accuracy_roll, compare_rolls, max_hit_formula,
};
use crate::env::CombatEnv;
use crate::modifiers::{ActiveModifiers, ModifierContext};
use crate::state::{Actor, ActorData};
use crate::stats::StatError;

/// Outcome of one calculation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatResult {
    pub attack_roll: i64,
    pub defend_roll: i64,
    /// Hit chance in `[0, 1]`.
    pub accuracy: f64,
    /// Expected damage of one attack.
    pub average_damage: f64,
    /// Expected damage per second.
    pub dps: f64,
    /// Ticks between attacks.
    pub attack_speed: u32,
    pub max_hit: MaxHitData,
    /// Max hit of a proc outcome, when a modifier introduces one.
    pub max_hit_proc: Option<i32>,
}

/// Computes accuracy, damage distribution and dps of `attacker` hitting
/// `defender` with `vertex`.
///
/// # Errors
///
/// - [`CombatError::Stat`] when either actor fails to build or the attack
///   speed resolves to zero ticks
/// - [`CombatError::InvalidVertex`] for an inconsistent vertex
/// - [`CombatError::UnknownSpell`] when the spell is missing from the spell table
/// - [`CombatError::NoBaseMaxHit`] for a spell-less magic attack no modifier
///   supplies a max hit for
/// - [`CombatError::Tracker`] when a distribution hook breaks the tracker contract
pub fn calculate(
    attacker: &ActorData,
    defender: &ActorData,
    vertex: &Vertex,
    env: &CombatEnv<'_>,
) -> Result<CombatResult, CombatError> {
    vertex.validate()?;

    let attacker = Actor::new(attacker, env)?;
    let defender = Actor::new(defender, env)?;
    let modifiers = ActiveModifiers::new(ModifierContext::new(&attacker, &defender, vertex, *env));
    let config = env.config();

    let atk = modifiers.modify_attack_values(attacker.attack_values(vertex, config)?);
    if atk.attack_speed == 0 {
        return Err(StatError::validation(format!(
            "attack speed with '{}' resolves to 0 ticks",
            attacker.weapon_name()
        ))
        .into());
    }
    let def = modifiers.modify_defend_values(defender.defend_values(vertex));
    tracing::trace!(?atk, ?def, "modified combat values");

    let attack_roll = modifiers.modify_attack_roll(accuracy_roll(
        atk.accuracy.effective_level(),
        atk.accuracy.bonus,
    ));
    let defend_roll = modifiers.modify_defend_roll(accuracy_roll(def.level, def.bonus));
    let accuracy = modifiers.modify_accuracy(compare_rolls(attack_roll, defend_roll));

    let base_max_hit = match modifiers.base_max_hit() {
        Some(base) => base,
        None => unmodified_base_max_hit(&attacker, vertex, &atk, env)?,
    };
    let max_hit = modifiers
        .modify_max_hit(base_max_hit + modifiers.flat_max_hit_bonus())
        .max(0);

    let values = CombatValues {
        tracker: HitTracker::basic_distribution(accuracy, max_hit.unsigned_abs())?,
        attack_roll,
        defend_roll,
        max_hit,
        max_hit_proc: None,
        accuracy,
    };
    let values = modifiers.modify_damage_distribution(values)?;

    let attack_speed = atk.attack_speed;
    let average_damage = values.tracker.average_damage();
    let dps = average_damage / f64::from(attack_speed) / config.seconds_per_tick;

    tracing::debug!(
        attacker = attacker.name(),
        defender = defender.name(),
        vertex = ?vertex,
        modifiers = ?modifiers.names().collect::<Vec<_>>(),
        attack_roll,
        defend_roll,
        accuracy = values.accuracy,
        max_hit,
        dps,
        "combat calculated"
    );

    Ok(CombatResult {
        attack_roll: values.attack_roll,
        defend_roll: values.defend_roll,
        accuracy: values.accuracy,
        average_damage,
        dps,
        attack_speed,
        max_hit: values.tracker.max_hit_data(),
        max_hit_proc: values.max_hit_proc,
    })
}

/// Base max hit when no modifier supplies one.
fn unmodified_base_max_hit(
    attacker: &Actor,
    vertex: &Vertex,
    atk: &AttackValues,
    env: &CombatEnv<'_>,
) -> Result<i32, CombatError> {
    if vertex.class != CombatClass::Magic {
        return Ok(max_hit_formula(
            atk.strength.effective_level(),
            atk.strength.bonus,
        ));
    }

    match vertex.spell {
        Some(spell) => env
            .spells()
            .max_hit(spell)
            .map(|max_hit| max_hit as i32)
            .ok_or_else(|| CombatError::UnknownSpell(spell.to_string())),
        None => Err(CombatError::NoBaseMaxHit {
            weapon: attacker.weapon_name().to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{CombatStyle, DamageType};
    use crate::config::CombatConfig;
    use crate::env::{SpellId, TablesSnapshot, WeaponCategory};
    use crate::state::{EquipmentDefinition, WeaponData};
    use crate::stats::{BonusChannel, BonusVector, PartialLevels};

    fn tables() -> TablesSnapshot {
        TablesSnapshot::empty().with_spell(SpellId::FireSurge, 24)
    }

    fn maxed() -> ActorData {
        ActorData::new("Player").with_levels(PartialLevels {
            attack: Some(99),
            strength: Some(99),
            magic: Some(99),
            ..Default::default()
        })
    }

    fn target() -> ActorData {
        ActorData::new("Target").with_levels(PartialLevels {
            defence: Some(99),
            ..Default::default()
        })
    }

    #[test]
    fn melee_crush_rolls() {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let vertex = Vertex::new(
            CombatClass::Melee,
            CombatStyle::Aggressive,
            DamageType::Crush,
        );

        let result = calculate(&maxed(), &target(), &vertex, &env).unwrap();

        // (99 + 8) × 64 against (99 + 9) × 64
        assert_eq!(result.attack_roll, 6_848);
        assert_eq!(result.defend_roll, 6_912);
        assert!((result.accuracy - 6_848.0 / (2.0 * 6_913.0)).abs() < 1e-12);
        // floor(0.5 + 110 × 64 / 640)
        assert_eq!(result.max_hit.max, 11);
        assert_eq!(result.attack_speed, 4);
        assert_eq!(result.max_hit_proc, None);

        let expected_dps = result.average_damage / 4.0 / 0.6;
        assert!((result.dps - expected_dps).abs() < 1e-12);
    }

    #[test]
    fn spell_max_hit_ignores_strength_bonuses() {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let vertex = Vertex::new(CombatClass::Magic, CombatStyle::Accurate, DamageType::Spell)
            .with_spell(SpellId::FireSurge);

        let strong = maxed().with_bonuses(BonusVector::from_mapping([
            (BonusChannel::Strength, 150),
            (BonusChannel::RangedStrength, 100),
        ]));
        let result = calculate(&strong, &target(), &vertex, &env).unwrap();

        assert_eq!(result.max_hit.max, 24);
        assert_eq!(result.attack_speed, config.spell_cast_speed);
    }

    #[test]
    fn spell_missing_from_table() {
        let tables = TablesSnapshot::empty();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let vertex = Vertex::new(CombatClass::Magic, CombatStyle::Accurate, DamageType::Spell)
            .with_spell(SpellId::FireSurge);

        let err = calculate(&maxed(), &target(), &vertex, &env).unwrap_err();
        assert_eq!(err, CombatError::UnknownSpell("Fire Surge".into()));
    }

    #[test]
    fn powered_magic_without_staff_has_no_base_max_hit() {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let vertex = Vertex::new(CombatClass::Magic, CombatStyle::Accurate, DamageType::Magic);

        let err = calculate(&maxed(), &target(), &vertex, &env).unwrap_err();
        assert!(matches!(err, CombatError::NoBaseMaxHit { weapon } if weapon == "Unarmed"));

        let trident = maxed().with_equipment(EquipmentDefinition::weapon(
            11905,
            "Trident of the seas",
            BonusVector::ZERO,
            WeaponData::new(WeaponCategory::PoweredStaff, 4),
        ));
        let result = calculate(&trident, &target(), &vertex, &env).unwrap();
        assert_eq!(result.max_hit.max, 28);
    }

    #[test]
    fn negative_max_hit_clamps_to_zero() {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let vertex = Vertex::new(CombatClass::Magic, CombatStyle::Accurate, DamageType::Magic);

        let novice = ActorData::default().with_equipment(EquipmentDefinition::weapon(
            22555,
            "Thammaron's sceptre",
            BonusVector::ZERO,
            WeaponData::new(WeaponCategory::PoweredWand, 4),
        ));
        let result = calculate(&novice, &target(), &vertex, &env).unwrap();

        assert_eq!(result.max_hit.max, 0);
        assert_eq!(result.average_damage, 0.0);
    }

    #[test]
    fn dps_uses_reported_attack_speed() {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let vertex = Vertex::new(CombatClass::Ranged, CombatStyle::Rapid, DamageType::Ranged);

        let thrower = maxed().with_equipment(EquipmentDefinition::weapon(
            806,
            "Dart",
            BonusVector::from_mapping([(BonusChannel::RangedStrength, 10)]),
            WeaponData::new(WeaponCategory::Thrown, 1),
        ));
        let result = calculate(&thrower, &target(), &vertex, &env).unwrap();

        assert_eq!(result.attack_speed, 1);
        assert!(result.average_damage > 0.0);
        assert!((result.dps - result.average_damage / 0.6).abs() < 1e-12);
    }

    #[test]
    fn zero_attack_speed_is_rejected() {
        let tables = tables();
        let config = CombatConfig {
            unarmed_speed: 0,
            ..CombatConfig::default()
        };
        let env = CombatEnv::from_snapshot(&tables, &config);
        let vertex = Vertex::new(CombatClass::Melee, CombatStyle::Accurate, DamageType::Crush);

        let err = calculate(&maxed(), &target(), &vertex, &env).unwrap_err();
        assert!(matches!(err, CombatError::Stat(StatError::Validation(_))));

        let instant = maxed().with_equipment(EquipmentDefinition::weapon(
            1,
            "Instant whip",
            BonusVector::ZERO,
            WeaponData::new(WeaponCategory::Whip, 0),
        ));
        let default_config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &default_config);
        let err = calculate(&instant, &target(), &vertex, &env).unwrap_err();
        assert!(matches!(err, CombatError::Stat(StatError::Validation(_))));
    }

    #[test]
    fn invalid_vertex_is_rejected_before_actors() {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let vertex = Vertex::new(CombatClass::Melee, CombatStyle::Accurate, DamageType::Magic);

        assert!(matches!(
            calculate(&maxed(), &target(), &vertex, &env),
            Err(CombatError::InvalidVertex(_))
        ));
    }
}
