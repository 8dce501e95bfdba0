//! Intermediate values of one calculation.
//!
//! `AttackValues` and `DefendValues` are derived from an [`Actor`] and a
//! [`Vertex`]; the modifier chain only ever rewrites copies of them.

use super::{CombatClass, CombatError, CombatStyle, DamageType, HitTracker, Vertex};
use crate::config::CombatConfig;
use crate::state::Actor;
use crate::stats::{BonusChannel, Level};

/// One `{level, bonus, stance}` triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatValues {
    /// Boosted level × prayer multiplier, floored.
    pub level: i32,
    pub bonus: i32,
    /// Invisible stance bonus (8, 9, +3, ...).
    pub stance: i32,
}

impl StatValues {
    pub const fn new(level: i32, bonus: i32, stance: i32) -> Self {
        Self {
            level,
            bonus,
            stance,
        }
    }

    /// Level the roll formulas consume.
    pub const fn effective_level(&self) -> i32 {
        self.level + self.stance
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackValues {
    pub accuracy: StatValues,
    pub strength: StatValues,
    /// Ticks between attacks.
    pub attack_speed: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefendValues {
    /// Effective defence level, including the +9 offset.
    pub level: i32,
    pub bonus: i32,
}

/// Values the damage-distribution transforms receive and return.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatValues {
    pub tracker: HitTracker,
    pub attack_roll: i64,
    pub defend_roll: i64,
    pub max_hit: i32,
    /// Max hit of a proc, when a modifier introduces one.
    pub max_hit_proc: Option<i32>,
    pub accuracy: f64,
}

fn scaled(level: Level, multiplier: f64) -> i32 {
    (f64::from(level) * multiplier).floor() as i32
}

const fn attack_channel(damage_type: DamageType) -> BonusChannel {
    match damage_type {
        DamageType::Stab => BonusChannel::StabAttack,
        DamageType::Slash => BonusChannel::SlashAttack,
        DamageType::Crush => BonusChannel::CrushAttack,
        DamageType::Ranged => BonusChannel::RangedAttack,
        DamageType::Magic | DamageType::Spell => BonusChannel::MagicAttack,
    }
}

const fn defence_channel(damage_type: DamageType) -> BonusChannel {
    match damage_type {
        DamageType::Stab => BonusChannel::StabDefence,
        DamageType::Slash => BonusChannel::SlashDefence,
        DamageType::Crush => BonusChannel::CrushDefence,
        DamageType::Ranged => BonusChannel::RangedDefence,
        DamageType::Magic | DamageType::Spell => BonusChannel::MagicDefence,
    }
}

impl Actor {
    /// Offensive values for attacking with `vertex`.
    ///
    /// # Errors
    ///
    /// `CombatError::InvalidVertex` when the vertex is internally inconsistent.
    pub fn attack_values(
        &self,
        vertex: &Vertex,
        config: &CombatConfig,
    ) -> Result<AttackValues, CombatError> {
        vertex.validate()?;

        let levels = self.levels();
        let prayers = self.prayer_multipliers();
        let bonuses = self.bonuses();
        let weapon_speed = self
            .weapon()
            .map_or(config.unarmed_speed, |weapon| weapon.speed);
        let accuracy_bonus = bonuses.get(attack_channel(vertex.damage_type));

        let values = match vertex.class {
            CombatClass::Melee => {
                let (accuracy_stance, strength_stance) = match vertex.style {
                    CombatStyle::Accurate => (3, 0),
                    CombatStyle::Controlled => (1, 1),
                    CombatStyle::Aggressive => (0, 3),
                    _ => (0, 0),
                };
                AttackValues {
                    accuracy: StatValues::new(
                        scaled(levels.attack, prayers.attack()),
                        accuracy_bonus,
                        8 + accuracy_stance,
                    ),
                    strength: StatValues::new(
                        scaled(levels.strength, prayers.strength()),
                        bonuses.strength(),
                        8 + strength_stance,
                    ),
                    attack_speed: weapon_speed,
                }
            }
            CombatClass::Ranged => {
                let accuracy_stance = match vertex.style {
                    CombatStyle::Accurate => 3,
                    _ => 0,
                };
                // Rapid never drops below one tick.
                let attack_speed = if vertex.style == CombatStyle::Rapid {
                    weapon_speed.saturating_sub(1).max(1)
                } else {
                    weapon_speed
                };
                AttackValues {
                    accuracy: StatValues::new(
                        scaled(levels.ranged, prayers.ranged_attack()),
                        accuracy_bonus,
                        8 + accuracy_stance,
                    ),
                    strength: StatValues::new(
                        scaled(levels.ranged, prayers.ranged_strength()),
                        bonuses.ranged_strength(),
                        8,
                    ),
                    attack_speed,
                }
            }
            CombatClass::Magic => {
                let accuracy_stance = match (vertex.spell, vertex.style) {
                    (None, CombatStyle::Accurate) => 2,
                    _ => 0,
                };
                let attack_speed = if vertex.is_spell_cast() {
                    config.spell_cast_speed
                } else {
                    weapon_speed
                };
                AttackValues {
                    accuracy: StatValues::new(
                        scaled(levels.magic, prayers.magic_attack()),
                        accuracy_bonus,
                        9 + accuracy_stance,
                    ),
                    // Magic level adds nothing to magic damage.
                    strength: StatValues::new(0, bonuses.magic_strength(), 0),
                    attack_speed,
                }
            }
        };

        Ok(values)
    }

    /// Defensive values against an attack of `vertex`'s damage type.
    pub fn defend_values(&self, vertex: &Vertex) -> DefendValues {
        let levels = self.levels();
        let prayers = self.prayer_multipliers();

        let level = if vertex.damage_type.is_magic() {
            scaled(levels.magic, prayers.magic_defence())
        } else {
            scaled(levels.defence, prayers.defence())
        };

        DefendValues {
            level: level + CombatConfig::DEFENCE_LEVEL_OFFSET,
            bonus: self.bonuses().get(defence_channel(vertex.damage_type)),
        }
    }
}
