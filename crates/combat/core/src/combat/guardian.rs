//! Leagues IV guardian thrall.
//!
//! A fixed-profile attacker that always strikes the defender's weakest
//! defence. Only defender-side values go through the modifier chain; the
//! guardian's own roll, hits and speed are constants.

use super::{
    CombatClass, CombatError, CombatStyle, CombatValues, DamageType, HitTracker, Vertex,
    accuracy_roll, compare_rolls,
};
use crate::env::CombatEnv;
use crate::modifiers::{ActiveModifiers, ModifierContext};
use crate::state::{Actor, ActorData};
use crate::stats::BonusChannel;

pub const GUARDIAN_ATTACK_ROLL: i64 = 45_000;
pub const GUARDIAN_MIN_HIT: i32 = 6;
pub const GUARDIAN_MAX_HIT: i32 = 15;
pub const GUARDIAN_ATTACK_SPEED: u32 = 5;

/// Candidate defences, in tie-break order.
const DEFENCES: [(BonusChannel, CombatClass, DamageType); 5] = [
    (BonusChannel::StabDefence, CombatClass::Melee, DamageType::Stab),
    (BonusChannel::SlashDefence, CombatClass::Melee, DamageType::Slash),
    (BonusChannel::CrushDefence, CombatClass::Melee, DamageType::Crush),
    (BonusChannel::MagicDefence, CombatClass::Magic, DamageType::Magic),
    (BonusChannel::RangedDefence, CombatClass::Ranged, DamageType::Ranged),
];

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardianResult {
    pub attack_roll: i64,
    pub defend_roll: i64,
    pub accuracy: f64,
    pub average_damage: f64,
    pub dps: f64,
    pub max_hit: i32,
    pub max_hit_proc: Option<i32>,
    pub attack_speed: u32,
    /// The vertex aimed at the weakest defence.
    pub vertex: Vertex,
    pub tracker: HitTracker,
}

/// Vertex targeting the lowest defence bonus; the first minimum wins ties.
fn weakest_defence(defender: &Actor) -> Vertex {
    let (_, class, damage_type) = DEFENCES
        .iter()
        .copied()
        .min_by_key(|&(channel, ..)| defender.bonuses().get(channel))
        .unwrap_or(DEFENCES[2]);

    Vertex::new(class, CombatStyle::Accurate, damage_type)
}

/// Computes the guardian's damage against `defender`.
pub fn calculate_guardian(
    defender: &ActorData,
    env: &CombatEnv<'_>,
) -> Result<GuardianResult, CombatError> {
    let attacker = Actor::new(&ActorData::default(), env)?;
    let defender = Actor::new(defender, env)?;
    let vertex = weakest_defence(&defender);
    let modifiers = ActiveModifiers::new(ModifierContext::new(&attacker, &defender, &vertex, *env));

    let def = modifiers.modify_defend_values(defender.defend_values(&vertex));
    let attack_roll = modifiers.modify_attack_roll(GUARDIAN_ATTACK_ROLL);
    let defend_roll = modifiers.modify_defend_roll(accuracy_roll(def.level, def.bonus));
    let accuracy = modifiers.modify_accuracy(compare_rolls(attack_roll, defend_roll));

    let mut tracker = HitTracker::new(accuracy)?;
    let share = accuracy / f64::from(GUARDIAN_MAX_HIT - GUARDIAN_MIN_HIT + 1);
    for damage in GUARDIAN_MIN_HIT..=GUARDIAN_MAX_HIT {
        tracker.store(damage, share)?;
    }

    let values = modifiers.modify_damage_distribution(CombatValues {
        tracker,
        attack_roll,
        defend_roll,
        max_hit: GUARDIAN_MAX_HIT,
        max_hit_proc: None,
        accuracy,
    })?;

    let average_damage = values.tracker.average_damage();
    let dps = average_damage / f64::from(GUARDIAN_ATTACK_SPEED) / env.config().seconds_per_tick;

    tracing::debug!(
        defender = defender.name(),
        vertex = ?vertex,
        accuracy = values.accuracy,
        dps,
        "guardian calculated"
    );

    Ok(GuardianResult {
        attack_roll,
        defend_roll,
        accuracy: values.accuracy,
        average_damage,
        dps,
        max_hit: values.max_hit,
        max_hit_proc: values.max_hit_proc,
        attack_speed: GUARDIAN_ATTACK_SPEED,
        vertex,
        tracker: values.tracker,
    })
}
