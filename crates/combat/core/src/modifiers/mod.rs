//! Predicate-gated modifiers that rewrite intermediate combat values.
//!
//! Every [`Modifier`] decides once per calculation whether it applies
//! ([`Modifier::is_applied`]). The survivors form an [`ActiveModifiers`] set in
//! catalog order, and each transform kind is folded left-to-right over that
//! set: a modifier receives the value produced by the previous one.
//!
//! # Hooks
//!
//! | hook | composition |
//! |---|---|
//! | `accuracy`, `attack_*`, `strength_*`, `defence_*`, rolls, `max_hit`, `attack_speed` | fold |
//! | `flat_max_hit_bonus` | sum |
//! | `base_max_hit` | first `Some` wins |
//! | `damage_distribution` | fold, fallible |
//!
//! All hooks default to the identity, so a modifier only overrides what it
//! changes.

mod ahrims;
mod dawnbringer;
mod leagues;
mod powered_staves;
mod scythe;

pub use ahrims::AhrimsSet;
pub use dawnbringer::Dawnbringer;
pub use leagues::{Leagues4MeleeRelic, LEAGUES4_MELEE_FLAG};
pub use powered_staves::PoweredStaff;
pub use scythe::ScytheOfVitur;

use crate::combat::{AttackValues, CombatValues, DefendValues, HitTracker, TrackerError, Vertex};
use crate::env::CombatEnv;
use crate::state::Actor;

/// Everything a modifier may inspect.
#[derive(Clone, Copy, Debug)]
pub struct ModifierContext<'a> {
    pub attacker: &'a Actor,
    pub defender: &'a Actor,
    pub vertex: &'a Vertex,
    pub env: CombatEnv<'a>,
}

impl<'a> ModifierContext<'a> {
    pub fn new(
        attacker: &'a Actor,
        defender: &'a Actor,
        vertex: &'a Vertex,
        env: CombatEnv<'a>,
    ) -> Self {
        Self {
            attacker,
            defender,
            vertex,
            env,
        }
    }
}

/// A named rule that can rewrite any intermediate combat value.
pub trait Modifier: Send + Sync {
    /// Returns the modifier name for logging.
    fn name(&self) -> &'static str;

    /// Whether this modifier participates in the calculation.
    fn is_applied(&self, ctx: &ModifierContext<'_>) -> bool;

    fn accuracy(&self, accuracy: f64, _ctx: &ModifierContext<'_>) -> f64 {
        accuracy
    }

    fn attack_level(&self, level: i32, _ctx: &ModifierContext<'_>) -> i32 {
        level
    }

    fn attack_bonus(&self, bonus: i32, _ctx: &ModifierContext<'_>) -> i32 {
        bonus
    }

    fn strength_level(&self, level: i32, _ctx: &ModifierContext<'_>) -> i32 {
        level
    }

    fn strength_bonus(&self, bonus: i32, _ctx: &ModifierContext<'_>) -> i32 {
        bonus
    }

    fn defence_level(&self, level: i32, _ctx: &ModifierContext<'_>) -> i32 {
        level
    }

    fn defence_bonus(&self, bonus: i32, _ctx: &ModifierContext<'_>) -> i32 {
        bonus
    }

    fn attack_roll(&self, roll: i64, _ctx: &ModifierContext<'_>) -> i64 {
        roll
    }

    fn defend_roll(&self, roll: i64, _ctx: &ModifierContext<'_>) -> i64 {
        roll
    }

    fn max_hit(&self, max_hit: i32, _ctx: &ModifierContext<'_>) -> i32 {
        max_hit
    }

    /// Added to the base max hit; addends of all modifiers are summed.
    fn flat_max_hit_bonus(&self, _ctx: &ModifierContext<'_>) -> i32 {
        0
    }

    /// Replaces the generic max-hit formula when `Some`.
    fn base_max_hit(&self, _ctx: &ModifierContext<'_>) -> Option<i32> {
        None
    }

    fn attack_speed(&self, speed: u32, _ctx: &ModifierContext<'_>) -> u32 {
        speed
    }

    fn damage_distribution(
        &self,
        values: CombatValues,
        _ctx: &ModifierContext<'_>,
    ) -> Result<CombatValues, TrackerError> {
        Ok(values)
    }
}

/// Every known modifier, in application order.
pub static CATALOG: [&dyn Modifier; 5] = [
    &AhrimsSet,
    &Dawnbringer,
    &Leagues4MeleeRelic,
    &PoweredStaff,
    &ScytheOfVitur,
];

/// Modifiers whose predicate held for one calculation.
pub struct ActiveModifiers<'a> {
    ctx: ModifierContext<'a>,
    list: Vec<&'a dyn Modifier>,
}

impl<'a> ActiveModifiers<'a> {
    /// Filters [`CATALOG`] against `ctx`.
    pub fn new(ctx: ModifierContext<'a>) -> Self {
        Self::with_catalog(ctx, &CATALOG)
    }

    /// Filters an arbitrary catalog, keeping its order.
    pub fn with_catalog(ctx: ModifierContext<'a>, catalog: &[&'a dyn Modifier]) -> Self {
        let list: Vec<&'a dyn Modifier> = catalog
            .iter()
            .copied()
            .filter(|modifier| modifier.is_applied(&ctx))
            .collect();

        tracing::debug!(
            active = ?list.iter().map(|m| m.name()).collect::<Vec<_>>(),
            "modifiers activated"
        );

        Self { ctx, list }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.list.iter().map(|modifier| modifier.name())
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    fn fold<T>(&self, initial: T, hook: impl Fn(&dyn Modifier, T, &ModifierContext<'a>) -> T) -> T {
        self.list
            .iter()
            .fold(initial, |value, modifier| hook(*modifier, value, &self.ctx))
    }

    pub fn modify_attack_values(&self, values: AttackValues) -> AttackValues {
        self.fold(values, |modifier, mut values, ctx| {
            values.accuracy.level = modifier.attack_level(values.accuracy.level, ctx);
            values.accuracy.bonus = modifier.attack_bonus(values.accuracy.bonus, ctx);
            values.strength.level = modifier.strength_level(values.strength.level, ctx);
            values.strength.bonus = modifier.strength_bonus(values.strength.bonus, ctx);
            values.attack_speed = modifier.attack_speed(values.attack_speed, ctx);
            values
        })
    }

    pub fn modify_defend_values(&self, values: DefendValues) -> DefendValues {
        self.fold(values, |modifier, mut values, ctx| {
            values.level = modifier.defence_level(values.level, ctx);
            values.bonus = modifier.defence_bonus(values.bonus, ctx);
            values
        })
    }

    pub fn modify_attack_roll(&self, roll: i64) -> i64 {
        self.fold(roll, |modifier, roll, ctx| modifier.attack_roll(roll, ctx))
    }

    pub fn modify_defend_roll(&self, roll: i64) -> i64 {
        self.fold(roll, |modifier, roll, ctx| modifier.defend_roll(roll, ctx))
    }

    pub fn modify_accuracy(&self, accuracy: f64) -> f64 {
        self.fold(accuracy, |modifier, accuracy, ctx| modifier.accuracy(accuracy, ctx))
    }

    pub fn modify_max_hit(&self, max_hit: i32) -> i32 {
        self.fold(max_hit, |modifier, max_hit, ctx| modifier.max_hit(max_hit, ctx))
    }

    pub fn flat_max_hit_bonus(&self) -> i32 {
        self.list
            .iter()
            .map(|modifier| modifier.flat_max_hit_bonus(&self.ctx))
            .sum()
    }

    pub fn base_max_hit(&self) -> Option<i32> {
        self.list.iter().find_map(|modifier| {
            let base = modifier.base_max_hit(&self.ctx)?;
            tracing::trace!(modifier = modifier.name(), base, "base max hit supplied");
            Some(base)
        })
    }

    pub fn modify_damage_distribution(
        &self,
        values: CombatValues,
    ) -> Result<CombatValues, TrackerError> {
        self.list.iter().try_fold(values, |values, modifier| {
            modifier.damage_distribution(values, &self.ctx)
        })
    }
}

/// Basic distribution where a `proc_chance` share of every hit deals
/// `proc(damage)` instead.
fn proc_distribution(
    accuracy: f64,
    max_hit: i32,
    proc_chance: f64,
    proc: impl Fn(i32) -> i32,
) -> Result<HitTracker, TrackerError> {
    let mut tracker = HitTracker::new(accuracy)?;
    let share = accuracy / (f64::from(max_hit) + 1.0);

    for damage in 0..=max_hit {
        tracker.store(damage, (1.0 - proc_chance) * share)?;
        tracker.store(proc(damage), proc_chance * share)?;
    }

    Ok(tracker)
}
