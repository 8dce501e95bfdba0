//! Base combat formulas.
//!
//! ```text
//! accuracy_roll   = level × (bonus + 64)
//! max_hit_formula = floor(0.5 + level × (bonus + 64) / 640)
//! compare_rolls   = atk > def ? 1 − (def + 2) / (2 (atk + 1))
//!                             : atk / (2 (def + 1))
//! ```

/// Attack or defence roll from an effective level and an equipment bonus.
#[inline]
pub fn accuracy_roll(level: i32, bonus: i32) -> i64 {
    i64::from(level) * (i64::from(bonus) + 64)
}

/// Generic max hit from an effective strength level and strength bonus.
#[inline]
pub fn max_hit_formula(level: i32, bonus: i32) -> i32 {
    let product = f64::from(level) * (f64::from(bonus) + 64.0);
    (0.5 + product / 640.0).floor() as i32
}

/// Hit chance of `attack_roll` against `defend_roll`, clamped to `[0, 1]`.
///
/// Equal rolls take the unfavoured branch.
pub fn compare_rolls(attack_roll: i64, defend_roll: i64) -> f64 {
    let attack = attack_roll as f64;
    let defend = defend_roll as f64;

    let chance = if attack_roll > defend_roll {
        1.0 - (defend + 2.0) / (2.0 * (attack + 1.0))
    } else {
        attack / (2.0 * (defend + 1.0))
    };

    chance.clamp(0.0, 1.0)
}
