//! Leagues IV tier 3 melee relic.
//!
//! Halves melee attack speed, raises the attack roll by 50% and gives every
//! hit a 10% chance to deal double damage.

use super::{Modifier, ModifierContext, proc_distribution};
use crate::combat::{CombatClass, CombatValues, TrackerError};

/// Actor flag that enables the relic.
pub const LEAGUES4_MELEE_FLAG: &str = "leagues4-tier3-melee";

const PROC_CHANCE: f64 = 0.10;
const ACCURACY_BONUS: f64 = 0.50;

fn doubled(damage: i32) -> i32 {
    damage * 2
}

#[derive(Debug, Clone, Copy)]
pub struct Leagues4MeleeRelic;

impl Modifier for Leagues4MeleeRelic {
    fn name(&self) -> &'static str {
        "leagues4_melee_relic"
    }

    fn is_applied(&self, ctx: &ModifierContext<'_>) -> bool {
        ctx.attacker.has_flag(LEAGUES4_MELEE_FLAG) && ctx.vertex.class == CombatClass::Melee
    }

    fn attack_speed(&self, speed: u32, _ctx: &ModifierContext<'_>) -> u32 {
        if speed >= 4 {
            speed / 2
        } else {
            speed.div_ceil(2)
        }
    }

    fn attack_roll(&self, roll: i64, _ctx: &ModifierContext<'_>) -> i64 {
        (roll as f64 * (1.0 + ACCURACY_BONUS)).floor() as i64
    }

    fn damage_distribution(
        &self,
        mut values: CombatValues,
        _ctx: &ModifierContext<'_>,
    ) -> Result<CombatValues, TrackerError> {
        values.tracker = proc_distribution(values.accuracy, values.max_hit, PROC_CHANCE, doubled)?;
        values.max_hit_proc = Some(doubled(values.max_hit));
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{CombatStyle, DamageType, HitTracker, Vertex};
    use crate::config::CombatConfig;
    use crate::env::CombatEnv;
    use crate::modifiers::test_support::*;
    use crate::state::ActorData;

    #[test]
    fn gated_on_flag_and_melee() {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let relic = build(&ActorData::default().with_flag(LEAGUES4_MELEE_FLAG));
        let plain = build(&ActorData::default());
        let defender = build(&ActorData::default());
        let melee = melee();
        let ranged = Vertex::new(CombatClass::Ranged, CombatStyle::Rapid, DamageType::Ranged);

        let flagged = ModifierContext::new(&relic, &defender, &melee, env);
        let unflagged = ModifierContext::new(&plain, &defender, &melee, env);
        let off_style = ModifierContext::new(&relic, &defender, &ranged, env);

        assert!(Leagues4MeleeRelic.is_applied(&flagged));
        assert!(!Leagues4MeleeRelic.is_applied(&unflagged));
        assert!(!Leagues4MeleeRelic.is_applied(&off_style));
    }

    #[test]
    fn speed_and_roll() {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let actor = build(&ActorData::default());
        let vertex = melee();
        let ctx = ModifierContext::new(&actor, &actor, &vertex, env);

        assert_eq!(Leagues4MeleeRelic.attack_speed(7, &ctx), 3);
        assert_eq!(Leagues4MeleeRelic.attack_speed(4, &ctx), 2);
        assert_eq!(Leagues4MeleeRelic.attack_speed(3, &ctx), 2);
        assert_eq!(Leagues4MeleeRelic.attack_speed(1, &ctx), 1);
        assert_eq!(Leagues4MeleeRelic.attack_roll(20_001, &ctx), 30_001);
    }

    #[test]
    fn double_damage_proc() {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let actor = build(&ActorData::default());
        let vertex = melee();
        let ctx = ModifierContext::new(&actor, &actor, &vertex, env);

        let tracker = HitTracker::basic_distribution(1.0, 10).unwrap();
        let values = CombatValues {
            tracker,
            attack_roll: 0,
            defend_roll: 0,
            max_hit: 10,
            max_hit_proc: None,
            accuracy: 1.0,
        };

        let values = Leagues4MeleeRelic.damage_distribution(values, &ctx).unwrap();

        assert_eq!(values.max_hit_proc, Some(20));
        // 5 × 0.9 + 10 × 0.1
        assert!((values.tracker.average_damage() - 5.5).abs() < 1e-9);
    }
}
