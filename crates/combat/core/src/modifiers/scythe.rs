//! Scythe of Vitur: one swing hits up to three times depending on target size.

use super::{Modifier, ModifierContext};
use crate::combat::{CombatClass, CombatValues, HitTracker, TrackerError};
use crate::state::{NamePattern, Slot};

/// Sub-hit damages of one swing rolling `damage` against a target of `size`.
fn sub_hits(damage: i32, size: u32) -> Vec<i32> {
    match size {
        0 | 1 => vec![damage],
        2 => vec![damage, damage / 2],
        _ => vec![damage, damage / 2, damage / 4],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScytheOfVitur;

impl Modifier for ScytheOfVitur {
    fn name(&self) -> &'static str {
        "scythe_of_vitur"
    }

    fn is_applied(&self, ctx: &ModifierContext<'_>) -> bool {
        ctx.vertex.class == CombatClass::Melee
            && ctx
                .attacker
                .is_wearing(Slot::Weapon, NamePattern::Contains("scythe of vitur"))
    }

    fn damage_distribution(
        &self,
        mut values: CombatValues,
        ctx: &ModifierContext<'_>,
    ) -> Result<CombatValues, TrackerError> {
        let size = ctx.defender.size();
        let share = values.accuracy / (f64::from(values.max_hit) + 1.0);

        let mut tracker = HitTracker::new(values.accuracy)?;
        for damage in 0..=values.max_hit {
            tracker.store_multiple(&sub_hits(damage, size), share)?;
        }

        values.tracker = tracker;
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatConfig;
    use crate::env::{CombatEnv, WeaponCategory};
    use crate::modifiers::test_support::*;
    use crate::state::ActorData;

    fn swing(size: u32) -> CombatValues {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let scythe = weapon("Holy scythe of vitur", WeaponCategory::Scythe);
        let attacker = build(&ActorData::default().with_equipment(scythe));
        let defender = build(&ActorData::default().with_size(size));
        let vertex = melee();
        let ctx = ModifierContext::new(&attacker, &defender, &vertex, env);
        assert!(ScytheOfVitur.is_applied(&ctx));

        let values = CombatValues {
            tracker: HitTracker::basic_distribution(1.0, 40).unwrap(),
            attack_roll: 0,
            defend_roll: 0,
            max_hit: 40,
            max_hit_proc: None,
            accuracy: 1.0,
        };
        ScytheOfVitur.damage_distribution(values, &ctx).unwrap()
    }

    #[test]
    fn sub_hits_scale_with_size() {
        assert_eq!(swing(1).tracker.max_hit_data().list, vec![40]);
        assert_eq!(swing(2).tracker.max_hit_data().list, vec![40, 20]);

        let large = swing(5).tracker.max_hit_data();
        assert_eq!(large.list, vec![40, 20, 10]);
        assert_eq!(large.sum, 70);
        assert_eq!(large.max, 40);
    }

    #[test]
    fn average_sums_sub_hits() {
        let values = swing(3);
        // 20 + mean(floor(d/2)) + mean(floor(d/4)) over 0..=40
        let half: i32 = (0..=40).map(|d| d / 2).sum();
        let quarter: i32 = (0..=40).map(|d| d / 4).sum();
        let expected = 20.0 + f64::from(half + quarter) / 41.0;
        assert!((values.tracker.average_damage() - expected).abs() < 1e-9);
    }

    #[test]
    fn ranged_attacks_do_not_trigger() {
        use crate::combat::{CombatStyle, DamageType, Vertex};

        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let scythe = weapon("Scythe of vitur", WeaponCategory::Scythe);
        let attacker = build(&ActorData::default().with_equipment(scythe));
        let vertex = Vertex::new(CombatClass::Ranged, CombatStyle::Rapid, DamageType::Ranged);
        let ctx = ModifierContext::new(&attacker, &attacker, &vertex, env);

        assert!(!ScytheOfVitur.is_applied(&ctx));
    }
}
