//! Powered staves: built-in spells whose max hit is keyed off magic level.

use super::{Modifier, ModifierContext};
use crate::combat::CombatClass;
use crate::env::SpellId;

/// How a staff derives its base max hit.
#[derive(Debug, Clone, Copy)]
enum StaffFormula {
    /// `floor(magic / divisor) + offset`
    Scaling { divisor: i32, offset: i32 },
    Fixed(i32),
    /// Uses the spell table entry of the given spell.
    Spell(SpellId),
}

const fn scaling(divisor: i32, offset: i32) -> StaffFormula {
    StaffFormula::Scaling { divisor, offset }
}

const STAVES: &[(&[&str], StaffFormula)] = &[
    (&["Thammaron's sceptre"], scaling(3, -8)),
    (&["Accursed sceptre"], scaling(3, -6)),
    (
        &["Trident of the seas", "Trident of the seas (e)"],
        scaling(3, -5),
    ),
    (
        &["Trident of the swamp", "Trident of the swamp (e)"],
        scaling(3, -2),
    ),
    (
        &["Sanguinesti staff", "Holy sanguinesti staff"],
        scaling(3, -1),
    ),
    (&["Dawnbringer"], scaling(6, -1)),
    (
        &["Crystal staff (basic)", "Corrupted staff (basic)"],
        StaffFormula::Fixed(23),
    ),
    (
        &["Crystal staff (attuned)", "Corrupted staff (attuned)"],
        StaffFormula::Fixed(31),
    ),
    (
        &["Crystal staff (perfected)", "Corrupted staff (perfected)"],
        StaffFormula::Fixed(39),
    ),
    (&["Starter staff"], StaffFormula::Spell(SpellId::FireStrike)),
];

fn formula_for(weapon: &str) -> Option<StaffFormula> {
    STAVES
        .iter()
        .find(|(names, _)| names.contains(&weapon))
        .map(|&(_, formula)| formula)
}

#[derive(Debug, Clone, Copy)]
pub struct PoweredStaff;

impl Modifier for PoweredStaff {
    fn name(&self) -> &'static str {
        "powered_staff"
    }

    fn is_applied(&self, ctx: &ModifierContext<'_>) -> bool {
        ctx.vertex.class == CombatClass::Magic
            && !ctx.vertex.is_spell_cast()
            && formula_for(ctx.attacker.weapon_name()).is_some()
    }

    fn base_max_hit(&self, ctx: &ModifierContext<'_>) -> Option<i32> {
        let magic = ctx.attacker.levels().magic as i32;

        match formula_for(ctx.attacker.weapon_name())? {
            StaffFormula::Scaling { divisor, offset } => Some(magic / divisor + offset),
            StaffFormula::Fixed(max_hit) => Some(max_hit),
            StaffFormula::Spell(spell) => {
                let max_hit = ctx.env.spells().max_hit(spell);
                if max_hit.is_none() {
                    tracing::warn!(%spell, "spell table lacks the staff's built-in spell");
                }
                max_hit.map(|hit| hit as i32)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatConfig;
    use crate::env::{CombatEnv, TablesSnapshot, WeaponCategory};
    use crate::modifiers::test_support::*;
    use crate::state::ActorData;
    use crate::stats::PartialLevels;

    fn wielding(name: &str, magic: u32) -> ActorData {
        ActorData::default()
            .with_levels(PartialLevels {
                magic: Some(magic),
                ..Default::default()
            })
            .with_equipment(weapon(name, WeaponCategory::PoweredStaff))
    }

    fn base_max_hit(name: &str, magic: u32) -> Option<i32> {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let attacker = build(&wielding(name, magic));
        let defender = build(&ActorData::default());
        let vertex = powered();
        let ctx = ModifierContext::new(&attacker, &defender, &vertex, env);

        assert!(PoweredStaff.is_applied(&ctx));
        PoweredStaff.base_max_hit(&ctx)
    }

    #[test]
    fn staff_formulas() {
        assert_eq!(base_max_hit("Trident of the seas", 99), Some(28));
        assert_eq!(base_max_hit("Trident of the swamp (e)", 99), Some(31));
        assert_eq!(base_max_hit("Sanguinesti staff", 99), Some(32));
        assert_eq!(base_max_hit("Thammaron's sceptre", 99), Some(25));
        assert_eq!(base_max_hit("Accursed sceptre", 112), Some(31));
        assert_eq!(base_max_hit("Dawnbringer", 99), Some(15));
        assert_eq!(base_max_hit("Corrupted staff (perfected)", 1), Some(39));
        assert_eq!(base_max_hit("Starter staff", 1), Some(8));
    }

    #[test]
    fn low_levels_can_go_negative() {
        assert_eq!(base_max_hit("Thammaron's sceptre", 1), Some(-8));
    }

    #[test]
    fn not_applied_to_spells_or_other_weapons() {
        let tables = tables();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let trident = build(&wielding("Trident of the seas", 99));
        let staff = build(&wielding("Staff of fire", 99));
        let defender = build(&ActorData::default());
        let surge = spell(SpellId::FireSurge);
        let powered = powered();
        let melee = melee();

        assert!(!PoweredStaff.is_applied(&ModifierContext::new(&trident, &defender, &surge, env)));
        assert!(!PoweredStaff.is_applied(&ModifierContext::new(&trident, &defender, &melee, env)));
        assert!(!PoweredStaff.is_applied(&ModifierContext::new(&staff, &defender, &powered, env)));
    }

    #[test]
    fn starter_staff_needs_fire_strike() {
        let tables = TablesSnapshot::empty();
        let config = CombatConfig::default();
        let env = CombatEnv::from_snapshot(&tables, &config);
        let attacker = build(&wielding("Starter staff", 1));
        let vertex = powered();
        let ctx = ModifierContext::new(&attacker, &attacker, &vertex, env);

        assert_eq!(PoweredStaff.base_max_hit(&ctx), None);
    }
}
