//! Ahrim's set with the Amulet of the damned.
//!
//! Spell casts have a 25% chance to deal 30% more damage. The strength drain
//! of the regular set effect is not modelled.

use super::{Modifier, ModifierContext, proc_distribution};
use crate::combat::{CombatValues, TrackerError};
use crate::state::{NamePattern, Slot};

const PROC_CHANCE: f64 = 0.25;

const SET: [(Slot, NamePattern); 5] = [
    (Slot::Neck, NamePattern::Prefix("Amulet of the damned")),
    (Slot::Body, NamePattern::Prefix("Ahrim's robetop")),
    (Slot::Legs, NamePattern::Prefix("Ahrim's robeskirt")),
    (Slot::Head, NamePattern::Prefix("Ahrim's hood")),
    (Slot::Weapon, NamePattern::Prefix("Ahrim's staff")),
];

fn empowered(damage: i32) -> i32 {
    (f64::from(damage) * 1.3).floor() as i32
}

#[derive(Debug, Clone, Copy)]
pub struct AhrimsSet;

impl Modifier for AhrimsSet {
    fn name(&self) -> &'static str {
        "ahrims_set"
    }

    fn is_applied(&self, ctx: &ModifierContext<'_>) -> bool {
        // Powered staves do not trigger the set effect.
        if !ctx.vertex.is_spell_cast() {
            return false;
        }

        SET.iter()
            .all(|&(slot, pattern)| ctx.attacker.is_wearing(slot, pattern))
    }

    fn damage_distribution(
        &self,
        mut values: CombatValues,
        _ctx: &ModifierContext<'_>,
    ) -> Result<CombatValues, TrackerError> {
        values.tracker =
            proc_distribution(values.accuracy, values.max_hit, PROC_CHANCE, empowered)?;
        values.max_hit_proc = Some(empowered(values.max_hit));
        Ok(values)
    }
}
