//! Dawnbringer against the first form of Verzik Vitur.
//!
//! The staff ignores accuracy rolls and every gear or prayer bonus there: it
//! always hits, and damage depends on the boosted magic level alone.

use super::{Modifier, ModifierContext};
use crate::combat::DamageType;
use crate::state::{NamePattern, Slot};

const VERZIK: &str = "Verzik Vitur";
const VERZIK_P1_COMBAT_LEVELS: [u32; 2] = [425, 1040];

#[derive(Debug, Clone, Copy)]
pub struct Dawnbringer;

impl Modifier for Dawnbringer {
    fn name(&self) -> &'static str {
        "dawnbringer"
    }

    fn is_applied(&self, ctx: &ModifierContext<'_>) -> bool {
        ctx.vertex.damage_type == DamageType::Magic
            && !ctx.vertex.is_spell_cast()
            && ctx.defender.name() == VERZIK
            && VERZIK_P1_COMBAT_LEVELS.contains(&ctx.defender.combat_level())
            && ctx
                .attacker
                .is_wearing(Slot::Weapon, NamePattern::Exact("Dawnbringer"))
    }

    fn accuracy(&self, _accuracy: f64, _ctx: &ModifierContext<'_>) -> f64 {
        1.0
    }

    fn attack_bonus(&self, _bonus: i32, _ctx: &ModifierContext<'_>) -> i32 {
        0
    }

    fn strength_bonus(&self, _bonus: i32, _ctx: &ModifierContext<'_>) -> i32 {
        0
    }

    fn base_max_hit(&self, ctx: &ModifierContext<'_>) -> Option<i32> {
        let magic = ctx.attacker.levels().magic as i32;
        Some(magic / 6 - 1)
    }
}
