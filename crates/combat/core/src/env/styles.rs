use crate::combat::{CombatClass, CombatStyle, DamageType, Vertex};
use crate::stats::StatError;

/// Oracle describing which attack styles each weapon category offers.
///
/// Consumed by callers that enumerate the vertices a loadout can use; the
/// formulas themselves never read it.
pub trait AttackStyleOracle: Send + Sync {
    fn styles(&self, category: WeaponCategory) -> Option<&[AttackStyle]>;
}

/// Weapon categories, named as they appear in game.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum WeaponCategory {
    #[strum(serialize = "2h Sword")]
    TwoHandedSword,
    Axe,
    Banner,
    Blunt,
    Bludgeon,
    Bulwark,
    Claw,
    Partisan,
    Pickaxe,
    Polearm,
    Polestaff,
    Scythe,
    #[strum(serialize = "Slash Sword")]
    SlashSword,
    Spear,
    Spiked,
    #[strum(serialize = "Stab Sword")]
    StabSword,
    Unarmed,
    Whip,
    Bow,
    Chinchompas,
    Crossbow,
    Gun,
    Thrown,
    #[strum(serialize = "Bladed Staff")]
    BladedStaff,
    #[strum(serialize = "Powered Staff")]
    PoweredStaff,
    Staff,
    Salamander,
    #[strum(serialize = "Powered Wand")]
    PoweredWand,
}

impl TryFrom<String> for WeaponCategory {
    type Error = StatError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
            .map_err(|_| StatError::Validation(format!("unknown weapon category '{name}'")))
    }
}

/// One selectable attack style of a weapon category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct AttackStyle {
    /// In-game button label ("Chop", "Rapid", ...).
    pub name: String,
    pub class: CombatClass,
    pub style: CombatStyle,
    pub damage_type: DamageType,
}

impl AttackStyle {
    /// The spell-less vertex this style attacks with.
    pub fn vertex(&self) -> Vertex {
        Vertex::new(self.class, self.style, self.damage_type)
    }
}
