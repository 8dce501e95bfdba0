use std::collections::BTreeMap;

use crate::stats::StatError;

/// Oracle providing boost definitions (potions, hearts, overloads, ...).
pub trait BoostOracle: Send + Sync {
    fn boost(&self, id: BoostId) -> Option<&BoostDefinition>;
}

/// Known temporary boosts, named as they appear in game.
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
pub enum BoostId {
    #[strum(serialize = "Attack potion")]
    AttackPotion,
    #[strum(serialize = "Strength potion")]
    StrengthPotion,
    #[strum(serialize = "Defence potion")]
    DefencePotion,
    #[strum(serialize = "Super attack")]
    SuperAttack,
    #[strum(serialize = "Super strength")]
    SuperStrength,
    #[strum(serialize = "Super defence")]
    SuperDefence,
    #[strum(serialize = "Super combat potion")]
    SuperCombatPotion,
    #[strum(serialize = "Divine super combat potion")]
    DivineSuperCombatPotion,
    #[strum(serialize = "Ranging potion")]
    RangingPotion,
    #[strum(serialize = "Magic potion")]
    MagicPotion,
    #[strum(serialize = "Imbued heart")]
    ImbuedHeart,
    #[strum(serialize = "Saturated heart")]
    SaturatedHeart,
    #[strum(serialize = "Zamorak brew")]
    ZamorakBrew,
    #[strum(serialize = "Overload (+)")]
    OverloadPlus,
    #[strum(serialize = "Smelling salts")]
    SmellingSalts,
    #[strum(serialize = "Dwarven stout")]
    DwarvenStout,
}

impl TryFrom<String> for BoostId {
    type Error = StatError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse().map_err(|_| StatError::UnknownBoost(name))
    }
}

impl BoostId {
    /// Parses a display name, reporting unknown names as `StatError::UnknownBoost`.
    pub fn from_name(name: &str) -> Result<Self, StatError> {
        name.parse()
            .map_err(|_| StatError::UnknownBoost(name.to_owned()))
    }
}

/// Levels a boost may raise.
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
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoostableLevel {
    Attack,
    Strength,
    Defence,
    Magic,
    Ranged,
    Mining,
}

/// Effect of one boost on one level: `floor(level × multiplier) + flat`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct BoostEffect {
    pub multiplier: f64,
    /// May be negative (brews drain some levels).
    pub flat: i32,
}

impl BoostEffect {
    pub const fn new(multiplier: f64, flat: i32) -> Self {
        Self { multiplier, flat }
    }

    /// Pure flat addend.
    pub const fn flat(flat: i32) -> Self {
        Self::new(1.0, flat)
    }
}

impl Default for BoostEffect {
    fn default() -> Self {
        Self::new(1.0, 0)
    }
}

/// Per-level effects of a single boost.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct BoostDefinition {
    pub effects: BTreeMap<BoostableLevel, BoostEffect>,
}

impl BoostDefinition {
    pub fn new(effects: impl IntoIterator<Item = (BoostableLevel, BoostEffect)>) -> Self {
        Self {
            effects: effects.into_iter().collect(),
        }
    }
}
