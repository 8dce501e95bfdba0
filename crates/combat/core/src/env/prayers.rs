use std::collections::BTreeMap;

use crate::stats::StatError;

/// Oracle providing prayer definitions.
pub trait PrayerOracle: Send + Sync {
    fn prayer(&self, id: PrayerId) -> Option<&PrayerDefinition>;
}

/// Known stat-multiplying prayers.
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
pub enum PrayerId {
    #[strum(serialize = "Thick Skin")]
    ThickSkin,
    #[strum(serialize = "Burst of Strength")]
    BurstOfStrength,
    #[strum(serialize = "Clarity of Thought")]
    ClarityOfThought,
    #[strum(serialize = "Sharp Eye")]
    SharpEye,
    #[strum(serialize = "Mystic Will")]
    MysticWill,
    #[strum(serialize = "Rock Skin")]
    RockSkin,
    #[strum(serialize = "Superhuman Strength")]
    SuperhumanStrength,
    #[strum(serialize = "Improved Reflexes")]
    ImprovedReflexes,
    #[strum(serialize = "Hawk Eye")]
    HawkEye,
    #[strum(serialize = "Mystic Lore")]
    MysticLore,
    #[strum(serialize = "Steel Skin")]
    SteelSkin,
    #[strum(serialize = "Ultimate Strength")]
    UltimateStrength,
    #[strum(serialize = "Incredible Reflexes")]
    IncredibleReflexes,
    #[strum(serialize = "Eagle Eye")]
    EagleEye,
    #[strum(serialize = "Mystic Might")]
    MysticMight,
    #[strum(serialize = "Chivalry")]
    Chivalry,
    #[strum(serialize = "Piety")]
    Piety,
    #[strum(serialize = "Rigour")]
    Rigour,
    #[strum(serialize = "Augury")]
    Augury,
}

impl TryFrom<String> for PrayerId {
    type Error = StatError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse().map_err(|_| StatError::UnknownPrayer(name))
    }
}

impl PrayerId {
    /// Parses a display name, reporting unknown names as `StatError::UnknownPrayer`.
    pub fn from_name(name: &str) -> Result<Self, StatError> {
        name.parse()
            .map_err(|_| StatError::UnknownPrayer(name.to_owned()))
    }
}

/// Stat channels a prayer can multiply.
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
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrayerStat {
    Attack,
    Strength,
    Defence,
    RangedAttack,
    RangedStrength,
    MagicAttack,
    MagicStrength,
    MagicDefence,
}

/// Multipliers one prayer applies while active.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct PrayerDefinition {
    pub effects: BTreeMap<PrayerStat, f64>,
}

impl PrayerDefinition {
    pub fn new(effects: impl IntoIterator<Item = (PrayerStat, f64)>) -> Self {
        Self {
            effects: effects.into_iter().collect(),
        }
    }
}
