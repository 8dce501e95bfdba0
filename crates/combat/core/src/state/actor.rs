//! Combatants.
//!
//! [`ActorData`] is the caller-facing input (every field optional); [`Actor`]
//! is the validated, immutable view the pipeline reads. Boosts, prayers and the
//! total bonus vector are resolved once in [`Actor::new`].

use std::collections::BTreeSet;

use bitflags::bitflags;

use super::equipment::{EquipmentDefinition, Loadout, NamePattern, Slot, Weapon};
use crate::env::{BoostId, CombatEnv, PrayerId};
use crate::stats::{
    BonusVector, Levels, PartialLevels, PrayerMultipliers, StatError, apply_boosts,
    resolve_prayers,
};

/// Monster attributes that gear and modifiers react to.
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
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Attribute {
    Dragon,
    Fiery,
    Spectral,
    Kalphite,
    Vampyre,
    Demon,
    Shade,
    Leafy,
    Undead,
    Penance,
    Xerician,
}

bitflags! {
    /// Set of [`Attribute`]s carried by an actor.
    ///
    /// Serializes as flag names joined by `|` ("DRAGON | UNDEAD").
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Attributes: u16 {
        const DRAGON   = 1 << 0;
        const FIERY    = 1 << 1;
        const SPECTRAL = 1 << 2;
        const KALPHITE = 1 << 3;
        const VAMPYRE  = 1 << 4;
        const DEMON    = 1 << 5;
        const SHADE    = 1 << 6;
        const LEAFY    = 1 << 7;
        const UNDEAD   = 1 << 8;
        const PENANCE  = 1 << 9;
        const XERICIAN = 1 << 10;
    }
}

impl From<Attribute> for Attributes {
    fn from(attribute: Attribute) -> Self {
        match attribute {
            Attribute::Dragon => Self::DRAGON,
            Attribute::Fiery => Self::FIERY,
            Attribute::Spectral => Self::SPECTRAL,
            Attribute::Kalphite => Self::KALPHITE,
            Attribute::Vampyre => Self::VAMPYRE,
            Attribute::Demon => Self::DEMON,
            Attribute::Shade => Self::SHADE,
            Attribute::Leafy => Self::LEAFY,
            Attribute::Undead => Self::UNDEAD,
            Attribute::Penance => Self::PENANCE,
            Attribute::Xerician => Self::XERICIAN,
        }
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, attribute| set | attribute.into())
    }
}

/// Caller-supplied description of a combatant.
///
/// # Example
/// ```
/// # use combat_core::state::ActorData;
/// # use combat_core::stats::PartialLevels;
/// let data = ActorData::new("Verzik Vitur")
///     .with_combat_level(1040)
///     .with_size(3)
///     .with_levels(PartialLevels { defence: Some(200), ..Default::default() });
/// assert_eq!(data.levels.attack, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ActorData {
    pub name: String,
    pub size: u32,
    pub combat_level: u32,
    pub equipment: Vec<EquipmentDefinition>,
    pub levels: PartialLevels,
    /// Innate bonuses added on top of equipment (monsters mostly).
    pub bonuses: BonusVector,
    pub boosts: BTreeSet<BoostId>,
    pub prayers: BTreeSet<PrayerId>,
    pub attributes: Vec<Attribute>,
    /// Free-form switches such as league relics.
    pub flags: BTreeSet<String>,
}

impl ActorData {
    pub const DEFAULT_NAME: &'static str = "Combatant";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_combat_level(mut self, combat_level: u32) -> Self {
        self.combat_level = combat_level;
        self
    }

    pub fn with_levels(mut self, levels: PartialLevels) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_bonuses(mut self, bonuses: BonusVector) -> Self {
        self.bonuses = bonuses;
        self
    }

    pub fn with_equipment(mut self, item: EquipmentDefinition) -> Self {
        self.equipment.push(item);
        self
    }

    pub fn with_boost(mut self, boost: BoostId) -> Self {
        self.boosts.insert(boost);
        self
    }

    pub fn with_prayer(mut self, prayer: PrayerId) -> Self {
        self.prayers.insert(prayer);
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.insert(flag.into());
        self
    }
}

impl Default for ActorData {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_owned(),
            size: 1,
            combat_level: 1,
            equipment: Vec::new(),
            levels: PartialLevels::default(),
            bonuses: BonusVector::ZERO,
            boosts: BTreeSet::new(),
            prayers: BTreeSet::new(),
            attributes: Vec::new(),
            flags: BTreeSet::new(),
        }
    }
}

/// A validated combatant with every derived value resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    name: String,
    size: u32,
    combat_level: u32,
    loadout: Loadout,
    base_levels: Levels,
    levels: Levels,
    boosts: BTreeSet<BoostId>,
    prayers: BTreeSet<PrayerId>,
    multipliers: PrayerMultipliers,
    attributes: Attributes,
    flags: BTreeSet<String>,
    bonuses: BonusVector,
}

impl Actor {
    /// Builds an actor from caller input.
    ///
    /// # Errors
    ///
    /// - `StatError::Validation` for illegal levels, size or slot layouts
    /// - `StatError::UnknownBoost` / `UnknownPrayer` for identifiers missing
    ///   from the tables in `env`
    /// - `StatError::ConflictingPrayer` for overlapping prayers
    pub fn new(data: &ActorData, env: &CombatEnv<'_>) -> Result<Self, StatError> {
        if data.size == 0 {
            return Err(StatError::validation(format!(
                "actor '{}' must have a size of at least 1",
                data.name
            )));
        }

        let base_levels = data.levels.resolve()?;
        let loadout = Loadout::from_definitions(&data.equipment, env.config())?;
        let levels = apply_boosts(&base_levels, &data.boosts, env.boosts())?;
        let multipliers = resolve_prayers(&data.prayers, env.prayers())?;
        let bonuses = data.bonuses + loadout.bonuses();

        tracing::trace!(
            actor = %data.name,
            ?levels,
            ?bonuses,
            "resolved actor"
        );

        Ok(Self {
            name: data.name.clone(),
            size: data.size,
            combat_level: data.combat_level,
            loadout,
            base_levels,
            levels,
            boosts: data.boosts.clone(),
            prayers: data.prayers.clone(),
            multipliers,
            attributes: data.attributes.iter().copied().collect(),
            flags: data.flags.clone(),
            bonuses,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn combat_level(&self) -> u32 {
        self.combat_level
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    /// Levels before boosts.
    pub fn base_levels(&self) -> &Levels {
        &self.base_levels
    }

    /// Levels after boosts.
    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn boosts(&self) -> &BTreeSet<BoostId> {
        &self.boosts
    }

    pub fn prayers(&self) -> &BTreeSet<PrayerId> {
        &self.prayers
    }

    pub fn prayer_multipliers(&self) -> &PrayerMultipliers {
        &self.multipliers
    }

    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.attributes.contains(attribute.into())
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Base bonuses plus every equipped item.
    pub fn bonuses(&self) -> &BonusVector {
        &self.bonuses
    }

    pub fn weapon(&self) -> Option<Weapon> {
        self.loadout.weapon_data()
    }

    pub fn weapon_name(&self) -> &str {
        &self.loadout.weapon().name
    }

    pub fn is_wearing(&self, slot: Slot, pattern: NamePattern) -> bool {
        self.loadout.is_wearing(slot, pattern)
    }
}
