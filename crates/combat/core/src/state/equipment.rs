//! Worn and wielded items.
//!
//! Callers describe items with [`EquipmentDefinition`]; [`Loadout`] validates
//! the slot layout once and then exposes an immutable view. A loadout always
//! has a weapon: an empty weapon slot holds the synthetic unarmed weapon.

use std::collections::BTreeMap;

use strum::EnumCount;

use crate::config::CombatConfig;
use crate::env::WeaponCategory;
use crate::stats::{BonusVector, StatError};

/// Equipment slot an item occupies on an actor.
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
    strum::EnumCount,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Slot {
    Head,
    Neck,
    Cape,
    Ammo,
    Body,
    Legs,
    Hands,
    Feet,
    Weapon,
    Shield,
    Ring,
}

const _: () = assert!(Slot::COUNT == CombatConfig::SLOT_COUNT);

/// Slot named by an item definition. Two-handed weapons occupy the weapon slot
/// and forbid a shield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputSlot {
    Head,
    Neck,
    Cape,
    Ammo,
    Body,
    Legs,
    Hands,
    Feet,
    Weapon,
    Shield,
    Ring,
    #[cfg_attr(feature = "serde", serde(alias = "2h"))]
    TwoHanded,
}

impl InputSlot {
    /// The actor slot this definition lands in.
    pub const fn slot(self) -> Slot {
        match self {
            Self::Head => Slot::Head,
            Self::Neck => Slot::Neck,
            Self::Cape => Slot::Cape,
            Self::Ammo => Slot::Ammo,
            Self::Body => Slot::Body,
            Self::Legs => Slot::Legs,
            Self::Hands => Slot::Hands,
            Self::Feet => Slot::Feet,
            Self::Weapon | Self::TwoHanded => Slot::Weapon,
            Self::Shield => Slot::Shield,
            Self::Ring => Slot::Ring,
        }
    }

    pub const fn is_weapon(self) -> bool {
        matches!(self, Self::Weapon | Self::TwoHanded)
    }
}

/// Weapon-only item data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub category: WeaponCategory,
    /// Attack speed in game ticks.
    pub speed: u32,
}

impl WeaponData {
    pub const fn new(category: WeaponCategory, speed: u32) -> Self {
        Self { category, speed }
    }
}

/// Caller-supplied description of one item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentDefinition {
    pub id: i32,
    pub name: String,
    pub slot: InputSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: BonusVector,
    /// Required for weapon slots, forbidden elsewhere.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<WeaponData>,
}

impl EquipmentDefinition {
    /// Non-weapon item.
    pub fn armour(
        id: i32,
        name: impl Into<String>,
        slot: InputSlot,
        bonuses: BonusVector,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            slot,
            bonuses,
            weapon: None,
        }
    }

    /// One-handed weapon.
    pub fn weapon(
        id: i32,
        name: impl Into<String>,
        bonuses: BonusVector,
        data: WeaponData,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            slot: InputSlot::Weapon,
            bonuses,
            weapon: Some(data),
        }
    }

    /// Two-handed weapon.
    pub fn two_handed(
        id: i32,
        name: impl Into<String>,
        bonuses: BonusVector,
        data: WeaponData,
    ) -> Self {
        Self {
            slot: InputSlot::TwoHanded,
            ..Self::weapon(id, name, bonuses, data)
        }
    }
}

/// Weapon properties of an equipped item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weapon {
    pub category: WeaponCategory,
    pub speed: u32,
    pub two_handed: bool,
}

/// One validated, equipped item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub slot: Slot,
    pub bonuses: BonusVector,
    /// Present exactly when `slot` is [`Slot::Weapon`].
    pub weapon: Option<Weapon>,
}

impl Equipment {
    /// Id of the synthetic unarmed weapon.
    pub const UNARMED_ID: i32 = -1;

    /// # Errors
    ///
    /// `StatError::Validation` when weapon data is missing on a weapon, present
    /// on anything else, or declares an attack speed of zero ticks.
    pub fn from_definition(definition: &EquipmentDefinition) -> Result<Self, StatError> {
        let weapon = match (definition.slot.is_weapon(), definition.weapon) {
            (true, Some(data)) if data.speed == 0 => {
                return Err(StatError::validation(format!(
                    "weapon '{}' has an attack speed of 0 ticks",
                    definition.name
                )));
            }
            (true, Some(data)) => Some(Weapon {
                category: data.category,
                speed: data.speed,
                two_handed: definition.slot == InputSlot::TwoHanded,
            }),
            (false, None) => None,
            (true, None) => {
                return Err(StatError::validation(format!(
                    "weapon '{}' is missing weapon data",
                    definition.name
                )));
            }
            (false, Some(_)) => {
                return Err(StatError::validation(format!(
                    "'{}' is not a weapon but carries weapon data",
                    definition.name
                )));
            }
        };

        Ok(Self {
            id: definition.id,
            name: definition.name.clone(),
            slot: definition.slot.slot(),
            bonuses: definition.bonuses,
            weapon,
        })
    }

    /// Empty-handed weapon: no bonuses, unarmed category.
    pub fn unarmed(config: &CombatConfig) -> Self {
        Self {
            id: Self::UNARMED_ID,
            name: "Unarmed".to_owned(),
            slot: Slot::Weapon,
            bonuses: BonusVector::ZERO,
            weapon: Some(Weapon {
                category: WeaponCategory::Unarmed,
                speed: config.unarmed_speed,
                two_handed: false,
            }),
        }
    }

    pub fn matches(&self, pattern: NamePattern) -> bool {
        pattern.matches(&self.name)
    }
}

/// How an item name is matched when modifiers look for specific gear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamePattern {
    Exact(&'static str),
    /// Matches every charge/variant suffix ("Ahrim's hood 100", ...).
    Prefix(&'static str),
    /// Case-insensitive substring.
    Contains(&'static str),
}

impl NamePattern {
    pub fn matches(self, name: &str) -> bool {
        match self {
            Self::Exact(expected) => name == expected,
            Self::Prefix(prefix) => name.starts_with(prefix),
            Self::Contains(needle) => name.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}

/// Validated set of equipped items, one per slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loadout {
    weapon: Equipment,
    worn: BTreeMap<Slot, Equipment>,
}

impl Loadout {
    /// Validates and places every definition.
    ///
    /// # Errors
    ///
    /// `StatError::Validation` when two definitions share a slot, a two-handed
    /// weapon is combined with a shield, or weapon data is missing/misplaced.
    pub fn from_definitions(
        definitions: &[EquipmentDefinition],
        config: &CombatConfig,
    ) -> Result<Self, StatError> {
        let mut weapon = None;
        let mut worn = BTreeMap::new();

        for definition in definitions {
            let item = Equipment::from_definition(definition)?;
            let occupied = if item.slot == Slot::Weapon {
                weapon.replace(item).is_some()
            } else {
                worn.insert(item.slot, item).is_some()
            };

            if occupied {
                return Err(StatError::validation(format!(
                    "slot '{}' is equipped more than once",
                    definition.slot.slot()
                )));
            }
        }

        let weapon = weapon.unwrap_or_else(|| Equipment::unarmed(config));
        if weapon.weapon.is_some_and(|w| w.two_handed) && worn.contains_key(&Slot::Shield) {
            return Err(StatError::validation(format!(
                "two-handed weapon '{}' cannot be combined with a shield",
                weapon.name
            )));
        }

        Ok(Self { weapon, worn })
    }

    /// The wielded weapon (unarmed if none was given).
    pub fn weapon(&self) -> &Equipment {
        &self.weapon
    }

    /// Weapon properties of the wielded weapon.
    pub fn weapon_data(&self) -> Option<Weapon> {
        self.weapon.weapon
    }

    pub fn get(&self, slot: Slot) -> Option<&Equipment> {
        match slot {
            Slot::Weapon => Some(&self.weapon),
            other => self.worn.get(&other),
        }
    }

    /// Every occupied slot, the weapon first.
    pub fn iter(&self) -> impl Iterator<Item = &Equipment> {
        core::iter::once(&self.weapon).chain(self.worn.values())
    }

    /// Sum of every equipped item's bonuses.
    pub fn bonuses(&self) -> BonusVector {
        self.iter().map(|item| item.bonuses).sum()
    }

    /// Whether the item in `slot` matches `pattern`.
    pub fn is_wearing(&self, slot: Slot, pattern: NamePattern) -> bool {
        self.get(slot).is_some_and(|item| item.matches(pattern))
    }
}
