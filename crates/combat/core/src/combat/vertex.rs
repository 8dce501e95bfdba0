//! Attack vertices: how an attack is made.

use super::CombatError;
use crate::env::SpellId;

/// Broad combat class of an attack.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatClass {
    Melee,
    Ranged,
    Magic,
}

/// Stance selected on the weapon interface.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatStyle {
    Accurate,
    Aggressive,
    Controlled,
    Defensive,
    Rapid,
    Longrange,
}

/// Damage type; selects the attack and defence bonus channels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageType {
    Stab,
    Slash,
    Crush,
    Ranged,
    Magic,
    Spell,
}

impl DamageType {
    /// Whether this type belongs to the given class.
    pub const fn belongs_to(self, class: CombatClass) -> bool {
        match class {
            CombatClass::Melee => matches!(self, Self::Stab | Self::Slash | Self::Crush),
            CombatClass::Ranged => matches!(self, Self::Ranged),
            CombatClass::Magic => matches!(self, Self::Magic | Self::Spell),
        }
    }

    pub const fn is_magic(self) -> bool {
        matches!(self, Self::Magic | Self::Spell)
    }
}

/// One way of attacking: class, stance, damage type and optional spell.
///
/// # Example
/// ```
/// # use combat_core::combat::{CombatClass, Vertex};
/// let vertex = Vertex::parse("Magic", "Accurate", "Spell", Some("Fire Surge")).unwrap();
/// assert_eq!(vertex.class, CombatClass::Magic);
/// assert!(vertex.spell.is_some());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub class: CombatClass,
    pub style: CombatStyle,
    pub damage_type: DamageType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spell: Option<SpellId>,
}

impl Vertex {
    /// A spell-less vertex. Legality is checked when the vertex is used.
    pub const fn new(class: CombatClass, style: CombatStyle, damage_type: DamageType) -> Self {
        Self {
            class,
            style,
            damage_type,
            spell: None,
        }
    }

    pub const fn with_spell(mut self, spell: SpellId) -> Self {
        self.spell = Some(spell);
        self
    }

    /// Parses the vertex from display names.
    ///
    /// # Errors
    ///
    /// `CombatError::InvalidVertex` for unknown class, style or type names,
    /// `CombatError::UnknownSpell` for an unknown spell name.
    pub fn parse(
        class: &str,
        style: &str,
        damage_type: &str,
        spell: Option<&str>,
    ) -> Result<Self, CombatError> {
        let class = class
            .parse()
            .map_err(|_| CombatError::invalid_vertex(format!("unknown combat class '{class}'")))?;
        let style = style
            .parse()
            .map_err(|_| CombatError::invalid_vertex(format!("unknown combat style '{style}'")))?;
        let damage_type = damage_type.parse().map_err(|_| {
            CombatError::invalid_vertex(format!("unknown damage type '{damage_type}'"))
        })?;
        let spell = spell.map(SpellId::from_name).transpose()?;

        Ok(Self {
            class,
            style,
            damage_type,
            spell,
        })
    }

    /// Checks that the damage type and spell fit the class.
    pub fn validate(&self) -> Result<(), CombatError> {
        if !self.damage_type.belongs_to(self.class) {
            return Err(CombatError::invalid_vertex(format!(
                "{} damage cannot be dealt by a {} attack",
                self.damage_type, self.class
            )));
        }
        if self.spell.is_some() && self.class != CombatClass::Magic {
            return Err(CombatError::invalid_vertex(format!(
                "a {} attack cannot cast a spell",
                self.class
            )));
        }
        Ok(())
    }

    pub fn is_spell_cast(&self) -> bool {
        self.spell.is_some()
    }
}
