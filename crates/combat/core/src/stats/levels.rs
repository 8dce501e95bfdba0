//! Skill levels.
//!
//! `Levels` is the complete, internally-required set; `PartialLevels` is the
//! construction-time input where every missing skill falls back to 1.

use super::StatError;

/// A skill level. Base levels are always at least 1.
pub type Level = u32;

/// Complete set of skill levels relevant to combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Levels {
    pub hitpoints: Level,
    pub attack: Level,
    pub strength: Level,
    pub defence: Level,
    pub magic: Level,
    pub ranged: Level,
    pub prayer: Level,
    pub mining: Level,
}

impl Levels {
    /// Lowest legal level for every skill.
    pub const MIN_LEVEL: Level = 1;

    /// Every skill at the same level.
    pub const fn uniform(level: Level) -> Self {
        Self {
            hitpoints: level,
            attack: level,
            strength: level,
            defence: level,
            magic: level,
            ranged: level,
            prayer: level,
            mining: level,
        }
    }

    /// Checks that no skill is below [`Self::MIN_LEVEL`].
    pub fn validate(&self) -> Result<(), StatError> {
        let named = [
            ("hitpoints", self.hitpoints),
            ("attack", self.attack),
            ("strength", self.strength),
            ("defence", self.defence),
            ("magic", self.magic),
            ("ranged", self.ranged),
            ("prayer", self.prayer),
            ("mining", self.mining),
        ];

        match named.iter().find(|(_, level)| *level < Self::MIN_LEVEL) {
            Some((skill, level)) => Err(StatError::validation(format!(
                "{skill} level must be at least {}, got {level}",
                Self::MIN_LEVEL
            ))),
            None => Ok(()),
        }
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self::uniform(Self::MIN_LEVEL)
    }
}

/// Level overrides supplied by the caller; unset skills default to 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PartialLevels {
    pub hitpoints: Option<Level>,
    pub attack: Option<Level>,
    pub strength: Option<Level>,
    pub defence: Option<Level>,
    pub magic: Option<Level>,
    pub ranged: Option<Level>,
    pub prayer: Option<Level>,
    pub mining: Option<Level>,
}

impl PartialLevels {
    /// Merges the overrides onto `base`.
    pub fn merge_onto(&self, base: Levels) -> Levels {
        Levels {
            hitpoints: self.hitpoints.unwrap_or(base.hitpoints),
            attack: self.attack.unwrap_or(base.attack),
            strength: self.strength.unwrap_or(base.strength),
            defence: self.defence.unwrap_or(base.defence),
            magic: self.magic.unwrap_or(base.magic),
            ranged: self.ranged.unwrap_or(base.ranged),
            prayer: self.prayer.unwrap_or(base.prayer),
            mining: self.mining.unwrap_or(base.mining),
        }
    }

    /// Merges onto the all-ones default and validates the result.
    pub fn resolve(&self) -> Result<Levels, StatError> {
        let levels = self.merge_onto(Levels::default());
        levels.validate()?;
        Ok(levels)
    }
}

impl From<Levels> for PartialLevels {
    fn from(levels: Levels) -> Self {
        Self {
            hitpoints: Some(levels.hitpoints),
            attack: Some(levels.attack),
            strength: Some(levels.strength),
            defence: Some(levels.defence),
            magic: Some(levels.magic),
            ranged: Some(levels.ranged),
            prayer: Some(levels.prayer),
            mining: Some(levels.mining),
        }
    }
}
