//! Equipment bonus vector.
//!
//! Every piece of equipment (and every actor's innate base bonus) is described
//! by the same fixed set of 14 channels. An actor's total bonus is the
//! component-wise sum of its base vector and every equipped item.

use core::ops::{Add, AddAssign};

use strum::{EnumCount, EnumIter, IntoEnumIterator};

use super::StatError;
use crate::config::CombatConfig;

/// One named channel of a [`BonusVector`], in canonical order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumCount,
    EnumIter,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BonusChannel {
    StabAttack,
    SlashAttack,
    CrushAttack,
    MagicAttack,
    RangedAttack,
    StabDefence,
    SlashDefence,
    CrushDefence,
    MagicDefence,
    RangedDefence,
    /// Melee strength.
    Strength,
    RangedStrength,
    MagicStrength,
    Prayer,
}

impl BonusChannel {
    /// Position of this channel inside the vector.
    pub const fn index(self) -> usize {
        self as usize
    }
}

const _: () = assert!(BonusChannel::COUNT == CombatConfig::BONUS_CHANNELS);

/// Fixed-size vector of the 14 combat bonus channels.
///
/// # Example
/// ```
/// # use combat_core::stats::{BonusChannel, BonusVector};
/// let mut total = BonusVector::from_mapping([(BonusChannel::Strength, 10)]);
/// total.add(&BonusVector::from_mapping([
///     (BonusChannel::Strength, 5),
///     (BonusChannel::SlashAttack, 3),
/// ]));
/// assert_eq!(total.strength(), 15);
/// assert_eq!(total.slash_attack(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "serde_impl::BonusInput", into = "[i32; 14]")
)]
pub struct BonusVector {
    values: [i32; CombatConfig::BONUS_CHANNELS],
}

impl BonusVector {
    /// All channels zero.
    pub const ZERO: Self = Self {
        values: [0; CombatConfig::BONUS_CHANNELS],
    };

    /// Builds a vector from a literal list in canonical channel order.
    ///
    /// # Errors
    ///
    /// Returns `StatError::Validation` unless exactly 14 values are given.
    pub fn from_list(values: &[i32]) -> Result<Self, StatError> {
        let values = values.try_into().map_err(|_| {
            StatError::validation(format!(
                "bonus list must have {} entries, got {}",
                CombatConfig::BONUS_CHANNELS,
                values.len()
            ))
        })?;

        Ok(Self { values })
    }

    /// Builds a vector from a sparse channel mapping; unlisted channels are 0.
    ///
    /// A channel listed twice keeps the last value.
    pub fn from_mapping(entries: impl IntoIterator<Item = (BonusChannel, i32)>) -> Self {
        let mut result = Self::ZERO;
        for (channel, value) in entries {
            result.values[channel.index()] = value;
        }
        result
    }

    /// Adds `other` component-wise into `self`.
    pub fn add(&mut self, other: &BonusVector) {
        for (value, extra) in self.values.iter_mut().zip(other.values) {
            *value += extra;
        }
    }

    pub fn get(&self, channel: BonusChannel) -> i32 {
        self.values[channel.index()]
    }

    /// Values in canonical channel order.
    pub fn to_array(&self) -> [i32; CombatConfig::BONUS_CHANNELS] {
        self.values
    }

    /// Iterates `(channel, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (BonusChannel, i32)> + '_ {
        BonusChannel::iter().map(|channel| (channel, self.get(channel)))
    }

    pub fn stab_attack(&self) -> i32 {
        self.get(BonusChannel::StabAttack)
    }

    pub fn slash_attack(&self) -> i32 {
        self.get(BonusChannel::SlashAttack)
    }

    pub fn crush_attack(&self) -> i32 {
        self.get(BonusChannel::CrushAttack)
    }

    pub fn magic_attack(&self) -> i32 {
        self.get(BonusChannel::MagicAttack)
    }

    pub fn ranged_attack(&self) -> i32 {
        self.get(BonusChannel::RangedAttack)
    }

    pub fn stab_defence(&self) -> i32 {
        self.get(BonusChannel::StabDefence)
    }

    pub fn slash_defence(&self) -> i32 {
        self.get(BonusChannel::SlashDefence)
    }

    pub fn crush_defence(&self) -> i32 {
        self.get(BonusChannel::CrushDefence)
    }

    pub fn magic_defence(&self) -> i32 {
        self.get(BonusChannel::MagicDefence)
    }

    pub fn ranged_defence(&self) -> i32 {
        self.get(BonusChannel::RangedDefence)
    }

    pub fn strength(&self) -> i32 {
        self.get(BonusChannel::Strength)
    }

    pub fn ranged_strength(&self) -> i32 {
        self.get(BonusChannel::RangedStrength)
    }

    pub fn magic_strength(&self) -> i32 {
        self.get(BonusChannel::MagicStrength)
    }

    pub fn prayer(&self) -> i32 {
        self.get(BonusChannel::Prayer)
    }
}

impl From<BonusVector> for [i32; CombatConfig::BONUS_CHANNELS] {
    fn from(bonuses: BonusVector) -> Self {
        bonuses.values
    }
}

impl Add for BonusVector {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        BonusVector::add(&mut self, &rhs);
        self
    }
}

impl AddAssign for BonusVector {
    fn add_assign(&mut self, rhs: Self) {
        BonusVector::add(self, &rhs);
    }
}

impl core::iter::Sum for BonusVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::collections::BTreeMap;

    use super::{BonusChannel, BonusVector, StatError};

    /// Accepted on-disk shapes: a full list or a sparse map.
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    pub(super) enum BonusInput {
        List(Vec<i32>),
        Map(BTreeMap<BonusChannel, i32>),
    }

    impl TryFrom<BonusInput> for BonusVector {
        type Error = StatError;

        fn try_from(input: BonusInput) -> Result<Self, Self::Error> {
            match input {
                BonusInput::List(values) => BonusVector::from_list(&values),
                BonusInput::Map(entries) => Ok(BonusVector::from_mapping(entries)),
            }
        }
    }
}
