//! Exact damage distributions.
//!
//! A [`HitTracker`] holds one distribution per simultaneous sub-hit of an
//! attack. It starts with a single distribution; the first multi-hit store of
//! `N` outcomes widens it to exactly `N`, after which every multi-hit store
//! must supply `N` outcomes.

use std::collections::BTreeMap;

use super::TrackerError;

/// Damage amount → probability mass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution {
    masses: BTreeMap<u32, f64>,
    max_hit: u32,
    /// Miss chance this distribution was declared with.
    miss_chance: f64,
}

impl Distribution {
    /// A distribution whose only entry is the miss mass at 0.
    fn with_miss_chance(miss_chance: f64) -> Self {
        let mut distribution = Self {
            masses: BTreeMap::new(),
            max_hit: 0,
            miss_chance,
        };
        distribution.add(0, miss_chance);
        distribution
    }

    fn add(&mut self, damage: u32, p: f64) {
        *self.masses.entry(damage).or_insert(0.0) += p;
        self.max_hit = self.max_hit.max(damage);
    }

    pub fn get(&self, damage: u32) -> f64 {
        self.masses.get(&damage).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.masses.iter().map(|(&damage, &p)| (damage, p))
    }

    /// Largest damage ever stored.
    pub fn max_hit(&self) -> u32 {
        self.max_hit
    }

    pub fn miss_chance(&self) -> f64 {
        self.miss_chance
    }

    pub fn total_mass(&self) -> f64 {
        self.masses.values().sum()
    }

    pub fn average_damage(&self) -> f64 {
        self.iter().map(|(damage, p)| f64::from(damage) * p).sum()
    }

    /// Stored entries with the declared miss mass taken off damage 0.
    fn hit_outcomes(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.iter().map(|(damage, p)| {
            if damage == 0 {
                (0, (p - self.miss_chance).max(0.0))
            } else {
                (damage, p)
            }
        })
    }
}

/// Per-sub-hit maxima of a tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxHitData {
    /// Max hit of every sub-hit, in order.
    pub list: Vec<u32>,
    /// Best-case total of one attack.
    pub sum: u32,
    /// Largest single sub-hit.
    pub max: u32,
}

/// Parallel damage distributions for one attack.
///
/// # Example
/// ```
/// # use combat_core::combat::HitTracker;
/// let tracker = HitTracker::basic_distribution(0.5, 10).unwrap();
/// assert!((tracker.average_damage() - 2.5).abs() < 1e-12);
/// assert_eq!(tracker.max_hit_data().max, 10);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitTracker {
    accuracy: f64,
    distributions: Vec<Distribution>,
    /// Fixed by the first multi-hit store.
    width: Option<usize>,
}

impl HitTracker {
    /// An empty tracker whose miss mass `1 − accuracy` sits at damage 0.
    ///
    /// # Errors
    ///
    /// `TrackerError::InvalidProbability` if `accuracy` is outside `[0, 1]`.
    pub fn new(accuracy: f64) -> Result<Self, TrackerError> {
        check_probability(accuracy)?;

        Ok(Self {
            accuracy,
            distributions: vec![Distribution::with_miss_chance(1.0 - accuracy)],
            width: None,
        })
    }

    /// Miss mass at 0 plus `accuracy / (max_hit + 1)` at every damage in
    /// `[0, max_hit]`.
    pub fn basic_distribution(accuracy: f64, max_hit: u32) -> Result<Self, TrackerError> {
        let mut tracker = Self::new(accuracy)?;
        let share = accuracy / (f64::from(max_hit) + 1.0);

        for damage in 0..=max_hit {
            tracker.primary_mut().add(damage, share);
        }

        Ok(tracker)
    }

    /// Adds `p` at `damage` in the first distribution.
    pub fn store(&mut self, damage: i32, p: f64) -> Result<(), TrackerError> {
        let damage = check_damage(damage)?;
        check_probability(p)?;

        self.primary_mut().add(damage, p);
        Ok(())
    }

    /// Adds `p` at `hits[i]` in the `i`-th distribution.
    ///
    /// A single-element list behaves like [`store`](Self::store) until the
    /// width is fixed.
    ///
    /// # Errors
    ///
    /// - `TrackerError::EmptyHitList` for an empty `hits`
    /// - `TrackerError::MismatchedHitCount` once the width is fixed to another length
    /// - `TrackerError::InvalidDamage` / `InvalidProbability` for bad inputs
    pub fn store_multiple(&mut self, hits: &[i32], p: f64) -> Result<(), TrackerError> {
        if hits.is_empty() {
            return Err(TrackerError::EmptyHitList);
        }
        check_probability(p)?;
        let damages = hits
            .iter()
            .map(|&damage| check_damage(damage))
            .collect::<Result<Vec<_>, _>>()?;

        match self.width {
            None if damages.len() == 1 => {}
            None => self.widen(damages.len()),
            Some(expected) if expected != damages.len() => {
                return Err(TrackerError::MismatchedHitCount {
                    expected,
                    actual: damages.len(),
                });
            }
            Some(_) => {}
        }

        for (distribution, damage) in self.distributions.iter_mut().zip(damages) {
            distribution.add(damage, p);
        }
        Ok(())
    }

    fn widen(&mut self, width: usize) {
        let miss_chance = 1.0 - self.accuracy;
        self.distributions
            .resize_with(width, || Distribution::with_miss_chance(miss_chance));
        self.width = Some(width);
    }

    fn primary_mut(&mut self) -> &mut Distribution {
        &mut self.distributions[0]
    }

    /// Declared hit chance, never recomputed from stored mass.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn distributions(&self) -> &[Distribution] {
        &self.distributions
    }

    /// Number of simultaneous sub-hits.
    pub fn hit_count(&self) -> usize {
        self.distributions.len()
    }

    /// Expected total damage of one attack over every sub-hit.
    pub fn average_damage(&self) -> f64 {
        self.distributions.iter().map(Distribution::average_damage).sum()
    }

    pub fn max_hit_data(&self) -> MaxHitData {
        let list: Vec<u32> = self.distributions.iter().map(Distribution::max_hit).collect();
        MaxHitData {
            sum: list.iter().sum(),
            max: list.iter().copied().max().unwrap_or(0),
            list,
        }
    }

    /// A tracker where every sub-hit also has a `proc_chance` chance of an
    /// extra, duplicate hit.
    ///
    /// The result holds the original distributions followed by one duplicate
    /// per distribution. A duplicate of a distribution with miss chance `m`
    /// hits with chance `(1 − m) × proc_chance`, spreading that mass over the
    /// original hit outcomes in proportion.
    pub fn double_hits(tracker: &HitTracker, proc_chance: f64) -> Result<Self, TrackerError> {
        check_probability(proc_chance)?;

        let duplicates: Vec<Distribution> = tracker
            .distributions
            .iter()
            .map(|original| duplicate(original, proc_chance))
            .collect();

        let mut distributions = tracker.distributions.clone();
        distributions.extend(duplicates);
        let width = distributions.len();

        Ok(Self {
            accuracy: tracker.accuracy,
            distributions,
            width: Some(width),
        })
    }
}

fn duplicate(original: &Distribution, proc_chance: f64) -> Distribution {
    let hit_chance = (1.0 - original.miss_chance) * proc_chance;
    let hit_mass: f64 = original.hit_outcomes().map(|(_, p)| p).sum();
    let scale = if hit_mass > 0.0 {
        hit_chance / hit_mass
    } else {
        0.0
    };

    let mut copy = Distribution::with_miss_chance(1.0 - hit_chance);
    for (damage, p) in original.hit_outcomes() {
        copy.add(damage, p * scale);
    }
    copy
}

fn check_damage(damage: i32) -> Result<u32, TrackerError> {
    u32::try_from(damage).map_err(|_| TrackerError::InvalidDamage(damage))
}

fn check_probability(p: f64) -> Result<(), TrackerError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(TrackerError::InvalidProbability(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn accuracy_is_returned_verbatim() {
        let tracker = HitTracker::new(0.5).unwrap();
        assert_eq!(tracker.accuracy(), 0.5);
        assert_eq!(tracker.distributions()[0].get(0), 0.5);
    }

    #[test]
    fn stores_accumulate() {
        let mut tracker = HitTracker::new(1.0).unwrap();
        tracker.store(7, 0.25).unwrap();
        tracker.store(7, 0.25).unwrap();

        assert!((tracker.distributions()[0].get(7) - 0.5).abs() < EPSILON);
        assert_eq!(tracker.max_hit_data().max, 7);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let mut tracker = HitTracker::new(0.8).unwrap();

        assert_eq!(tracker.store(-1, 0.1), Err(TrackerError::InvalidDamage(-1)));
        assert_eq!(tracker.store(1, 1.5), Err(TrackerError::InvalidProbability(1.5)));
        assert_eq!(tracker.store_multiple(&[], 0.1), Err(TrackerError::EmptyHitList));
        assert!(HitTracker::new(-0.1).is_err());
    }

    #[test]
    fn first_multi_store_fixes_width() {
        let mut tracker = HitTracker::new(0.6).unwrap();
        tracker.store_multiple(&[10, 5, 2], 0.2).unwrap();
        assert_eq!(tracker.hit_count(), 3);

        let err = tracker.store_multiple(&[10, 5], 0.2).unwrap_err();
        assert_eq!(
            err,
            TrackerError::MismatchedHitCount {
                expected: 3,
                actual: 2
            }
        );

        let data = tracker.max_hit_data();
        assert_eq!(data.list, vec![10, 5, 2]);
        assert_eq!(data.sum, 17);
        assert_eq!(data.max, 10);
    }

    #[test]
    fn widened_distributions_share_miss_baseline() {
        let mut tracker = HitTracker::new(0.75).unwrap();
        tracker.store_multiple(&[4, 2], 0.75).unwrap();

        for distribution in tracker.distributions() {
            assert!((distribution.miss_chance() - 0.25).abs() < EPSILON);
            assert!((distribution.total_mass() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn single_hit_multi_store_does_not_fix_width() {
        let mut tracker = HitTracker::new(1.0).unwrap();
        tracker.store_multiple(&[3], 0.5).unwrap();
        tracker.store_multiple(&[4, 2], 0.5).unwrap();

        assert_eq!(tracker.hit_count(), 2);
    }

    #[test]
    fn double_hits_scales_hit_outcomes() {
        let tracker = HitTracker::basic_distribution(0.8, 3).unwrap();
        let doubled = HitTracker::double_hits(&tracker, 0.25).unwrap();

        assert_eq!(doubled.hit_count(), 2);
        let duplicate = &doubled.distributions()[1];
        // hit chance 0.8 × 0.25 = 0.2, spread evenly over 0..=3
        assert!((duplicate.miss_chance() - 0.8).abs() < EPSILON);
        assert!((duplicate.get(3) - 0.05).abs() < EPSILON);
        assert!((duplicate.get(0) - 0.85).abs() < EPSILON);
        assert!((duplicate.total_mass() - 1.0).abs() < EPSILON);
        assert!((doubled.average_damage() - tracker.average_damage() * 1.25).abs() < EPSILON);
    }

    proptest! {
        #[test]
        fn basic_distribution_mean(accuracy in 0.0f64..=1.0, max_hit in 0u32..200) {
            let tracker = HitTracker::basic_distribution(accuracy, max_hit).unwrap();
            let expected = accuracy * f64::from(max_hit) / 2.0;
            prop_assert!((tracker.average_damage() - expected).abs() < 1e-9);
        }

        #[test]
        fn double_hits_doubles_width_and_max(
            accuracy in 0.0f64..=1.0,
            max_hit in 0u32..100,
            sizes in 1usize..4,
            proc_chance in 0.0f64..=1.0,
        ) {
            let mut tracker = HitTracker::new(accuracy).unwrap();
            let share = accuracy / (f64::from(max_hit) + 1.0);
            for damage in 0..=max_hit as i32 {
                let hits: Vec<i32> = (0..sizes).map(|i| damage >> i).collect();
                tracker.store_multiple(&hits, share).unwrap();
            }

            let doubled = HitTracker::double_hits(&tracker, proc_chance).unwrap();
            prop_assert_eq!(doubled.hit_count(), 2 * tracker.hit_count());
            prop_assert_eq!(doubled.accuracy(), tracker.accuracy());
            prop_assert_eq!(doubled.max_hit_data().sum, 2 * tracker.max_hit_data().sum);
        }
    }
}
