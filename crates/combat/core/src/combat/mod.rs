//! Combat resolution.
//!
//! All functions here are deterministic and side-effect free: the same
//! inputs always produce a bit-identical result.
//!
//! # Core Functions
//!
//! - [`calculate`]: full attacker-vs-defender pipeline
//! - [`calculate_guardian`]: fixed-profile guardian thrall against a defender
//! - [`accuracy_roll`], [`max_hit_formula`], [`compare_rolls`]: base formulas
//! - [`HitTracker`]: exact damage distributions

pub mod calculate;
pub mod error;
pub mod formula;
pub mod guardian;
pub mod tracker;
pub mod values;
pub mod vertex;

pub use calculate::{CombatResult, calculate};
pub use error::{CombatError, TrackerError};
pub use formula::{accuracy_roll, compare_rolls, max_hit_formula};
pub use guardian::{GuardianResult, calculate_guardian};
pub use tracker::{Distribution, HitTracker, MaxHitData};
pub use values::{AttackValues, CombatValues, DefendValues, StatValues};
pub use vertex::{CombatClass, CombatStyle, DamageType, Vertex};
