//! Deterministic combat statistics.
//!
//! `combat-core` turns two combatants and an attack [`Vertex`] into exact
//! accuracy, damage distribution and dps figures. Game-data tables are read
//! through the oracle traits in [`env`]; the content crate loads them from
//! data files. Every calculation is a pure function of its inputs.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod modifiers;
pub mod state;
pub mod stats;

pub use combat::{
    CombatClass, CombatError, CombatResult, CombatStyle, DamageType, GuardianResult, HitTracker,
    MaxHitData, TrackerError, Vertex, calculate, calculate_guardian,
};
pub use config::CombatConfig;
pub use env::{
    AttackStyle, AttackStyleOracle, BoostId, BoostOracle, CombatEnv, PrayerId, PrayerOracle,
    SpellId, SpellOracle, TablesSnapshot, WeaponCategory,
};
pub use error::{CalcError, ErrorSeverity};
pub use modifiers::{ActiveModifiers, Modifier, ModifierContext};
pub use state::{Actor, ActorData, Attribute, EquipmentDefinition, InputSlot, WeaponData};
pub use stats::{BonusChannel, BonusVector, Levels, PartialLevels, StatError};
