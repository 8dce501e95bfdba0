//! Immutable combatant state.
//!
//! Everything here is validated at construction and never mutated afterwards;
//! the modifier chain works on copies of the values derived from it.
pub mod actor;
pub mod equipment;

pub use actor::{Actor, ActorData, Attribute, Attributes};
pub use equipment::{
    Equipment, EquipmentDefinition, InputSlot, Loadout, NamePattern, Slot, Weapon, WeaponData,
};
