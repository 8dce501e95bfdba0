//! Data-driven combat content and loaders.
//!
//! This crate houses the game-data tables the calculator reads through its
//! oracles and provides loaders for RON/TOML data files:
//! - Spell max hits (RON)
//! - Boost effects (RON)
//! - Prayer multipliers (RON)
//! - Attack styles per weapon category (RON)
//! - Combat configuration (TOML)
//!
//! A copy of every file under `data/` is compiled in; see
//! [`ContentFactory::bundled`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AttackStyleLoader, BoostLoader, ConfigLoader, ContentFactory, LoadResult, PrayerLoader,
    SpellLoader, factory::Content,
};
