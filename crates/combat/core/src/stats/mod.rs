//! Stat aggregation.
//!
//! ```text
//! [ Base levels ] ──▶ apply_boosts ──▶ [ Boosted levels ]
//! [ Prayers     ] ──▶ resolve_prayers ──▶ [ Multipliers ]
//! [ Bonus sources ] ──▶ Sum ──▶ [ Total BonusVector ]
//! ```
//!
//! Everything here is a pure function of its inputs and the oracle tables;
//! the results are frozen into an [`Actor`](crate::state::Actor) at
//! construction.

pub mod bonus;
pub mod boosts;
pub mod error;
pub mod levels;
pub mod prayers;

pub use bonus::{BonusChannel, BonusVector};
pub use boosts::apply_boosts;
pub use error::StatError;
pub use levels::{Level, Levels, PartialLevels};
pub use prayers::{PrayerMultipliers, resolve_prayers};
