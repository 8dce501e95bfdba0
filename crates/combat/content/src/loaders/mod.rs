//! Content loaders for reading combat tables from files.
//!
//! Each loader converts one RON/TOML file into the table type the core's
//! oracles are built from. Loaders accept either a path (`load`) or the file
//! contents (`parse`), so bundled data and user data go through the same code.

pub mod boosts;
pub mod config;
pub mod factory;
pub mod prayers;
pub mod spells;
pub mod styles;

pub use boosts::BoostLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use prayers::PrayerLoader;
pub use spells::SpellLoader;
pub use styles::AttackStyleLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
