//! Loading content from a data directory on disk.

use std::fs;
use std::path::Path;

use combat_content::{ContentFactory, SpellLoader};
use combat_core::env::SpellId;
use tempfile::TempDir;

const DATA_FILES: [&str; 5] = [
    "spells.ron",
    "boosts.ron",
    "prayers.ron",
    "attack_styles.ron",
    "config.toml",
];

fn bundled_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    for file in DATA_FILES {
        fs::copy(source.join(file), dir.path().join(file)).unwrap();
    }
    dir
}

#[test]
fn directory_matches_bundled_content() {
    let dir = bundled_dir();
    let loaded = ContentFactory::new(dir.path()).load().unwrap();
    assert_eq!(loaded, ContentFactory::bundled().unwrap());
}

#[test]
fn edited_files_are_picked_up() {
    let dir = bundled_dir();
    fs::write(dir.path().join("config.toml"), "seconds_per_tick = 1.0\n").unwrap();
    fs::write(
        dir.path().join("spells.ron"),
        r#"(spells: { "Fire Surge": (max_hit: 25) })"#,
    )
    .unwrap();

    let content = ContentFactory::new(dir.path()).load().unwrap();
    assert_eq!(content.config.seconds_per_tick, 1.0);
    assert_eq!(content.tables.spells.len(), 1);
    assert_eq!(content.tables.spells[&SpellId::FireSurge].max_hit, 25);
}

#[test]
fn malformed_file_names_the_table() {
    let dir = bundled_dir();
    let path = dir.path().join("spells.ron");
    fs::write(&path, "(spells: {").unwrap();

    let err = SpellLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("spell table"));
}

#[test]
fn missing_file_fails() {
    let dir = bundled_dir();
    fs::remove_file(dir.path().join("prayers.ron")).unwrap();

    let err = ContentFactory::new(dir.path()).load().unwrap_err();
    assert!(err.to_string().contains("prayers.ron"));
}
