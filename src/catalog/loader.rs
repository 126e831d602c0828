//! RON data loader
//!
//! Loads catalog content from external RON files, with fallback to the
//! hardcoded defaults when a file is missing or malformed.

use std::fs;
use std::path::Path;

use crate::error::ContentError;

use super::classes::{default_class_templates, ClassTemplates};
use super::items::{default_item_templates, ItemTemplates};
use super::monsters::{default_monster_templates, MonsterTemplates};
use super::spawn_tables::{default_spawn_tables, SpawnTables};
use super::Catalog;

/// Default directory for external content files
pub const DATA_DIR: &str = "assets/data";

impl Catalog {
    /// Build the catalog from `assets/data/*.ron`, falling back to the
    /// hardcoded defaults per file, then validate cross-references.
    pub fn load() -> Result<Self, ContentError> {
        Self::load_from(Path::new(DATA_DIR))
    }

    /// Build the catalog from a specific directory
    pub fn load_from(base_path: &Path) -> Result<Self, ContentError> {
        let catalog = Self::new(
            load_file(base_path, "items.ron", default_item_templates),
            load_file(base_path, "monsters.ron", default_monster_templates),
            load_file(base_path, "classes.ron", default_class_templates),
            load_file(base_path, "spawn_tables.ron", default_spawn_tables),
        );
        catalog.validate()?;
        Ok(catalog)
    }
}

/// Load one RON file, falling back to a default on any failure
fn load_file<T, F>(base_path: &Path, file: &str, fallback: F) -> T
where
    T: serde::de::DeserializeOwned,
    F: FnOnce() -> T,
{
    let path = base_path.join(file);
    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(value) => return value,
                Err(e) => log::warn!("failed to parse {file}: {e}; using defaults"),
            },
            Err(e) => log::warn!("failed to read {file}: {e}; using defaults"),
        }
    }
    fallback()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_falls_back_to_defaults() {
        // Nonexistent directory: every file falls back, and the defaults
        // must cross-validate.
        let catalog = Catalog::load_from(Path::new("no/such/dir")).unwrap();
        assert!(catalog.item("worn_sword").is_ok());
        assert!(catalog.monster("grey_wolf").is_ok());
        assert!(catalog.class("warrior").is_ok());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = std::env::temp_dir().join("wildlands_loader_test");
        let _ = fs::create_dir_all(&dir);
        fs::write(dir.join("items.ron"), "this is not ron {{{").unwrap();
        let catalog = Catalog::load_from(&dir).unwrap();
        assert!(catalog.item("worn_sword").is_ok());
        let _ = fs::remove_dir_all(&dir);
    }
}
