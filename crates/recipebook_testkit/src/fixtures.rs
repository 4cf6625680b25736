//! Test fixtures and cookbook helpers.
//!
//! Provides cookbooks backed by temporary directories and a few sample
//! recipes with known totals.

use recipebook_core::{Config, Cookbook, Ingredient, Recipe};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name used for the store inside the temp directory.
pub const STORE_FILE_NAME: &str = "cookbook.json";

/// A cookbook stored in a temporary directory that is removed on drop.
pub struct TestCookbook {
    /// The cookbook instance.
    pub cookbook: Cookbook,
    /// The temporary directory (kept alive to prevent cleanup).
    temp_dir: TempDir,
}

impl TestCookbook {
    /// Creates an empty cookbook with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty cookbook with the given configuration.
    pub fn with_config(config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cookbook = Cookbook::open_with_config(temp_dir.path().join(STORE_FILE_NAME), config);
        Self { cookbook, temp_dir }
    }

    /// Creates a cookbook whose store file already holds `contents`.
    pub fn with_store_contents(contents: &str, config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join(STORE_FILE_NAME);
        fs::write(&path, contents).expect("Failed to write store file");
        let cookbook = Cookbook::open_with_config(path, config);
        Self { cookbook, temp_dir }
    }

    /// Returns the temp directory path.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Returns the store file path.
    pub fn store_path(&self) -> PathBuf {
        self.cookbook.path().to_path_buf()
    }

    /// Reads the store file as JSON.
    pub fn read_store(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.cookbook.path()).expect("Failed to read store");
        serde_json::from_str(&contents).expect("Store is not valid JSON")
    }

    /// Opens a second cookbook over the same store file.
    pub fn reopen(&self) -> Cookbook {
        Cookbook::open_with_config(self.cookbook.path(), self.cookbook.config().clone())
    }
}

impl Default for TestCookbook {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for TestCookbook {
    type Target = Cookbook;

    fn deref(&self) -> &Self::Target {
        &self.cookbook
    }
}

impl std::ops::DerefMut for TestCookbook {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cookbook
    }
}

/// Creates a validated ingredient, panicking on invalid input.
pub fn ingredient(name: &str, quantity: f64, unit: &str, calories_per_unit: f64) -> Ingredient {
    Ingredient::with_details(name, quantity, unit, calories_per_unit)
        .expect("Fixture ingredient should be valid")
}

/// Eggs(3 pcs, 70), Milk(100 ml, 42), Butter(20 g, 717). 18750 calories.
pub fn classic_omelette() -> Recipe {
    Recipe::new("Classic Omelette")
        .expect("Fixture recipe should be valid")
        .with_description("Three-egg omelette")
        .with_instructions("Whisk, pour, fold.")
        .with_ingredients(vec![
            ingredient("Eggs", 3.0, "pcs", 70.0),
            ingredient("Milk", 100.0, "ml", 42.0),
            ingredient("Butter", 20.0, "g", 717.0),
        ])
}

/// A "Dessert" recipe sharing Eggs and Milk with the omelette.
pub fn pancakes() -> Recipe {
    Recipe::new("Pancakes")
        .expect("Fixture recipe should be valid")
        .with_category("Dessert")
        .with_ingredients(vec![
            ingredient("Flour", 200.0, "g", 3.5),
            ingredient("Eggs", 2.0, "pcs", 70.0),
            ingredient("Milk", 300.0, "ml", 0.5),
        ])
}

/// A "Salad" recipe with no overlap with the others.
pub fn greek_salad() -> Recipe {
    Recipe::new("Greek Salad")
        .expect("Fixture recipe should be valid")
        .with_category("Salad")
        .with_ingredients(vec![
            ingredient("Tomatoes", 300.0, "g", 0.2),
            ingredient("Cucumber", 200.0, "g", 0.15),
            ingredient("Feta", 100.0, "g", 2.5),
        ])
}

/// Runs a test with a temporary cookbook.
pub fn with_temp_cookbook<F, R>(f: F) -> R
where
    F: FnOnce(&mut Cookbook) -> R,
{
    let mut test = TestCookbook::new();
    f(&mut test.cookbook)
}
