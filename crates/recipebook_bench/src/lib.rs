//! Shared helpers for RecipeBook benchmarks.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use recipebook_core::{Config, Cookbook, Recipe, StoreFile};
use recipebook_testkit::ingredient;
use std::fs;
use std::path::Path;

/// Builds `count` recipes with `ingredients_per_recipe` ingredients each.
///
/// Ingredient names repeat across recipes so shopping lists merge lines.
pub fn sample_recipes(count: usize, ingredients_per_recipe: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let ingredients = (0..ingredients_per_recipe)
                .map(|j| ingredient(&format!("Ingredient {}", (i + j) % 50), 10.0, "g", 1.5))
                .collect();
            Recipe::new(format!("Recipe {i}"))
                .expect("Benchmark recipe should be valid")
                .with_category(if i % 3 == 0 { "Dessert" } else { "Main" })
                .with_ingredients(ingredients)
        })
        .collect()
}

/// Writes `count` sample recipes straight to `dir/cookbook.json` and opens it.
///
/// Writing the store once avoids one full rewrite per `add` during setup.
pub fn seeded_cookbook(dir: &Path, count: usize) -> Cookbook {
    let path = dir.join("cookbook.json");
    let store = StoreFile {
        recipes: sample_recipes(count, 8).iter().map(Recipe::to_record).collect(),
    };
    let encoded = serde_json::to_vec(&store).expect("Failed to encode store");
    fs::write(&path, encoded).expect("Failed to write store");
    Cookbook::open_with_config(path, Config::new().pretty(false))
}
