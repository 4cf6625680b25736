//! Search command implementation.

use recipebook_core::{Cookbook, Recipe};

/// Runs the search command. Ingredient takes precedence over category.
pub fn run(cookbook: &Cookbook, ingredient: Option<&str>, category: Option<&str>) {
    let (label, matches): (String, Vec<&Recipe>) = match (ingredient, category) {
        (Some(ingredient), _) => (
            format!("Recipes with '{ingredient}'"),
            cookbook.find_by_ingredient(ingredient),
        ),
        (None, Some(category)) => (
            format!("Recipes in '{category}'"),
            cookbook.find_by_category(category),
        ),
        (None, None) => return,
    };

    if matches.is_empty() {
        println!("{label}: none");
        return;
    }
    println!("{label}:");
    for recipe in matches {
        println!("  - {}", recipe.name());
    }
}
