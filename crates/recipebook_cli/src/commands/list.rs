//! List and categories commands.

use super::CliResult;
use recipebook_core::Cookbook;
use serde::Serialize;

/// Summary row for one recipe.
#[derive(Debug, Serialize)]
pub struct RecipeSummary<'a> {
    /// Recipe name.
    pub name: &'a str,
    /// Recipe category.
    pub category: &'a str,
    /// Number of ingredients.
    pub ingredient_count: usize,
    /// Total calories.
    pub calories: f64,
}

/// Runs the list command.
pub fn run(cookbook: &Cookbook, format: &str) -> CliResult<()> {
    match format {
        "json" => {
            let rows: Vec<RecipeSummary<'_>> = cookbook
                .recipes()
                .iter()
                .map(|recipe| RecipeSummary {
                    name: recipe.name(),
                    category: recipe.category(),
                    ingredient_count: recipe.ingredients().len(),
                    calories: recipe.total_calories(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        _ => println!("{cookbook}"),
    }
    Ok(())
}

/// Runs the categories command.
pub fn categories(cookbook: &Cookbook) {
    let categories = cookbook.all_categories();
    if categories.is_empty() {
        println!("No categories");
        return;
    }
    for category in categories {
        println!("{category}");
    }
}
