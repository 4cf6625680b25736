//! Demo command: builds a sample omelette and prints reports about it.

use super::CliResult;
use recipebook_core::{Cookbook, Ingredient, Recipe};

const DEMO_RECIPE: &str = "Classic Omelette";

/// Builds the sample recipe.
pub fn classic_omelette() -> CliResult<Recipe> {
    Ok(Recipe::new(DEMO_RECIPE)?
        .with_description("Three-egg omelette")
        .with_instructions("Whisk eggs with milk, melt butter, cook over low heat.")
        .with_ingredients(vec![
            Ingredient::with_details("Eggs", 3.0, "pcs", 70.0)?,
            Ingredient::with_details("Milk", 100.0, "ml", 42.0)?,
            Ingredient::with_details("Butter", 20.0, "g", 717.0)?,
        ]))
}

/// Runs the demo command.
pub fn run(cookbook: &mut Cookbook) -> CliResult<()> {
    let omelette = classic_omelette()?;

    println!("1. Created recipe:\n{omelette}");
    println!();
    println!("2. Recipe calories: {:.1} kcal", omelette.total_calories());

    if !cookbook.add(omelette) {
        println!("   ('{DEMO_RECIPE}' was already in the cookbook)");
    }

    println!();
    println!("3. Recipes in the cookbook: {}", cookbook.len());

    println!();
    println!("4. Recipes with 'Eggs':");
    for recipe in cookbook.find_by_ingredient("Eggs") {
        println!("   - {}", recipe.name());
    }

    println!();
    println!("5. {}", cookbook.generate_shopping_list(&[DEMO_RECIPE]));
    Ok(())
}
