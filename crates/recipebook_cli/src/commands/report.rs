//! Shopping list and calorie reports.

use super::CliResult;
use recipebook_core::Cookbook;

/// Runs the shopping command.
pub fn shopping(cookbook: &Cookbook, recipes: &[String], format: &str) -> CliResult<()> {
    let list = cookbook.generate_shopping_list(recipes);
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(list.items())?),
        _ => println!("{list}"),
    }
    Ok(())
}

/// Runs the calories command.
pub fn calories(cookbook: &Cookbook, recipes: &[String]) {
    for name in recipes {
        match cookbook.find(name) {
            Some(recipe) => println!("  {}: {:.1} kcal", recipe.name(), recipe.total_calories()),
            None => println!("  {name}: not found"),
        }
    }
    println!("Total: {:.1} kcal", cookbook.calculate_total_calories(recipes));
}
