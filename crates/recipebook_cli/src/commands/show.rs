//! Show command implementation.

use super::{CliError, CliResult};
use recipebook_core::Cookbook;

/// Runs the show command.
pub fn run(cookbook: &Cookbook, name: &str, format: &str) -> CliResult<()> {
    let recipe = cookbook
        .find(name)
        .ok_or_else(|| CliError::RecipeNotFound(name.to_string()))?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&recipe.to_value()?)?),
        _ => {
            println!("{recipe}");
            if !recipe.instructions().is_empty() {
                println!();
                println!("Instructions:");
                println!("{}", recipe.instructions());
            }
        }
    }
    Ok(())
}
