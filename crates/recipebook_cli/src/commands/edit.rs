//! Commands that change the cookbook.

use super::{CliError, CliResult};
use recipebook_core::{Cookbook, Ingredient, Recipe, DEFAULT_UNIT};
use tracing::debug;

/// Arguments of the add command.
#[derive(Debug, Default)]
pub struct AddRequest {
    /// Recipe name.
    pub name: String,
    /// Category, or the default when absent.
    pub category: Option<String>,
    /// Description.
    pub description: String,
    /// Instructions.
    pub instructions: String,
    /// Raw `name:quantity[:unit[:calories]]` ingredient arguments.
    pub ingredients: Vec<String>,
}

/// Parses `name:quantity[:unit[:calories_per_unit]]`.
pub fn parse_ingredient(input: &str) -> CliResult<Ingredient> {
    let invalid = |reason: &str| CliError::InvalidIngredient {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = input.split(':');
    let name = parts.next().unwrap_or_default();
    let quantity = parts
        .next()
        .ok_or_else(|| invalid("expected name:quantity"))?
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid("quantity is not a number"))?;
    let unit = parts.next().map(str::trim);
    let calories = parts
        .next()
        .map(|raw| raw.trim().parse::<f64>())
        .transpose()
        .map_err(|_| invalid("calories is not a number"))?;
    if parts.next().is_some() {
        return Err(invalid("too many ':' separated fields"));
    }

    Ok(Ingredient::with_details(
        name,
        quantity,
        unit.unwrap_or(DEFAULT_UNIT),
        calories.unwrap_or(0.0),
    )?)
}

/// Runs the add command.
pub fn add(cookbook: &mut Cookbook, request: AddRequest) -> CliResult<()> {
    let ingredients = request
        .ingredients
        .iter()
        .map(|raw| parse_ingredient(raw))
        .collect::<CliResult<Vec<_>>>()?;

    let mut recipe = Recipe::new(request.name)?
        .with_ingredients(ingredients)
        .with_description(request.description)
        .with_instructions(request.instructions);
    if let Some(category) = request.category {
        recipe.set_category(category);
    }

    let name = recipe.name().to_string();
    if !cookbook.add(recipe) {
        return Err(CliError::RecipeExists(name));
    }
    println!("Added '{name}'");
    Ok(())
}

/// Runs the remove command.
pub fn remove(cookbook: &mut Cookbook, name: &str) -> CliResult<()> {
    if !cookbook.remove(name) {
        return Err(CliError::RecipeNotFound(name.to_string()));
    }
    println!("Removed '{name}'");
    Ok(())
}

/// Runs the add-ingredient command.
pub fn add_ingredient(cookbook: &mut Cookbook, recipe: &str, raw: &str) -> CliResult<()> {
    let ingredient = parse_ingredient(raw)?;
    debug!(recipe, ingredient = %ingredient, "adding ingredient");

    let line = ingredient.to_string();
    let found = cookbook.update_recipe(recipe, |stored| {
        stored.add_ingredient(ingredient);
        Ok(())
    })?;
    if !found {
        return Err(CliError::RecipeNotFound(recipe.to_string()));
    }
    println!("Added {line} to '{recipe}'");
    Ok(())
}

/// Runs the remove-ingredient command.
pub fn remove_ingredient(cookbook: &mut Cookbook, recipe: &str, ingredient: &str) -> CliResult<()> {
    let stored = cookbook
        .find(recipe)
        .ok_or_else(|| CliError::RecipeNotFound(recipe.to_string()))?;
    if !stored.contains_ingredient(ingredient) {
        return Err(CliError::IngredientNotFound {
            recipe: stored.name().to_string(),
            ingredient: ingredient.to_string(),
        });
    }

    cookbook.update_recipe(recipe, |stored| {
        stored.remove_ingredient(ingredient);
        Ok(())
    })?;
    println!("Removed '{ingredient}' from '{recipe}'");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_cookbook() -> (TempDir, Cookbook) {
        let dir = TempDir::new().unwrap();
        let cookbook = Cookbook::open(dir.path().join("cookbook.json"));
        (dir, cookbook)
    }

    #[test]
    fn parse_name_and_quantity() {
        let flour = parse_ingredient("Flour:200").unwrap();
        assert_eq!(flour.name(), "Flour");
        assert_eq!(flour.quantity(), 200.0);
        assert_eq!(flour.unit(), "g");
        assert_eq!(flour.calories_per_unit(), 0.0);
    }

    #[test]
    fn parse_all_fields() {
        let milk = parse_ingredient("Milk:100:ml:0.42").unwrap();
        assert_eq!(milk.unit(), "ml");
        assert_eq!(milk.calories_per_unit(), 0.42);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            parse_ingredient("Flour"),
            Err(CliError::InvalidIngredient { .. })
        ));
        assert!(matches!(
            parse_ingredient("Flour:lots"),
            Err(CliError::InvalidIngredient { .. })
        ));
        assert!(matches!(
            parse_ingredient("Flour:1:g:x"),
            Err(CliError::InvalidIngredient { .. })
        ));
        assert!(matches!(
            parse_ingredient("Flour:1:g:2:3"),
            Err(CliError::InvalidIngredient { .. })
        ));
        assert!(matches!(parse_ingredient(":1"), Err(CliError::Core(_))));
        assert!(matches!(parse_ingredient("Flour:-1"), Err(CliError::Core(_))));
    }

    #[test]
    fn add_then_duplicate() {
        let (_dir, mut cookbook) = temp_cookbook();
        let request = AddRequest {
            name: "Toast".into(),
            category: Some("Breakfast".into()),
            ingredients: vec!["Bread:2:slices:80".into()],
            ..AddRequest::default()
        };
        add(&mut cookbook, request).unwrap();

        let toast = cookbook.find("toast").unwrap();
        assert_eq!(toast.category(), "Breakfast");
        assert_eq!(toast.total_calories(), 160.0);

        let again = AddRequest {
            name: "TOAST".into(),
            ..AddRequest::default()
        };
        assert!(matches!(
            add(&mut cookbook, again),
            Err(CliError::RecipeExists(_))
        ));
    }

    #[test]
    fn edit_ingredients() {
        let (_dir, mut cookbook) = temp_cookbook();
        add(
            &mut cookbook,
            AddRequest {
                name: "Toast".into(),
                ..AddRequest::default()
            },
        )
        .unwrap();

        add_ingredient(&mut cookbook, "toast", "Butter:10:g:7").unwrap();
        assert!(cookbook.find("Toast").unwrap().contains_ingredient("butter"));

        assert!(matches!(
            remove_ingredient(&mut cookbook, "Toast", "Jam"),
            Err(CliError::IngredientNotFound { .. })
        ));
        remove_ingredient(&mut cookbook, "Toast", "BUTTER").unwrap();
        assert!(cookbook.find("Toast").unwrap().ingredients().is_empty());

        assert!(matches!(
            add_ingredient(&mut cookbook, "Waffles", "Flour:1"),
            Err(CliError::RecipeNotFound(_))
        ));
    }

    #[test]
    fn remove_unknown_recipe() {
        let (_dir, mut cookbook) = temp_cookbook();
        assert!(matches!(
            remove(&mut cookbook, "Toast"),
            Err(CliError::RecipeNotFound(_))
        ));
    }
}
