//! Property-based test generators using proptest.
//!
//! Provides strategies for generating valid model values.

use proptest::prelude::*;
use recipebook_core::{Ingredient, Recipe};

/// Strategy for names that survive trimming unchanged.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,18}[A-Za-z0-9]|[A-Za-z]")
        .expect("Invalid regex")
}

/// Strategy for free-form unit labels, including the empty label.
pub fn unit_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("g".to_string()),
        Just("ml".to_string()),
        Just("pcs".to_string()),
        prop::string::string_regex("[a-z]{0,5}").expect("Invalid regex"),
    ]
}

/// Strategy for valid non-negative amounts.
pub fn amount_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..10_000.0]
}

/// Strategy for valid ingredients.
pub fn ingredient_strategy() -> impl Strategy<Value = Ingredient> {
    (
        name_strategy(),
        amount_strategy(),
        unit_strategy(),
        amount_strategy(),
    )
        .prop_map(|(name, quantity, unit, calories)| {
            Ingredient::with_details(name, quantity, unit, calories)
                .expect("Generated ingredient should be valid")
        })
}

/// Strategy for valid recipes with up to eight ingredients.
pub fn recipe_strategy() -> impl Strategy<Value = Recipe> {
    (
        name_strategy(),
        prop::collection::vec(ingredient_strategy(), 0..8),
        ".{0,40}",
        ".{0,80}",
        prop_oneof![Just("Main".to_string()), name_strategy()],
    )
        .prop_map(|(name, ingredients, description, instructions, category)| {
            Recipe::new(name)
                .expect("Generated recipe should be valid")
                .with_ingredients(ingredients)
                .with_description(description)
                .with_instructions(instructions)
                .with_category(category)
        })
}

/// Strategy for recipe lists whose names are unique ignoring case.
pub fn unique_recipes_strategy(max: usize) -> impl Strategy<Value = Vec<Recipe>> {
    prop::collection::vec(recipe_strategy(), 0..=max).prop_map(|recipes| {
        let mut seen = std::collections::HashSet::new();
        recipes
            .into_iter()
            .filter(|recipe| seen.insert(recipe.name().to_lowercase()))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn names_are_already_trimmed(name in name_strategy()) {
            prop_assert_eq!(name.trim(), name.as_str());
            prop_assert!(!name.is_empty());
        }

        #[test]
        fn ingredient_total_is_product(ingredient in ingredient_strategy()) {
            prop_assert_eq!(
                ingredient.total_calories(),
                ingredient.quantity() * ingredient.calories_per_unit()
            );
        }

        #[test]
        fn recipe_total_is_sum(recipe in recipe_strategy()) {
            let sum: f64 = recipe.ingredients().iter().map(Ingredient::total_calories).sum();
            prop_assert_eq!(recipe.total_calories(), sum);
        }

        #[test]
        fn recipe_value_round_trip(recipe in recipe_strategy()) {
            let decoded = Recipe::from_value(recipe.to_value().unwrap()).unwrap();
            prop_assert_eq!(decoded, recipe);
        }

        #[test]
        fn unique_recipes_are_unique(recipes in unique_recipes_strategy(6)) {
            let mut names: Vec<_> = recipes.iter().map(|r| r.name().to_lowercase()).collect();
            names.sort();
            names.dedup();
            prop_assert_eq!(names.len(), recipes.len());
        }
    }
}
