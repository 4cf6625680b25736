//! Recipes: an ordered list of ingredients with descriptive text.

use crate::error::{CoreError, CoreResult};
use crate::ingredient::{
    object_list, require_object, validate_name, Ingredient, IngredientRecord,
};
use crate::matching::names_match;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned when none is given.
pub const DEFAULT_CATEGORY: &str = "Main";

/// A named, ordered composition of ingredients.
///
/// Ingredients keep insertion order, including across serialization.
/// Duplicate ingredient names are allowed and never merged.
///
/// # Example
///
/// ```rust
/// use recipebook_core::{Ingredient, Recipe};
///
/// let mut toast = Recipe::new("Toast")
///     .unwrap()
///     .with_category("Breakfast");
/// toast.add_ingredient(Ingredient::with_details("Bread", 2.0, "slices", 80.0).unwrap());
/// toast.add_ingredient(Ingredient::with_details("Butter", 10.0, "g", 7.0).unwrap());
///
/// assert_eq!(toast.total_calories(), 230.0);
/// assert!(toast.contains_ingredient("bread"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecipeRecord", into = "RecipeRecord")]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    description: String,
    instructions: String,
    category: String,
}

impl Recipe {
    /// Creates an empty recipe in [`DEFAULT_CATEGORY`].
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        Ok(Self {
            name: validate_name(name.into())?,
            ingredients: Vec::new(),
            description: String::new(),
            instructions: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
        })
    }

    /// Replaces the ingredient list.
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the cooking instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns the recipe name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name. Surrounding whitespace is trimmed.
    pub fn set_name(&mut self, value: impl Into<String>) -> CoreResult<()> {
        self.name = validate_name(value.into())?;
        Ok(())
    }

    /// Returns the ingredients in insertion order.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sets the description.
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Returns the instructions.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Sets the instructions.
    pub fn set_instructions(&mut self, value: impl Into<String>) {
        self.instructions = value.into();
    }

    /// Returns the category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Sets the category.
    pub fn set_category(&mut self, value: impl Into<String>) {
        self.category = value.into();
    }

    /// Appends an ingredient.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Removes the first ingredient whose name matches, ignoring case.
    ///
    /// Returns whether an ingredient was removed.
    pub fn remove_ingredient(&mut self, name: &str) -> bool {
        match self
            .ingredients
            .iter()
            .position(|ingredient| names_match(ingredient.name(), name))
        {
            Some(index) => {
                self.ingredients.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sum of every ingredient's calories. Zero for an empty recipe.
    pub fn total_calories(&self) -> f64 {
        self.ingredients.iter().map(Ingredient::total_calories).sum()
    }

    /// Ingredient names in order, duplicates included.
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(Ingredient::name).collect()
    }

    /// Returns true if any ingredient name matches, ignoring case.
    pub fn contains_ingredient(&self, name: &str) -> bool {
        self.ingredients
            .iter()
            .any(|ingredient| names_match(ingredient.name(), name))
    }

    /// Converts the recipe into its persisted record.
    pub fn to_record(&self) -> RecipeRecord {
        RecipeRecord {
            name: self.name.clone(),
            ingredients: self.ingredients.iter().map(Ingredient::to_record).collect(),
            description: self.description.clone(),
            instructions: self.instructions.clone(),
            category: self.category.clone(),
        }
    }

    /// Encodes the recipe as a JSON object.
    pub fn to_value(&self) -> CoreResult<serde_json::Value> {
        Ok(serde_json::to_value(self.to_record())?)
    }

    /// Decodes a recipe from a JSON object.
    ///
    /// `name` and `ingredients` are required. Every ingredient is decoded
    /// with [`Ingredient::from_value`] rules and the first failure aborts.
    pub fn from_value(value: serde_json::Value) -> CoreResult<Self> {
        require_object("recipe", &value)?;
        let record: RecipeRecord = serde_json::from_value(value)
            .map_err(|e| CoreError::format(format!("recipe: {e}")))?;
        Self::try_from(record)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.name)?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "  - {ingredient}")?;
        }
        write!(f, "Calories: {:.1}", self.total_calories())
    }
}

/// Persisted form of a [`Recipe`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Recipe name (required).
    pub name: String,
    /// Ingredients in order (required, may be empty).
    #[serde(deserialize_with = "object_list")]
    pub ingredients: Vec<IngredientRecord>,
    /// Description, defaults to empty.
    #[serde(default)]
    pub description: String,
    /// Instructions, defaults to empty.
    #[serde(default)]
    pub instructions: String,
    /// Category, defaults to [`DEFAULT_CATEGORY`].
    #[serde(default = "default_category")]
    pub category: String,
}

impl TryFrom<RecipeRecord> for Recipe {
    type Error = CoreError;

    fn try_from(record: RecipeRecord) -> CoreResult<Self> {
        let ingredients = record
            .ingredients
            .into_iter()
            .map(Ingredient::try_from)
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Self::new(record.name)?
            .with_ingredients(ingredients)
            .with_description(record.description)
            .with_instructions(record.instructions)
            .with_category(record.category))
    }
}

impl From<Recipe> for RecipeRecord {
    fn from(recipe: Recipe) -> Self {
        Self {
            name: recipe.name,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            description: recipe.description,
            instructions: recipe.instructions,
            category: recipe.category,
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}
