//! Ingredients: a named quantity of something with a calorie density.

use crate::error::{CoreError, CoreResult};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unit label used when none is given.
pub const DEFAULT_UNIT: &str = "g";

/// A named quantity of a consumable.
///
/// All fields are validated on construction and on every setter call:
/// the name is trimmed and must not be empty, and both `quantity` and
/// `calories_per_unit` must be finite and non-negative. The unit is a
/// free-form label and is never converted.
///
/// # Example
///
/// ```rust
/// use recipebook_core::Ingredient;
///
/// let milk = Ingredient::with_details("Milk", 100.0, "ml", 0.42).unwrap();
/// assert_eq!(milk.total_calories(), 42.0);
/// assert!(Ingredient::new("  ", 1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IngredientRecord", into = "IngredientRecord")]
pub struct Ingredient {
    name: String,
    quantity: f64,
    unit: String,
    calories_per_unit: f64,
}

impl Ingredient {
    /// Creates an ingredient measured in [`DEFAULT_UNIT`] with no calories.
    pub fn new(name: impl Into<String>, quantity: f64) -> CoreResult<Self> {
        Self::with_details(name, quantity, DEFAULT_UNIT, 0.0)
    }

    /// Creates an ingredient with every field given.
    pub fn with_details(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories_per_unit: f64,
    ) -> CoreResult<Self> {
        Ok(Self {
            name: validate_name(name.into())?,
            quantity: validate_amount("quantity", quantity)?,
            unit: unit.into(),
            calories_per_unit: validate_amount("calories_per_unit", calories_per_unit)?,
        })
    }

    /// Returns the ingredient name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name. Surrounding whitespace is trimmed.
    pub fn set_name(&mut self, value: impl Into<String>) -> CoreResult<()> {
        self.name = validate_name(value.into())?;
        Ok(())
    }

    /// Returns the quantity.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Sets the quantity.
    pub fn set_quantity(&mut self, value: f64) -> CoreResult<()> {
        self.quantity = validate_amount("quantity", value)?;
        Ok(())
    }

    /// Returns the unit label.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Sets the unit label. Any string is accepted.
    pub fn set_unit(&mut self, value: impl Into<String>) {
        self.unit = value.into();
    }

    /// Returns the calories per unit.
    pub fn calories_per_unit(&self) -> f64 {
        self.calories_per_unit
    }

    /// Sets the calories per unit.
    pub fn set_calories_per_unit(&mut self, value: f64) -> CoreResult<()> {
        self.calories_per_unit = validate_amount("calories_per_unit", value)?;
        Ok(())
    }

    /// Returns `quantity * calories_per_unit`.
    pub fn total_calories(&self) -> f64 {
        self.quantity * self.calories_per_unit
    }

    /// Converts the ingredient into its persisted record.
    pub fn to_record(&self) -> IngredientRecord {
        IngredientRecord {
            name: self.name.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
            calories_per_unit: self.calories_per_unit,
        }
    }

    /// Encodes the ingredient as a JSON object.
    pub fn to_value(&self) -> CoreResult<serde_json::Value> {
        Ok(serde_json::to_value(self.to_record())?)
    }

    /// Decodes an ingredient from a JSON object.
    ///
    /// `unit` and `calories_per_unit` fall back to their defaults when absent.
    /// A missing or mistyped `name` or `quantity` is a [`CoreError::Format`];
    /// a present but invalid value is a [`CoreError::Validation`].
    pub fn from_value(value: serde_json::Value) -> CoreResult<Self> {
        require_object("ingredient", &value)?;
        let record: IngredientRecord = serde_json::from_value(value)
            .map_err(|e| CoreError::format(format!("ingredient: {e}")))?;
        Self::try_from(record)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.name, self.quantity, self.unit)
    }
}

/// Persisted form of an [`Ingredient`].
///
/// Unknown keys are ignored when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Ingredient name (required).
    pub name: String,
    /// Quantity (required).
    pub quantity: f64,
    /// Unit label, defaults to [`DEFAULT_UNIT`].
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Calories per unit, defaults to 0.
    #[serde(default)]
    pub calories_per_unit: f64,
}

impl TryFrom<IngredientRecord> for Ingredient {
    type Error = CoreError;

    fn try_from(record: IngredientRecord) -> CoreResult<Self> {
        Self::with_details(
            record.name,
            record.quantity,
            record.unit,
            record.calories_per_unit,
        )
    }
}

impl From<Ingredient> for IngredientRecord {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            name: ingredient.name,
            quantity: ingredient.quantity,
            unit: ingredient.unit,
            calories_per_unit: ingredient.calories_per_unit,
        }
    }
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

/// Rejects anything but a JSON object.
///
/// Derived record visitors also accept positional arrays, which the store
/// format does not allow.
pub(crate) fn require_object(what: &str, value: &serde_json::Value) -> CoreResult<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(CoreError::format(format!("{what}: expected a JSON object")))
    }
}

/// Deserializes a list whose elements must each be a JSON object.
pub(crate) fn object_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Vec::<serde_json::Value>::deserialize(deserializer)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            if !value.is_object() {
                return Err(de::Error::custom(format!(
                    "element {index}: expected a JSON object"
                )));
            }
            serde_json::from_value(value).map_err(de::Error::custom)
        })
        .collect()
}

/// Trims `value` and rejects it if nothing is left.
pub(crate) fn validate_name(value: String) -> CoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("name", "must not be empty"));
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

fn validate_amount(field: &'static str, value: f64) -> CoreResult<f64> {
    if !value.is_finite() {
        return Err(CoreError::validation(field, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(CoreError::validation(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn new_uses_defaults() {
        let flour = Ingredient::new("Flour", 250.0).unwrap();
        assert_eq!(flour.unit(), DEFAULT_UNIT);
        assert_eq!(flour.calories_per_unit(), 0.0);
        assert_eq!(flour.total_calories(), 0.0);
    }

    #[test]
    fn name_is_trimmed() {
        let eggs = Ingredient::new("  Eggs \n", 3.0).unwrap();
        assert_eq!(eggs.name(), "Eggs");
    }

    #[test]
    fn blank_name_is_rejected() {
        for name in ["", "   ", "\t\n"] {
            let err = Ingredient::new(name, 1.0).unwrap_err();
            assert!(err.is_validation(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn negative_amounts_are_rejected() {
        assert!(Ingredient::new("Eggs", -1.0).unwrap_err().is_validation());
        assert!(Ingredient::with_details("Eggs", 1.0, "pcs", -0.5)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn non_finite_amounts_are_rejected() {
        assert!(Ingredient::new("Eggs", f64::NAN).is_err());
        assert!(Ingredient::with_details("Eggs", 1.0, "pcs", f64::INFINITY).is_err());
    }

    #[test]
    fn setters_validate_and_keep_old_value_on_error() {
        let mut butter = Ingredient::with_details("Butter", 20.0, "g", 7.17).unwrap();

        assert!(butter.set_quantity(-5.0).is_err());
        assert_eq!(butter.quantity(), 20.0);

        assert!(butter.set_calories_per_unit(-1.0).is_err());
        assert_eq!(butter.calories_per_unit(), 7.17);

        assert!(butter.set_name(" ").is_err());
        assert_eq!(butter.name(), "Butter");

        butter.set_name(" Ghee ").unwrap();
        butter.set_quantity(0.0).unwrap();
        butter.set_unit("");
        assert_eq!(butter.name(), "Ghee");
        assert_eq!(butter.quantity(), 0.0);
        assert_eq!(butter.unit(), "");
    }

    #[test]
    fn display_shows_quantity_and_unit() {
        let eggs = Ingredient::with_details("Eggs", 3.0, "pcs", 70.0).unwrap();
        assert_eq!(eggs.to_string(), "Eggs: 3 pcs");
    }

    #[test]
    fn from_value_applies_defaults() {
        let salt = Ingredient::from_value(json!({"name": "Salt", "quantity": 5})).unwrap();
        assert_eq!(salt.unit(), DEFAULT_UNIT);
        assert_eq!(salt.calories_per_unit(), 0.0);
    }

    #[test]
    fn from_value_ignores_unknown_keys() {
        let salt = Ingredient::from_value(json!({
            "name": "Salt",
            "quantity": 5,
            "brand": "Maldon",
        }))
        .unwrap();
        assert_eq!(salt.name(), "Salt");
    }

    #[test]
    fn from_value_requires_name_and_quantity() {
        let missing_name = Ingredient::from_value(json!({"quantity": 1})).unwrap_err();
        assert!(missing_name.is_format());

        let missing_quantity = Ingredient::from_value(json!({"name": "Salt"})).unwrap_err();
        assert!(missing_quantity.is_format());

        let mistyped = Ingredient::from_value(json!({"name": "Salt", "quantity": "lots"}));
        assert!(mistyped.unwrap_err().is_format());
    }

    #[test]
    fn from_value_validates_values() {
        let err = Ingredient::from_value(json!({"name": "Salt", "quantity": -2})).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn from_value_rejects_positional_arrays() {
        let err = Ingredient::from_value(json!(["Eggs", 3])).unwrap_err();
        assert!(err.is_format());

        let err = Ingredient::from_value(json!("Eggs")).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn value_uses_store_keys() {
        let milk = Ingredient::with_details("Milk", 100.0, "ml", 0.42).unwrap();
        assert_eq!(
            milk.to_value().unwrap(),
            json!({"name": "Milk", "quantity": 100.0, "unit": "ml", "calories_per_unit": 0.42})
        );
    }

    proptest! {
        #[test]
        fn total_calories_is_product(
            quantity in 0.0f64..1.0e6,
            calories in 0.0f64..1.0e4,
        ) {
            let item = Ingredient::with_details("Item", quantity, "g", calories).unwrap();
            prop_assert_eq!(item.total_calories(), quantity * calories);
        }

        #[test]
        fn value_round_trip(
            name in "[A-Za-z][A-Za-z ]{0,15}[A-Za-z]",
            quantity in 0.0f64..1.0e6,
            unit in "[a-z]{0,4}",
            calories in 0.0f64..1.0e4,
        ) {
            let item = Ingredient::with_details(name, quantity, unit, calories).unwrap();
            let decoded = Ingredient::from_value(item.to_value().unwrap()).unwrap();
            prop_assert_eq!(decoded, item);
        }
    }
}
