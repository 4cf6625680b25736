//! Shopping list aggregation.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// One line of a shopping list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingItem {
    /// Ingredient name exactly as stored in the recipe.
    pub name: String,
    /// Summed raw quantity.
    pub quantity: f64,
    /// Unit of the first occurrence. Display only.
    pub unit: String,
}

/// Ingredient name to summed quantity, in first-seen order.
///
/// Names are keyed exactly as written, so "Eggs" and "eggs" are separate
/// lines. Quantities are added as raw numbers even when the units differ;
/// no unit reconciliation happens.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ShoppingList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` to the line for `name`, creating it if needed.
    pub fn add(&mut self, name: &str, quantity: f64, unit: &str) {
        match self.index.get(name) {
            Some(&position) => {
                let item = &mut self.items[position];
                item.quantity += quantity;
                if !item.quantity.is_finite() {
                    warn!(ingredient = name, "shopping list quantity overflowed");
                }
            }
            None => {
                self.index.insert(name.to_string(), self.items.len());
                self.items.push(ShoppingItem {
                    name: name.to_string(),
                    quantity,
                    unit: unit.to_string(),
                });
            }
        }
    }

    /// Returns the summed quantity for an exact name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&position| self.items[position].quantity)
    }

    /// Returns the lines in first-seen order.
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Converts into a plain name to quantity map.
    pub fn into_map(self) -> HashMap<String, f64> {
        self.items
            .into_iter()
            .map(|item| (item.name, item.quantity))
            .collect()
    }
}

impl fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "Shopping list is empty");
        }
        write!(f, "Shopping list:")?;
        for item in &self.items {
            write!(f, "\n  {}: {} {}", item.name, item.quantity, item.unit)?;
        }
        Ok(())
    }
}
