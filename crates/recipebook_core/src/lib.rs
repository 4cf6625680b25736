//! # RecipeBook Core
//!
//! Recipe model and JSON persistence for RecipeBook.
//!
//! This crate provides:
//! - [`Ingredient`] - a named quantity with a calorie density
//! - [`Recipe`] - an ordered list of ingredients plus descriptive text
//! - [`Cookbook`] - a set of recipes, unique by name, backed by a JSON file
//!
//! ## Example
//!
//! ```no_run
//! use recipebook_core::{Cookbook, Ingredient, Recipe};
//!
//! let mut cookbook = Cookbook::open("cookbook.json");
//! let omelette = Recipe::new("Classic Omelette")
//!     .unwrap()
//!     .with_ingredients(vec![
//!         Ingredient::with_details("Eggs", 3.0, "pcs", 70.0).unwrap(),
//!         Ingredient::with_details("Milk", 100.0, "ml", 42.0).unwrap(),
//!     ]);
//! cookbook.add(omelette);
//!
//! let list = cookbook.generate_shopping_list(&["Classic Omelette"]);
//! assert_eq!(list.get("Eggs"), Some(3.0));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod cookbook;
mod error;
mod ingredient;
mod matching;
mod recipe;

pub use config::{Config, LoadPolicy};
pub use cookbook::{Cookbook, ShoppingItem, ShoppingList, StoreFile};
pub use error::{CoreError, CoreResult};
pub use ingredient::{Ingredient, IngredientRecord, DEFAULT_UNIT};
pub use recipe::{Recipe, RecipeRecord, DEFAULT_CATEGORY};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
