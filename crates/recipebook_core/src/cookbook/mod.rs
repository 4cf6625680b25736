//! The cookbook: a set of recipes, unique by name, backed by a JSON file.

mod shopping;
mod store;

pub use shopping::{ShoppingItem, ShoppingList};
pub use store::StoreFile;

use crate::config::{Config, LoadPolicy};
use crate::error::{CoreError, CoreResult};
use crate::matching::names_match;
use crate::recipe::Recipe;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A named set of recipes persisted to a single JSON file.
///
/// Recipe names are unique ignoring case, and recipes keep insertion
/// order. Every successful [`add`](Self::add), [`remove`](Self::remove) or
/// [`update_recipe`](Self::update_recipe) rewrites the whole store file;
/// queries never touch the disk.
///
/// Storage failures never surface from these calls. A store that cannot
/// be read or parsed opens as an empty cookbook, and a failed save leaves
/// the in-memory state ahead of the file. Both are logged with
/// `tracing::warn!`.
///
/// # Example
///
/// ```rust,no_run
/// use recipebook_core::{Cookbook, Recipe};
///
/// let mut cookbook = Cookbook::open("cookbook.json");
/// assert!(cookbook.add(Recipe::new("Omelette").unwrap()));
/// assert!(!cookbook.add(Recipe::new("omelette").unwrap()));
/// assert!(cookbook.remove("OMELETTE"));
/// ```
#[derive(Debug)]
pub struct Cookbook {
    path: PathBuf,
    config: Config,
    recipes: Vec<Recipe>,
}

impl Cookbook {
    /// Opens the cookbook stored at `path` with default configuration.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::open_with_config(path, Config::default())
    }

    /// Opens the cookbook stored at `path`.
    ///
    /// A missing file gives an empty cookbook. An unreadable or malformed
    /// file is logged and also gives an empty cookbook.
    pub fn open_with_config(path: impl AsRef<Path>, config: Config) -> Self {
        let path = path.as_ref().to_path_buf();
        let recipes = match load_recipes(&path, &config) {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load cookbook, starting empty");
                Vec::new()
            }
        };

        Self {
            path,
            config,
            recipes,
        }
    }

    /// Returns the store path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns all recipes in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true if there are no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Adds a recipe and saves.
    ///
    /// Returns `false` without changing anything if a recipe with the same
    /// name (ignoring case) already exists.
    pub fn add(&mut self, recipe: Recipe) -> bool {
        if self.position(recipe.name()).is_some() {
            debug!(name = recipe.name(), "recipe already exists");
            return false;
        }

        info!(name = recipe.name(), "adding recipe");
        self.recipes.push(recipe);
        self.save();
        true
    }

    /// Removes the recipe whose name matches, ignoring case, and saves.
    ///
    /// Returns whether a recipe was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(index) = self.position(name) else {
            return false;
        };

        let removed = self.recipes.remove(index);
        info!(name = removed.name(), "removed recipe");
        self.save();
        true
    }

    /// Applies `edit` to the recipe named `name` and saves.
    ///
    /// The edit runs on a copy. The stored recipe is replaced only if the
    /// edit succeeds and the resulting name does not collide with another
    /// recipe; otherwise nothing changes. Returns `Ok(false)` when no
    /// recipe matches.
    pub fn update_recipe<F>(&mut self, name: &str, edit: F) -> CoreResult<bool>
    where
        F: FnOnce(&mut Recipe) -> CoreResult<()>,
    {
        let Some(index) = self.position(name) else {
            return Ok(false);
        };

        let mut updated = self.recipes[index].clone();
        edit(&mut updated)?;

        let collides = self
            .recipes
            .iter()
            .enumerate()
            .any(|(i, other)| i != index && names_match(other.name(), updated.name()));
        if collides {
            return Err(CoreError::validation(
                "name",
                format!("a recipe named '{}' already exists", updated.name()),
            ));
        }

        info!(name = updated.name(), "updated recipe");
        self.recipes[index] = updated;
        self.save();
        Ok(true)
    }

    /// Finds a recipe by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|recipe| names_match(recipe.name(), name))
    }

    /// Recipes containing an ingredient with this name, ignoring case.
    pub fn find_by_ingredient(&self, ingredient: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.contains_ingredient(ingredient))
            .collect()
    }

    /// Recipes whose category equals `category`, ignoring case.
    pub fn find_by_category(&self, category: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| names_match(recipe.category(), category))
            .collect()
    }

    /// Builds a shopping list for the named recipes.
    ///
    /// Unknown names are skipped and repeated names count again.
    /// Quantities are summed per exact ingredient name without looking at
    /// units, so "100 ml" and "1 l" of Milk add up to 101.
    pub fn generate_shopping_list<S: AsRef<str>>(&self, recipe_names: &[S]) -> ShoppingList {
        let mut list = ShoppingList::new();
        for recipe in self.lookup_all(recipe_names) {
            for ingredient in recipe.ingredients() {
                list.add(ingredient.name(), ingredient.quantity(), ingredient.unit());
            }
        }
        list
    }

    /// Total calories of the named recipes. Unknown names count as zero.
    pub fn calculate_total_calories<S: AsRef<str>>(&self, recipe_names: &[S]) -> f64 {
        self.lookup_all(recipe_names)
            .map(Recipe::total_calories)
            .sum()
    }

    /// Distinct categories across all recipes.
    pub fn all_categories(&self) -> BTreeSet<String> {
        self.recipes
            .iter()
            .map(|recipe| recipe.category().to_string())
            .collect()
    }

    /// Writes the cookbook to its store, logging any failure.
    ///
    /// Returns whether the write succeeded.
    pub fn save(&self) -> bool {
        match self.try_save() {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to save cookbook");
                false
            }
        }
    }

    /// Writes the cookbook to its store.
    pub fn try_save(&self) -> CoreResult<()> {
        store::write_store(&self.path, &self.to_store_file(), &self.config)
    }

    /// Builds the store document for the current recipes.
    pub fn to_store_file(&self) -> StoreFile {
        StoreFile {
            recipes: self.recipes.iter().map(Recipe::to_record).collect(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.recipes
            .iter()
            .position(|recipe| names_match(recipe.name(), name))
    }

    fn lookup_all<'a, S: AsRef<str>>(
        &'a self,
        recipe_names: &'a [S],
    ) -> impl Iterator<Item = &'a Recipe> + 'a {
        recipe_names
            .iter()
            .filter_map(move |name| self.find(name.as_ref()))
    }
}

impl fmt::Display for Cookbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.recipes.is_empty() {
            return write!(f, "Cookbook is empty");
        }
        write!(f, "Cookbook ({} recipes):", self.recipes.len())?;
        for recipe in &self.recipes {
            write!(f, "\n- {} ({})", recipe.name(), recipe.category())?;
        }
        Ok(())
    }
}

/// Reads and decodes every recipe in the store.
///
/// Entries whose name collides with an earlier entry are skipped so the
/// uniqueness invariant holds after load.
fn load_recipes(path: &Path, config: &Config) -> CoreResult<Vec<Recipe>> {
    let Some(entries) = store::read_entries(path)? else {
        debug!(path = %path.display(), "no store file, starting empty");
        return Ok(Vec::new());
    };

    let mut recipes: Vec<Recipe> = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let recipe = match Recipe::from_value(entry) {
            Ok(recipe) => recipe,
            Err(e) if config.load_policy == LoadPolicy::SkipInvalid => {
                warn!(index, error = %e, "skipping invalid recipe entry");
                continue;
            }
            Err(e) => return Err(e),
        };

        if recipes
            .iter()
            .any(|existing| names_match(existing.name(), recipe.name()))
        {
            warn!(index, name = recipe.name(), "skipping duplicate recipe entry");
            continue;
        }
        recipes.push(recipe);
    }

    debug!(path = %path.display(), recipes = recipes.len(), "loaded cookbook");
    Ok(recipes)
}
