//! CLI command implementations.

pub mod demo;
pub mod edit;
pub mod list;
pub mod report;
pub mod search;
pub mod show;

use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// No recipe matched the given name.
    #[error("no recipe named '{0}'")]
    RecipeNotFound(String),

    /// A recipe with the same name already exists.
    #[error("a recipe named '{0}' already exists")]
    RecipeExists(String),

    /// The recipe has no ingredient with the given name.
    #[error("recipe '{recipe}' has no ingredient named '{ingredient}'")]
    IngredientNotFound {
        /// Recipe searched.
        recipe: String,
        /// Ingredient name that was not found.
        ingredient: String,
    },

    /// An ingredient argument could not be parsed.
    #[error("invalid ingredient '{input}': {reason}")]
    InvalidIngredient {
        /// The raw argument.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Validation or storage error from the core.
    #[error(transparent)]
    Core(#[from] recipebook_core::CoreError),

    /// JSON output failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
