//! RecipeBook CLI
//!
//! Command-line tools for managing a RecipeBook cookbook file.
//!
//! # Commands
//!
//! - `list` - List every recipe with its category
//! - `show` - Display one recipe
//! - `add` / `remove` - Add or remove a recipe
//! - `add-ingredient` / `remove-ingredient` - Edit a stored recipe
//! - `search` - Find recipes by ingredient or category
//! - `shopping` - Build a shopping list for some recipes
//! - `calories` - Total calories for some recipes
//! - `categories` - List distinct categories
//! - `demo` - Build and report on a sample recipe

mod commands;

use clap::{Parser, Subcommand};
use recipebook_core::Cookbook;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// RecipeBook command-line tools.
#[derive(Parser)]
#[command(name = "recipebook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the cookbook file
    #[arg(global = true, short, long, default_value = "cookbook.json")]
    path: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every recipe with its category
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Display one recipe
    Show {
        /// Recipe name (case-insensitive)
        name: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Add a recipe
    Add {
        /// Recipe name
        #[arg(short, long)]
        name: String,

        /// Recipe category
        #[arg(short, long)]
        category: Option<String>,

        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Cooking instructions
        #[arg(short = 'I', long, default_value = "")]
        instructions: String,

        /// Ingredient as name:quantity[:unit[:calories_per_unit]] (repeatable)
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
    },

    /// Remove a recipe
    Remove {
        /// Recipe name (case-insensitive)
        name: String,
    },

    /// Append an ingredient to a stored recipe
    AddIngredient {
        /// Recipe name (case-insensitive)
        recipe: String,

        /// Ingredient as name:quantity[:unit[:calories_per_unit]]
        ingredient: String,
    },

    /// Remove the first matching ingredient from a stored recipe
    RemoveIngredient {
        /// Recipe name (case-insensitive)
        recipe: String,

        /// Ingredient name (case-insensitive)
        ingredient: String,
    },

    /// Find recipes by ingredient or category
    Search {
        /// Ingredient name to look for
        #[arg(short, long, conflicts_with = "category", required_unless_present = "category")]
        ingredient: Option<String>,

        /// Category to look for
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Build a shopping list for the given recipes
    Shopping {
        /// Recipe names; unknown names are skipped
        #[arg(required = true)]
        recipes: Vec<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Total calories for the given recipes
    Calories {
        /// Recipe names; unknown names count as zero
        #[arg(required = true)]
        recipes: Vec<String>,
    },

    /// List distinct recipe categories
    Categories,

    /// Build a sample recipe and print reports about it
    Demo,

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Commands::Version = cli.command {
        println!("RecipeBook CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("RecipeBook Core v{}", recipebook_core::VERSION);
        return Ok(());
    }

    let mut cookbook = Cookbook::open(&cli.path);

    match cli.command {
        Commands::List { format } => commands::list::run(&cookbook, &format)?,
        Commands::Show { name, format } => commands::show::run(&cookbook, &name, &format)?,
        Commands::Add {
            name,
            category,
            description,
            instructions,
            ingredients,
        } => {
            let request = commands::edit::AddRequest {
                name,
                category,
                description,
                instructions,
                ingredients,
            };
            commands::edit::add(&mut cookbook, request)?;
        }
        Commands::Remove { name } => commands::edit::remove(&mut cookbook, &name)?,
        Commands::AddIngredient { recipe, ingredient } => {
            commands::edit::add_ingredient(&mut cookbook, &recipe, &ingredient)?;
        }
        Commands::RemoveIngredient { recipe, ingredient } => {
            commands::edit::remove_ingredient(&mut cookbook, &recipe, &ingredient)?;
        }
        Commands::Search {
            ingredient,
            category,
        } => commands::search::run(&cookbook, ingredient.as_deref(), category.as_deref()),
        Commands::Shopping { recipes, format } => {
            commands::report::shopping(&cookbook, &recipes, &format)?;
        }
        Commands::Calories { recipes } => commands::report::calories(&cookbook, &recipes),
        Commands::Categories => commands::list::categories(&cookbook),
        Commands::Demo => commands::demo::run(&mut cookbook)?,
        Commands::Version => {}
    }

    Ok(())
}
