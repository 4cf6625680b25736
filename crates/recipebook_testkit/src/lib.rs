//! # RecipeBook Testkit
//!
//! Test utilities for RecipeBook.
//!
//! This crate provides:
//! - Cookbook fixtures backed by temporary directories
//! - Sample recipes with known calorie totals
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use recipebook_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_cookbook() {
//!     let mut cookbook = TestCookbook::new();
//!     cookbook.add(classic_omelette());
//!     assert_eq!(cookbook.reopen().len(), 1);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
