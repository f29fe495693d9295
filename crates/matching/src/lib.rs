//! Pantry matching engine.
//!
//! Given a recipe catalog, the names of the ingredients in a pantry and a set
//! of filters, rank the recipes by how little shopping they need. Everything
//! here is pure: no I/O, no shared mutable state.

pub mod alias;
pub mod catalog;
pub mod error;
pub mod normalize;
pub mod ranker;
pub mod scorer;
pub mod types;

pub use alias::{expand, AliasRule, AliasTable};
pub use catalog::{categories, find_recipe};
pub use error::{MatchingError, MatchingResult};
pub use normalize::normalize;
pub use ranker::{rank, RankedRecipe, RecipeRanker};
pub use scorer::{score, MatchScorer, PantrySet};
pub use types::{FilterCriteria, MatchResult, PantryItem, Recipe, NO_TIME_LIMIT};
