use thiserror::Error;

pub type MatchingResult<T> = Result<T, MatchingError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchingError {
    /// A recipe reached the scorer without any required ingredient.
    #[error("Recipe '{name}' has no required ingredients - fix the catalog entry")]
    EmptyRecipe { name: String },

    #[error("Invalid filter criteria: {0}")]
    InvalidCriteria(String),
}

impl From<validator::ValidationErrors> for MatchingError {
    fn from(errors: validator::ValidationErrors) -> Self {
        MatchingError::InvalidCriteria(errors.to_string())
    }
}
