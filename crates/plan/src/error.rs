use thiserror::Error;

use crate::week_plan::Weekday;

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Ingredient name must not be empty")]
    EmptyIngredientName,

    #[error("Every day already has {per_day} meals - remove one first")]
    PlanFull { per_day: usize },

    #[error("No meal at position {index} on {day}")]
    SlotNotFound { day: Weekday, index: usize },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
