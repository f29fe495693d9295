pub mod pantry;
pub mod plan;
pub mod recipes;
