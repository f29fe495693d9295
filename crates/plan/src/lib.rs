//! User-owned state around the matching engine: the pantry and the weekly
//! meal plan.

pub mod error;
pub mod pantry;
pub mod week_plan;

pub use error::{PlanError, PlanResult};
pub use pantry::Pantry;
pub use week_plan::{DayPlan, WeekPlan, Weekday, MAX_ITEMS_PER_DAY};
