use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::error::{PlanError, PlanResult};

/// Meals placed on one day by [`WeekPlan::add_recipe`].
pub const MAX_ITEMS_PER_DAY: usize = 3;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    #[strum(to_string = "Monday", serialize = "mon")]
    Monday,
    #[strum(to_string = "Tuesday", serialize = "tue")]
    Tuesday,
    #[strum(to_string = "Wednesday", serialize = "wed")]
    Wednesday,
    #[strum(to_string = "Thursday", serialize = "thu")]
    Thursday,
    #[strum(to_string = "Friday", serialize = "fri")]
    Friday,
    #[strum(to_string = "Saturday", serialize = "sat")]
    Saturday,
    #[strum(to_string = "Sunday", serialize = "sun")]
    Sunday,
}

impl Weekday {
    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Weekday,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Recipe names planned for each day, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekPlan {
    days: Vec<DayPlan>,
}

impl Default for WeekPlan {
    fn default() -> Self {
        Self {
            days: Weekday::VARIANTS
                .iter()
                .map(|&day| DayPlan {
                    day,
                    items: Vec::new(),
                })
                .collect(),
        }
    }
}

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn day(&self, day: Weekday) -> &DayPlan {
        &self.days[day.index()]
    }

    /// Total planned meals.
    pub fn len(&self) -> usize {
        self.days.iter().map(|d| d.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Put a recipe on the first day that still has room.
    pub fn add_recipe(&mut self, name: &str) -> PlanResult<Weekday> {
        let Some(slot) = self
            .days
            .iter_mut()
            .find(|d| d.items.len() < MAX_ITEMS_PER_DAY)
        else {
            return Err(PlanError::PlanFull {
                per_day: MAX_ITEMS_PER_DAY,
            });
        };

        slot.items.push(name.to_string());
        tracing::debug!(day = %slot.day, recipe = name, "Added recipe to plan");

        Ok(slot.day)
    }

    /// Append to a specific day. No capacity check: a user placing a meal by
    /// hand may overfill a day.
    pub fn assign(&mut self, day: Weekday, name: &str) {
        self.days[day.index()].items.push(name.to_string());
    }

    pub fn remove(&mut self, day: Weekday, index: usize) -> PlanResult<String> {
        let items = &mut self.days[day.index()].items;
        if index >= items.len() {
            return Err(PlanError::SlotNotFound { day, index });
        }

        Ok(items.remove(index))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse an exported plan: exactly seven days, Monday to Sunday.
    pub fn from_json(json: &str) -> PlanResult<Self> {
        let days: Vec<DayPlan> = serde_json::from_str(json)?;

        let in_order = days.len() == Weekday::VARIANTS.len()
            && days.iter().zip(Weekday::VARIANTS).all(|(d, w)| d.day == *w);
        if !in_order {
            return Err(PlanError::InvalidFormat(
                "plan must list the seven days from Monday to Sunday".to_string(),
            ));
        }

        Ok(Self { days })
    }

    pub fn to_json_pretty(&self) -> PlanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
