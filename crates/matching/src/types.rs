use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// `max_time_minutes` value meaning "any cooking time".
///
/// Shared with the UI time selector, whose widest option is 999 minutes.
pub const NO_TIME_LIMIT: i64 = 999;

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Required ingredients, in display order. Must not be empty.
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub optional: Vec<String>,
    #[serde(default)]
    pub category: Vec<String>,
    /// Minutes
    pub time: u32,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

impl Recipe {
    pub fn has_category(&self, tag: &str) -> bool {
        self.category.iter().any(|c| c == tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    pub name: String,
    /// Free text ("2 packs", "少し"); never used for matching.
    #[serde(default)]
    pub qty: String,
}

impl PantryItem {
    pub fn new(name: impl Into<String>, qty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qty: qty.into(),
        }
    }
}

/// How well one recipe is covered by one pantry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub hit: usize,
    pub need: usize,
    pub pct: f64,
    /// Unmatched required ingredients, original spelling, catalog order.
    pub missing: Vec<String>,
}

impl MatchResult {
    /// Nothing to buy.
    pub fn is_fully_stocked(&self) -> bool {
        self.need == 0
    }

    /// Percentage as displayed on recipe cards, halves rounded up.
    pub fn rounded_pct(&self) -> u32 {
        (self.pct + 0.5).floor() as u32
    }
}

/// User filters applied by the ranker.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct FilterCriteria {
    /// Exact category tag; `None` or empty keeps every recipe.
    pub category: Option<String>,
    /// Inclusive; [`NO_TIME_LIMIT`] disables the filter.
    #[validate(range(min = 0, message = "Max time must not be negative"))]
    pub max_time_minutes: i64,
    #[validate(custom(function = "validate_pct"))]
    pub min_match_pct: f64,
    pub query: String,
    pub only_fully_stocked: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: None,
            max_time_minutes: NO_TIME_LIMIT,
            min_match_pct: 0.0,
            query: String::new(),
            only_fully_stocked: false,
        }
    }
}

impl FilterCriteria {
    pub(crate) fn keeps_category(&self, recipe: &Recipe) -> bool {
        match self.category.as_deref() {
            Some(tag) if !tag.is_empty() => recipe.has_category(tag),
            _ => true,
        }
    }

    pub(crate) fn keeps_time(&self, recipe: &Recipe) -> bool {
        self.max_time_minutes == NO_TIME_LIMIT || i64::from(recipe.time) <= self.max_time_minutes
    }
}

/// NaN passes a plain `range` check, hence the custom rule.
fn validate_pct(value: f64) -> Result<(), ValidationError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::new("min_match_pct_range")
            .with_message("Minimum match must be between 0 and 100".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_optional_fields_default() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"name":"Omelette","ingredients":["egg","salt"],"time":10}"#,
        )
        .unwrap();

        assert!(recipe.optional.is_empty());
        assert!(recipe.category.is_empty());
        assert!(recipe.steps.is_empty());
        assert_eq!(recipe.tips, None);
    }

    #[test]
    fn test_pantry_item_without_qty() {
        let item: PantryItem = serde_json::from_str(r#"{"name":"egg"}"#).unwrap();

        assert_eq!(item, PantryItem::new("egg", ""));
    }

    #[test]
    fn test_default_criteria_are_valid() {
        assert!(FilterCriteria::default().validate().is_ok());
    }

    #[test]
    fn test_negative_max_time_rejected() {
        let criteria = FilterCriteria {
            max_time_minutes: -1,
            ..Default::default()
        };

        assert!(criteria.validate().is_err());
    }

    #[test]
    fn test_out_of_range_pct_rejected() {
        for pct in [-0.1, 100.5, f64::NAN, f64::INFINITY] {
            let criteria = FilterCriteria {
                min_match_pct: pct,
                ..Default::default()
            };

            assert!(criteria.validate().is_err(), "accepted {pct}");
        }
    }

    #[test]
    fn test_boundary_pct_accepted() {
        for pct in [0.0, 100.0] {
            let criteria = FilterCriteria {
                min_match_pct: pct,
                ..Default::default()
            };

            assert!(criteria.validate().is_ok());
        }
    }

    #[test]
    fn test_rounded_pct() {
        let result = |pct| MatchResult {
            hit: 0,
            need: 0,
            pct,
            missing: vec![],
        };

        assert_eq!(result(50.0).rounded_pct(), 50);
        assert_eq!(result(100.0 / 3.0).rounded_pct(), 33);
        assert_eq!(result(200.0 / 3.0).rounded_pct(), 67);
        assert_eq!(result(12.5).rounded_pct(), 13);
    }
}
