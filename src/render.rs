//! Plain-text views printed by the CLI.

use std::fmt::Write;

use pantry_matching::{MatchResult, RankedRecipe, Recipe};
use pantry_plan::{Pantry, WeekPlan};

pub const NO_RESULTS: &str =
    "No recipe matches these filters. Try a lower minimum match, another category or a longer time.";

fn badge(result: &MatchResult) -> String {
    if result.is_fully_stocked() {
        "no shopping needed".to_string()
    } else {
        format!("missing {}", result.need)
    }
}

/// One line per recipe, best first; [`NO_RESULTS`] when empty.
pub fn ranking(ranked: &[RankedRecipe<'_>]) -> String {
    if ranked.is_empty() {
        return format!("{NO_RESULTS}\n");
    }

    let mut out = String::new();
    for (position, entry) in ranked.iter().enumerate() {
        let recipe = entry.recipe;
        let _ = writeln!(
            out,
            "{:>3}. {} [{}% match, {}] {} min | {}",
            position + 1,
            recipe.name,
            entry.result.rounded_pct(),
            badge(&entry.result),
            recipe.time,
            recipe.category.join(" / "),
        );
        let _ = writeln!(out, "     ingredients: {}", recipe.ingredients.join(", "));
    }
    out
}

/// Full recipe card with what is left to buy.
pub fn recipe_detail(recipe: &Recipe, result: &MatchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.name);
    let _ = writeln!(
        out,
        "time: {} min | category: {} | {}% match",
        recipe.time,
        recipe.category.join(" / "),
        result.rounded_pct()
    );

    let _ = writeln!(out, "\ningredients:");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  - {ingredient}");
    }

    if !recipe.optional.is_empty() {
        let _ = writeln!(out, "\nnice to have:");
        for ingredient in &recipe.optional {
            let _ = writeln!(out, "  - {ingredient}");
        }
    }

    if result.missing.is_empty() {
        let _ = writeln!(out, "\nno shopping needed");
    } else {
        let _ = writeln!(out, "\nto buy:");
        for ingredient in &result.missing {
            let _ = writeln!(out, "  - {ingredient}");
        }
    }

    if !recipe.steps.is_empty() {
        let _ = writeln!(out, "\nsteps:");
        for (i, step) in recipe.steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", i + 1);
        }
    }

    if let Some(tips) = recipe.tips.as_deref().filter(|t| !t.is_empty()) {
        let _ = writeln!(out, "\ntips: {tips}");
    }

    out
}

pub fn pantry(pantry: &Pantry) -> String {
    if pantry.is_empty() {
        return "pantry is empty\n".to_string();
    }

    let mut out = String::new();
    for item in pantry.items() {
        if item.qty.is_empty() {
            let _ = writeln!(out, "{}", item.name);
        } else {
            let _ = writeln!(out, "{} ({})", item.name, item.qty);
        }
    }
    out
}

pub fn week_plan(plan: &WeekPlan) -> String {
    let mut out = String::new();
    for day in plan.days() {
        let _ = writeln!(out, "{}:", day.day);
        for (i, item) in day.items.iter().enumerate() {
            let _ = writeln!(out, "  {i}. {item}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_matching::{rank, FilterCriteria};

    fn omelette() -> Recipe {
        Recipe {
            name: "Omelette".to_string(),
            ingredients: vec!["egg".to_string(), "salt".to_string()],
            optional: vec!["cheese".to_string()],
            category: vec!["quick".to_string(), "breakfast".to_string()],
            time: 10,
            steps: vec!["Beat the eggs".to_string(), "Fry".to_string()],
            tips: Some("Low heat".to_string()),
        }
    }

    #[test]
    fn test_ranking_line() {
        let catalog = vec![omelette()];
        let ranked = rank(&catalog, ["egg"], &FilterCriteria::default()).unwrap();

        let text = ranking(&ranked);

        assert!(text.starts_with("  1. Omelette [50% match, missing 1] 10 min | quick / breakfast"));
        assert!(text.contains("ingredients: egg, salt"));
    }

    #[test]
    fn test_empty_ranking_shows_hint() {
        assert_eq!(ranking(&[]), format!("{NO_RESULTS}\n"));
    }

    #[test]
    fn test_recipe_detail_lists_missing_and_steps() {
        let recipe = omelette();
        let result = pantry_matching::score(&recipe, ["egg"]).unwrap();

        let text = recipe_detail(&recipe, &result);

        assert!(text.contains("to buy:\n  - salt"));
        assert!(text.contains("nice to have:\n  - cheese"));
        assert!(text.contains("  2. Fry"));
        assert!(text.contains("tips: Low heat"));
    }

    #[test]
    fn test_recipe_detail_fully_stocked() {
        let recipe = omelette();
        let result = pantry_matching::score(&recipe, ["egg", "salt"]).unwrap();

        assert!(recipe_detail(&recipe, &result).contains("no shopping needed"));
    }

    #[test]
    fn test_pantry_view() {
        let mut items = Pantry::new();
        items.add("卵", "6").unwrap();
        items.add("salt", "").unwrap();

        assert_eq!(pantry(&items), "卵 (6)\nsalt\n");
        assert_eq!(pantry(&Pantry::new()), "pantry is empty\n");
    }

    #[test]
    fn test_week_plan_view() {
        let mut plan = WeekPlan::new();
        plan.add_recipe("Omelette").unwrap();

        let text = week_plan(&plan);

        assert!(text.starts_with("Monday:\n  0. Omelette\nTuesday:\n"));
        assert!(text.ends_with("Sunday:\n"));
    }
}
