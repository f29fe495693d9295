use std::cmp::Ordering;

use serde::Serialize;
use validator::Validate;

use crate::alias::AliasTable;
use crate::error::MatchingResult;
use crate::normalize::normalize;
use crate::scorer::{MatchScorer, PantrySet};
use crate::types::{FilterCriteria, MatchResult, Recipe};

/// One ranked entry, borrowing the recipe from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRecipe<'a> {
    pub recipe: &'a Recipe,
    #[serde(rename = "match")]
    pub result: MatchResult,
}

/// Recipe Ranker
///
/// Runs the filter/score/sort pipeline over a catalog:
/// 1. category, 2. max time, 3. free-text query,
/// 4. score, 5. minimum match, 6. sort, 7. fully-stocked only.
///
/// Ordering: fewest missing ingredients first, then highest match
/// percentage, then shortest cooking time. Entries equal on all three keep
/// catalog order.
#[derive(Debug, Clone, Copy)]
pub struct RecipeRanker<'a> {
    scorer: MatchScorer<'a>,
}

impl Default for RecipeRanker<'static> {
    fn default() -> Self {
        Self::new(AliasTable::builtin())
    }
}

impl<'a> RecipeRanker<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self {
            scorer: MatchScorer::new(aliases),
        }
    }

    pub fn scorer(&self) -> MatchScorer<'a> {
        self.scorer
    }

    /// Rank `catalog` for the given pantry names and filters.
    ///
    /// # Errors
    /// - `InvalidCriteria` when `criteria` fails validation
    /// - `EmptyRecipe` when a recipe that survives the filters has no
    ///   required ingredients; no partial ranking is returned
    #[tracing::instrument(skip_all, fields(catalog = catalog.len()))]
    pub fn rank<'c, I>(
        &self,
        catalog: &'c [Recipe],
        pantry_names: I,
        criteria: &FilterCriteria,
    ) -> MatchingResult<Vec<RankedRecipe<'c>>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if let Err(errors) = criteria.validate() {
            tracing::warn!(%errors, "Rejected filter criteria");
            return Err(errors.into());
        }

        let have = PantrySet::new(pantry_names);
        let query = normalize(&criteria.query);

        let mut ranked = catalog
            .iter()
            .filter(|recipe| criteria.keeps_category(recipe))
            .filter(|recipe| criteria.keeps_time(recipe))
            .filter(|recipe| matches_query(recipe, &query))
            .map(|recipe| {
                Ok(RankedRecipe {
                    recipe,
                    result: self.scorer.score(recipe, &have)?,
                })
            })
            .collect::<MatchingResult<Vec<_>>>()?;

        let scored = ranked.len();
        ranked.retain(|entry| entry.result.pct >= criteria.min_match_pct);
        ranked.sort_by(compare_ranked);

        if criteria.only_fully_stocked {
            ranked.retain(|entry| entry.result.is_fully_stocked());
        }

        tracing::debug!(
            pantry = have.len(),
            scored,
            returned = ranked.len(),
            "Ranked recipes"
        );

        Ok(ranked)
    }
}

/// `query` must already be normalized; empty matches everything.
fn matches_query(recipe: &Recipe, query: &str) -> bool {
    query.is_empty()
        || normalize(&recipe.name).contains(query)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| normalize(ingredient).contains(query))
}

fn compare_ranked(a: &RankedRecipe<'_>, b: &RankedRecipe<'_>) -> Ordering {
    a.result
        .need
        .cmp(&b.result.need)
        .then_with(|| b.result.pct.total_cmp(&a.result.pct))
        .then_with(|| a.recipe.time.cmp(&b.recipe.time))
}

/// Rank with the built-in alias table.
pub fn rank<'c, I>(
    catalog: &'c [Recipe],
    pantry_names: I,
    criteria: &FilterCriteria,
) -> MatchingResult<Vec<RankedRecipe<'c>>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    RecipeRanker::default().rank(catalog, pantry_names, criteria)
}
