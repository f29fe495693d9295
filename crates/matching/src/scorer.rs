use std::collections::HashSet;

use crate::alias::AliasTable;
use crate::error::{MatchingError, MatchingResult};
use crate::normalize::normalize;
use crate::types::{MatchResult, Recipe};

/// Normalized pantry names ("have" set). Duplicate spellings collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PantrySet {
    have: HashSet<String>,
}

impl PantrySet {
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            have: names.into_iter().map(|n| normalize(n.as_ref())).collect(),
        }
    }

    /// `name` must already be normalized.
    pub fn contains(&self, name: &str) -> bool {
        self.have.contains(name)
    }

    pub fn len(&self) -> usize {
        self.have.len()
    }

    pub fn is_empty(&self) -> bool {
        self.have.is_empty()
    }
}

/// Match Scorer
///
/// Stateless service computing how much of a recipe's required ingredient
/// list a pantry covers. An ingredient is covered when any of its alias
/// candidates is in the pantry; the same candidate set decides both the hit
/// count and the missing list.
#[derive(Debug, Clone, Copy)]
pub struct MatchScorer<'a> {
    aliases: &'a AliasTable,
}

impl Default for MatchScorer<'static> {
    fn default() -> Self {
        Self::new(AliasTable::builtin())
    }
}

impl<'a> MatchScorer<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &'a AliasTable {
        self.aliases
    }

    /// Whether a raw catalog ingredient is satisfied by the pantry.
    pub fn is_satisfied(&self, ingredient: &str, have: &PantrySet) -> bool {
        self.aliases
            .expand(&normalize(ingredient))
            .iter()
            .any(|candidate| have.contains(candidate))
    }

    /// Score `recipe` against the pantry.
    ///
    /// # Errors
    /// [`MatchingError::EmptyRecipe`] when the recipe lists no required
    /// ingredient: a percentage over zero ingredients has no meaning.
    pub fn score(&self, recipe: &Recipe, have: &PantrySet) -> MatchingResult<MatchResult> {
        let total = recipe.ingredients.len();
        if total == 0 {
            return Err(MatchingError::EmptyRecipe {
                name: recipe.name.clone(),
            });
        }

        let missing: Vec<String> = recipe
            .ingredients
            .iter()
            .filter(|ingredient| !self.is_satisfied(ingredient, have))
            .cloned()
            .collect();

        let need = missing.len();
        let hit = total - need;

        Ok(MatchResult {
            hit,
            need,
            pct: (hit as f64 / total as f64) * 100.0,
            missing,
        })
    }
}

/// Score one recipe against raw pantry names with the built-in alias table.
pub fn score<I>(recipe: &Recipe, pantry_names: I) -> MatchingResult<MatchResult>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    MatchScorer::default().score(recipe, &PantrySet::new(pantry_names))
}
