use std::collections::BTreeSet;

use crate::types::Recipe;

/// Every category tag used in the catalog, sorted and de-duplicated.
pub fn categories(catalog: &[Recipe]) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|recipe| recipe.category.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// First recipe with exactly this name.
pub fn find_recipe<'a>(catalog: &'a [Recipe], name: &str) -> Option<&'a Recipe> {
    catalog.iter().find(|recipe| recipe.name == name)
}
