use anyhow::{Context, Result};
use pantry_matching::{categories, find_recipe, FilterCriteria, PantrySet, RecipeRanker};
use pantry_planner::{render, storage, Config};

pub struct RankOptions {
    pub category: Option<String>,
    pub max_time: Option<i64>,
    pub min_match: Option<f64>,
    pub query: Option<String>,
    pub only_no_shopping: bool,
    pub json: bool,
}

#[tracing::instrument(skip_all)]
pub fn rank(config: &Config, options: RankOptions) -> Result<()> {
    let catalog = storage::load_catalog(&config.data.catalog)?;
    let pantry = storage::load_pantry(&config.data.pantry)?;
    let aliases = config.matching.alias_table();

    let defaults = FilterCriteria::default();
    let criteria = FilterCriteria {
        category: options.category,
        max_time_minutes: options.max_time.unwrap_or(defaults.max_time_minutes),
        min_match_pct: options
            .min_match
            .unwrap_or(config.matching.default_min_match_pct),
        query: options.query.unwrap_or_default(),
        only_fully_stocked: options.only_no_shopping,
    };

    let ranked = RecipeRanker::new(&aliases).rank(&catalog, pantry.names(), &criteria)?;
    tracing::info!(results = ranked.len(), "Ranking complete");

    if options.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        print!("{}", render::ranking(&ranked));
    }

    Ok(())
}

pub fn list_categories(config: &Config) -> Result<()> {
    let catalog = storage::load_catalog(&config.data.catalog)?;

    for category in categories(&catalog) {
        println!("{category}");
    }

    Ok(())
}

pub fn show(config: &Config, name: &str) -> Result<()> {
    let catalog = storage::load_catalog(&config.data.catalog)?;
    let pantry = storage::load_pantry(&config.data.pantry)?;
    let aliases = config.matching.alias_table();

    let recipe = find_recipe(&catalog, name)
        .with_context(|| format!("No recipe named '{name}' in the catalog"))?;
    let result = RecipeRanker::new(&aliases)
        .scorer()
        .score(recipe, &PantrySet::new(pantry.names()))?;

    print!("{}", render::recipe_detail(recipe, &result));

    Ok(())
}
