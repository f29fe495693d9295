use anyhow::{Context, Result};
use pantry_matching::find_recipe;
use pantry_plan::{WeekPlan, Weekday};
use pantry_planner::{render, storage, Config};

/// Place a catalog recipe on the first day with room.
pub fn add(config: &Config, name: &str) -> Result<()> {
    let catalog = storage::load_catalog(&config.data.catalog)?;
    let recipe = find_recipe(&catalog, name)
        .with_context(|| format!("No recipe named '{name}' in the catalog"))?;

    let mut plan = storage::load_plan(&config.data.plan)?;
    let day = plan.add_recipe(&recipe.name)?;
    storage::save_plan(&config.data.plan, &plan)?;

    println!("{} planned on {day}", recipe.name);

    Ok(())
}

pub fn assign(config: &Config, day: Weekday, name: &str) -> Result<()> {
    let mut plan = storage::load_plan(&config.data.plan)?;
    plan.assign(day, name);
    storage::save_plan(&config.data.plan, &plan)
}

pub fn remove(config: &Config, day: Weekday, index: usize) -> Result<()> {
    let mut plan = storage::load_plan(&config.data.plan)?;
    let removed = plan.remove(day, index)?;
    storage::save_plan(&config.data.plan, &plan)?;

    tracing::info!(%day, recipe = %removed, "Removed from plan");

    Ok(())
}

pub fn clear(config: &Config) -> Result<()> {
    storage::save_plan(&config.data.plan, &WeekPlan::new())
}

pub fn show(config: &Config) -> Result<()> {
    let plan = storage::load_plan(&config.data.plan)?;
    print!("{}", render::week_plan(&plan));

    Ok(())
}

pub fn export(config: &Config) -> Result<()> {
    let plan = storage::load_plan(&config.data.plan)?;
    println!("{}", plan.to_json_pretty()?);

    Ok(())
}
