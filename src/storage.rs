//! JSON documents behind the CLI: the read-only recipe catalog, the pantry
//! and the week plan. A missing pantry or plan file means "nothing saved yet".

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pantry_matching::Recipe;
use pantry_plan::{Pantry, WeekPlan};

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Recipe>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe catalog {}", path.display()))?;
    let catalog: Vec<Recipe> = serde_json::from_str(&json)
        .with_context(|| format!("Recipe catalog {} is not a JSON array of recipes", path.display()))?;

    tracing::debug!(recipes = catalog.len(), path = %path.display(), "Loaded catalog");

    Ok(catalog)
}

pub fn load_pantry(path: impl AsRef<Path>) -> Result<Pantry> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Pantry::new());
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pantry {}", path.display()))?;
    Pantry::from_json(&json).with_context(|| format!("Invalid pantry file {}", path.display()))
}

pub fn save_pantry(path: impl AsRef<Path>, pantry: &Pantry) -> Result<()> {
    write(path.as_ref(), &pantry.to_json_pretty()?)
}

pub fn load_plan(path: impl AsRef<Path>) -> Result<WeekPlan> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(WeekPlan::new());
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan {}", path.display()))?;
    WeekPlan::from_json(&json).with_context(|| format!("Invalid plan file {}", path.display()))
}

pub fn save_plan(path: impl AsRef<Path>, plan: &WeekPlan) -> Result<()> {
    write(path.as_ref(), &plan.to_json_pretty()?)
}

fn write(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Saved");

    Ok(())
}
