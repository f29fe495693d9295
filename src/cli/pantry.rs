use std::fs;

use anyhow::{Context, Result};
use pantry_plan::Pantry;
use pantry_planner::{render, storage, Config};

pub fn add(config: &Config, name: &str, qty: &str) -> Result<()> {
    let mut pantry = storage::load_pantry(&config.data.pantry)?;
    pantry.add(name, qty)?;
    storage::save_pantry(&config.data.pantry, &pantry)?;

    tracing::info!(ingredient = name.trim(), "Added to pantry");

    Ok(())
}

pub fn remove(config: &Config, name: &str) -> Result<()> {
    let mut pantry = storage::load_pantry(&config.data.pantry)?;

    if !pantry.remove(name) {
        tracing::warn!("{name} is not in the pantry");
        return Ok(());
    }

    storage::save_pantry(&config.data.pantry, &pantry)
}

pub fn clear(config: &Config) -> Result<()> {
    storage::save_pantry(&config.data.pantry, &Pantry::new())
}

pub fn list(config: &Config) -> Result<()> {
    let pantry = storage::load_pantry(&config.data.pantry)?;
    print!("{}", render::pantry(&pantry));

    Ok(())
}

pub fn export(config: &Config) -> Result<()> {
    let pantry = storage::load_pantry(&config.data.pantry)?;
    println!("{}", pantry.to_json_pretty()?);

    Ok(())
}

/// Replace the pantry with the content of `file`.
pub fn import(config: &Config, file: &str) -> Result<()> {
    let json = fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))?;
    let pantry = Pantry::from_json(&json).with_context(|| format!("Failed to import {file}"))?;
    storage::save_pantry(&config.data.pantry, &pantry)?;

    tracing::info!(items = pantry.len(), "Pantry imported");

    Ok(())
}
