use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use pantry_matching::{AliasRule, AliasTable};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Where the CLI keeps its JSON documents.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub catalog: String,
    pub pantry: String,
    pub plan: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MatchingConfig {
    /// Used by `rank` when `--min-match` is not given
    #[serde(default)]
    pub default_min_match_pct: f64,
    /// Appended after the built-in synonym rules
    #[serde(default)]
    pub aliases: Vec<AliasRule>,
}

impl MatchingConfig {
    /// Built-in table extended with the configured rules.
    pub fn alias_table(&self) -> AliasTable {
        AliasTable::builtin()
            .clone()
            .with_rules(self.aliases.iter().cloned())
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PANTRY_PLANNER__DATA__CATALOG, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("data.catalog", "recipes.json")?
            .set_default("data.pantry", "pantry.json")?
            .set_default("data.plan", "menu-plan.json")?
            .set_default("observability.log_level", "warn")?
            .set_default("matching.default_min_match_pct", 0.0)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional - a missing file keeps the defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PANTRY_PLANNER")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        for (key, path) in [
            ("data.catalog", &self.data.catalog),
            ("data.pantry", &self.data.pantry),
            ("data.plan", &self.data.plan),
        ] {
            if path.trim().is_empty() {
                return Err(format!("{key} must not be empty"));
            }
        }
        if !(0.0..=100.0).contains(&self.matching.default_min_match_pct) {
            return Err("matching.default_min_match_pct must be between 0 and 100".to_string());
        }
        if self.matching.aliases.iter().any(|rule| rule.triggers.is_empty()) {
            return Err("matching.aliases entries need at least one trigger".to_string());
        }
        Ok(())
    }
}
