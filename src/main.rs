use anyhow::Result;
use clap::{Parser, Subcommand};
use pantry_plan::Weekday;

mod cli;

/// pantry-planner - Cook with what you already have
#[derive(Parser)]
#[command(name = "pantry-planner")]
#[command(about = "Rank recipes by what is already in the pantry", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog against the pantry
    Rank {
        /// Keep only recipes tagged with this category
        #[arg(long)]
        category: Option<String>,

        /// Longest cooking time in minutes (999 means no limit)
        #[arg(long)]
        max_time: Option<i64>,

        /// Minimum match percentage, 0 to 100 (overrides config file)
        #[arg(long)]
        min_match: Option<f64>,

        /// Free text matched against names and ingredients
        #[arg(long, short)]
        query: Option<String>,

        /// Only recipes with nothing left to buy
        #[arg(long)]
        only_no_shopping: bool,

        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every category used by the catalog
    Categories,
    /// Show one recipe with what is missing
    Show {
        /// Exact recipe name
        name: String,
    },
    /// Edit the pantry
    Pantry {
        #[command(subcommand)]
        command: PantryCommand,
    },
    /// Edit the week plan
    Plan {
        #[command(subcommand)]
        command: PlanCommand,
    },
}

#[derive(Subcommand)]
enum PantryCommand {
    /// Add an ingredient or update its quantity
    Add {
        name: String,
        #[arg(default_value = "")]
        qty: String,
    },
    /// Remove an ingredient
    Remove { name: String },
    /// Empty the pantry
    Clear,
    /// List the pantry
    List,
    /// Print the pantry as JSON
    Export,
    /// Replace the pantry with a JSON file
    Import { file: String },
}

#[derive(Subcommand)]
enum PlanCommand {
    /// Put a recipe on the first day with room
    Add { name: String },
    /// Put a recipe on a given day
    Assign { day: Weekday, name: String },
    /// Remove the recipe at `index` from a day
    Remove { day: Weekday, index: usize },
    /// Empty every day
    Clear,
    /// Print the week
    Show,
    /// Print the week as JSON
    Export,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = pantry_planner::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantry_planner::observability::init_observability(
        "pantry-planner",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Rank {
            category,
            max_time,
            min_match,
            query,
            only_no_shopping,
            json,
        } => cli::recipes::rank(
            &config,
            cli::recipes::RankOptions {
                category,
                max_time,
                min_match,
                query,
                only_no_shopping,
                json,
            },
        ),
        Commands::Categories => cli::recipes::list_categories(&config),
        Commands::Show { name } => cli::recipes::show(&config, &name),
        Commands::Pantry { command } => match command {
            PantryCommand::Add { name, qty } => cli::pantry::add(&config, &name, &qty),
            PantryCommand::Remove { name } => cli::pantry::remove(&config, &name),
            PantryCommand::Clear => cli::pantry::clear(&config),
            PantryCommand::List => cli::pantry::list(&config),
            PantryCommand::Export => cli::pantry::export(&config),
            PantryCommand::Import { file } => cli::pantry::import(&config, &file),
        },
        Commands::Plan { command } => match command {
            PlanCommand::Add { name } => cli::plan::add(&config, &name),
            PlanCommand::Assign { day, name } => cli::plan::assign(&config, day, &name),
            PlanCommand::Remove { day, index } => cli::plan::remove(&config, day, index),
            PlanCommand::Clear => cli::plan::clear(&config),
            PlanCommand::Show => cli::plan::show(&config),
            PlanCommand::Export => cli::plan::export(&config),
        },
    }
}
