use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use common::ScenarioInput;
use std::path::PathBuf;
use tracing::{debug, trace};

pub mod commands;

use crate::config::load_config;
use crate::store::ScenarioStore;
use commands::{calculate, compare_scenarios, delete_scenario, init_database, list_scenarios, save_scenario, show_scenario};

#[derive(Parser)]
#[command(name = "ratecalc")]
#[command(about = "Hourly rate calculator with saved, comparable scenarios")]
#[command(version)]
pub struct Cli {
    /// Database URL
    ///
    /// For SQLite databases, use:
    ///   - sqlite://relative/path/to/database.sqlite?mode=rwc
    ///   - sqlite:///absolute/path/to/database.sqlite?mode=rwc
    ///
    /// `mode=rwc` creates the database file if it does not exist.
    /// Overrides `database_url` from the configuration file.
    #[arg(short, long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Configuration file (defaults to ./ratecalc.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Cost and margin parameters, shared by `calc` and `save`.
///
/// Defaults are the preset values of the calculation form.
#[derive(Args, Debug, Clone)]
pub struct RateArgs {
    /// Number of workers
    #[arg(long, default_value_t = 8)]
    pub workers: i32,

    /// Yearly cost per worker (salary, social contributions, ...)
    #[arg(long, default_value_t = 60_000.0)]
    pub cost_per_worker: f64,

    /// Yearly overhead of the business (rent, administration, ...)
    #[arg(long, default_value_t = 230_000.0)]
    pub overhead: f64,

    /// Yearly billable hours per worker
    #[arg(long, default_value_t = 1_512.0)]
    pub hours: f64,

    /// Profit margin in percent
    #[arg(long, default_value_t = 15.0)]
    pub margin_percent: f64,

    /// VAT rate in percent
    #[arg(long, default_value_t = 19.0)]
    pub vat_percent: f64,

    /// Move part of the margin into a separately tracked share
    #[arg(long)]
    pub redistribution: bool,
}

impl RateArgs {
    /// Converts percent values to the fractions the engine works with.
    pub fn to_input(&self) -> ScenarioInput {
        ScenarioInput {
            worker_count: self.workers,
            cost_per_worker: self.cost_per_worker,
            overhead_cost: self.overhead,
            billable_hours_per_worker: self.hours,
            margin_fraction: self.margin_percent / 100.0,
            vat_fraction: self.vat_percent / 100.0,
            redistribution_enabled: self.redistribution,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the scenarios table if it does not exist yet
    InitDb,
    /// Compute the hourly rates without saving them
    Calc {
        #[command(flatten)]
        rates: RateArgs,
    },
    /// Compute the hourly rates and save them as a named scenario
    Save {
        /// Scenario name
        #[arg(short, long)]
        name: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,

        #[command(flatten)]
        rates: RateArgs,
    },
    /// List all saved scenarios, newest first
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a single scenario
    Show {
        /// Scenario ID
        id: i32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete a scenario
    Delete {
        /// Scenario ID
        id: i32,
    },
    /// Compare two or more scenarios side by side
    ///
    /// The highest value of each column is shown in green, the lowest in red.
    Compare {
        /// Scenario IDs
        #[arg(num_args = 1.., required = true)]
        ids: Vec<i32>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        trace!("Entering Cli::run");
        let cfg = load_config(self.config.as_deref())?;
        let format = cfg.format.number_format();
        let database_url = self.database_url.unwrap_or(cfg.database_url);
        debug!("Number format: {:?}", format);

        let store = ScenarioStore::connect(&database_url).await?;
        store.initialize().await?;

        match self.command {
            Commands::InitDb => {
                init_database(&store).await?;
            }
            Commands::Calc { rates } => {
                calculate(&rates.to_input(), &format)?;
            }
            Commands::Save { name, description, rates } => {
                save_scenario(&store, &name, description.as_deref(), &rates.to_input()).await?;
            }
            Commands::List { json } => {
                list_scenarios(&store, &format, json).await?;
            }
            Commands::Show { id, json } => {
                show_scenario(&store, id, &format, json).await?;
            }
            Commands::Delete { id } => {
                delete_scenario(&store, id).await?;
            }
            Commands::Compare { ids } => {
                compare_scenarios(&store, &ids, &format).await?;
            }
        }
        Ok(())
    }
}
