use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::Settings;
use commands::{OutputFormat, ProjectOptions, project_file, serve};

#[derive(Parser)]
#[command(name = "budgetai")]
#[command(about = "BudgetAI payment timeline service and offline projection tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080).
        /// Defaults to `bind_address` from the settings.
        #[arg(short, long, env = "BUDGETAI_BIND_ADDRESS")]
        bind_address: Option<String>,
    },
    /// Project a timeline from a JSON file of records and print it
    ///
    /// The file holds `recurring_payments` and `installments` lists in the
    /// same shape the service accepts.
    Project {
        /// Path to the JSON records file
        #[arg(short, long)]
        input: PathBuf,

        /// Date to classify against (YYYY-MM-DD, default: today in UTC)
        #[arg(short, long)]
        today: Option<NaiveDate>,

        /// Days shown after today
        #[arg(long, env = "BUDGETAI_HORIZON_DAYS", value_parser = clap::value_parser!(u32).range(1..=366))]
        horizon_days: Option<u32>,

        /// Days shown before today
        #[arg(long, env = "BUDGETAI_LOOKBACK_DAYS", value_parser = clap::value_parser!(u32).range(0..=366))]
        lookback_days: Option<u32>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let settings = Settings::load()?;

        match self.command {
            Commands::Serve { bind_address } => {
                let bind_address = bind_address.unwrap_or_else(|| settings.bind_address.clone());
                serve(settings, &bind_address).await?;
            }
            Commands::Project { input, today, horizon_days, lookback_days, format } => {
                let options = ProjectOptions { today, horizon_days, lookback_days, format };
                let output = project_file(&input, &options, &settings)?;
                println!("{}", output);
            }
        }
        Ok(())
    }
}
