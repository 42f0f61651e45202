//! Command-line interface.
//!
//! clap-derive command surface mapping user actions onto the view-model
//! flows. Each command lives in its own module under `commands/` with a
//! dedicated `Args` struct and an `execute` function.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::Settings;
use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::logging::{self, LoggingConfig};
use crate::transport::ApiClient;

use commands::add::AddArgs;
use commands::delete::DeleteArgs;
use commands::list::ListArgs;
use commands::profile::ProfileArgs;

#[derive(Parser)]
#[command(name = "moneymap")]
#[command(version)]
#[command(about = "Terminal client for the MoneyMap personal finance API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend API base URL (falls back to MONEYMAP_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Data directory path for session logs (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show investments with aggregate totals
    List(ListArgs),

    /// Add a new investment
    Add(AddArgs),

    /// Delete an investment by id
    Delete(DeleteArgs),

    /// Show or update the user profile
    Profile(ProfileArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);
        data_paths.ensure_directories()?;

        logging::init_logging(LoggingConfig::new(data_paths).with_verbose(self.verbose > 0))?;

        let settings = Settings::resolve(self.api_url.clone());
        let api = ApiClient::new(settings.api_url.as_str());

        match self.command {
            Commands::List(args) => commands::list::execute(&api, args).await,
            Commands::Add(args) => commands::add::execute(&api, args).await,
            Commands::Delete(args) => commands::delete::execute(&api, args).await,
            Commands::Profile(args) => commands::profile::execute(&api, args).await,
        }
    }
}
