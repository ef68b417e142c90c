//! OctoFit CLI
//!
//! Terminal front end for the dashboard:
//! - Show any of the five collections as a table
//! - Print the navigation shell
//! - Generate a default config file

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;

use octofit::config::{generate_default_config, Config};
use octofit::dashboard::{Endpoints, HttpFetcher, ListController};
use octofit::model::{Activity, LeaderboardEntry, Team, User, Workout};
use octofit::view::{terminal, ListView, PageInfo, Present, TableRow};
use octofit::ViewState;

#[derive(Parser)]
#[command(name = "octofit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "OctoFit Tracker dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API root (overrides config and OCTOFIT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List users
    Users,
    /// List teams
    Teams,
    /// List activities
    Activities,
    /// Show the leaderboard
    Leaderboard,
    /// List suggested workouts
    Workouts,
    /// Show the navigation routes
    Routes,
    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.dashboard.api_root = url.clone();
    }

    octofit::logging::init(&config.logging);

    let endpoints = config.dashboard.endpoints();

    match cli.command {
        Commands::Users => show::<User>(&endpoints, cli.format).await,
        Commands::Teams => show::<Team>(&endpoints, cli.format).await,
        Commands::Activities => show::<Activity>(&endpoints, cli.format).await,
        Commands::Leaderboard => show::<LeaderboardEntry>(&endpoints, cli.format).await,
        Commands::Workouts => show::<Workout>(&endpoints, cli.format).await,

        Commands::Routes => {
            print!("{}", terminal::render_routes());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Activate one controller and print where it settles
async fn show<E>(endpoints: &Endpoints, format: OutputFormat) -> anyhow::Result<ExitCode>
where
    E: Present,
    E::Item: TableRow,
{
    let mut controller = ListController::<E, _>::from_endpoints(endpoints, HttpFetcher::new());
    let state = controller.activate().await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(state)?),
        OutputFormat::Table => {
            let page = PageInfo::for_kind(E::KIND);
            print!("{}", terminal::render(&page, &ListView::of(state)));
        }
    }

    let failed = matches!(state, ViewState::Error(_));
    if failed {
        if format == OutputFormat::Table {
            eprintln!();
            eprintln!(
                "{} is the API running at {}?",
                "hint:".yellow(),
                controller.endpoint()
            );
            eprintln!("  cargo run --bin octofit-api");
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
