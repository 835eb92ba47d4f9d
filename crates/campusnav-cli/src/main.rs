mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::output::OutputFormat;
use campusnav_lib::{load_campus_map, resolve_map_path, CampusMap};

use crate::commands::route::RouteArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus route planner with distance limits")]
struct Cli {
    /// Campus map file. Falls back to CAMPUSNAV_MAP, then the data directory.
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the shortest route between two buildings within the distance limits.
    Route(RouteArgs),
    /// Run both search strategies and check that their totals agree.
    Compare(RouteArgs),
    /// List the buildings on the map.
    Buildings,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let map = open_map(cli.map.as_deref())?;

    match &cli.command {
        Command::Route(args) => commands::route::handle_route(&map, args, cli.format),
        Command::Compare(args) => commands::compare::handle_compare(&map, args, cli.format),
        Command::Buildings => commands::buildings::handle_buildings(&map, cli.format),
    }
}

fn open_map(explicit: Option<&Path>) -> Result<CampusMap> {
    let path = resolve_map_path(explicit).context("failed to resolve the campus map location")?;
    load_campus_map(&path)
        .with_context(|| format!("failed to load campus map from {}", path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
