//! Route command handler for computing constrained shortest paths.

use anyhow::{Context, Result};
use clap::Args;

use campusnav_cli::output::{render_json, render_plan_text, OutputFormat};
use campusnav_lib::{plan_route, CampusMap, DistanceLimits, RouteRequest, SearchAlgorithm};

/// Arguments shared by the route and compare commands.
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Starting building.
    #[arg(long = "from")]
    pub from: String,
    /// Destination building.
    #[arg(long = "to")]
    pub to: String,
    /// Maximum total distance walked. Unlimited when omitted.
    #[arg(long)]
    pub max_total: Option<u64>,
    /// Maximum distance walked outdoors. Unlimited when omitted.
    #[arg(long)]
    pub max_outdoor: Option<u64>,
    /// Search strategy (brute-force or pruned).
    #[arg(long, default_value_t = SearchAlgorithm::Pruned)]
    pub algorithm: SearchAlgorithm,
}

impl RouteArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        let unbounded = DistanceLimits::unbounded();
        RouteRequest::unbounded(self.from.clone(), self.to.clone())
            .with_algorithm(self.algorithm)
            .with_limits(DistanceLimits::new(
                self.max_total.unwrap_or(unbounded.max_total),
                self.max_outdoor.unwrap_or(unbounded.max_outdoor),
            ))
    }
}

/// Handle the route subcommand.
pub fn handle_route(map: &CampusMap, args: &RouteArgs, format: OutputFormat) -> Result<()> {
    let request = args.to_request();
    let plan = plan_route(map, &request)
        .with_context(|| format!("failed to plan a route from {} to {}", args.from, args.to))?;

    match format {
        OutputFormat::Text => print!("{}", render_plan_text(&plan)),
        OutputFormat::Json => println!("{}", render_json(&plan)?),
    }
    Ok(())
}
