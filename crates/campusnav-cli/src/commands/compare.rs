//! Compare command handler: runs both strategies on one request.

use anyhow::{bail, Context, Result};

use campusnav_cli::output::{render_comparison_text, render_json, OutputFormat};
use campusnav_lib::{compare_strategies, CampusMap};

use super::route::RouteArgs;

/// Handle the compare subcommand.
///
/// Fails when the strategies disagree on whether a path exists or on its
/// total distance. The `--algorithm` flag is ignored.
pub fn handle_compare(map: &CampusMap, args: &RouteArgs, format: OutputFormat) -> Result<()> {
    let request = args.to_request();
    let comparison = compare_strategies(map, &request)
        .with_context(|| format!("failed to compare routes from {} to {}", args.from, args.to))?;

    match format {
        OutputFormat::Text => print!("{}", render_comparison_text(&comparison)),
        OutputFormat::Json => println!("{}", render_json(&comparison)?),
    }

    if !comparison.agrees() {
        bail!(
            "search strategies disagree for {} -> {}",
            args.from,
            args.to
        );
    }
    Ok(())
}
