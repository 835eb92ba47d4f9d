//! Buildings command handler for listing the loaded map.

use anyhow::Result;

use campusnav_cli::output::{
    building_summaries, render_buildings_text, render_json, OutputFormat,
};
use campusnav_lib::CampusMap;

/// Handle the buildings subcommand.
pub fn handle_buildings(map: &CampusMap, format: OutputFormat) -> Result<()> {
    let summaries = building_summaries(map);
    match format {
        OutputFormat::Text => print!("{}", render_buildings_text(&summaries)),
        OutputFormat::Json => println!("{}", render_json(&summaries)?),
    }
    Ok(())
}
