//! Loading campus maps from the plain-text edge format.
//!
//! Every non-empty line that does not start with `#` describes one directed
//! edge as four whitespace-separated tokens:
//!
//! ```text
//! from to total_distance outdoor_distance
//! 32 76 54 23
//! ```
//!
//! Buildings are created on first mention, in file order, and each
//! building's outgoing edges keep the order in which they appear.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{CampusMap, Weight};

/// Default filename for the campus map inside the data directory.
const MAP_FILENAME: &str = "campus_map.txt";

/// Environment variable that overrides the default map location.
pub const MAP_PATH_ENV: &str = "CAMPUSNAV_MAP";

/// Resolve the default map location using platform-specific project directories.
pub fn default_map_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("org", "campusnav", "campusnav").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(MAP_FILENAME))
}

/// Pick the map file to load.
///
/// An explicit path wins, then the `CAMPUSNAV_MAP` environment variable, then
/// [`default_map_path`].
pub fn resolve_map_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(value) = env::var_os(MAP_PATH_ENV).filter(|value| !value.is_empty()) {
        let path = PathBuf::from(value);
        debug!(path = %path.display(), "using map path from {}", MAP_PATH_ENV);
        return Ok(path);
    }

    default_map_path()
}

/// Read and parse the campus map stored at `path`.
pub fn load_campus_map(path: &Path) -> Result<CampusMap> {
    if !path.exists() {
        return Err(Error::MapNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let map = parse_campus_map(&contents)?;
    info!(
        path = %path.display(),
        buildings = map.building_count(),
        edges = map.edge_count(),
        "loaded campus map"
    );
    Ok(map)
}

/// Parse the textual edge list into a [`CampusMap`].
pub fn parse_campus_map(contents: &str) -> Result<CampusMap> {
    let mut map = CampusMap::new();
    let mut edges = 0usize;

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let entry = parse_line(index + 1, line)?;
        if map.add_edge(entry.from, entry.to, entry.weight) {
            edges += 1;
        }
    }

    if edges == 0 {
        return Err(Error::EmptyMap);
    }

    Ok(map)
}

impl FromStr for CampusMap {
    type Err = Error;

    fn from_str(contents: &str) -> Result<Self> {
        parse_campus_map(contents)
    }
}

struct MapEntry<'l> {
    from: &'l str,
    to: &'l str,
    weight: Weight,
}

fn parse_line(line_number: usize, line: &str) -> Result<MapEntry<'_>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[from, to, total, outdoor] = tokens.as_slice() else {
        return Err(Error::MalformedMapLine {
            line: line_number,
            message: format!("expected 4 fields, found {}", tokens.len()),
        });
    };

    let total = parse_distance(line_number, "total", total)?;
    let outdoor = parse_distance(line_number, "outdoor", outdoor)?;

    Ok(MapEntry {
        from,
        to,
        weight: Weight::new(total, outdoor),
    })
}

fn parse_distance(line_number: usize, field: &str, token: &str) -> Result<u64> {
    token.parse::<u64>().map_err(|_| Error::MalformedMapLine {
        line: line_number,
        message: format!("invalid {field} distance '{token}'"),
    })
}
