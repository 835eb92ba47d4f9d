use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campusnav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No simple path between the endpoints satisfies both distance limits.
    #[error("no path from {start} to {goal} satisfies the distance limits")]
    NoPathFound { start: String, goal: String },

    /// Raised when a building label could not be found in the map.
    #[error("unknown building: {name}{}", format_suggestions(.suggestions))]
    UnknownBuilding {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a map file line does not hold `from to total outdoor`.
    #[error("malformed map entry on line {line}: {message}")]
    MalformedMapLine { line: usize, message: String },

    /// Raised when a map file contains no edges at all.
    #[error("campus map contains no edges")]
    EmptyMap,

    /// Map file could not be located at the resolved path.
    #[error("campus map not found at {path}")]
    MapNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default campus map")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_building_lists_single_suggestion() {
        let error = Error::UnknownBuilding {
            name: "33".to_string(),
            suggestions: vec!["32".to_string()],
        };
        assert_eq!(error.to_string(), "unknown building: 33. Did you mean '32'?");
    }

    #[test]
    fn unknown_building_lists_multiple_suggestions() {
        let error = Error::UnknownBuilding {
            name: "3".to_string(),
            suggestions: vec!["32".to_string(), "34".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "unknown building: 3. Did you mean one of: '32', '34'?"
        );
    }

    #[test]
    fn no_path_names_both_endpoints() {
        let error = Error::NoPathFound {
            start: "8".to_string(),
            goal: "50".to_string(),
        };
        assert!(error.to_string().contains("from 8 to 50"));
    }
}
