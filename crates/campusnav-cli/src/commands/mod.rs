// Module exports for CLI subcommands
//
// Each module handles a single subcommand. main.rs parses arguments, loads the
// map once, and dispatches to these handlers.

pub mod buildings;
pub mod compare;
pub mod route;
