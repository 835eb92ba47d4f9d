//! Campusnav CLI library.
//!
//! Rendering helpers shared by the `campusnav` binary and its tests.

pub mod output;
