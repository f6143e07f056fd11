//! Testing infrastructure for sitecal integration tests.
//!
//! - `TestWorld`: an isolated data directory plus a configured CLI command
//! - `fixtures`: sample jobs, staff and reference data in the stored JSON layout
//! - `assertions`: checks over `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
