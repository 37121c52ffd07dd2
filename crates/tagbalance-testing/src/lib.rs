//! Testing infrastructure for tagbalance integration tests.
//!
//! - `TestWorld`: isolated temp directory with its own config path
//! - `fixtures`: markup samples with known outcomes
//! - `assertions`: checks against `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
