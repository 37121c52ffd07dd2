//! tagbalance - check that tracked markup tags open and close in order.
//!
//! The checker scans each line for `<name` and `</name>` with a pattern,
//! folds the tags it cares about over a stack and reports three kinds of
//! problems: unexpected closes, mismatched closes and tags left open.
//! It is a linting aid for JSX/HTML-like sources, not a parser.
//!
//! Diagnostics never change the exit status unless `--strict` is given.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
