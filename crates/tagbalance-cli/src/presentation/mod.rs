//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!                                                                  ==(Text)==> [ View ] --> Output
//! ```
//!
//! View models carry raw data (names, line numbers, counts); formatting
//! into sentences happens only in views, so JSON output stays structured.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::ConsoleRenderer;
