pub mod checker;
pub mod config;
pub mod error;
pub mod source;

pub use checker::{Checker, FileReport};
pub use config::{Config, resolve_config_path};
pub use error::{Error, Result};
pub use source::{Source, read_source};
