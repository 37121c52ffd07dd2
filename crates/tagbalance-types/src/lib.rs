pub mod diagnostic;
pub mod error;
pub mod sets;
pub mod tag;
mod util;

pub use diagnostic::*;
pub use error::{Error, Result};
pub use sets::*;
pub use tag::*;
pub use util::*;
