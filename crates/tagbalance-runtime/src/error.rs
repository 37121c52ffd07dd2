use std::fmt;
use std::path::PathBuf;

/// Result type for tagbalance-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Types layer error
    Types(tagbalance_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Input file does not exist
    SourceNotFound(PathBuf),

    /// Input file is not valid UTF-8
    InvalidEncoding(PathBuf),

    /// Refused to overwrite an existing file
    AlreadyExists(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::SourceNotFound(path) => write!(f, "File not found: {}", path.display()),
            Error::InvalidEncoding(path) => {
                write!(f, "File is not valid UTF-8: {}", path.display())
            }
            Error::AlreadyExists(path) => write!(
                f,
                "File already exists: {} (use --force to overwrite)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_)
            | Error::SourceNotFound(_)
            | Error::InvalidEncoding(_)
            | Error::AlreadyExists(_) => None,
        }
    }
}

impl From<tagbalance_types::Error> for Error {
    fn from(err: tagbalance_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
