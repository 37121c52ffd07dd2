use crate::{Error, Result};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a checked buffer comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Source {
    /// `-` means standard input; anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Read a source fully and decode it as UTF-8.
pub fn read_source(source: &Source) -> Result<String> {
    match source {
        Source::File(path) => read_file(path),
        Source::Stdin => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            String::from_utf8(buf).map_err(|_| Error::InvalidEncoding(PathBuf::from("<stdin>")))
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::SourceNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidEncoding(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_arg() {
        assert_eq!(Source::from_arg("-"), Source::Stdin);
        assert_eq!(
            Source::from_arg("src/App.jsx"),
            Source::File(PathBuf::from("src/App.jsx"))
        );
        assert_eq!(Source::Stdin.to_string(), "<stdin>");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_source(&Source::from_arg("/definitely/not/here.jsx")).unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(_)));
    }

    #[test]
    fn test_read_invalid_utf8() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("bad.jsx");
        std::fs::write(&path, [0x3c, 0x64, 0xff, 0xfe])?;

        let err = read_source(&Source::File(path)).unwrap_err();
        assert!(matches!(err, Error::InvalidEncoding(_)));
        Ok(())
    }

    #[test]
    fn test_read_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("ok.jsx");
        std::fs::write(&path, "<div></div>\n")?;

        assert_eq!(read_source(&Source::File(path))?, "<div></div>\n");
        Ok(())
    }
}
