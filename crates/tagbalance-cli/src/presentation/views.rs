use std::fmt;

use owo_colors::OwoColorize;
use tagbalance_engine::SUCCESS_MESSAGE;
use tagbalance_types::Diagnostic;

use super::view_models::{CheckResultViewModel, FileCheckViewModel};

// --------------------------------------------------------
// Check Result View
// --------------------------------------------------------

pub struct CheckResultView<'a> {
    data: &'a CheckResultViewModel,
    quiet: bool,
    color: bool,
}

impl<'a> CheckResultView<'a> {
    pub fn new(data: &'a CheckResultViewModel) -> Self {
        Self {
            data,
            quiet: false,
            color: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl<'a> fmt::Display for CheckResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Headers only when more than one file is shown, like `head`/`tail`
        let with_headers = self.data.files.len() > 1;
        let mut first = true;

        for file in &self.data.files {
            if self.quiet && file.balanced {
                continue;
            }
            if with_headers {
                if !first {
                    writeln!(f)?;
                }
                let header = format!("==> {} <==", file.path);
                if self.color {
                    writeln!(f, "{}", header.bold())?;
                } else {
                    writeln!(f, "{}", header)?;
                }
            }
            first = false;
            write!(f, "{}", FileCheckView::new(file, self.quiet, self.color))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// File Check View
// --------------------------------------------------------

struct FileCheckView<'a> {
    data: &'a FileCheckViewModel,
    quiet: bool,
    color: bool,
}

impl<'a> FileCheckView<'a> {
    fn new(data: &'a FileCheckViewModel, quiet: bool, color: bool) -> Self {
        Self { data, quiet, color }
    }
}

impl<'a> fmt::Display for FileCheckView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.balanced {
            if self.quiet {
                return Ok(());
            }
            if self.color {
                return writeln!(f, "{}", SUCCESS_MESSAGE.green());
            }
            return writeln!(f, "{}", SUCCESS_MESSAGE);
        }

        for diagnostic in &self.data.diagnostics {
            writeln!(f, "{}", DiagnosticLine::new(diagnostic, self.color))?;
        }
        Ok(())
    }
}

struct DiagnosticLine<'a> {
    diagnostic: &'a Diagnostic,
    color: bool,
}

impl<'a> DiagnosticLine<'a> {
    fn new(diagnostic: &'a Diagnostic, color: bool) -> Self {
        Self { diagnostic, color }
    }
}

impl<'a> fmt::Display for DiagnosticLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = self.diagnostic.to_string();
        if self.color
            && let Some(rest) = message.strip_prefix("Error:")
        {
            return write!(f, "{}{}", "Error:".red().bold(), rest);
        }
        write!(f, "{}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagbalance_engine::DiagnosticCounts;

    fn file(path: &str, diagnostics: Vec<Diagnostic>) -> FileCheckViewModel {
        FileCheckViewModel {
            path: path.to_string(),
            balanced: diagnostics.is_empty(),
            events_scanned: 0,
            tracked_events: 0,
            counts: DiagnosticCounts::default(),
            diagnostics,
        }
    }

    fn unclosed(tag: &str, line: usize) -> Diagnostic {
        Diagnostic::Unclosed {
            tag: tag.to_string(),
            line,
        }
    }

    #[test]
    fn test_single_file_has_no_header() {
        let vm = CheckResultViewModel {
            files: vec![file("a.jsx", vec![])],
            balanced: true,
        };
        assert_eq!(
            CheckResultView::new(&vm).to_string(),
            "Tags look balanced (for tracked tags)\n"
        );
    }

    #[test]
    fn test_multiple_files_get_headers() {
        let vm = CheckResultViewModel {
            files: vec![file("a.jsx", vec![]), file("b.jsx", vec![unclosed("div", 3)])],
            balanced: false,
        };
        insta::assert_snapshot!(CheckResultView::new(&vm).to_string(), @r"
        ==> a.jsx <==
        Tags look balanced (for tracked tags)

        ==> b.jsx <==
        Error: Unclosed tag <div> opened at line 3
        ");
    }

    #[test]
    fn test_quiet_hides_balanced_files() {
        let vm = CheckResultViewModel {
            files: vec![file("a.jsx", vec![]), file("b.jsx", vec![unclosed("p", 1)])],
            balanced: false,
        };
        insta::assert_snapshot!(CheckResultView::new(&vm).quiet(true).to_string(), @r"
        ==> b.jsx <==
        Error: Unclosed tag <p> opened at line 1
        ");
    }

    #[test]
    fn test_color_keeps_message_text() {
        let vm = CheckResultViewModel {
            files: vec![file("a.jsx", vec![unclosed("nav", 2)])],
            balanced: false,
        };
        let out = CheckResultView::new(&vm).color(true).to_string();
        assert!(out.contains("\u{1b}["));
        assert!(out.contains(" Unclosed tag <nav> opened at line 2"));
    }
}
