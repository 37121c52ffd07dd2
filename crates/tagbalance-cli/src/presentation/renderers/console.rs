use anyhow::Result;
use is_terminal::IsTerminal;
use std::path::Path;
use tagbalance_runtime::Config;

use crate::presentation::view_models::CheckResultViewModel;
use crate::presentation::views::CheckResultView;
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, color: bool) -> Self {
        Self { json_mode, color }
    }

    /// Colour only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect(format: OutputFormat) -> Self {
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::new(format == OutputFormat::Json, color)
    }

    pub fn render_check(&self, result: &CheckResultViewModel, quiet: bool) -> Result<()> {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(result)?);
            return Ok(());
        }

        let view = CheckResultView::new(result).quiet(quiet).color(self.color);
        print!("{}", view);
        Ok(())
    }

    pub fn render_config(&self, config: &Config) -> Result<()> {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(config)?);
            return Ok(());
        }

        print!("{}", config.to_toml()?);
        Ok(())
    }

    pub fn render_path(&self, path: &Path) -> Result<()> {
        if self.json_mode {
            println!("{}", serde_json::json!({ "path": path.display().to_string() }));
            return Ok(());
        }

        println!("{}", path.display());
        Ok(())
    }

    pub fn render_message(&self, message: &str) -> Result<()> {
        if self.json_mode {
            println!("{}", serde_json::json!({ "message": message }));
            return Ok(());
        }

        println!("{}", message);
        Ok(())
    }
}
