use crate::presentation::ConsoleRenderer;
use anyhow::Result;
use std::path::Path;
use tagbalance_runtime::Config;

pub fn show(config_path: &Path, renderer: &ConsoleRenderer) -> Result<()> {
    let config = Config::load_from(config_path)?;
    renderer.render_config(&config)
}

pub fn init(config_path: &Path, force: bool, renderer: &ConsoleRenderer) -> Result<()> {
    Config::init_at(config_path, force)?;
    renderer.render_message(&format!(
        "Wrote default config to {}",
        config_path.display()
    ))
}

pub fn path(config_path: &Path, renderer: &ConsoleRenderer) -> Result<()> {
    renderer.render_path(config_path)
}
