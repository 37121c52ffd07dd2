use crate::presentation::{ConsoleRenderer, presenters};
use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;
use tagbalance_runtime::{Checker, Config, Source};
use tagbalance_types::TagSets;

pub struct CheckOptions {
    pub paths: Vec<String>,
    pub strict: bool,
    pub track: Vec<String>,
    pub self_closing: Vec<String>,
    pub no_defaults: bool,
    pub quiet: bool,
}

pub fn handle(
    config_path: &Path,
    options: CheckOptions,
    renderer: &ConsoleRenderer,
) -> Result<ExitCode> {
    let sets = effective_sets(config_path, &options)?;
    let sources: Vec<Source> = options.paths.iter().map(|p| Source::from_arg(p)).collect();

    let checker = Checker::new(sets);
    let reports = checker.check_all(&sources)?;

    let vm = presenters::present_check(&reports);
    renderer.render_check(&vm, options.quiet)?;

    if options.strict && !vm.balanced {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn effective_sets(config_path: &Path, options: &CheckOptions) -> Result<TagSets> {
    let mut sets = if options.no_defaults {
        TagSets::empty()
    } else {
        Config::load_from(config_path)?.tags
    };

    for name in &options.track {
        sets.track(name.as_str());
    }
    for name in &options.self_closing {
        sets.mark_self_closing(name.as_str());
    }

    sets.validate()
        .map_err(|e| anyhow::anyhow!("invalid --track or --self-closing value: {}", e))?;
    log::debug!(
        "checking with {} tracked and {} self-closing name(s)",
        sets.tracked.len(),
        sets.self_closing.len()
    );
    Ok(sets)
}
