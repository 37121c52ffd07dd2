use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::presentation::ConsoleRenderer;
use anyhow::Result;
use std::process::ExitCode;
use tagbalance_runtime::resolve_config_path;

pub fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let renderer = ConsoleRenderer::detect(cli.format);

    match cli.command {
        Commands::Check {
            paths,
            strict,
            track,
            self_closing,
            no_defaults,
            quiet,
        } => handlers::check::handle(
            &config_path,
            handlers::check::CheckOptions {
                paths,
                strict,
                track,
                self_closing,
                no_defaults,
                quiet,
            },
            &renderer,
        ),

        Commands::Config { command } => {
            match command {
                ConfigCommand::Show => handlers::config::show(&config_path, &renderer)?,
                ConfigCommand::Init { force } => {
                    handlers::config::init(&config_path, force, &renderer)?
                }
                ConfigCommand::Path => handlers::config::path(&config_path, &renderer)?,
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
