use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tagbalance")]
#[command(about = "Report unbalanced markup tags in source files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Config file (defaults to $TAGBALANCE_CONFIG, then the user config directory)"
    )]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check tag balance of one or more files
    Check {
        #[arg(required = true, help = "Files to check; `-` reads standard input")]
        paths: Vec<String>,

        #[arg(long, help = "Exit with status 1 when any problem is found")]
        strict: bool,

        #[arg(long = "track", value_name = "NAME", help = "Also track this tag name")]
        track: Vec<String>,

        #[arg(
            long = "self-closing",
            value_name = "NAME",
            help = "Also treat this tag name as self-closing"
        )]
        self_closing: Vec<String>,

        #[arg(long, help = "Start from empty tag sets instead of the configured ones")]
        no_defaults: bool,

        #[arg(long, short, help = "Only print problems")]
        quiet: bool,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective tag sets
    Show,

    /// Write the default config file
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Print the resolved config file path
    Path,
}
