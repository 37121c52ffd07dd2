use crate::types::LogLevel;
use env_logger::{Builder, Env};

/// Install the stderr logger.
///
/// `RUST_LOG` takes precedence over `--log-level` when set.
pub fn init(level: LogLevel) {
    let _ = Builder::new()
        .filter_level(level.into())
        .parse_env(Env::default())
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
