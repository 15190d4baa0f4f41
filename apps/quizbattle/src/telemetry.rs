use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::logging::{LogFormat, LoggingConfig, DEFAULT_FILTER};
use crate::error::AppError;

/// Install the global subscriber using `QUIZBATTLE_LOG_FORMAT` and `RUST_LOG`.
pub fn init_tracing() -> Result<(), AppError> {
    init_tracing_with(&LoggingConfig::from_env()?)
}

pub fn init_tracing_with(config: &LoggingConfig) -> Result<(), AppError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_ansi(false)
                    .json(),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_target(false).compact())
            .try_init(),
    };

    installed.map_err(|e| AppError::internal(format!("tracing subscriber already set: {e}")))
}
