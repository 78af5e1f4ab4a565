use super::config::TracingLevel;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to set global subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global tracing subscriber.
///
/// Diagnostics are written to stderr so they never interleave with the
/// stdout event lane. `RUST_LOG` overrides the configured level when set.
pub fn setup_tracing(level: TracingLevel) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(level.as_str()).map_err(|source| LoggingError::Filter {
            filter: level.as_str().to_string(),
            source,
        })
    })?;

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact(),
    );

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
