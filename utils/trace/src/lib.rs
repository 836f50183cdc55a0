use thiserror::Error;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber: RUST_LOG wins, `default_level` otherwise.
/// Logs go to stderr so stdout stays usable for tool output.
pub fn tracing_init(default_level: &str) -> Result<(), TracingInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|source| TracingInitError::InvalidFilter { source })?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .try_init()
        .map_err(|source| TracingInitError::SetSubscriber { source })?;

    Ok(())
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("InvalidFilter: {source}")]
    InvalidFilter {
        #[from]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("SetSubscriber: {source}")]
    SetSubscriber {
        #[from]
        source: TryInitError,
    },
}
