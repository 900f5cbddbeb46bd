use thiserror::Error;

/// Errors generated by the logs library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the log filter directive is invalid.
    #[error(transparent)]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// Error generated when a global subscriber is already set.
    #[error(transparent)]
    Init(#[from] tracing_subscriber::util::TryInitError),

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
