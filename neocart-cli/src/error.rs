use thiserror::Error;

/// Errors surfaced by the CLI commands.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Build pipeline error
    #[error("{0}")]
    Build(#[from] neocart_core::BuildError),

    /// Cart image codec error
    #[error("{0}")]
    Format(#[from] neocart_format::FormatError),

    /// Input path problem (no stem, bad unicode)
    #[error("invalid input path: {0}")]
    BadPath(String),
}

impl CliError {
    pub(crate) fn bad_path(msg: impl Into<String>) -> Self {
        Self::BadPath(msg.into())
    }
}
