use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all projprops operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PropsError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The global configuration file could not be read or parsed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.projprops/config.toml for syntax errors"))]
    Config { message: String },

    /// No project directory or property file where one was expected.
    #[error("Project error: {message}")]
    #[diagnostic(help("Run `projprops init` or pass the project directory with --dir"))]
    Project { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PropsResult<T> = miette::Result<T>;
