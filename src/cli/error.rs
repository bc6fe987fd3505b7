//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        // clap renders "error: ..." plus a usage hint; keep the first line only
        let rendered = e.to_string();
        let message = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        CliError::InvalidArgument(message)
    }
}

impl CliError {
    /// Stdout was closed by the reader (e.g. `rwalk | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            CliError::Application(ApplicationError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgument(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) => crate::exitcode::USAGE,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn given_non_numeric_iterations_when_converted_then_invalid_argument() {
        let err: CliError = Cli::try_parse_from(["rwalk", "-i", "abc"])
            .unwrap_err()
            .into();
        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
        assert!(err.to_string().contains("abc"), "{err}");
    }

    #[test]
    fn given_io_errors_when_checked_then_only_broken_pipe_is_quiet() {
        let closed = CliError::from(ApplicationError::io(
            "write simulation output",
            std::io::ErrorKind::BrokenPipe.into(),
        ));
        assert!(closed.is_broken_pipe());

        let full = CliError::from(ApplicationError::io(
            "write simulation output",
            std::io::ErrorKind::WriteZero.into(),
        ));
        assert!(!full.is_broken_pipe());
        assert!(!CliError::InvalidArgument("x".into()).is_broken_pipe());
    }

    #[test]
    fn given_config_error_when_mapped_then_config_exit_code() {
        let err = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }
}
