//! Error types for Brotli CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Brotli CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input path does not reference an existing file
    #[error("File {} not found", path.display())]
    MissingInput {
        /// Path to the input file
        path: PathBuf,
    },

    /// Failed to read the input file
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create or persist the output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A parameter is outside the range accepted by the encoder
    #[error("{message}")]
    InvalidOption {
        /// Description of the rejected option
        message: String,
    },

    /// Compression operation failed
    #[error("brotli error: {message}: {}", path.display())]
    Compression {
        /// Path to the file being compressed
        path: PathBuf,
        /// Error message from the compression backend
        message: String,
    },

    /// Decompression operation failed
    #[error("brotli error: {message}: {}", path.display())]
    Decompression {
        /// Path to the file being decompressed
        path: PathBuf,
        /// Error message from the compression backend
        message: String,
    },
}

impl Error {
    /// Returns `true` for failures reported by the compression backend.
    ///
    /// These are printed verbatim, without the program name prefix.
    pub fn is_backend(&self) -> bool {
        matches!(self, Error::Compression { .. } | Error::Decompression { .. })
    }
}

/// Specialized `Result` type for Brotli CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match &err {
            Error::MissingInput { .. } => io::Error::new(io::ErrorKind::NotFound, err),
            Error::InvalidOption { .. } => io::Error::new(io::ErrorKind::InvalidInput, err),
            Error::Compression { .. } | Error::Decompression { .. } => {
                io::Error::new(io::ErrorKind::InvalidData, err)
            }
            Error::OpenInput { source, .. } | Error::CreateOutput { source, .. } => {
                // Preserve the original error kind
                io::Error::new(source.kind(), err)
            }
        }
    }
}

/// Formats an error returned by [`run_cli`](crate::run_cli) for stderr.
///
/// Backend failures keep the `brotli error: <detail>: <input>` shape; every
/// other failure is prefixed with the program name.
pub fn format_error_for_stderr(program: &str, err: &io::Error) -> String {
    match err.get_ref().and_then(|e| e.downcast_ref::<Error>()) {
        Some(cli_err) if cli_err.is_backend() => cli_err.to_string(),
        Some(cli_err) => format!("{program}: {cli_err}"),
        None => format!("{program}: {err}"),
    }
}
