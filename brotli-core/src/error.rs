//! Error types and result handling for Brotli compression and decompression operations.

use std::fmt;

use crate::header::LEGACY_HEADER_SIZE;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a compression [`Backend`](crate::backend::Backend).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Input is not a valid compressed stream (corrupt, truncated or another format).
    Format(String),

    /// The encoder failed while processing or finalizing the payload.
    Encode(String),

    /// The encoder rejected its parameters.
    Options(String),
}

impl BackendError {
    /// Returns `true` if the error was produced while decoding malformed input.
    ///
    /// Only this kind of failure is eligible for the legacy-header fallback.
    pub fn is_format(&self) -> bool {
        matches!(self, BackendError::Format(_))
    }

    /// Returns the backend-provided detail message.
    pub fn message(&self) -> &str {
        match self {
            BackendError::Format(message)
            | BackendError::Encode(message)
            | BackendError::Options(message) => message,
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Format(message) => write!(f, "decoder error: {message}"),
            BackendError::Encode(message) => write!(f, "encoder error: {message}"),
            BackendError::Options(message) => write!(f, "invalid encoder options: {message}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// Comprehensive error type covering all failure modes of the orchestrators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Quality is outside `0..=11`.
    InvalidQuality(u32),

    /// Explicit window exponent is outside `10..=24`.
    InvalidWindow(u32),

    /// Block exponent is neither `0` nor inside `16..=24`.
    InvalidBlock(u32),

    /// The backend failed while compressing. Never retried.
    Compression(BackendError),

    /// The backend could not decode the input, even after the legacy-header retry.
    Decode(BackendError),

    /// A legacy header was decoded from a slice that is not exactly 16 bytes long.
    InvalidHeaderLength {
        /// Length of the rejected slice
        len: usize,
    },
}

impl Error {
    /// Returns `true` for out-of-range parameters supplied by the caller.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidQuality(_) | Error::InvalidWindow(_) | Error::InvalidBlock(_)
        )
    }

    /// Returns the underlying backend failure, if any.
    pub fn backend(&self) -> Option<&BackendError> {
        match self {
            Error::Compression(err) | Error::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidQuality(quality) => {
                write!(f, "invalid quality {quality} (must be 0-11)")
            }
            Error::InvalidWindow(lgwin) => {
                write!(f, "invalid window size exponent {lgwin} (must be 10-24)")
            }
            Error::InvalidBlock(lgblock) => {
                write!(f, "invalid block size exponent {lgblock} (must be 0 or 16-24)")
            }
            Error::Compression(err) => write!(f, "compression failed: {}", err.message()),
            Error::Decode(err) => write!(f, "decompression failed: {}", err.message()),
            Error::InvalidHeaderLength { len } => write!(
                f,
                "legacy header must be exactly {LEGACY_HEADER_SIZE} bytes, got {len}"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Compression(err) | Error::Decode(err) => Some(err),
            _ => None,
        }
    }
}
