//! Compression engine capability.
//!
//! The orchestrators in [`crate::pipeline`] never call an entropy coder
//! directly. They go through [`Backend`] and [`Encoder`], which expose exactly
//! what a single-shot round trip needs: build an encoder, feed it the payload,
//! finish it, and decompress a whole stream. [`BrotliBackend`] is the
//! production implementation; tests substitute their own.

mod rust_brotli;

pub use rust_brotli::{engine_version, BrotliBackend, BrotliEncoder};

use crate::error::BackendError;

/// Encoder mode hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No assumptions about the input.
    #[default]
    Generic,
    /// UTF-8 formatted text.
    Text,
    /// WOFF 2.0 font data.
    Font,
}

/// Fully resolved parameters handed to [`Backend::encoder`].
///
/// Unlike [`CompressionOptions`](crate::options::CompressionOptions) the window
/// exponent is always concrete here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderParams {
    /// Encoder mode hint
    pub mode: Mode,
    /// Quality level, `0..=11`
    pub quality: u32,
    /// Sliding window exponent, `10..=24`
    pub lgwin: u32,
    /// Input block exponent, `0` or `16..=24`
    pub lgblock: u32,
    /// Total number of bytes that will be fed to the encoder
    pub size_hint: usize,
}

/// A single-use encoder instance.
pub trait Encoder {
    /// Feeds `input` to the encoder and returns whatever output is ready.
    ///
    /// Implementations may buffer internally and return an empty vector.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the encoder reaches an invalid state.
    fn process(&mut self, input: &[u8]) -> Result<Vec<u8>, BackendError>;

    /// Flushes all remaining output and terminates the stream.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the stream cannot be finalized.
    fn finish(self) -> Result<Vec<u8>, BackendError>;
}

/// A compression engine able to build encoders and decode whole streams.
pub trait Backend {
    /// Encoder type produced by [`Backend::encoder`].
    type Encoder: Encoder;

    /// Creates a fresh encoder configured with `params`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Options`] if the engine rejects the parameters.
    fn encoder(&self, params: &EncoderParams) -> Result<Self::Encoder, BackendError>;

    /// Decompresses a complete stream.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Format`] for malformed, truncated or
    /// foreign-format input.
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, BackendError>;
}
