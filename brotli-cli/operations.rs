//! Compression and decompression operations for the Brotli CLI.

use std::path::Path;

use brotli_core::{
    pipeline::{compress, decompress},
    Backend, CompressionOptions, Error as CoreError,
};

use crate::config::CliConfig;
use crate::error::{Error, Result};

/// Builds core compression options from the CLI configuration.
pub fn compression_options(config: &CliConfig) -> CompressionOptions {
    CompressionOptions::default()
        .with_quality(config.quality)
        .with_lgwin(config.lgwin)
        .with_lgblock(config.lgblock)
        .with_mode(config.encoder_mode)
        .with_legacy_header(config.backward)
}

/// Maps a core failure to a CLI error for `path`.
pub(crate) fn map_core_error(err: CoreError, path: &Path) -> Error {
    match err {
        CoreError::Compression(backend) => Error::Compression {
            path: path.to_path_buf(),
            message: backend.message().to_string(),
        },
        CoreError::Decode(backend) => Error::Decompression {
            path: path.to_path_buf(),
            message: backend.message().to_string(),
        },
        CoreError::InvalidQuality(_)
        | CoreError::InvalidWindow(_)
        | CoreError::InvalidBlock(_)
        | CoreError::InvalidHeaderLength { .. } => Error::InvalidOption {
            message: err.to_string(),
        },
    }
}

/// Compresses `data` read from `input_path` according to `config`.
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] if a parameter is out of range, or
/// [`Error::Compression`] if the backend fails.
pub fn compress_bytes<B: Backend + ?Sized>(
    backend: &B,
    data: &[u8],
    input_path: &Path,
    config: &CliConfig,
) -> Result<Vec<u8>> {
    let options = compression_options(config);
    compress(backend, data, &options).map_err(|err| map_core_error(err, input_path))
}

/// Decompresses `data` read from `input_path`, with or without a legacy header.
///
/// # Errors
///
/// Returns [`Error::Decompression`] if the data is not a valid stream.
pub fn decompress_bytes<B: Backend + ?Sized>(
    backend: &B,
    data: &[u8],
    input_path: &Path,
) -> Result<Vec<u8>> {
    decompress(backend, data).map_err(|err| map_core_error(err, input_path))
}
