//! Configuration types for the Brotli CLI.

use std::path::PathBuf;

use brotli_core::options::{DEFAULT_LGBLOCK, DEFAULT_QUALITY};
use brotli_core::Mode;

/// Represents the two operations the utility can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Compress input data
    Compress,
    /// Decompress input data
    Decompress,
}

/// Configuration for a single CLI invocation
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Operation mode
    pub mode: OperationMode,
    /// Output file path
    pub output: PathBuf,
    /// Compression quality (0-11)
    pub quality: u32,
    /// Window size exponent, derived from the input size when `None`
    pub lgwin: Option<u32>,
    /// Input block size exponent (0 or 16-24)
    pub lgblock: u32,
    /// Encoder mode hint
    pub encoder_mode: Mode,
    /// Prefix compressed output with the legacy length header
    pub backward: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            mode: OperationMode::Compress,
            output: PathBuf::new(),
            quality: DEFAULT_QUALITY,
            lgwin: None,
            lgblock: DEFAULT_LGBLOCK,
            encoder_mode: Mode::Generic,
            backward: false,
        }
    }
}
