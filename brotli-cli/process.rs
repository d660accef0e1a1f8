//! High-level file processing and CLI orchestration.

use std::io;
use std::path::Path;

use brotli_core::BrotliBackend;

use crate::config::{CliConfig, OperationMode};
use crate::error::Result;
use crate::io::{read_input, write_output};
use crate::operations::{compress_bytes, decompress_bytes};

/// Processes a single file according to the CLI configuration.
///
/// 1. Reads the whole input file
/// 2. Compresses or decompresses it in memory
/// 3. Writes the result to `config.output`
///
/// The output file is only created once the operation has succeeded.
///
/// # Errors
///
/// Returns an error if the input is missing or unreadable, a parameter is
/// out of range, the backend fails, or the output cannot be written.
pub fn process_file(input_path: &Path, config: &CliConfig) -> Result<()> {
    let input = read_input(input_path)?;

    let output = match config.mode {
        OperationMode::Compress => compress_bytes(&BrotliBackend, &input, input_path, config)?,
        OperationMode::Decompress => decompress_bytes(&BrotliBackend, &input, input_path)?,
    };

    write_output(&config.output, &output)?;

    tracing::debug!(
        mode = ?config.mode,
        input = %input_path.display(),
        output = %config.output.display(),
        bytes_in = input.len(),
        bytes_out = output.len(),
        "processed file"
    );

    Ok(())
}

/// Runs the CLI command for one input file.
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping the CLI [`Error`](crate::Error); use
/// [`format_error_for_stderr`](crate::format_error_for_stderr) to render it.
pub fn run_cli(input: &str, config: &CliConfig, program: &str) -> io::Result<()> {
    tracing::trace!(program, input, "starting");
    process_file(Path::new(input), config).map_err(io::Error::from)
}
