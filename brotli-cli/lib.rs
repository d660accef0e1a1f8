//! Shared functionality for the `brotli-compress` command-line tool.
//!
//! This crate ties command-line configuration to the orchestrators in
//! [`brotli_core`]: it reads the input file, runs compression or
//! decompression and writes the result atomically to the output path.

mod config;
mod error;
mod io;
mod operations;
mod process;

pub use config::{CliConfig, OperationMode};
pub use error::{format_error_for_stderr, Error, Result};
pub use io::{read_input, write_output};
pub use operations::{compress_bytes, compression_options, decompress_bytes};
pub use process::{process_file, run_cli};
