//! Brotli compression utility
//!
//! Compresses or decompresses a single file, optionally framing the
//! compressed stream with the 16-byte legacy length header.

use std::process;

use tracing_subscriber::EnvFilter;

mod opts;

use opts::BrotliOpts;

use brotli_cli::{format_error_for_stderr, run_cli};

const PROGRAM_NAME: &str = "brotli-compress";

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = BrotliOpts::parse();

    let config = match opts.config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = run_cli(&opts.input, &config, PROGRAM_NAME) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(1);
    }

    Ok(())
}
