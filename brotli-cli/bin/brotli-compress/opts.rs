//! Command line argument parsing for brotli-compress

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{ArgGroup, Parser};

use brotli_cli::{CliConfig, OperationMode};
use brotli_core::options::{DEFAULT_LGBLOCK, DEFAULT_QUALITY, MAX_LGBLOCK, MIN_LGBLOCK};
use brotli_core::Mode;

/// Single-dash long options accepted for compatibility with older build scripts.
const LEGACY_OPTIONS: [(&str, &str); 2] = [("-lw", "--lgwin"), ("-lb", "--lgblock")];

/// Version of the compression engine, printed by `-v/--version`.
fn engine_version_string() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(brotli_core::engine_version).as_str()
}

/// Compress or decompress a file with Brotli
#[derive(Parser, Debug)]
#[command(
    name = "brotli-compress",
    version = engine_version_string(),
    disable_version_flag = true,
    about = "Compress or decompress a single file with Brotli",
    long_about = "brotli-compress reads one input file and writes its Brotli-compressed \
                 or decompressed form to the output file. With --backward the compressed \
                 stream is prefixed by a 16-byte little-endian length header. Decompression \
                 accepts both plain streams and streams carrying that header.",
    group(ArgGroup::new("operation").required(true).args(["compress", "decompress"]))
)]
pub struct BrotliOpts {
    /// Input file
    #[arg(value_name = "input_file")]
    pub input: String,

    /// Compress the input file
    #[arg(short = 'e', long = "compress")]
    pub compress: bool,

    /// Decompress the input file
    #[arg(short = 'd', long = "decompress")]
    pub decompress: bool,

    /// Output file
    #[arg(short = 'o', long = "output", value_name = "output_file", required = true)]
    pub output: PathBuf,

    /// Compression quality, 0 (fastest) to 11 (densest)
    #[arg(
        short = 'q',
        long = "quality",
        value_parser = clap::value_parser!(u32).range(0..=11),
        default_value_t = DEFAULT_QUALITY
    )]
    pub quality: u32,

    /// Window gap (accepted for compatibility, has no effect)
    #[arg(
        short = 'g',
        long = "gap",
        value_parser = clap::value_parser!(u32).range(1..=16),
        default_value_t = 1
    )]
    pub gap: u32,

    /// Base 2 logarithm of the sliding window size (10-24), derived from the input when omitted
    #[arg(long = "lgwin", value_parser = clap::value_parser!(u32).range(10..=24))]
    pub lgwin: Option<u32>,

    /// Base 2 logarithm of the maximum input block size (0 or 16-24)
    #[arg(long = "lgblock", value_parser = parse_lgblock, default_value_t = DEFAULT_LGBLOCK)]
    pub lgblock: u32,

    /// Prefix the compressed stream with a 16-byte length header
    #[arg(short = 'b', long = "backward")]
    pub backward: bool,

    /// Encoder mode hint: generic, text or font
    #[arg(long = "mode", value_name = "MODE")]
    pub mode: Option<String>,

    /// Print the compression engine version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    _version: Option<bool>,
}

/// Parses `--lgblock`, which is either `0` or inside `16..=24`.
fn parse_lgblock(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("invalid block size exponent: {s}"))?;

    if value == DEFAULT_LGBLOCK || (MIN_LGBLOCK..=MAX_LGBLOCK).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not 0 or in {MIN_LGBLOCK}-{MAX_LGBLOCK}"))
    }
}

/// Rewrites `-lw`/`-lb` (and their attached-value forms) into long options.
///
/// Stops at `--` so file names after it are never touched.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for arg in args {
        let arg: OsString = arg.into();

        if passthrough {
            normalized.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                return None;
            }
            LEGACY_OPTIONS.iter().find_map(|&(legacy, long)| {
                let rest = s.strip_prefix(legacy)?;
                if rest.is_empty() {
                    Some(OsString::from(long))
                } else {
                    let value = rest.strip_prefix('=').unwrap_or(rest);
                    Some(OsString::from(format!("{long}={value}")))
                }
            })
        });

        if arg.to_str() == Some("--") {
            passthrough = true;
        }
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}

impl BrotliOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Self::try_parse_legacy(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    /// Parse `args` after rewriting legacy single-dash options
    pub fn try_parse_legacy<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_legacy_args(args))
    }

    /// Determine operation mode based on flags
    pub fn operation_mode(&self) -> OperationMode {
        if self.decompress {
            OperationMode::Decompress
        } else {
            OperationMode::Compress
        }
    }

    /// Parse the encoder mode from the mode string
    pub fn encoder_mode(&self) -> Result<Mode, Box<dyn std::error::Error>> {
        match self.mode.as_deref() {
            Some("generic") | None => Ok(Mode::Generic),
            Some("text") => Ok(Mode::Text),
            Some("font") => Ok(Mode::Font),
            Some(invalid) => Err(format!("{invalid}: Unknown encoder mode").into()),
        }
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> Result<CliConfig, Box<dyn std::error::Error>> {
        tracing::debug!(gap = self.gap, "window gap has no effect");

        Ok(CliConfig {
            mode: self.operation_mode(),
            output: self.output.clone(),
            quality: self.quality,
            lgwin: self.lgwin,
            lgblock: self.lgblock,
            encoder_mode: self.encoder_mode()?,
            backward: self.backward,
        })
    }
}
