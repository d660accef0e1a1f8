//! # brotli-core
//!
//! Single-shot Brotli compression and decompression with support for the
//! legacy 16-byte length header used by older Tianocore tooling.
//!
//! The orchestrators in [`pipeline`] validate parameters, derive the window
//! size from the payload, frame or unframe the legacy header and drive a
//! pluggable [`Backend`]. [`BrotliBackend`] is the default engine.
//!
//! ```rust
//! use brotli_core::{compress, decompress, BrotliBackend, CompressionOptions};
//!
//! let data = b"AB".repeat(500);
//! let options = CompressionOptions::default().with_legacy_header(true);
//! let compressed = compress(&BrotliBackend, &data, &options)?;
//! assert_eq!(decompress(&BrotliBackend, &compressed)?, data);
//! # Ok::<(), brotli_core::Error>(())
//! ```

pub mod backend;
pub mod error;
pub mod header;
pub mod options;
pub mod pipeline;
pub mod window;

pub use backend::{engine_version, Backend, BrotliBackend, Encoder, EncoderParams, Mode};
pub use error::{BackendError, Error, Result};
pub use header::{decode_header, encode_header, LEGACY_HEADER_SIZE};
pub use options::CompressionOptions;
pub use pipeline::{compress, decompress};
pub use window::estimate_lgwin;
