//! [`Backend`] implementation on top of the pure-Rust `brotli` crate.

use std::fmt;
use std::io::Write;

use brotli::enc::backward_references::{BrotliEncoderMode, BrotliEncoderParams};
use brotli::CompressorWriter;
use brotli_decompressor::{BrotliDecompressStream, BrotliResult, BrotliState, StandardAlloc};

use super::{Backend, Encoder, EncoderParams, Mode};
use crate::error::BackendError;

/// Internal buffer size of the streaming encoder.
const ENCODER_BUFFER_SIZE: usize = 64 * 1024;

/// Output chunk size of the streaming decoder.
const DECODER_CHUNK_SIZE: usize = 64 * 1024;

/// Returns the version of the compression engine as `major.minor.patch`.
pub fn engine_version() -> String {
    format_version(brotli::enc::encode::BrotliEncoderVersion())
}

/// Unpacks a version laid out as `major << 24 | minor << 12 | patch`.
fn format_version(packed: u32) -> String {
    format!(
        "{}.{}.{}",
        packed >> 24,
        (packed >> 12) & 0xfff,
        packed & 0xfff
    )
}

/// The default compression engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrotliBackend;

/// Encoder produced by [`BrotliBackend`].
pub struct BrotliEncoder {
    writer: CompressorWriter<Vec<u8>>,
}

impl fmt::Debug for BrotliEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrotliEncoder")
            .field("buffered", &self.writer.get_ref().len())
            .finish_non_exhaustive()
    }
}

fn encoder_mode(mode: Mode) -> BrotliEncoderMode {
    match mode {
        Mode::Generic => BrotliEncoderMode::BROTLI_MODE_GENERIC,
        Mode::Text => BrotliEncoderMode::BROTLI_MODE_TEXT,
        Mode::Font => BrotliEncoderMode::BROTLI_MODE_FONT,
    }
}

fn to_i32(name: &str, value: u32) -> Result<i32, BackendError> {
    i32::try_from(value).map_err(|_| BackendError::Options(format!("{name} {value} out of range")))
}

fn engine_params(params: &EncoderParams) -> Result<BrotliEncoderParams, BackendError> {
    Ok(BrotliEncoderParams {
        mode: encoder_mode(params.mode),
        quality: to_i32("quality", params.quality)?,
        lgwin: to_i32("lgwin", params.lgwin)?,
        lgblock: to_i32("lgblock", params.lgblock)?,
        size_hint: params.size_hint,
        ..BrotliEncoderParams::default()
    })
}

impl Encoder for BrotliEncoder {
    fn process(&mut self, input: &[u8]) -> Result<Vec<u8>, BackendError> {
        self.writer
            .write_all(input)
            .map_err(|e| BackendError::Encode(e.to_string()))?;
        Ok(std::mem::take(self.writer.get_mut()))
    }

    fn finish(self) -> Result<Vec<u8>, BackendError> {
        // `into_inner` writes the last meta-block before handing back the sink.
        Ok(self.writer.into_inner())
    }
}

impl Backend for BrotliBackend {
    type Encoder = BrotliEncoder;

    fn encoder(&self, params: &EncoderParams) -> Result<Self::Encoder, BackendError> {
        tracing::debug!(
            quality = params.quality,
            lgwin = params.lgwin,
            lgblock = params.lgblock,
            mode = ?params.mode,
            "creating brotli encoder"
        );
        let engine = engine_params(params)?;
        Ok(BrotliEncoder {
            writer: CompressorWriter::with_params(Vec::new(), ENCODER_BUFFER_SIZE, &engine),
        })
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, BackendError> {
        let mut state = BrotliState::new(
            StandardAlloc::default(),
            StandardAlloc::default(),
            StandardAlloc::default(),
        );
        let mut output = Vec::with_capacity(data.len().saturating_mul(4));
        let mut chunk = vec![0u8; DECODER_CHUNK_SIZE];
        let mut available_in = data.len();
        let mut input_offset = 0;
        let mut total_out = 0;

        loop {
            let mut available_out = chunk.len();
            let mut output_offset = 0;
            let result = BrotliDecompressStream(
                &mut available_in,
                &mut input_offset,
                data,
                &mut available_out,
                &mut output_offset,
                &mut chunk,
                &mut total_out,
                &mut state,
            );
            output.extend_from_slice(&chunk[..output_offset]);

            match result {
                BrotliResult::ResultSuccess => break,
                BrotliResult::NeedsMoreOutput => {}
                BrotliResult::NeedsMoreInput => {
                    return Err(BackendError::Format(
                        "incomplete compressed stream".to_string(),
                    ))
                }
                BrotliResult::ResultFailure => {
                    return Err(BackendError::Format("invalid compressed stream".to_string()))
                }
            }
        }

        // The decoder stops at the end of the first stream.
        if available_in != 0 {
            return Err(BackendError::Format(
                "unused data after end of stream".to_string(),
            ));
        }
        Ok(output)
    }
}
