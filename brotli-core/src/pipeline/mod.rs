//! Single-shot compression and decompression orchestrators.

use crate::backend::{Backend, Encoder};
use crate::error::{Error, Result};
use crate::header::{encode_payload_header, split_header, LEGACY_HEADER_SIZE};
use crate::options::CompressionOptions;


/// Compresses `data` in one pass using the provided backend and options.
///
/// # Parameters
///
/// * `backend` - Compression engine used to build the encoder
/// * `data` - Complete uncompressed payload
/// * `options` - Compression configuration options [`CompressionOptions`]
///
/// # Returns
///
/// The compressed stream, prefixed with the 16-byte legacy header when
/// [`CompressionOptions::with_legacy_header`] was enabled.
///
/// # Errors
///
/// This function will return an error if:
///
/// - Quality, window or block exponent is out of range (the backend is not touched)
/// - The backend fails to build, feed or finish the encoder
pub fn compress<B>(backend: &B, data: &[u8], options: &CompressionOptions) -> Result<Vec<u8>>
where
    B: Backend + ?Sized,
{
    let params = options.encoder_params(data.len())?;

    let mut encoder = backend.encoder(&params).map_err(Error::Compression)?;
    let body = encoder.process(data).map_err(Error::Compression)?;
    let tail = encoder.finish().map_err(Error::Compression)?;

    let header_len = if options.legacy_header() {
        LEGACY_HEADER_SIZE
    } else {
        0
    };
    let mut output = Vec::with_capacity(header_len + body.len() + tail.len());
    if options.legacy_header() {
        output.extend_from_slice(&encode_payload_header(data));
    }
    output.extend_from_slice(&body);
    output.extend_from_slice(&tail);

    tracing::debug!(
        input = data.len(),
        output = output.len(),
        legacy_header = options.legacy_header(),
        "compressed payload"
    );
    Ok(output)
}

/// Decompresses `data`, falling back to the legacy header layout on failure.
///
/// The input is first decoded as a plain stream. If that fails with a format
/// error and the input is longer than [`LEGACY_HEADER_SIZE`], the first 16
/// bytes are dropped and decoding is retried exactly once. The declared length
/// in the dropped header is not checked against the result.
///
/// # Errors
///
/// Returns [`Error::Decode`] carrying the error of the *first* attempt if the
/// retry also fails or is not possible.
pub fn decompress<B>(backend: &B, data: &[u8]) -> Result<Vec<u8>>
where
    B: Backend + ?Sized,
{
    let err = match backend.decompress(data) {
        Ok(output) => return Ok(output),
        Err(err) => err,
    };

    if !err.is_format() {
        return Err(Error::Decode(err));
    }

    let Some((declared_len, body)) = split_header(data) else {
        tracing::debug!(len = data.len(), "input too short for a legacy header");
        return Err(Error::Decode(err));
    };

    tracing::debug!(
        declared_len,
        error = %err,
        "plain decode failed, retrying without legacy header"
    );

    match backend.decompress(body) {
        Ok(output) => {
            if u128::try_from(output.len()).ok() != Some(declared_len) {
                tracing::debug!(
                    declared_len,
                    actual_len = output.len(),
                    "legacy header length does not match decoded size"
                );
            }
            Ok(output)
        }
        Err(retry_err) => {
            tracing::debug!(error = %retry_err, "legacy retry failed");
            Err(Error::Decode(err))
        }
    }
}
