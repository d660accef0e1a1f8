//! Helpers for the legacy length header.
//!
//! Streams produced by the previous Tianocore Brotli tool start with the
//! uncompressed payload length stored as a 16-byte little-endian integer.
//! Modern streams carry no header at all and there is no version marker to
//! tell the two apart.

use crate::error::{Error, Result};

/// Size of the legacy header in bytes.
pub const LEGACY_HEADER_SIZE: usize = 16;

/// Encodes `original_length` as a 16-byte little-endian header.
pub fn encode_header(original_length: u128) -> [u8; LEGACY_HEADER_SIZE] {
    original_length.to_le_bytes()
}

/// Encodes the length of `payload` as a legacy header.
///
/// Lengths that do not fit a `u128` saturate instead of wrapping.
pub fn encode_payload_header(payload: &[u8]) -> [u8; LEGACY_HEADER_SIZE] {
    encode_header(u128::try_from(payload.len()).unwrap_or(u128::MAX))
}

/// Decodes a legacy header.
///
/// # Errors
///
/// Returns [`Error::InvalidHeaderLength`] unless `bytes` is exactly
/// [`LEGACY_HEADER_SIZE`] bytes long.
pub fn decode_header(bytes: &[u8]) -> Result<u128> {
    let raw: [u8; LEGACY_HEADER_SIZE] = bytes
        .try_into()
        .map_err(|_| Error::InvalidHeaderLength { len: bytes.len() })?;
    Ok(u128::from_le_bytes(raw))
}

/// Splits `data` into a declared length and the body that follows the header.
///
/// Returns `None` when `data` is too short to hold a header followed by at
/// least one byte of body.
pub fn split_header(data: &[u8]) -> Option<(u128, &[u8])> {
    if data.len() <= LEGACY_HEADER_SIZE {
        return None;
    }
    let (header, body) = data.split_at(LEGACY_HEADER_SIZE);
    decode_header(header).ok().map(|len| (len, body))
}
