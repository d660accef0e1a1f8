//! Configuration builder for Brotli compression operations.

use crate::backend::{EncoderParams, Mode};
use crate::error::{Error, Result};
use crate::window::{estimate_lgwin, MAX_WINDOW_BITS, MIN_WINDOW_BITS};

/// Quality used when the caller does not choose one.
pub const DEFAULT_QUALITY: u32 = 9;

/// Highest (slowest, densest) quality level.
pub const MAX_QUALITY: u32 = 11;

/// Block exponent meaning "derive from quality".
pub const DEFAULT_LGBLOCK: u32 = 0;

/// Smallest explicit block-size exponent.
pub const MIN_LGBLOCK: u32 = 16;

/// Largest explicit block-size exponent.
pub const MAX_LGBLOCK: u32 = 24;

/// Parameters for a single compression call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionOptions {
    quality: u32,
    lgwin: Option<u32>,
    lgblock: u32,
    mode: Mode,
    legacy_header: bool,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            lgwin: None,
            lgblock: DEFAULT_LGBLOCK,
            mode: Mode::Generic,
            legacy_header: false,
        }
    }
}

impl CompressionOptions {
    /// Sets the compression quality.
    ///
    /// - `0-3`: fast, lower ratios
    /// - `4-9`: balanced (`9` is the default)
    /// - `10-11`: slow, best ratios
    #[must_use]
    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = quality;
        self
    }

    /// Sets the base 2 logarithm of the sliding window size.
    ///
    /// If `None` (default), the window is derived from the input length so small
    /// inputs don't pay for a large window.
    #[must_use]
    pub fn with_lgwin(mut self, lgwin: Option<u32>) -> Self {
        self.lgwin = lgwin;
        self
    }

    /// Sets the base 2 logarithm of the maximum input block size.
    ///
    /// `0` (default) lets the encoder pick a value based on quality.
    #[must_use]
    pub fn with_lgblock(mut self, lgblock: u32) -> Self {
        self.lgblock = lgblock;
        self
    }

    /// Sets the encoder mode hint.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Prefixes the output with the 16-byte legacy length header.
    #[must_use]
    pub fn with_legacy_header(mut self, enabled: bool) -> Self {
        self.legacy_header = enabled;
        self
    }

    /// Returns the configured quality.
    pub fn quality(&self) -> u32 {
        self.quality
    }

    /// Returns the explicit window exponent, if one was set.
    pub fn lgwin(&self) -> Option<u32> {
        self.lgwin
    }

    /// Returns the configured block exponent.
    pub fn lgblock(&self) -> u32 {
        self.lgblock
    }

    /// Returns the encoder mode hint.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` if the legacy header will be emitted.
    pub fn legacy_header(&self) -> bool {
        self.legacy_header
    }

    /// Checks every parameter against the range the encoder accepts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuality`], [`Error::InvalidWindow`] or
    /// [`Error::InvalidBlock`] for the first out-of-range parameter.
    pub fn validate(&self) -> Result<()> {
        if self.quality > MAX_QUALITY {
            return Err(Error::InvalidQuality(self.quality));
        }
        if let Some(lgwin) = self.lgwin {
            if !(MIN_WINDOW_BITS..=MAX_WINDOW_BITS).contains(&lgwin) {
                return Err(Error::InvalidWindow(lgwin));
            }
        }
        if self.lgblock != DEFAULT_LGBLOCK && !(MIN_LGBLOCK..=MAX_LGBLOCK).contains(&self.lgblock)
        {
            return Err(Error::InvalidBlock(self.lgblock));
        }
        Ok(())
    }

    /// Resolves the encoder parameters for a payload of `datalen` bytes.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any parameter is out of range.
    pub fn encoder_params(&self, datalen: usize) -> Result<EncoderParams> {
        self.validate()?;

        let lgwin = match self.lgwin {
            Some(lgwin) => lgwin,
            None => {
                let derived = estimate_lgwin(u64::try_from(datalen).unwrap_or(u64::MAX));
                tracing::debug!(datalen, lgwin = derived, "derived window size from input length");
                derived
            }
        };

        Ok(EncoderParams {
            mode: self.mode,
            quality: self.quality,
            lgwin,
            lgblock: self.lgblock,
            size_hint: datalen,
        })
    }
}
