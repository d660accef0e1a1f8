//! Sliding-window size heuristics.

/// Smallest sliding-window exponent accepted by the encoder.
pub const MIN_WINDOW_BITS: u32 = 10;

/// Largest sliding-window exponent accepted by the encoder (non large-window mode).
pub const MAX_WINDOW_BITS: u32 = 24;

/// Window exponent the encoder uses when nothing else is specified.
pub const DEFAULT_LGWIN: u32 = 22;

/// Bytes of the window reserved by the format and unusable for back-references.
pub const WINDOW_GAP: u64 = 16;

/// Largest backward distance reachable with a window of `lgwin` bits.
const fn max_backward_limit(lgwin: u32) -> u64 {
    (1_u64 << lgwin) - WINDOW_GAP
}

/// Returns the smallest window exponent whose backward limit covers `datalen` bytes.
///
/// The result is always inside `MIN_WINDOW_BITS..=MAX_WINDOW_BITS`; inputs larger
/// than a 24-bit window can address still get 24.
pub fn estimate_lgwin(datalen: u64) -> u32 {
    let mut lgwin = MIN_WINDOW_BITS;
    while max_backward_limit(lgwin) < datalen && lgwin < MAX_WINDOW_BITS {
        lgwin += 1;
    }
    lgwin
}
