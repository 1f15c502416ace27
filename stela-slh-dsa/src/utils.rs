//! Utility functions for SLH-DSA.
//!
//! Bit-level encodings from FIPS 205, Section 4.4.

/// Convert a big-endian byte string of at most 8 bytes to an integer.
///
/// FIPS 205, Algorithm 1: toInt(X, n)
#[must_use]
pub fn to_int(x: &[u8]) -> u64 {
    debug_assert!(x.len() <= 8);
    x.iter().fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Extract base-2^b digits from a byte string, most significant first.
///
/// FIPS 205, Algorithm 4: base_2b(X, b, out_len), with out_len = `out.len()`.
/// `x` must hold at least `ceil(out.len() * b / 8)` bytes and `b` must be
/// in `1..=24`.
pub fn base_2b(x: &[u8], b: u32, out: &mut [u32]) {
    debug_assert!(b > 0 && b <= 24);
    debug_assert!(x.len() * 8 >= out.len() * b as usize);

    let mask = (1u32 << b) - 1;
    let mut bytes = x.iter();
    let mut total = 0u32;
    let mut bits = 0u32;

    for digit in out.iter_mut() {
        while bits < b {
            // Bits above 32 are shifted out; only the low `b + 8` matter.
            total = (total << 8) | u32::from(*bytes.next().unwrap_or(&0));
            bits += 8;
        }
        bits -= b;
        *digit = (total >> bits) & mask;
    }
}
