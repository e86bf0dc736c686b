//! Barrett reduction and branch-free conditional subtraction for the
//! NewHope field (q = 12289).
//!
//! Coefficients are kept fully reduced in `[0, q)` as `u16`; products are
//! formed in `u32` and reduced with a single Barrett step.

use crate::Q;

const Q32: u32 = Q as u32;

/// `floor(2^32 / q)`, the Barrett multiplier.
const BARRETT_M: u64 = (1u64 << 32) / Q32 as u64;

/// Conditionally subtract q: maps `a in [0, 2q)` to `a mod q` without
/// branching.
#[inline]
#[must_use]
pub const fn csubq(a: u16) -> u16 {
    let t = a.wrapping_sub(Q) as i16;
    (t + ((t >> 15) & Q as i16)) as u16
}

/// Barrett reduction: any `u32` to its representative in `[0, q)`.
#[inline]
#[must_use]
pub const fn barrett_reduce(a: u32) -> u16 {
    let t = ((a as u64 * BARRETT_M) >> 32) as u32;
    // a - t*q lies in [0, 2q)
    csubq((a - t * Q32) as u16)
}

/// Modular addition of two reduced coefficients.
#[inline]
#[must_use]
pub const fn fqadd(a: u16, b: u16) -> u16 {
    csubq(a + b)
}

/// Modular subtraction of two reduced coefficients.
#[inline]
#[must_use]
pub const fn fqsub(a: u16, b: u16) -> u16 {
    csubq(a + Q - b)
}

/// Modular multiplication of two reduced coefficients.
#[inline]
#[must_use]
pub const fn fqmul(a: u16, b: u16) -> u16 {
    barrett_reduce(a as u32 * b as u32)
}

/// `base^exp mod q`, usable in constant contexts for table generation.
#[must_use]
pub const fn pow_mod(base: u16, mut exp: u32) -> u16 {
    let mut result: u32 = 1;
    let mut b = base as u32 % Q32;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b % Q32;
        }
        exp >>= 1;
        b = b * b % Q32;
    }
    result as u16
}
