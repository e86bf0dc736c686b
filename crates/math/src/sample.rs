//! Sampling: centered-binomial noise ([`cbd16`]) and rejection-uniform
//! ([`reject_uniform`]).

use crate::{N, NOISE_BYTES, Q, reduce::csubq};

/// SHAKE-128 output rate in bytes (one Keccak-f[1600] squeeze).
pub const SHAKE128_RATE: usize = 168;

/// Centered binomial distribution with k = 16: 4096 random bytes -> 1024
/// coefficients in `{-16, ..., 16}`, stored reduced mod q.
///
/// Every coefficient consumes one little-endian `u32`; the popcounts of its
/// low and high halves are subtracted. No branch depends on `buf`.
pub fn cbd16(r: &mut [u16; N], buf: &[u8; NOISE_BYTES]) {
    for (c, chunk) in r.iter_mut().zip(buf.chunks_exact(4)) {
        let t = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let mut d = 0u32;
        for j in 0..8 {
            d += (t >> j) & 0x0101_0101;
        }
        let a = ((d >> 8) & 0xff) + (d & 0xff);
        let b = (d >> 24) + ((d >> 16) & 0xff);
        *c = csubq((a + Q as u32 - b) as u16);
    }
}

/// Rejection-sample N uniformly random coefficients in `[0, q)`.
///
/// `fill` supplies successive blocks of XOF output; each 16-bit
/// little-endian word is masked to 14 bits and kept iff it is below q.
/// Returns the number of coefficients written (always N).
pub fn reject_uniform(r: &mut [u16; N], mut fill: impl FnMut(&mut [u8])) -> usize {
    let mut ctr = 0;
    let mut buf = [0u8; SHAKE128_RATE];

    while ctr < N {
        fill(&mut buf);
        for pair in buf.chunks_exact(2) {
            if ctr == N {
                break;
            }
            let val = u16::from_le_bytes([pair[0], pair[1]]) & 0x3fff;
            if val < Q {
                r[ctr] = val;
                ctr += 1;
            }
        }
    }
    ctr
}
