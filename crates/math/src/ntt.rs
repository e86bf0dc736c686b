//! Negacyclic Number-Theoretic Transform over `Z_q[X]/(X^{1024} + 1)`.
//!
//! - `forward_ntt`: Cooley-Tukey, standard order -> bit-reversed order.
//! - `inverse_ntt`: Gentleman-Sande, bit-reversed order -> standard order,
//!   including the final scaling by `N^{-1}`.
//!
//! After the forward transform, ring multiplication is the coefficient-wise
//! product (the transform splits all the way down to linear factors).

use crate::{
    N, Q,
    reduce::{fqadd, fqmul, fqsub, pow_mod},
};

/// Primitive 2048-th root of unity modulo q (`PSI^1024 = -1`).
pub const PSI: u16 = 7;

/// `N^{-1} mod q`.
pub const N_INV: u16 = pow_mod(N as u16, Q as u32 - 2);

const LOG_N: u32 = N.trailing_zeros();

const fn bitrev(x: usize) -> usize {
    x.reverse_bits() >> (usize::BITS - LOG_N)
}

/// Twiddle factors `ZETAS[k] = PSI^{BitRev_10(k)} (mod q)`.
///
/// Entry 0 is unused; layer `len` reads the block range
/// `N / (2 len) .. N / len`.
pub const ZETAS: [u16; N] = {
    let mut zetas = [0u16; N];
    let mut k = 0;
    while k < N {
        zetas[k] = pow_mod(PSI, bitrev(k) as u32);
        k += 1;
    }
    zetas
};

/// Inverse twiddles `ZETAS_INV[k] = PSI^{-BitRev_10(k)} (mod q)`.
pub const ZETAS_INV: [u16; N] = {
    let mut zetas = [0u16; N];
    let mut k = 0;
    while k < N {
        // PSI has order 2N
        zetas[k] = pow_mod(PSI, (2 * N - bitrev(k)) as u32);
        k += 1;
    }
    zetas
};

/// Forward NTT (in-place). Standard order in, bit-reversed order out.
pub fn forward_ntt(r: &mut [u16; N]) {
    let mut k: usize = 1;
    let mut len = N / 2;
    while len >= 1 {
        let mut start = 0;
        while start < N {
            let zeta = ZETAS[k];
            k += 1;
            let (lo, hi) = r[start..start + 2 * len].split_at_mut(len);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = fqmul(zeta, *b);
                *b = fqsub(*a, t);
                *a = fqadd(*a, t);
            }
            start += 2 * len;
        }
        len >>= 1;
    }
}

/// Inverse NTT (in-place). Bit-reversed order in, standard order out.
pub fn inverse_ntt(r: &mut [u16; N]) {
    let mut len = 1;
    while len < N {
        let first = N / (2 * len);
        let mut start = 0;
        while start < N {
            let zeta = ZETAS_INV[first + start / (2 * len)];
            let (lo, hi) = r[start..start + 2 * len].split_at_mut(len);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = *a;
                *a = fqadd(t, *b);
                *b = fqmul(zeta, fqsub(t, *b));
            }
            start += 2 * len;
        }
        len <<= 1;
    }
    for c in r.iter_mut() {
        *c = fqmul(*c, N_INV);
    }
}
