//! Error reconciliation (Peikert-style, decoded in the `D~4` lattice).
//!
//! Coefficients are handled in 256 groups of four,
//! `(v[i], v[256+i], v[512+i], v[768+i])`. One random bit per group dithers
//! the rounding point chosen by [`helprec`]; the resulting 2-bit helper
//! values let [`reconcile`] extract the same key bit from any `v'` close to
//! `v`.
//!
//! All arithmetic is branch-free `i32`; the divisions by q, 4q and 8q are
//! done with multiply-and-shift followed by a sign-mask correction.

use zeroize::Zeroize;

use crate::{N, Polynomial, Q, RECBYTES, SYMBYTES};

const Q32: i32 = Q as i32;
const GROUPS: usize = N / 4;

/// Reconciliation helper data: one value in `[0, 3]` per coefficient.
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Reconciliation(pub(crate) [u8; N]);

impl Reconciliation {
    /// Build from raw helper values, rejecting any value above 3.
    #[must_use]
    pub fn from_values(values: [u8; N]) -> Option<Self> {
        values.iter().all(|&c| c <= 3).then_some(Self(values))
    }

    #[must_use]
    pub const fn values(&self) -> &[u8; N] {
        &self.0
    }

    /// Pack into [`RECBYTES`] bytes.
    pub fn to_bytes(&self, r: &mut [u8]) {
        encode_rec(r, &self.0);
    }

    /// Unpack from [`RECBYTES`] bytes. Every byte string is valid.
    #[must_use]
    pub fn from_bytes(a: &[u8]) -> Self {
        let mut c = [0u8; N];
        decode_rec(&mut c, a);
        Self(c)
    }
}

impl core::fmt::Debug for Reconciliation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Reconciliation")
            .field("values[..4]", &&self.0[..4])
            .finish_non_exhaustive()
    }
}

/// Pack 2-bit values, four per byte, low bits first.
pub fn encode_rec(r: &mut [u8], c: &[u8; N]) {
    debug_assert!(r.len() >= RECBYTES);
    for (byte, t) in r.iter_mut().zip(c.chunks_exact(4)) {
        *byte = t[0] | (t[1] << 2) | (t[2] << 4) | (t[3] << 6);
    }
}

/// Exact inverse of [`encode_rec`].
pub fn decode_rec(c: &mut [u8; N], a: &[u8]) {
    debug_assert!(a.len() >= RECBYTES);
    for (t, &byte) in c.chunks_exact_mut(4).zip(a.iter()) {
        t[0] = byte & 0x03;
        t[1] = (byte >> 2) & 0x03;
        t[2] = (byte >> 4) & 0x03;
        t[3] = byte >> 6;
    }
}

#[inline]
const fn ct_abs(v: i32) -> i32 {
    let mask = v >> 31;
    (v ^ mask) - mask
}

/// For `x in [0, 8q)`: the rounding point `v0 = round(x / 2q)`, the point
/// `v1` of the half-shifted lattice, and the distance `|x - 2q v0|`.
#[inline]
const fn round_candidates(x: i32) -> (i32, i32, i32) {
    // t = floor(x / q)
    let mut t = (x * 2730) >> 25;
    let b = (Q32 - 1 - (x - t * Q32)) >> 31;
    t -= b;

    let v0 = (t >> 1) + (t & 1);
    let t = t - 1;
    let v1 = (t >> 1) + (t & 1);
    (v0, v1, ct_abs(x - v0 * 2 * Q32))
}

/// For `x in [7q, 24q)`: distance from x to the nearest multiple of 8q.
#[inline]
const fn dist_to_8q(x: i32) -> i32 {
    // t = floor(x / 4q)
    let mut t = (x * 2730) >> 27;
    let b = (4 * Q32 - 1 - (x - t * 4 * Q32)) >> 31;
    t -= b;

    let t = ((t >> 1) + (t & 1)) * 8 * Q32;
    ct_abs(t - x)
}

/// Low-density decoding of one group: 1 iff the point is closer to the
/// lattice `8q Z^4` than to its `4q (1,1,1,1)` coset, in L1 norm.
#[inline]
const fn ld_decode(x: [i32; 4]) -> u8 {
    let t = dist_to_8q(x[0]) + dist_to_8q(x[1]) + dist_to_8q(x[2]) + dist_to_8q(x[3]) - 8 * Q32;
    ((t >> 31) & 1) as u8
}

/// Compute helper data for `v` using 256 random bits (one per group).
#[must_use]
pub fn helprec(v: &Polynomial, rand: &[u8; SYMBYTES]) -> Reconciliation {
    let mut c = [0u8; N];
    for i in 0..GROUPS {
        let rbit = ((rand[i >> 3] >> (i & 7)) & 1) as i32;

        let mut v0 = [0i32; 4];
        let mut v1 = [0i32; 4];
        let mut dist = 0;
        for j in 0..4 {
            let x = 8 * v.0[GROUPS * j + i] as i32 + 4 * rbit;
            let (a, b, d) = round_candidates(x);
            v0[j] = a;
            v1[j] = b;
            dist += d;
        }

        // all ones iff the summed distance reaches 2q: take the shifted lattice
        let k = (2 * Q32 - 1 - dist) >> 31;
        let vt: [i32; 4] = core::array::from_fn(|j| (!k & v0[j]) ^ (k & v1[j]));

        c[i] = ((vt[0] - vt[3]) & 3) as u8;
        c[GROUPS + i] = ((vt[1] - vt[3]) & 3) as u8;
        c[2 * GROUPS + i] = ((vt[2] - vt[3]) & 3) as u8;
        c[3 * GROUPS + i] = ((-k + 2 * vt[3]) & 3) as u8;
    }
    Reconciliation(c)
}

/// Extract the 256-bit key from `v` and the peer's helper data.
#[must_use]
pub fn reconcile(v: &Polynomial, c: &Reconciliation) -> [u8; SYMBYTES] {
    let mut key = [0u8; SYMBYTES];
    for i in 0..GROUPS {
        let c3 = c.0[3 * GROUPS + i] as i32;
        let x: [i32; 4] = core::array::from_fn(|j| {
            let offset = if j < 3 { 2 * c.0[GROUPS * j + i] as i32 + c3 } else { c3 };
            16 * Q32 + 8 * v.0[GROUPS * j + i] as i32 - Q32 * offset
        });
        key[i >> 3] |= ld_decode(x) << (i & 7);
    }
    key
}
