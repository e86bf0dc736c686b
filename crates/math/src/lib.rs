//! `newhope-math` -- Core mathematical primitives for the NewHope key exchange.
//!
//! `no_std`, zero-allocation polynomial arithmetic over `Z_q[X]/(X^{1024}+1)`
//! with `q = 12289`. Sub-modules cover modular reduction, the
//! Number-Theoretic Transform, domain-tagged polynomial types, 14-bit wire
//! packing, uniform and centered-binomial sampling, and the error
//! reconciliation that turns two approximately equal polynomials into one
//! shared bit string.

#![no_std]
#![deny(unsafe_code)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]

pub mod encode;
pub mod ntt;
pub mod poly;
pub mod reconcile;
pub mod reduce;
pub mod sample;

pub use poly::{NttPolynomial, Polynomial};
pub use reconcile::Reconciliation;

/// Polynomial ring degree.
pub const N: usize = 1024;

/// Field modulus.
pub const Q: u16 = 12289;

/// Size in bytes of seeds and reconciled keys.
pub const SYMBYTES: usize = 32;

/// Size in bytes of a serialised polynomial (14 bits * 1024 / 8).
pub const POLYBYTES: usize = 1792;

/// Size in bytes of packed reconciliation data (2 bits * 1024 / 8).
pub const RECBYTES: usize = N / 4;

/// Centered-binomial parameter `k` of the noise distribution.
pub const NOISE_K: usize = 16;

/// Random bytes consumed by one noise polynomial (4 per coefficient).
pub const NOISE_BYTES: usize = 4 * N;

const _: () = {
    assert!(POLYBYTES == N * 14 / 8);
    assert!(RECBYTES * 4 == N);
    assert!((Q as u32) < (1 << 14));
    assert!(NOISE_BYTES * 8 == 2 * NOISE_K * N);
    // one reconciled key bit per group of four coefficients
    assert!(SYMBYTES * 8 * 4 == N);
};
