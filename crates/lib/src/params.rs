//! NewHope parameters and derived message sizes.

pub use newhope_math::{N, NOISE_BYTES, NOISE_K, POLYBYTES, Q, RECBYTES, SYMBYTES};

/// Size in bytes of the negotiated key (a SHA-256 digest).
pub const KEY_BYTES: usize = 32;

/// Offer message: packed public polynomial followed by the seed of `a`.
pub const OFFERMSG_BYTES: usize = POLYBYTES + SYMBYTES;

/// Accept message: packed public polynomial followed by reconciliation data.
pub const ACCEPTMSG_BYTES: usize = POLYBYTES + RECBYTES;

const _: () = {
    assert!(POLYBYTES == (N * 14).div_ceil(8));
    assert!(RECBYTES == N / 4);

    // --- Cross-check against the reference wire sizes ---
    assert!(OFFERMSG_BYTES == 1824);
    assert!(ACCEPTMSG_BYTES == 2048);
    assert!(POLYBYTES == 1792);
};
