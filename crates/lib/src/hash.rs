//! Hash and extendable-output function (XOF) adapters.
//!
//! | Use                       | Primitive | Function       |
//! |---------------------------|-----------|----------------|
//! | public polynomial `a`     | SHAKE-128 | [`xof_absorb`] |
//! | noise expansion           | SHAKE-256 | [`prf`]        |
//! | final key derivation      | SHA-256   | [`hash_key`]   |

pub use sha3::digest::XofReader;
use sha2::{Digest, Sha256};
use sha3::{
    Shake128, Shake256,
    digest::{ExtendableOutput, Update},
};
use zeroize::Zeroize;

use crate::params::{KEY_BYTES, SYMBYTES};

/// SHAKE-128 XOF: absorbs the public seed, returns reader.
#[must_use]
pub fn xof_absorb(seed: &[u8; SYMBYTES]) -> impl XofReader {
    Shake128::default().chain(seed).finalize_xof()
}

/// `PRF(seed, nonce) = SHAKE-256(seed || nonce)`, squeezed into `output`.
pub fn prf(seed: &[u8; SYMBYTES], nonce: u8, output: &mut [u8]) {
    let mut buf = [0; SYMBYTES + 1];
    buf[..SYMBYTES].copy_from_slice(seed);
    buf[SYMBYTES] = nonce;
    Shake256::digest_xof(&buf, output);
    buf.zeroize();
}

/// SHA-256 of the reconciled key bits -> negotiated key.
#[inline]
#[must_use]
pub fn hash_key(input: &[u8; SYMBYTES]) -> [u8; KEY_BYTES] {
    Sha256::digest(input).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_zero_block_vector() {
        // SHA-256 of 32 zero bytes
        let expected = [
            0x66, 0x68, 0x7a, 0xad, 0xf8, 0x62, 0xbd, 0x77, 0x6c, 0x8f, 0xc1, 0x8b, 0x8e, 0x9f,
            0x8e, 0x20, 0x08, 0x97, 0x14, 0x85, 0x6e, 0xe2, 0x33, 0xb3, 0x90, 0x2a, 0x59, 0x1d,
            0x0d, 0x5f, 0x29, 0x25,
        ];
        assert_eq!(hash_key(&[0u8; SYMBYTES]), expected);
    }

    #[test]
    fn prf_nonces_separate_streams() {
        let seed = [7u8; SYMBYTES];
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        prf(&seed, 0, &mut a);
        prf(&seed, 1, &mut b);
        assert_ne!(a, b);

        let mut a2 = [0u8; 64];
        prf(&seed, 0, &mut a2);
        assert_eq!(a, a2);
    }

    #[test]
    fn xof_is_deterministic() {
        let seed = [3u8; SYMBYTES];
        let mut a = [0u8; 200];
        let mut b = [0u8; 200];
        xof_absorb(&seed).read(&mut a);
        xof_absorb(&seed).read(&mut b);
        assert_eq!(a, b);
    }
}
