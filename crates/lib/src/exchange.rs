//! NewHope key exchange: `offer -> accept -> finish`.
//!
//! Each randomized operation has a `_derand` twin taking explicit 64-byte
//! coins, used for reproducible tests and benchmarks.

use rand_core::TryCryptoRng;
use zerocopy::transmute_ref;
use zeroize::Zeroize;

use crate::{
    Error, computation, hash,
    math::{NttPolynomial, Reconciliation},
    params::{OFFERMSG_BYTES, POLYBYTES, RECBYTES, SYMBYTES},
    types::{AcceptMessage, OfferMessage, Session, SharedKey, Sym2},
};

fn draw_coins(rng: &mut impl TryCryptoRng) -> Result<[u8; 2 * SYMBYTES], Error> {
    let mut coins = [0u8; 2 * SYMBYTES];
    if rng.try_fill_bytes(&mut coins).is_err() {
        coins.zeroize();
        return Err(Error::RandomSource);
    }
    Ok(coins)
}

/// SHA-256 of the reconciled bits; wipes `k`.
fn derive_key(k: &mut [u8; SYMBYTES]) -> SharedKey {
    let mut digest = hash::hash_key(k);
    let key = SharedKey::from(&digest);
    digest.zeroize();
    k.zeroize();
    key
}

/// Deterministic offer from 64 bytes of coins `(seed || noise_seed)`.
#[must_use]
pub fn offer_derand(coins: &[u8; 2 * SYMBYTES]) -> (OfferMessage, Session) {
    let Sym2(seed, noise_seed): &Sym2 = transmute_ref!(coins);

    let (pk, sk) = computation::offer_computation(seed, noise_seed);

    let mut msg = OfferMessage {
        public_poly: [0u8; POLYBYTES],
        seed: *seed,
    };
    pk.to_bytes(&mut msg.public_poly);

    (msg, Session { sk })
}

/// Start an exchange: returns the message to send and the session to keep
/// for [`finish`].
pub fn offer(rng: &mut impl TryCryptoRng) -> Result<(OfferMessage, Session), Error> {
    let mut coins = draw_coins(rng)?;
    let out = offer_derand(&coins);
    coins.zeroize();
    Ok(out)
}

/// Deterministic accept from 64 bytes of coins `(noise_seed || rec_rand)`.
pub fn accept_derand(
    offermsg: &[u8], coins: &[u8; 2 * SYMBYTES],
) -> Result<(SharedKey, AcceptMessage), Error> {
    let msg = OfferMessage::try_from(offermsg)?;
    let pk = NttPolynomial::from_bytes(&msg.public_poly).ok_or(Error::InvalidPolynomial)?;
    let a = computation::gen_a(&msg.seed);

    let Sym2(noise_seed, rec_rand): &Sym2 = transmute_ref!(coins);
    let (mut k, bp, c) = computation::accept_computation(&pk, &a, noise_seed, rec_rand);

    let mut reply = AcceptMessage {
        public_poly: [0u8; POLYBYTES],
        reconciliation: [0u8; RECBYTES],
    };
    bp.to_bytes(&mut reply.public_poly);
    c.to_bytes(&mut reply.reconciliation);

    Ok((derive_key(&mut k), reply))
}

/// Answer an offer. The accepter's key is final as soon as this returns.
///
/// The length is checked before any randomness is drawn.
pub fn accept(
    offermsg: &[u8], rng: &mut impl TryCryptoRng,
) -> Result<(SharedKey, AcceptMessage), Error> {
    if offermsg.len() != OFFERMSG_BYTES {
        return Err(Error::InvalidLength {
            expected: OFFERMSG_BYTES,
            actual: offermsg.len(),
        });
    }
    let mut coins = draw_coins(rng)?;
    let out = accept_derand(offermsg, &coins);
    coins.zeroize();
    out
}

/// Complete the exchange on the offerer's side. Consumes the session.
pub fn finish(session: Session, acceptmsg: &[u8]) -> Result<SharedKey, Error> {
    let msg = AcceptMessage::try_from(acceptmsg)?;
    let bp = NttPolynomial::from_bytes(&msg.public_poly).ok_or(Error::InvalidPolynomial)?;
    let c = Reconciliation::from_bytes(&msg.reconciliation);

    let mut k = computation::finish_computation(&session.sk, &bp, &c);
    Ok(derive_key(&mut k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ACCEPTMSG_BYTES;

    fn coins(tag: u8) -> [u8; 2 * SYMBYTES] {
        core::array::from_fn(|i| (i as u8).wrapping_add(tag.wrapping_mul(37)))
    }

    #[test]
    fn derand_roundtrip() {
        let (offermsg, session) = offer_derand(&coins(1));
        let (key_b, acceptmsg) = accept_derand(offermsg.as_ref(), &coins(2)).unwrap();
        let key_a = finish(session, acceptmsg.as_ref()).unwrap();
        assert_eq!(key_a, key_b);
    }

    #[test]
    fn offer_carries_seed() {
        let c = coins(5);
        let (offermsg, _) = offer_derand(&c);
        assert_eq!(offermsg.seed(), &c[..SYMBYTES]);
    }

    #[test]
    fn finish_rejects_unreduced_polynomial() {
        let (_, session) = offer_derand(&coins(3));
        let mut bad = [0u8; ACCEPTMSG_BYTES];
        bad[..POLYBYTES].fill(0xff);
        assert_eq!(finish(session, &bad).unwrap_err(), Error::InvalidPolynomial);
    }
}
