//! The three protocol computations on decoded values.
//!
//! Everything here is infallible: length and coefficient checks happen in
//! [`exchange`](crate::exchange) before these are called.

use zeroize::Zeroize;

use crate::{
    hash::{self, XofReader},
    math::{NttPolynomial, Polynomial, Reconciliation, reconcile},
    params::{NOISE_BYTES, SYMBYTES},
};

/// Noise polynomial number `nonce` expanded from a 32-byte noise seed.
fn getnoise(seed: &[u8; SYMBYTES], nonce: u8) -> Polynomial {
    let mut buf = [0u8; NOISE_BYTES];
    hash::prf(seed, nonce, &mut buf);
    let p = Polynomial::sample_noise(&buf);
    buf.zeroize();
    p
}

/// Expand the public polynomial `a` (NTT domain) from its seed.
pub(crate) fn gen_a(seed: &[u8; SYMBYTES]) -> NttPolynomial {
    let mut xof = hash::xof_absorb(seed);
    NttPolynomial::sample_uniform(|buf| xof.read(buf))
}

// -- offer -------------------------------------------------------------------

/// `pk = a * sk + e`. Returns `(pk, sk)`.
pub(crate) fn offer_computation(
    seed: &[u8; SYMBYTES], noise_seed: &[u8; SYMBYTES],
) -> (NttPolynomial, NttPolynomial) {
    let sk = getnoise(noise_seed, 0).ntt();
    let a = gen_a(seed);
    let mut e = getnoise(noise_seed, 1).ntt();

    let pk = &a.pointwise(&sk) + &e;
    e.zeroize();
    (pk, sk)
}

// -- accept ------------------------------------------------------------------

/// Accepter's side. Returns the raw reconciled key, `bp` and the helper data.
pub(crate) fn accept_computation(
    pk: &NttPolynomial, a: &NttPolynomial, noise_seed: &[u8; SYMBYTES],
    rec_rand: &[u8; SYMBYTES],
) -> ([u8; SYMBYTES], NttPolynomial, Reconciliation) {
    let mut sp = getnoise(noise_seed, 0).ntt();
    let mut ep = getnoise(noise_seed, 1).ntt();
    let mut epp = getnoise(noise_seed, 2);

    // bp = a * s' + e'
    let bp = &a.pointwise(&sp) + &ep;

    // v = pk * s' + e''
    let mut v = pk.pointwise(&sp).ntt_inverse();
    v += &epp;

    let c = reconcile::helprec(&v, rec_rand);
    let k = reconcile::reconcile(&v, &c);

    sp.zeroize();
    ep.zeroize();
    epp.zeroize();
    v.zeroize();
    (k, bp, c)
}

// -- finish ------------------------------------------------------------------

/// Offerer's side: `v' = bp * sk`, reconciled against the helper data.
pub(crate) fn finish_computation(
    sk: &NttPolynomial, bp: &NttPolynomial, c: &Reconciliation,
) -> [u8; SYMBYTES] {
    let mut v = bp.pointwise(sk).ntt_inverse();
    let k = reconcile::reconcile(&v, c);
    v.zeroize();
    k
}
