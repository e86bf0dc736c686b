use core::ops;

use zeroize::Zeroize;

use super::Polynomial;
use crate::{N, encode, ntt, reduce, sample};

/// Polynomial in NTT (bit-reversed) domain.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct NttPolynomial(pub(crate) [u16; N]);

impl NttPolynomial {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u16; N])
    }

    /// Inverse NTT, including the `N^{-1}` scaling.
    #[must_use]
    pub fn ntt_inverse(mut self) -> Polynomial {
        ntt::inverse_ntt(&mut self.0);
        Polynomial(self.0)
    }

    /// Pointwise product; ring multiplication in the NTT domain.
    #[must_use]
    pub fn pointwise(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for ((c, &a), &b) in r.0.iter_mut().zip(self.0.iter()).zip(other.0.iter()) {
            *c = reduce::fqmul(a, b);
        }
        r
    }

    /// Uniform polynomial from an XOF stream.
    ///
    /// Uniformity is preserved by the transform, so the samples are taken to
    /// be NTT-domain coefficients directly.
    #[must_use]
    pub fn sample_uniform(fill: impl FnMut(&mut [u8])) -> Self {
        let mut p = Self::zero();
        sample::reject_uniform(&mut p.0, fill);
        p
    }

    /// Serialize to bytes (14-bit packing, 1792 bytes).
    pub fn to_bytes(&self, r: &mut [u8]) {
        encode::coeffs_to_bytes(r, &self.0);
    }

    /// Deserialize from bytes (14-bit unpacking); `None` if any coefficient
    /// is not below q.
    #[must_use]
    pub fn from_bytes(a: &[u8]) -> Option<Self> {
        let mut p = Self::zero();
        encode::bytes_to_coeffs(&mut p.0, a).then_some(p)
    }

    #[must_use]
    pub const fn coeffs(&self) -> &[u16; N] {
        &self.0
    }
}

impl Default for NttPolynomial {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl core::fmt::Debug for NttPolynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NttPolynomial")
            .field("coeffs[..4]", &&self.0[..4])
            .finish_non_exhaustive()
    }
}

impl<'b> ops::Add<&'b NttPolynomial> for &NttPolynomial {
    type Output = NttPolynomial;
    #[inline]
    fn add(self, rhs: &'b NttPolynomial) -> NttPolynomial {
        let mut r = self.clone();
        r += rhs;
        r
    }
}

impl ops::AddAssign<&Self> for NttPolynomial {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        for (a, &b) in self.0.iter_mut().zip(rhs.0.iter()) {
            *a = reduce::fqadd(*a, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{POLYBYTES, Q};

    #[test]
    fn ntt_roundtrip() {
        let mut p = Polynomial::zero();
        for (i, c) in p.0.iter_mut().enumerate() {
            *c = (i % 13) as u16;
        }
        let original = p.clone();

        let ntt_p = p.ntt();
        assert_ne!(ntt_p.0, original.0);
        assert_eq!(ntt_p.ntt_inverse(), original);
    }

    #[test]
    fn pointwise_stays_in_range() {
        let a = NttPolynomial([Q - 1; N]);
        let mut b = NttPolynomial::zero();
        for (i, c) in b.0.iter_mut().enumerate() {
            *c = (Q as usize - 1 - i) as u16;
        }
        let c = a.pointwise(&b);
        assert!(c.0.iter().all(|&x| x < Q));
        // (-1) * (q - 1 - i) = i + 1
        assert_eq!(c.0[0], 1);
        assert_eq!(c.0[9], 10);
        assert!((&c + &a).0.iter().all(|&x| x < Q));
    }

    #[test]
    fn pointwise_by_one_is_identity() {
        let mut one = Polynomial::zero();
        one.0[0] = 1;
        let one = one.ntt();
        assert!(one.0.iter().all(|&c| c == 1));

        let mut p = NttPolynomial::zero();
        for (i, c) in p.0.iter_mut().enumerate() {
            *c = (i * 31 % Q as usize) as u16;
        }
        assert_eq!(p.pointwise(&one), p);
    }

    #[test]
    fn tobytes_frombytes_roundtrip() {
        let mut p = NttPolynomial::zero();
        for i in 0..N {
            p.0[i] = (i as u16 * 13) % (Q - 1);
        }
        let mut buf = [0u8; POLYBYTES];
        p.to_bytes(&mut buf);
        assert_eq!(NttPolynomial::from_bytes(&buf), Some(p));
    }

    #[test]
    fn frombytes_rejects_unreduced() {
        let buf = [0xffu8; POLYBYTES];
        assert_eq!(NttPolynomial::from_bytes(&buf), None);
    }
}
