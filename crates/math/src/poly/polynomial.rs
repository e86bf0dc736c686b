use core::ops;

use zeroize::Zeroize;

use super::NttPolynomial;
use crate::{N, NOISE_BYTES, Q, ntt, reduce, sample};

/// Polynomial in standard (coefficient) form over `R_q = Z_q[X]/(X^{1024}+1)`.
///
/// Every coefficient is kept in `[0, q)`.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial(pub(crate) [u16; N]);

impl Polynomial {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u16; N])
    }

    /// Build from coefficients, rejecting any value not below q.
    #[must_use]
    pub fn from_coeffs(coeffs: [u16; N]) -> Option<Self> {
        coeffs.iter().all(|&c| c < Q).then_some(Self(coeffs))
    }

    /// Consuming forward NTT transform.
    #[must_use]
    pub fn ntt(mut self) -> NttPolynomial {
        ntt::forward_ntt(&mut self.0);
        NttPolynomial(self.0)
    }

    /// Centered-binomial noise polynomial from [`NOISE_BYTES`] random bytes.
    #[must_use]
    pub fn sample_noise(buf: &[u8; NOISE_BYTES]) -> Self {
        let mut p = Self::zero();
        sample::cbd16(&mut p.0, buf);
        p
    }

    #[must_use]
    pub const fn coeffs(&self) -> &[u16; N] {
        &self.0
    }
}

impl Default for Polynomial {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl core::fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Polynomial")
            .field("coeffs[..4]", &&self.0[..4])
            .finish_non_exhaustive()
    }
}

impl<'b> ops::Add<&'b Polynomial> for &Polynomial {
    type Output = Polynomial;
    #[inline]
    fn add(self, rhs: &'b Polynomial) -> Polynomial {
        let mut r = self.clone();
        r += rhs;
        r
    }
}

impl ops::AddAssign<&Self> for Polynomial {
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

    #[test]
    fn add_wraps_modulo_q() {
        let a = Polynomial([Q - 1; N]);
        let mut b = Polynomial::zero();
        b.0[0] = 1;
        b.0[1] = Q - 1;
        let sum = &a + &b;
        assert_eq!(sum.0[0], 0);
        assert_eq!(sum.0[1], Q - 2);
        assert!(sum.0[2..].iter().all(|&c| c == Q - 1));
    }

    #[test]
    fn from_coeffs_checks_range() {
        let mut coeffs = [Q - 1; N];
        assert!(Polynomial::from_coeffs(coeffs).is_some());
        coeffs[700] = Q;
        assert!(Polynomial::from_coeffs(coeffs).is_none());
    }

    #[test]
    fn noise_ntt_roundtrip_is_exact() {
        let buf: [u8; NOISE_BYTES] = core::array::from_fn(|i| (i * 89 + 3) as u8);
        let p = Polynomial::sample_noise(&buf);
        assert_eq!(p.clone().ntt().ntt_inverse(), p);
    }
}
