//! Polynomial byte-level encoding (14-bit packing, 4 coefficients -> 7 bytes).

use crate::{N, POLYBYTES, Q};

pub fn coeffs_to_bytes(r: &mut [u8], a: &[u16; N]) {
    debug_assert!(r.len() >= POLYBYTES);
    for (out, t) in r.chunks_exact_mut(7).zip(a.chunks_exact(4)) {
        out[0] = t[0] as u8;
        out[1] = ((t[0] >> 8) | (t[1] << 6)) as u8;
        out[2] = (t[1] >> 2) as u8;
        out[3] = ((t[1] >> 10) | (t[2] << 4)) as u8;
        out[4] = (t[2] >> 4) as u8;
        out[5] = ((t[2] >> 12) | (t[3] << 2)) as u8;
        out[6] = (t[3] >> 6) as u8;
    }
}

/// Unpack 14-bit coefficients. Returns `false` if any decoded value is not
/// below q; every coefficient is still written so the scan does not
/// short-circuit on the input.
#[must_use]
pub fn bytes_to_coeffs(r: &mut [u16; N], a: &[u8]) -> bool {
    debug_assert!(a.len() >= POLYBYTES);
    let mut out_of_range = 0u16;
    for (t, b) in r.chunks_exact_mut(4).zip(a.chunks_exact(7)) {
        let b: [u16; 7] = core::array::from_fn(|i| b[i] as u16);
        t[0] = b[0] | ((b[1] & 0x3f) << 8);
        t[1] = (b[1] >> 6) | (b[2] << 2) | ((b[3] & 0x0f) << 10);
        t[2] = (b[3] >> 4) | (b[4] << 4) | ((b[5] & 0x03) << 12);
        t[3] = (b[5] >> 2) | (b[6] << 6);
        for &c in t.iter() {
            // high bit set iff c >= q
            out_of_range |= (Q - 1).wrapping_sub(c);
        }
    }
    out_of_range >> 15 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tobytes_frombytes_roundtrip() {
        let mut a = [0u16; N];
        for (i, c) in a.iter_mut().enumerate() {
            *c = ((i * 12007 + 5) % Q as usize) as u16;
        }
        a[0] = Q - 1;
        a[N - 1] = 0;
        let mut buf = [0u8; POLYBYTES];
        coeffs_to_bytes(&mut buf, &a);

        let mut b = [0u16; N];
        assert!(bytes_to_coeffs(&mut b, &buf));
        assert_eq!(a, b);
    }

    #[test]
    fn first_group_layout() {
        let mut a = [0u16; N];
        a[..4].copy_from_slice(&[Q - 1, 1, 2, 3]);
        let mut buf = [0u8; POLYBYTES];
        coeffs_to_bytes(&mut buf, &a);
        // 12288 = 0b11_0000_0000_0000
        assert_eq!(buf[0], 0x00);
        assert_eq!(buf[1], 0x30 | (1 << 6));
        assert_eq!(buf[2], 0x00);
        assert_eq!(buf[3], 2 << 4);
        assert_eq!(buf[5], 3 << 2);
        assert!(buf[7..].iter().all(|&b| b == 0));
    }

    #[test]
    fn rejects_coefficient_equal_to_q() {
        let mut a = [0u16; N];
        a[517] = Q;
        let mut buf = [0u8; POLYBYTES];
        coeffs_to_bytes(&mut buf, &a);
        let mut b = [0u16; N];
        assert!(!bytes_to_coeffs(&mut b, &buf));
    }

    #[test]
    fn rejects_all_ones() {
        let buf = [0xffu8; POLYBYTES];
        let mut b = [0u16; N];
        assert!(!bytes_to_coeffs(&mut b, &buf));
        assert!(b.iter().all(|&c| c == 0x3fff));
    }
}
