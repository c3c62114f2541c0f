//! Polynomials over GF(256), stored most significant coefficient first.

use super::galois::Gf256;

/// Polynomial with coefficients in GF(256)
#[derive(Debug, Clone)]
pub(crate) struct Polynomial {
    coeffs: Vec<u8>,
}

impl Polynomial {
    /// Build from coefficients, dropping leading zeros and appending
    /// `shift` zero coefficients (multiplication by x^shift)
    pub fn new(coeffs: &[u8], shift: usize) -> Self {
        let offset = coeffs
            .iter()
            .position(|&c| c != 0)
            .unwrap_or(coeffs.len());
        let mut trimmed = coeffs[offset..].to_vec();
        trimmed.resize(trimmed.len() + shift, 0);
        Self { coeffs: trimmed }
    }

    /// Coefficient at index `i` (0 is the most significant)
    pub fn get(&self, i: usize) -> u8 {
        self.coeffs[i]
    }

    /// Number of coefficients
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Product of two polynomials
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut num = vec![0u8; self.len() + other.len() - 1];
        for i in 0..self.len() {
            for j in 0..other.len() {
                num[i + j] ^= Gf256::mul(self.get(i), other.get(j));
            }
        }
        Polynomial::new(&num, 0)
    }

    /// Remainder of dividing `self` by `other`
    pub fn rem(&self, other: &Polynomial) -> Polynomial {
        let mut cur = Polynomial::new(&self.coeffs, 0);
        while cur.len() >= other.len() {
            let ratio = Gf256::log(cur.get(0)) - Gf256::log(other.get(0));
            let mut num = cur.coeffs.clone();
            for i in 0..other.len() {
                if other.get(i) != 0 {
                    num[i] ^= Gf256::exp(Gf256::log(other.get(i)) + ratio);
                }
            }
            cur = Polynomial::new(&num, 0);
        }
        cur
    }

    /// Reed-Solomon generator polynomial with roots alpha^0..alpha^(ec_len-1)
    pub fn generator(ec_len: usize) -> Polynomial {
        let mut poly = Polynomial::new(&[1], 0);
        for i in 0..ec_len {
            poly = poly.multiply(&Polynomial::new(&[1, Gf256::exp(i as i32)], 0));
        }
        poly
    }
}
