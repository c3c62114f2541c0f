//! GF(256) arithmetic for Reed-Solomon error correction generation.
//!
//! The field is generated by the polynomial x^8 + x^4 + x^3 + x^2 + 1
//! (0x11D), the one fixed by the QR code specification.

/// Exponent table: EXP\[i\] = alpha^i. The first eight powers are plain
/// bit shifts; later entries follow the linear recurrence implied by the
/// field polynomial.
const fn generate_exp() -> [u8; 256] {
    let mut exp = [0u8; 256];
    let mut i = 0;
    while i < 8 {
        exp[i] = 1 << i;
        i += 1;
    }
    while i < 256 {
        exp[i] = exp[i - 4] ^ exp[i - 5] ^ exp[i - 6] ^ exp[i - 8];
        i += 1;
    }
    exp
}

const fn generate_log(exp: &[u8; 256]) -> [u8; 256] {
    let mut log = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        log[exp[i] as usize] = i as u8;
        i += 1;
    }
    log
}

const EXP_TABLE: [u8; 256] = generate_exp();
const LOG_TABLE: [u8; 256] = generate_log(&EXP_TABLE);

/// Galois field GF(256) operations
pub(crate) struct Gf256;

impl Gf256 {
    /// alpha^power, with the exponent wrapped into 0..255
    pub fn exp(power: i32) -> u8 {
        EXP_TABLE[power.rem_euclid(255) as usize]
    }

    /// Discrete log of a non-zero field element
    pub fn log(value: u8) -> i32 {
        debug_assert!(value != 0, "log of zero");
        LOG_TABLE[value as usize] as i32
    }

    /// Multiply two field elements
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        Self::exp(Self::log(a) + Self::log(b))
    }
}
