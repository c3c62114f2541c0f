//! BCH protected format and version information words.

use crate::models::{ECLevel, MaskPattern, Version};

/// BCH(15,5) generator polynomial: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const G15: u32 = 0x537;
/// XOR mask keeping the format word from ever being all zero
const G15_MASK: u32 = 0x5412;
/// BCH(18,6) generator polynomial: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const G18: u32 = 0x1F25;

/// Position of the highest set bit plus one, zero for zero
fn bch_digit(mut value: u32) -> u32 {
    let mut digit = 0;
    while value != 0 {
        digit += 1;
        value >>= 1;
    }
    digit
}

/// Polynomial remainder of `data` modulo `generator` over GF(2)
fn bch_remainder(data: u32, generator: u32) -> u32 {
    let mut d = data;
    while bch_digit(d) >= bch_digit(generator) {
        d ^= generator << (bch_digit(d) - bch_digit(generator));
    }
    d
}

/// 15-bit format word carrying the error correction level and mask
/// pattern with BCH(15,5) protection
pub(crate) fn format_info(level: ECLevel, mask: MaskPattern) -> u32 {
    let data = (level.format_bits() << 3) | mask.bits() as u32;
    let shifted = data << 10;
    (shifted | bch_remainder(shifted, G15)) ^ G15_MASK
}

/// 18-bit version word with BCH(18,6) protection, placed in symbols of
/// version 7 and up
pub(crate) fn version_info(version: Version) -> u32 {
    let data = (version.number() as u32) << 12;
    data | bch_remainder(data, G18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_words() {
        assert_eq!(format_info(ECLevel::M, MaskPattern::Pattern0), 0x5412);
        assert_eq!(format_info(ECLevel::L, MaskPattern::Pattern0), 0x77C4);
        assert_eq!(format_info(ECLevel::M, MaskPattern::Pattern4), 0x45F9);
    }

    #[test]
    fn test_format_words_distinct() {
        let mut words = Vec::new();
        for level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            for bits in 0..8 {
                let mask = MaskPattern::from_bits(bits).unwrap();
                let word = format_info(level, mask);
                assert!(word <= 0x7FFF);
                words.push(word);
            }
        }
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), 32);
    }

    #[test]
    fn test_version_words() {
        assert_eq!(version_info(Version::new(7).unwrap()), 0x07C94);
        assert_eq!(version_info(Version::new(11).unwrap()), 0x0BBF6);
    }

    #[test]
    fn test_version_words_self_check() {
        for version in Version::all().filter(|v| v.number() >= 7) {
            let word = version_info(version);
            assert_eq!(word >> 12, version.number() as u32);
            assert_eq!(bch_remainder(word, G18), 0);
        }
    }
}
