//! Symbol encoding pipeline:
//! - Byte mode segments and version selection
//! - Reed-Solomon error correction and block interleaving
//! - Function pattern placement and data mapping
//! - Parallel mask evaluation

pub(crate) mod bits;
pub(crate) mod blocks;
pub(crate) mod format;
pub(crate) mod galois;
pub(crate) mod matrix_builder;
pub(crate) mod penalty;
pub(crate) mod polynomial;
pub(crate) mod segment;
pub(crate) mod tables;

use rayon::prelude::*;

use crate::encoder::bits::BitBuffer;
use crate::encoder::matrix_builder::MatrixBuilder;
use crate::error::{Error, Result};
use crate::models::{ECLevel, MaskPattern, QRSymbol, Version};

/// Byte mode indicator written ahead of the character count
const MODE_BYTE: u32 = 0b0100;
/// Pad codewords, alternated until the data capacity is full
const PAD0: u32 = 0xEC;
const PAD1: u32 = 0x11;

/// The eight mask patterns in trial order
const MASKS: [MaskPattern; 8] = [
    MaskPattern::Pattern0,
    MaskPattern::Pattern1,
    MaskPattern::Pattern2,
    MaskPattern::Pattern3,
    MaskPattern::Pattern4,
    MaskPattern::Pattern5,
    MaskPattern::Pattern6,
    MaskPattern::Pattern7,
];

/// Encodes content into a QR symbol at the given error correction
/// level. Picks the smallest version that fits, applies Reed-Solomon
/// error correction, and selects the mask pattern with the lowest
/// penalty score. Ties go to the lower pattern index.
pub fn encode(content: &str, level: ECLevel) -> Result<QRSymbol> {
    if content.is_empty() {
        return Err(Error::EmptyContent);
    }
    let version = segment::choose_version(content, level)?;
    tracing::debug!(
        content_len = content.len(),
        estimated_len = segment::estimated_length(content),
        version = version.number(),
        level = ?level,
        "selected symbol version"
    );

    let codewords = build_codewords(content, version, level)?;
    let base = MatrixBuilder::base(version);

    let best = MASKS
        .into_par_iter()
        .enumerate()
        .map(|(index, mask)| {
            let mut trial = base.clone();
            trial.map_data(&codewords, mask);
            (penalty::score(&trial.to_matrix()), index, mask)
        })
        .min_by_key(|&(score, index, _)| (score, index));
    let (score, _, mask) = best.unwrap_or((0, 0, MaskPattern::Pattern0));
    tracing::debug!(mask = mask.bits(), score, "selected mask pattern");

    let mut builder = base;
    builder.write_format(level, mask);
    builder.write_version_info();
    builder.map_data(&codewords, mask);
    Ok(QRSymbol::new(version, level, mask, builder.to_matrix()))
}

/// Builds the interleaved codeword sequence: mode indicator, character
/// count, payload bytes, terminator, pad codewords, then Reed-Solomon
/// interleaving.
fn build_codewords(content: &str, version: Version, level: ECLevel) -> Result<Vec<u8>> {
    let payload = segment::content_bytes(content);
    let capacity = blocks::data_codewords(version, level) * 8;

    let mut buffer = BitBuffer::new();
    buffer.put(MODE_BYTE, 4);
    buffer.put(payload.len() as u32, version.length_bits());
    for &byte in &payload {
        buffer.put(byte as u32, 8);
    }
    if buffer.len() > capacity {
        return Err(Error::Overflow {
            bits: buffer.len(),
            capacity,
        });
    }

    // Terminator, when there is room left for one.
    if buffer.len() + 4 <= capacity {
        buffer.put(0, 4);
    }
    while buffer.len() % 8 != 0 {
        buffer.put_bit(false);
    }
    while buffer.len() < capacity {
        buffer.put(PAD0, 8);
        if buffer.len() < capacity {
            buffer.put(PAD1, 8);
        }
    }

    Ok(blocks::interleave(buffer.bytes(), version, level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_codewords() {
        let version = Version::new(1).unwrap();
        let codewords = build_codewords("ABC", version, ECLevel::M).unwrap();
        assert_eq!(
            codewords,
            vec![
                64, 52, 20, 36, 48, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17, 236, 39, 66,
                60, 248, 208, 211, 30, 10, 147, 64,
            ]
        );
    }

    #[test]
    fn test_build_codewords_overflow() {
        let version = Version::new(1).unwrap();
        let err = build_codewords("12345678", version, ECLevel::H).unwrap_err();
        assert_eq!(
            err,
            Error::Overflow {
                bits: 76,
                capacity: 72
            }
        );
    }

    #[test]
    fn test_encode_abc() {
        let symbol = encode("ABC", ECLevel::M).unwrap();
        assert_eq!(symbol.version().number(), 1);
        assert_eq!(symbol.mask(), MaskPattern::Pattern4);
        assert_eq!(symbol.size(), 21);
        assert_eq!(symbol.matrix().count_dark(), 242);
    }

    #[test]
    fn test_selected_mask_is_optimal() {
        let symbol = encode("ABC", ECLevel::M).unwrap();
        let version = symbol.version();
        let codewords = build_codewords("ABC", version, ECLevel::M).unwrap();
        let base = MatrixBuilder::base(version);

        let scores: Vec<u32> = MASKS
            .iter()
            .map(|&mask| {
                let mut trial = base.clone();
                trial.map_data(&codewords, mask);
                penalty::score(&trial.to_matrix())
            })
            .collect();
        assert_eq!(scores, vec![1197, 1361, 1247, 1193, 1140, 1232, 1284, 1154]);

        let chosen = scores[symbol.mask().bits() as usize];
        assert!(scores.iter().all(|&score| chosen <= score));
    }

    #[test]
    fn test_encode_multibyte() {
        let symbol = encode("Привет", ECLevel::M).unwrap();
        assert_eq!(symbol.version().number(), 2);
        assert_eq!(symbol.mask(), MaskPattern::Pattern4);
        assert_eq!(symbol.matrix().count_dark(), 312);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode("", ECLevel::M).unwrap_err(), Error::EmptyContent);
    }

    #[test]
    fn test_encode_version_word_placed() {
        let symbol = encode(&"a".repeat(130), ECLevel::H).unwrap();
        assert_eq!(symbol.version().number(), 11);
        // Read the 18-bit version word back out of the top-right copy.
        let size = symbol.size();
        let mut word = 0u32;
        for i in (0..18).rev() {
            let dark = symbol.is_dark(i % 3 + size - 11, i / 3);
            word = (word << 1) | dark as u32;
        }
        assert_eq!(word, 0x0BBF6);
    }
}
