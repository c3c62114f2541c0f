//! Codeword capacity, block layout and error correction interleaving.

use crate::encoder::polynomial::Polynomial;
use crate::encoder::tables;
use crate::models::{ECLevel, Version};

/// One error correction block. Data codewords come first in the block,
/// ECC codewords fill the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block {
    /// Number of data codewords in this block
    pub data_len: usize,
    /// Total codewords in this block, data plus ECC
    pub total_len: usize,
}

/// Total number of codewords that fit in a symbol of the given version,
/// derived from the module count minus function patterns.
pub(crate) fn raw_codewords(version: Version) -> usize {
    let v = version.number() as usize;
    let mut bits = (16 * v + 128) * v + 64;
    if v >= 2 {
        let n = v / 7 + 2;
        bits -= (25 * n - 10) * n - 55;
    }
    if v >= 7 {
        bits -= 36;
    }
    bits / 8
}

/// Block layout for a version and level. Shorter blocks come first,
/// longer blocks carry one extra data codeword.
pub(crate) fn block_layout(version: Version, level: ECLevel) -> Vec<Block> {
    let raw = raw_codewords(version);
    let count = tables::num_blocks(version, level);
    let ecc = tables::ecc_per_block(version, level);
    let short_count = count - raw % count;
    let short_total = raw / count;

    let mut blocks = Vec::with_capacity(count);
    for i in 0..count {
        let total_len = if i < short_count {
            short_total
        } else {
            short_total + 1
        };
        blocks.push(Block {
            data_len: total_len - ecc,
            total_len,
        });
    }
    blocks
}

/// Number of data codewords available for a version and level
pub(crate) fn data_codewords(version: Version, level: ECLevel) -> usize {
    block_layout(version, level)
        .iter()
        .map(|block| block.data_len)
        .sum()
}

/// Maximum content length in bytes for a byte mode segment, after the
/// mode indicator and character count field are accounted for.
pub(crate) fn byte_capacity(version: Version, level: ECLevel) -> usize {
    (data_codewords(version, level) * 8 - 4 - version.length_bits()) / 8
}

/// Splits data codewords into blocks, appends Reed-Solomon error
/// correction codewords to each, and interleaves the blocks into the
/// final codeword sequence.
pub(crate) fn interleave(data: &[u8], version: Version, level: ECLevel) -> Vec<u8> {
    let layout = block_layout(version, level);
    debug_assert_eq!(data.len(), data_codewords(version, level));

    let mut data_blocks: Vec<&[u8]> = Vec::with_capacity(layout.len());
    let mut ecc_blocks: Vec<Vec<u8>> = Vec::with_capacity(layout.len());
    let mut offset = 0;
    for block in &layout {
        let block_data = &data[offset..offset + block.data_len];
        offset += block.data_len;
        data_blocks.push(block_data);
        ecc_blocks.push(ecc_codewords(block_data, block.total_len - block.data_len));
    }

    let mut out = Vec::with_capacity(raw_codewords(version));
    let max_data = layout.iter().map(|block| block.data_len).max().unwrap_or(0);
    for i in 0..max_data {
        for block_data in &data_blocks {
            if i < block_data.len() {
                out.push(block_data[i]);
            }
        }
    }
    let max_ecc = ecc_blocks.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..max_ecc {
        for block_ecc in &ecc_blocks {
            if i < block_ecc.len() {
                out.push(block_ecc[i]);
            }
        }
    }
    out
}

/// Reed-Solomon ECC codewords for one block of data codewords
fn ecc_codewords(data: &[u8], ec_len: usize) -> Vec<u8> {
    let generator = Polynomial::generator(ec_len);
    let message = Polynomial::new(data, ec_len);
    let rem = message.rem(&generator);

    // The remainder drops leading zero coefficients, so read it right
    // aligned into the ECC slots.
    let mut ecc = vec![0u8; ec_len];
    for (i, byte) in ecc.iter_mut().enumerate() {
        let idx = i + rem.len();
        if idx >= ec_len {
            *byte = rem.get(idx - ec_len);
        }
    }
    ecc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_raw_codewords() {
        assert_eq!(raw_codewords(v(1)), 26);
        assert_eq!(raw_codewords(v(2)), 44);
        assert_eq!(raw_codewords(v(5)), 134);
        assert_eq!(raw_codewords(v(7)), 196);
        assert_eq!(raw_codewords(v(10)), 346);
        assert_eq!(raw_codewords(v(40)), 3706);
    }

    #[test]
    fn test_block_layout_single() {
        let layout = block_layout(v(1), ECLevel::M);
        assert_eq!(
            layout,
            vec![Block {
                data_len: 16,
                total_len: 26
            }]
        );
    }

    #[test]
    fn test_block_layout_mixed_lengths() {
        // Version 5 at level Q splits into two short and two long blocks.
        let layout = block_layout(v(5), ECLevel::Q);
        let pairs: Vec<(usize, usize)> = layout
            .iter()
            .map(|block| (block.data_len, block.total_len))
            .collect();
        assert_eq!(pairs, vec![(15, 33), (15, 33), (16, 34), (16, 34)]);
    }

    #[test]
    fn test_byte_capacity() {
        assert_eq!(byte_capacity(v(1), ECLevel::L), 17);
        assert_eq!(byte_capacity(v(1), ECLevel::M), 14);
        assert_eq!(byte_capacity(v(1), ECLevel::Q), 11);
        assert_eq!(byte_capacity(v(1), ECLevel::H), 7);
        assert_eq!(byte_capacity(v(3), ECLevel::L), 53);
        assert_eq!(byte_capacity(v(3), ECLevel::Q), 32);
        assert_eq!(byte_capacity(v(10), ECLevel::L), 271);
        assert_eq!(byte_capacity(v(40), ECLevel::L), 2953);
        assert_eq!(byte_capacity(v(40), ECLevel::H), 1273);
    }

    #[test]
    fn test_interleave_single_block() {
        let data = [
            64, 52, 20, 36, 48, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17, 236,
        ];
        let codewords = interleave(&data, v(1), ECLevel::M);
        assert_eq!(
            codewords,
            vec![
                64, 52, 20, 36, 48, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17, 236, 39, 66,
                60, 248, 208, 211, 30, 10, 147, 64,
            ]
        );
    }

    #[test]
    fn test_interleave_round_robin() {
        // Blocks of 15, 15, 16 and 16 data codewords interleave column
        // by column, long blocks contributing the trailing extras.
        let data: Vec<u8> = (0..62).collect();
        let codewords = interleave(&data, v(5), ECLevel::Q);
        assert_eq!(codewords.len(), 134);
        assert_eq!(&codewords[..4], &[0, 15, 30, 46]);
        assert_eq!(&codewords[60..62], &[45, 61]);
    }
}
