use std::str::FromStr;

use super::BitMatrix;
use crate::error::Error;

/// Symbol version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol version
    pub const MIN: Version = Version(1);
    /// Largest symbol version
    pub const MAX: Version = Version(40);

    /// Create a version; `None` unless in 1-40
    pub fn new(number: u8) -> Option<Self> {
        (1..=40).contains(&number).then_some(Self(number))
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * (self.0 as usize) + 17
    }

    /// Bit width of the byte-mode character count field
    pub fn length_bits(&self) -> usize {
        if self.0 <= 9 { 8 } else { 16 }
    }

    /// Iterate all versions from smallest to largest
    pub fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Version)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    #[default]
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Row index into the error correction block tables
    pub fn table_index(&self) -> usize {
        *self as usize
    }

    /// Two-bit level indicator used in the format information
    pub fn format_bits(&self) -> u32 {
        match self {
            ECLevel::L => 1,
            ECLevel::M => 0,
            ECLevel::Q => 3,
            ECLevel::H => 2,
        }
    }
}

impl FromStr for ECLevel {
    type Err = Error;

    /// Parse a level letter, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            _ => Err(Error::UnknownEcLevel(s.to_string())),
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Get mask pattern from bits
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x07 {
            0 => Some(MaskPattern::Pattern0),
            1 => Some(MaskPattern::Pattern1),
            2 => Some(MaskPattern::Pattern2),
            3 => Some(MaskPattern::Pattern3),
            4 => Some(MaskPattern::Pattern4),
            5 => Some(MaskPattern::Pattern5),
            6 => Some(MaskPattern::Pattern6),
            7 => Some(MaskPattern::Pattern7),
            _ => None,
        }
    }

    /// Three-bit pattern index used in the format information
    pub fn bits(&self) -> u8 {
        *self as u8
    }

    /// Check if module at (i, j) should be flipped
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Encoded QR symbol
#[derive(Debug, Clone)]
pub struct QRSymbol {
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    matrix: BitMatrix,
}

impl QRSymbol {
    pub(crate) fn new(
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
        matrix: BitMatrix,
    ) -> Self {
        Self {
            version,
            ec_level,
            mask,
            matrix,
        }
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Mask pattern selected during encoding
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Module matrix (true = dark, false = light)
    pub fn matrix(&self) -> &BitMatrix {
        &self.matrix
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Whether the module at (x, y) is dark
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.matrix.get(x, y)
    }

    /// Clear a centered rectangle to light, making room for a logo
    /// overlay. `height` defaults to `width`.
    ///
    /// The cleared modules eat into the error correction budget, so
    /// combine large cut-outs with a high correction level. Must be
    /// called after encoding and before rendering.
    pub fn clear_center(&mut self, width: usize, height: Option<usize>) {
        let size = self.size();
        let w = width.min(size);
        let h = height.unwrap_or(width).min(size);
        let x0 = (size - w) / 2;
        let y0 = (size - h) / 2;
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                self.matrix.set(x, y, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        let v1 = Version::new(1).unwrap();
        let v40 = Version::new(40).unwrap();
        assert_eq!(v1.size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(v40.size(), 177);
        assert_eq!(v1.length_bits(), 8);
        assert_eq!(Version::new(9).unwrap().length_bits(), 8);
        assert_eq!(Version::new(10).unwrap().length_bits(), 16);
        assert!(Version::new(0).is_none());
        assert!(Version::new(41).is_none());
        assert_eq!(Version::all().count(), 40);
    }

    #[test]
    fn test_ec_level_parse() {
        assert_eq!("L".parse::<ECLevel>().unwrap(), ECLevel::L);
        assert_eq!("m".parse::<ECLevel>().unwrap(), ECLevel::M);
        assert_eq!(" q ".parse::<ECLevel>().unwrap(), ECLevel::Q);
        assert_eq!("H".parse::<ECLevel>().unwrap(), ECLevel::H);
        assert!("X".parse::<ECLevel>().is_err());
        assert!("".parse::<ECLevel>().is_err());
    }

    #[test]
    fn test_ec_level_format_bits() {
        assert_eq!(ECLevel::L.format_bits(), 0b01);
        assert_eq!(ECLevel::M.format_bits(), 0b00);
        assert_eq!(ECLevel::Q.format_bits(), 0b11);
        assert_eq!(ECLevel::H.format_bits(), 0b10);
        assert_eq!(ECLevel::default(), ECLevel::M);
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));

        let mask = MaskPattern::Pattern4;
        assert!(mask.is_masked(0, 0));
        assert!(mask.is_masked(0, 2));
        assert!(!mask.is_masked(0, 3));
        assert!(!mask.is_masked(2, 0));

        assert_eq!(MaskPattern::from_bits(6), Some(MaskPattern::Pattern6));
        assert_eq!(MaskPattern::Pattern7.bits(), 7);
    }

    #[test]
    fn test_clear_center() {
        let mut matrix = BitMatrix::new(21);
        for y in 0..21 {
            for x in 0..21 {
                matrix.set(x, y, true);
            }
        }
        let mut symbol = QRSymbol::new(
            Version::new(1).unwrap(),
            ECLevel::M,
            MaskPattern::Pattern0,
            matrix,
        );
        symbol.clear_center(5, None);
        // 21 - 5 = 16, so the cut-out starts at 8
        for y in 8..13 {
            for x in 8..13 {
                assert!(!symbol.is_dark(x, y));
            }
        }
        assert!(symbol.is_dark(7, 8));
        assert!(symbol.is_dark(13, 8));
        assert!(symbol.is_dark(8, 7));
        assert_eq!(symbol.matrix().count_dark(), 21 * 21 - 25);
    }

    #[test]
    fn test_clear_center_rectangular() {
        let mut matrix = BitMatrix::new(25);
        for y in 0..25 {
            for x in 0..25 {
                matrix.set(x, y, true);
            }
        }
        let mut symbol = QRSymbol::new(
            Version::new(2).unwrap(),
            ECLevel::H,
            MaskPattern::Pattern3,
            matrix,
        );
        symbol.clear_center(7, Some(3));
        assert_eq!(symbol.matrix().count_dark(), 25 * 25 - 21);
        assert!(!symbol.is_dark(9, 11));
        assert!(!symbol.is_dark(15, 13));
        assert!(symbol.is_dark(9, 10));
    }
}
