/// Compact square bit matrix storing one module per bit
#[derive(Debug, Clone)]
pub struct BitMatrix {
    size: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-light matrix with the given side length
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size + 7) / 8;
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a matrix from text rows, one character per module.
    ///
    /// `#` marks a dark module, anything else is light. Rows shorter than
    /// the side length are padded with light modules.
    pub fn from_strings(rows: &[&str]) -> Self {
        let mut matrix = Self::new(rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                matrix.set(x, y, ch == '#');
            }
        }
        matrix
    }

    /// Get the side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get module at (x, y); out-of-bounds reads as light
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        let index = y * self.size + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set module at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.size || y >= self.size {
            return;
        }
        let index = y * self.size + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Count dark modules
    pub fn count_dark(&self) -> usize {
        // trailing bits of the last byte are never set
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}
