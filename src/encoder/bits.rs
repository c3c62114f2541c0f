//! MSB-first bit buffer for assembling the data code stream.

/// Append-only bit buffer backed by bytes, most significant bit first
#[derive(Debug, Clone, Default)]
pub(crate) struct BitBuffer {
    bytes: Vec<u8>,
    length: usize,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the lowest `bits` bits of `value`, most significant first
    pub fn put(&mut self, value: u32, bits: usize) {
        for i in 0..bits {
            self.put_bit((value >> (bits - i - 1)) & 1 == 1);
        }
    }

    /// Append a single bit
    pub fn put_bit(&mut self, bit: bool) {
        if self.length == self.bytes.len() * 8 {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[self.length / 8] |= 0x80 >> (self.length % 8);
        }
        self.length += 1;
    }

    /// Length in bits
    pub fn len(&self) -> usize {
        self.length
    }

    /// The filled bytes; the last byte is zero-padded on the right
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_msb_first() {
        let mut buffer = BitBuffer::new();
        buffer.put(0b0100, 4);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.bytes(), &[0x40]);

        buffer.put(0x03, 8);
        assert_eq!(buffer.len(), 12);
        assert_eq!(buffer.bytes(), &[0x40, 0x30]);
    }

    #[test]
    fn test_put_bit_crosses_bytes() {
        let mut buffer = BitBuffer::new();
        for i in 0..9 {
            buffer.put_bit(i % 2 == 0);
        }
        assert_eq!(buffer.len(), 9);
        assert_eq!(buffer.bytes(), &[0b10101010, 0b10000000]);
    }

    #[test]
    fn test_byte_mode_header() {
        // mode indicator, 8-bit count, payload: the stream for "ABC"
        let mut buffer = BitBuffer::new();
        buffer.put(0b0100, 4);
        buffer.put(3, 8);
        for &b in b"ABC" {
            buffer.put(b as u32, 8);
        }
        assert_eq!(buffer.bytes(), &[0x40, 0x34, 0x14, 0x24, 0x30]);
        assert_eq!(buffer.len(), 36);
    }
}
