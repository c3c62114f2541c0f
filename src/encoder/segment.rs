//! Byte mode content encoding and version selection.

use crate::encoder::blocks;
use crate::error::{Error, Result};
use crate::models::{ECLevel, Version};

/// Characters that count as a single byte when estimating encoded length
fn is_unreserved(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            ';' | ','
                | '/'
                | '?'
                | ':'
                | '@'
                | '&'
                | '='
                | '+'
                | '$'
                | '-'
                | '_'
                | '.'
                | '!'
                | '~'
                | '*'
                | '\''
                | '('
                | ')'
                | '#'
        )
}

/// Encodes content into byte mode payload bytes. Multi-byte characters
/// use a UTF-8 style scheme with strict range comparisons, so the
/// boundary code points U+0080, U+0800 and U+10000 encode one form
/// shorter than standard UTF-8. A byte order mark is prepended whenever
/// the byte count differs from the character count.
pub(crate) fn content_bytes(content: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(content.len());
    let mut chars = 0usize;
    for ch in content.chars() {
        chars += 1;
        let code = ch as u32;
        if code > 0x10000 {
            bytes.push(0xF0 | ((code & 0x1C0000) >> 18) as u8);
            bytes.push(0x80 | ((code & 0x3F000) >> 12) as u8);
            bytes.push(0x80 | ((code & 0xFC0) >> 6) as u8);
            bytes.push(0x80 | (code & 0x3F) as u8);
        } else if code > 0x800 {
            bytes.push(0xE0 | ((code & 0xF000) >> 12) as u8);
            bytes.push(0x80 | ((code & 0xFC0) >> 6) as u8);
            bytes.push(0x80 | (code & 0x3F) as u8);
        } else if code > 0x80 {
            bytes.push(0xC0 | ((code & 0x7C0) >> 6) as u8);
            bytes.push(0x80 | (code & 0x3F) as u8);
        } else {
            bytes.push(code as u8);
        }
    }
    if bytes.len() != chars {
        let mut with_bom = Vec::with_capacity(bytes.len() + 3);
        with_bom.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
        with_bom.extend_from_slice(&bytes);
        return with_bom;
    }
    bytes
}

/// Upper bound on the encoded byte count, used to pick a version before
/// encoding. Escaped characters count their UTF-8 width and reserve
/// three extra bytes for the byte order mark. The actual encoding never
/// exceeds this estimate.
pub(crate) fn estimated_length(content: &str) -> usize {
    let mut length = 0;
    let mut escaped = false;
    for ch in content.chars() {
        if is_unreserved(ch) {
            length += 1;
        } else {
            escaped = true;
            length += ch.len_utf8();
        }
    }
    if escaped { length + 3 } else { length }
}

/// Smallest version whose byte capacity fits the content at the given
/// error correction level
pub(crate) fn choose_version(content: &str, level: ECLevel) -> Result<Version> {
    let needed = estimated_length(content);
    Version::all()
        .find(|&version| blocks::byte_capacity(version, level) >= needed)
        .ok_or(Error::CapacityExceeded {
            length: needed,
            limit: blocks::byte_capacity(Version::MAX, level),
        })
}
