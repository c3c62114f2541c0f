//! Plain-text rendering of module matrices for logs and tests.

use crate::models::BitMatrix;

/// Render a matrix as text art, one row per line.
///
/// Dark modules become `#` and light modules `.`, which makes encoder
/// output easy to eyeball in a terminal and to diff in regression tests.
pub fn matrix_to_text(matrix: &BitMatrix) -> String {
    let size = matrix.size();
    let mut out = String::with_capacity(size * (size + 1));
    for y in 0..size {
        for x in 0..size {
            out.push(if matrix.get(x, y) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_to_text() {
        let matrix = BitMatrix::from_strings(&["#.", ".#"]);
        assert_eq!(matrix_to_text(&matrix), "#.\n.#\n");
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = BitMatrix::new(0);
        assert_eq!(matrix_to_text(&matrix), "");
    }
}
