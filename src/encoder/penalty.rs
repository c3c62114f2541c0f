//! Mask evaluation scoring.

use crate::models::BitMatrix;

/// The dark-light sequence scored by the third rule
const FINDER_SEQUENCE: [bool; 7] = [true, false, true, true, true, false, true];

/// Penalty score of a complete symbol, lower is better. Four rules
/// contribute: same-color runs of five or more, single-color 2x2
/// blocks, finder-like sequences in rows or columns, and the overall
/// dark module balance.
pub(crate) fn score(matrix: &BitMatrix) -> u32 {
    let n = matrix.size();
    if n == 0 {
        return 0;
    }
    let mut score = 0u32;

    // Rule 1: runs of five or more same-colored modules.
    for y in 0..n {
        let mut run_color = matrix.get(0, y);
        let mut run_len = 1u32;
        for x in 1..n {
            if matrix.get(x, y) == run_color {
                run_len += 1;
            } else {
                if run_len >= 5 {
                    score += 3 + run_len - 5;
                }
                run_color = matrix.get(x, y);
                run_len = 1;
            }
        }
        if run_len >= 5 {
            score += 3 + run_len - 5;
        }
    }
    for x in 0..n {
        let mut run_color = matrix.get(x, 0);
        let mut run_len = 1u32;
        for y in 1..n {
            if matrix.get(x, y) == run_color {
                run_len += 1;
            } else {
                if run_len >= 5 {
                    score += 3 + run_len - 5;
                }
                run_color = matrix.get(x, y);
                run_len = 1;
            }
        }
        if run_len >= 5 {
            score += 3 + run_len - 5;
        }
    }

    // Rule 2: 2x2 blocks of a single color.
    for y in 0..n - 1 {
        for x in 0..n - 1 {
            let c = matrix.get(x, y);
            if matrix.get(x + 1, y) == c
                && matrix.get(x, y + 1) == c
                && matrix.get(x + 1, y + 1) == c
            {
                score += 3;
            }
        }
    }

    // Rule 3: finder-like sequences in rows and columns.
    for y in 0..n {
        for x in 0..n.saturating_sub(6) {
            if (0..7).all(|k| matrix.get(x + k, y) == FINDER_SEQUENCE[k]) {
                score += 40;
            }
        }
    }
    for x in 0..n {
        for y in 0..n.saturating_sub(6) {
            if (0..7).all(|k| matrix.get(x, y + k) == FINDER_SEQUENCE[k]) {
                score += 40;
            }
        }
    }

    // Rule 4: deviation of the dark module share from one half, in
    // five percent steps.
    let dark = matrix.count_dark() as u32;
    let percent = dark * 100 / (n * n) as u32;
    score += 10 * (percent.abs_diff(50) / 5);

    score
}
