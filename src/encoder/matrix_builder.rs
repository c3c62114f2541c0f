//! Function pattern placement and codeword module mapping.

use crate::encoder::format;
use crate::models::{BitMatrix, ECLevel, MaskPattern, Version};

/// Three-state module grid used while assembling a symbol. `None` cells
/// are still free for data, `Some` cells belong to function patterns or
/// already mapped codeword bits.
#[derive(Debug, Clone)]
struct ModuleGrid {
    size: usize,
    cells: Vec<Option<bool>>,
}

impl ModuleGrid {
    fn new(size: usize) -> Self {
        ModuleGrid {
            size,
            cells: vec![None; size * size],
        }
    }

    fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.cells[y * self.size + x]
    }

    fn set(&mut self, x: usize, y: usize, dark: bool) {
        self.cells[y * self.size + x] = Some(dark);
    }

    /// Collapses the grid into a bit matrix. Every cell must have been
    /// assigned by the time this runs.
    fn to_matrix(&self) -> BitMatrix {
        let mut matrix = BitMatrix::new(self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                let cell = self.get(x, y);
                debug_assert!(cell.is_some(), "unassigned module at ({x}, {y})");
                matrix.set(x, y, cell.unwrap_or(false));
            }
        }
        matrix
    }
}

/// Row and column coordinates shared by the alignment pattern centers
/// of a version
pub(crate) fn alignment_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let count = v / 7 + 2;
    // Version 32 is the one row where the even rounding rule misses.
    let step = if v == 32 {
        26
    } else {
        (4 * v + 2 * count + 1) / (2 * count - 2) * 2
    };
    let mut positions = vec![6];
    let mut pos = version.size() - 7;
    for _ in 1..count {
        positions.insert(1, pos);
        pos -= step;
    }
    positions
}

/// Places the function patterns of a version and maps codeword bits
/// into the remaining free modules. Cloning a builder reuses the placed
/// patterns across mask trials.
#[derive(Debug, Clone)]
pub(crate) struct MatrixBuilder {
    version: Version,
    grid: ModuleGrid,
}

impl MatrixBuilder {
    /// Grid with finder, alignment and timing patterns placed and the
    /// format and version areas reserved as light modules.
    pub fn base(version: Version) -> Self {
        let size = version.size();
        let mut builder = MatrixBuilder {
            version,
            grid: ModuleGrid::new(size),
        };
        builder.place_finder(0, 0);
        builder.place_finder(size - 7, 0);
        builder.place_finder(0, size - 7);
        builder.place_alignment();
        builder.place_timing();
        builder.set_format(None);
        builder.set_version(None);
        builder
    }

    fn size(&self) -> usize {
        self.grid.size
    }

    /// Finder pattern with its separator, anchored at a corner. The
    /// probe runs one module past each edge and clips at the borders.
    fn place_finder(&mut self, row: usize, col: usize) {
        let size = self.size() as i32;
        for r in -1i32..=7 {
            let y = row as i32 + r;
            if y < 0 || y >= size {
                continue;
            }
            for c in -1i32..=7 {
                let x = col as i32 + c;
                if x < 0 || x >= size {
                    continue;
                }
                let dark = ((0..=6).contains(&r) && (c == 0 || c == 6))
                    || ((0..=6).contains(&c) && (r == 0 || r == 6))
                    || ((2..=4).contains(&r) && (2..=4).contains(&c));
                self.grid.set(x as usize, y as usize, dark);
            }
        }
    }

    fn place_alignment(&mut self) {
        let positions = alignment_positions(self.version);
        for &row in &positions {
            for &col in &positions {
                // Centers that fall into a finder area are dropped.
                if self.grid.get(col, row).is_some() {
                    continue;
                }
                for r in -2i32..=2 {
                    for c in -2i32..=2 {
                        let dark = r.abs() == 2 || c.abs() == 2 || (r == 0 && c == 0);
                        let x = (col as i32 + c) as usize;
                        let y = (row as i32 + r) as usize;
                        self.grid.set(x, y, dark);
                    }
                }
            }
        }
    }

    fn place_timing(&mut self) {
        let size = self.size();
        for i in 8..size - 8 {
            if self.grid.get(6, i).is_none() {
                self.grid.set(6, i, i % 2 == 0);
            }
            if self.grid.get(i, 6).is_none() {
                self.grid.set(i, 6, i % 2 == 0);
            }
        }
    }

    /// Writes the 15-bit format word into both copies of the format
    /// area. `None` reserves the cells as light modules, which is how
    /// mask trials are scored.
    fn set_format(&mut self, word: Option<u32>) {
        let size = self.size();
        for i in 0..15 {
            let dark = word.is_some_and(|bits| (bits >> i) & 1 == 1);
            let row = if i < 6 {
                i
            } else if i < 8 {
                i + 1
            } else {
                size - 15 + i
            };
            self.grid.set(8, row, dark);
        }
        for i in 0..15 {
            let dark = word.is_some_and(|bits| (bits >> i) & 1 == 1);
            let col = if i < 8 {
                size - 1 - i
            } else if i < 9 {
                7
            } else {
                14 - i
            };
            self.grid.set(col, 8, dark);
        }
        // The module above the bottom-left finder is always dark in the
        // finished symbol.
        self.grid.set(8, size - 8, word.is_some());
    }

    /// Writes the 18-bit version word into both copies of the version
    /// area. Versions below 7 have no version area.
    fn set_version(&mut self, word: Option<u32>) {
        if self.version.number() < 7 {
            return;
        }
        let size = self.size();
        for i in 0..18 {
            let dark = word.is_some_and(|bits| (bits >> i) & 1 == 1);
            self.grid.set(i % 3 + size - 11, i / 3, dark);
            self.grid.set(i / 3, i % 3 + size - 11, dark);
        }
    }

    /// Fills in the real format word for the chosen level and mask
    pub fn write_format(&mut self, level: ECLevel, mask: MaskPattern) {
        self.set_format(Some(format::format_info(level, mask)));
    }

    /// Fills in the real version word, present from version 7 up
    pub fn write_version_info(&mut self) {
        self.set_version(Some(format::version_info(self.version)));
    }

    /// Maps codeword bits into the free modules, two columns at a time
    /// from the right edge, alternating upward and downward, applying
    /// the mask pattern as it goes.
    pub fn map_data(&mut self, data: &[u8], mask: MaskPattern) {
        let size = self.size() as isize;
        let mut inc: isize = -1;
        let mut row: isize = size - 1;
        let mut bit_index: i32 = 7;
        let mut byte_index = 0usize;
        let mut col: isize = size - 1;
        while col > 0 {
            // The vertical timing column is not part of the walk.
            if col == 6 {
                col -= 1;
            }
            loop {
                for c in 0..2isize {
                    let x = (col - c) as usize;
                    let y = row as usize;
                    if self.grid.get(x, y).is_none() {
                        let mut dark = false;
                        if byte_index < data.len() {
                            dark = (data[byte_index] >> bit_index) & 1 == 1;
                        }
                        if mask.is_masked(y, x) {
                            dark = !dark;
                        }
                        self.grid.set(x, y, dark);
                        bit_index -= 1;
                        if bit_index == -1 {
                            byte_index += 1;
                            bit_index = 7;
                        }
                    }
                }
                row += inc;
                if row < 0 || row >= size {
                    row -= inc;
                    inc = -inc;
                    break;
                }
            }
            col -= 2;
        }
    }

    /// Finished matrix. Panics in debug builds if any module was never
    /// assigned.
    pub fn to_matrix(&self) -> BitMatrix {
        self.grid.to_matrix()
    }
}
