//! Dark module region detection.

use crate::models::BitMatrix;

/// Neighbor offsets in (dx, dy) order: up, left, down, right
pub(crate) const NEIGHBORS: [(isize, isize); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// Labels for the 4-connected groups of dark modules, numbered in row
/// scan discovery order starting at zero.
#[derive(Debug)]
pub(crate) struct RegionMap {
    size: usize,
    ids: Vec<Option<u32>>,
    count: u32,
}

impl RegionMap {
    /// Assigns every dark module its region id with an explicit stack
    /// flood fill.
    pub fn build(matrix: &BitMatrix) -> Self {
        let size = matrix.size();
        let mut ids: Vec<Option<u32>> = vec![None; size * size];
        let mut count = 0u32;
        let mut stack = Vec::new();
        for y in 0..size {
            for x in 0..size {
                if !matrix.get(x, y) || ids[y * size + x].is_some() {
                    continue;
                }
                ids[y * size + x] = Some(count);
                stack.push((x, y));
                while let Some((cx, cy)) = stack.pop() {
                    for (dx, dy) in NEIGHBORS {
                        let nx = cx as isize + dx;
                        let ny = cy as isize + dy;
                        if nx < 0 || ny < 0 || nx >= size as isize || ny >= size as isize {
                            continue;
                        }
                        let (nx, ny) = (nx as usize, ny as usize);
                        if matrix.get(nx, ny) && ids[ny * size + nx].is_none() {
                            ids[ny * size + nx] = Some(count);
                            stack.push((nx, ny));
                        }
                    }
                }
                count += 1;
            }
        }
        RegionMap { size, ids, count }
    }

    /// Side length of the underlying matrix
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of regions found
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Region id at (x, y). `None` for light modules and anything
    /// outside the matrix.
    pub fn get(&self, x: isize, y: isize) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.size as isize || y >= self.size as isize {
            return None;
        }
        self.ids[y as usize * self.size + x as usize]
    }
}

/// Whether (x, y) lies inside one of the three 7x7 finder areas
pub(crate) fn is_corner(x: usize, y: usize, size: usize) -> bool {
    let far = size.saturating_sub(7);
    (x < 7 && y < 7) || (x >= far && y < 7) || (x < 7 && y >= far)
}
