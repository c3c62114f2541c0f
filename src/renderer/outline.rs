//! Border segment extraction and contour chaining.

use crate::models::Point;
use crate::renderer::cells::{self, RegionMap};

/// Travel direction of a segment, named start to end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dir {
    /// West to east
    We,
    /// East to west
    Ew,
    /// North to south
    Ns,
    /// South to north
    Sn,
}

/// One unit edge on the border between a dark module and a light or
/// outside neighbor, tagged with the module it was emitted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment {
    /// Start lattice point
    pub p1: Point,
    /// End lattice point
    pub p2: Point,
    /// Source module, in module coordinates
    pub cell: Point,
}

impl Segment {
    /// Travel direction from p1 to p2
    pub fn dir(&self) -> Dir {
        if self.p1.x == self.p2.x {
            if self.p1.y > self.p2.y { Dir::Sn } else { Dir::Ns }
        } else if self.p1.x > self.p2.x {
            Dir::Ew
        } else {
            Dir::We
        }
    }
}

/// A closed loop of oriented segments
pub(crate) type Contour = Vec<Segment>;

/// Collects the border segments of every region, pooled by region id.
/// Modules inside the finder areas contribute nothing when
/// `skip_corners` is set, which can leave a pool empty.
pub(crate) fn region_segments(regions: &RegionMap, skip_corners: bool) -> Vec<Vec<Segment>> {
    let size = regions.size();
    let mut pools: Vec<Vec<Segment>> = vec![Vec::new(); regions.count() as usize];
    for y in 0..size {
        for x in 0..size {
            let Some(id) = regions.get(x as isize, y as isize) else {
                continue;
            };
            if skip_corners && cells::is_corner(x, y, size) {
                continue;
            }
            for (side, (dx, dy)) in cells::NEIGHBORS.iter().enumerate() {
                let neighbor = regions.get(x as isize + dx, y as isize + dy);
                if neighbor != Some(id) {
                    pools[id as usize].push(edge_segment(x, y, side));
                }
            }
        }
    }
    pools
}

/// Edge of the module (x, y) facing the given neighbor side, with its
/// endpoints in lattice coordinates
fn edge_segment(x: usize, y: usize, side: usize) -> Segment {
    let (x, y) = (x as i32, y as i32);
    let (p1, p2) = match side {
        // up
        0 => (Point::new(x, y), Point::new(x + 1, y)),
        // left
        1 => (Point::new(x, y), Point::new(x, y + 1)),
        // down
        2 => (Point::new(x, y + 1), Point::new(x + 1, y + 1)),
        // right
        _ => (Point::new(x + 1, y), Point::new(x + 1, y + 1)),
    };
    Segment {
        p1,
        p2,
        cell: Point::new(x, y),
    }
}

/// Chains a non-empty segment pool into the region's outer contour and
/// any hole contours. The first pool segment seeds the outer loop;
/// leftover segments belong to holes, which are reversed so they wind
/// against the outer contour.
pub(crate) fn chain_region(pool: &[Segment]) -> (Contour, Vec<Contour>) {
    debug_assert!(!pool.is_empty());
    let mut processed = vec![false; pool.len()];
    let outline = chain_from(pool, &mut processed, 0);
    let mut crops = Vec::new();
    while let Some(start) = processed.iter().position(|&done| !done) {
        let mut crop = chain_from(pool, &mut processed, start);
        crop.reverse();
        for seg in &mut crop {
            std::mem::swap(&mut seg.p1, &mut seg.p2);
        }
        crops.push(crop);
    }
    (outline, crops)
}

/// Walks one closed loop starting from `start`, orienting each picked
/// segment so it continues from the previous tip.
fn chain_from(pool: &[Segment], processed: &mut [bool], start: usize) -> Contour {
    processed[start] = true;
    let mut result = vec![pool[start]];
    let mut tip = pool[start].p2;
    let mut cell = pool[start].cell;
    loop {
        let mut found: Option<usize> = None;
        for (i, seg) in pool.iter().enumerate() {
            if processed[i] || (seg.p1 != tip && seg.p2 != tip) {
                continue;
            }
            // A segment from the same source module wins outright,
            // otherwise the first match in pool order is kept. This
            // keeps walks through degree-four lattice points on the
            // loop they entered from.
            if seg.cell == cell {
                found = Some(i);
                break;
            }
            if found.is_none() {
                found = Some(i);
            }
        }
        let Some(i) = found else { break };
        processed[i] = true;
        let mut seg = pool[i];
        if seg.p1 != tip {
            std::mem::swap(&mut seg.p1, &mut seg.p2);
        }
        tip = seg.p2;
        cell = seg.cell;
        result.push(seg);
    }
    result
}
