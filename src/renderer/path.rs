//! SVG path data generation from chained contours.
//!
//! Coordinates print through the standard float formatter, which emits
//! the shortest string that parses back to the same value.

use crate::models::Point;
use crate::renderer::RenderOptions;
use crate::renderer::cells;
use crate::renderer::outline::{Contour, Dir, Segment};

/// Builds path data strings for one symbol at a fixed scale.
#[derive(Debug)]
pub(crate) struct PathBuilder {
    point_size: f64,
    matrix_size: usize,
    radius_factor: f64,
    corner_radius_factor: Option<f64>,
    round_outer: bool,
    round_inner: bool,
}

impl PathBuilder {
    /// Captures the scale and rounding options. Radius factors are
    /// clamped to at most ten half-modules here.
    pub fn new(options: &RenderOptions, point_size: f64, matrix_size: usize) -> Self {
        PathBuilder {
            point_size,
            matrix_size,
            radius_factor: options.radius_factor.clamp(0.0, 10.0),
            corner_radius_factor: options
                .corner_block_radius_factor
                .map(|factor| factor.clamp(0.0, 10.0)),
            round_outer: options.round_outer_corners,
            round_inner: options.round_inner_corners,
        }
    }

    /// Corner radius for a contour point, taken from the module the
    /// segment was emitted from. Finder area modules use the dedicated
    /// factor when one is set.
    fn corner_radius(&self, cell: Point) -> f64 {
        let mut factor = self.radius_factor;
        if let Some(corner_factor) = self.corner_radius_factor {
            if cells::is_corner(cell.x as usize, cell.y as usize, self.matrix_size) {
                factor = corner_factor;
            }
        }
        (self.point_size / 2.0) * factor
    }

    /// Path step for one contour corner: a line up to the rounding
    /// start and a quadratic curve through the corner point. Corners
    /// whose rounding is disabled fall back to a plain line.
    fn sub_path(&self, seg: &Segment, prev: &Segment) -> String {
        let cr = self.corner_radius(seg.cell);
        let x = seg.p1.x as f64 * self.point_size;
        let y = seg.p1.y as f64 * self.point_size;
        match (prev.dir(), seg.dir()) {
            // Convex corners, outer side of the contour.
            (Dir::We, Dir::Ns) if self.round_outer => {
                format!("L{} {} Q{} {} {} {}", x - cr, y, x, y, x, y + cr)
            }
            (Dir::Ns, Dir::Ew) if self.round_outer => {
                format!("L{} {} Q{} {} {} {}", x, y - cr, x, y, x - cr, y)
            }
            (Dir::Ew, Dir::Sn) if self.round_outer => {
                format!("L{} {} Q{} {} {} {}", x + cr, y, x, y, x, y - cr)
            }
            (Dir::Sn, Dir::We) if self.round_outer => {
                format!("L{} {} Q{} {} {} {}", x, y + cr, x, y, x + cr, y)
            }
            // Concave corners, where the contour bends into the region.
            (Dir::Sn, Dir::Ew) if self.round_inner => {
                format!("L{} {} Q{} {} {} {}", x, y + cr, x, y, x - cr, y)
            }
            (Dir::Ew, Dir::Ns) if self.round_inner => {
                format!("L{} {} Q{} {} {} {}", x + cr, y, x, y, x, y + cr)
            }
            (Dir::Ns, Dir::We) if self.round_inner => {
                format!("L{} {} Q{} {} {} {}", x, y - cr, x, y, x + cr, y)
            }
            (Dir::We, Dir::Sn) if self.round_inner => {
                format!("L{} {} Q{} {} {} {}", x - cr, y, x, y, x, y - cr)
            }
            _ => format!("L{} {} ", x, y),
        }
    }

    /// Path data for a whole region: the outer contour followed by its
    /// hole contours, each as one closed subpath. Straight runs are
    /// collapsed, corners go through [`Self::sub_path`], and the final
    /// segment always closes back to the subpath start.
    pub fn region_path(&self, outline: &Contour, crops: &[Contour]) -> String {
        let mut path = String::new();
        for (line_idx, line) in std::iter::once(outline).chain(crops.iter()).enumerate() {
            let last = line.len() - 1;
            for (seg_idx, seg) in line.iter().enumerate() {
                let prev = if seg_idx > 0 {
                    &line[seg_idx - 1]
                } else {
                    &line[last]
                };
                if seg_idx == 0 {
                    let x = seg.p1.x as f64 * self.point_size;
                    let y = seg.p1.y as f64 * self.point_size;
                    let cr = self.corner_radius(seg.cell);
                    if self.round_outer {
                        if line_idx == 0 {
                            path.push_str(&format!("M{} {} ", x + cr, y));
                        } else {
                            path.push_str(&format!("M{} {} ", x, y + cr));
                        }
                    } else {
                        path.push_str(&format!("M{} {} ", x, y));
                    }
                } else if seg_idx == last {
                    let next = &line[0];
                    path.push_str(&self.sub_path(seg, prev));
                    path.push_str(&self.sub_path(next, seg));
                    path.push_str("Z ");
                } else if prev.dir() != seg.dir() {
                    path.push_str(&self.sub_path(seg, prev));
                }
            }
        }
        path
    }

    /// Path data for one circular finder marker: a filled ring and a
    /// center dot, drawn as arc pairs with alternating sweeps so the
    /// ring hole stays open. `(fx, fy)` is the top-left module of the
    /// 7x7 finder area.
    pub fn marker_path(&self, fx: usize, fy: usize) -> String {
        let ps = self.point_size;
        let cx = (fx as f64 + 3.5) * ps;
        let cy = (fy as f64 + 3.5) * ps;
        let mut d = circle_subpath(cx, cy, 3.5 * ps, 1);
        d.push_str(&circle_subpath(cx, cy, 2.5 * ps, 0));
        d.push_str(&circle_subpath(cx, cy, 1.5 * ps, 1));
        d
    }
}

/// Full circle as two half arcs
fn circle_subpath(cx: f64, cy: f64, r: f64, sweep: u8) -> String {
    format!(
        "M{} {} A{} {} 0 1 {} {} {} A{} {} 0 1 {} {} {} Z ",
        cx - r,
        cy,
        r,
        r,
        sweep,
        cx + r,
        cy,
        r,
        r,
        sweep,
        cx - r,
        cy
    )
}
