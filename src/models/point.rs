/// Integer point on the module lattice.
///
/// Contour endpoints live on lattice corners, so a matrix of side `n`
/// uses coordinates in `0..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Create a new lattice point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
