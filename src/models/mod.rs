pub mod matrix;
pub mod point;
pub mod symbol;

pub use matrix::BitMatrix;
pub use point::Point;
pub use symbol::{ECLevel, MaskPattern, QRSymbol, Version};
