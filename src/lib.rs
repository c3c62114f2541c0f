//! qr_svg - QR code generation with contour-traced SVG output
//!
//! A pure Rust QR code encoder and vector renderer. Content is encoded as a
//! byte mode symbol (versions 1-40, Model 2) and the dark modules are traced
//! into closed SVG path contours with optional rounded corners, circular
//! finder markers and logo cut-outs.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Plain-text matrix rendering for logs and tests
pub mod debug;
/// QR code encoding modules (segments, error correction, masking)
pub mod encoder;
/// Error and result types shared across the crate
pub mod error;
/// Core data structures (QRSymbol, BitMatrix, Point, etc.)
pub mod models;
/// SVG rendering modules (region tracing, contour chaining, path output)
pub mod renderer;

pub use encoder::encode;
pub use error::{Error, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, Point, QRSymbol, Version};
pub use renderer::{Overlay, RenderOptions, SvgRenderer, render};

/// Options for the one-call [`svg`] function, covering both the encoding
/// and the rendering side.
#[derive(Debug, Default)]
pub struct SvgOptions {
    /// Error correction level of the symbol
    pub ec_level: ECLevel,
    /// Clear a centered square of this many modules before rendering,
    /// leaving room for a logo overlay
    pub clear_center: Option<usize>,
    /// Output options forwarded to the renderer
    pub render: RenderOptions,
}

/// Encode `content` and render it straight into an SVG document.
///
/// # Example
/// ```
/// use qr_svg::{SvgOptions, svg};
///
/// let document = svg("https://example.com", SvgOptions::default())?;
/// assert!(document.starts_with("<svg"));
/// # Ok::<(), qr_svg::Error>(())
/// ```
pub fn svg(content: &str, options: SvgOptions) -> Result<String> {
    // Reject a bad output size before doing any encoding work.
    if !(options.render.size > 0.0) {
        return Err(Error::InvalidSize {
            size: options.render.size,
        });
    }
    let mut symbol = encode(content, options.ec_level)?;
    if let Some(width) = options.clear_center {
        symbol.clear_center(width, None);
    }
    render(&symbol, options.render)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_defaults() {
        let document = svg("https://example.com", SvgOptions::default()).unwrap();
        assert!(document.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(document.ends_with("</svg>"));
        assert!(document.contains("width=\"256\""));
    }

    #[test]
    fn test_svg_clear_center() {
        let plain = svg("ABC", SvgOptions::default()).unwrap();
        let cleared = svg(
            "ABC",
            SvgOptions {
                ec_level: ECLevel::H,
                clear_center: Some(7),
                ..SvgOptions::default()
            },
        )
        .unwrap();
        assert_ne!(plain, cleared);
    }

    #[test]
    fn test_svg_empty_content() {
        assert_eq!(svg("", SvgOptions::default()), Err(Error::EmptyContent));
    }

    #[test]
    fn test_svg_rejects_size_before_encoding() {
        let options = SvgOptions {
            render: RenderOptions {
                size: -4.0,
                ..RenderOptions::default()
            },
            ..SvgOptions::default()
        };
        assert_eq!(svg("ABC", options), Err(Error::InvalidSize { size: -4.0 }));
    }
}
