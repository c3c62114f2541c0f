//! Contour-traced SVG rendering:
//! - Region detection over the dark modules
//! - Border segment chaining into closed contours
//! - Path data with optional corner rounding
//! - Circular finder markers and overlay injection

pub(crate) mod cells;
pub(crate) mod outline;
pub(crate) mod path;

use std::fmt;

use crate::error::{Error, Result};
use crate::models::{BitMatrix, QRSymbol};
use crate::renderer::cells::RegionMap;
use crate::renderer::outline::{chain_region, region_segments};
use crate::renderer::path::PathBuilder;

/// Markup injected next to the generated paths inside the root element.
pub enum Overlay {
    /// A literal markup string inserted as-is
    Markup(String),
    /// A closure building the markup from the renderer, for overlays
    /// that need the computed module pitch or matrix size
    Build(Box<dyn Fn(&SvgRenderer) -> String + Send + Sync>),
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overlay::Markup(markup) => f.debug_tuple("Markup").field(markup).finish(),
            Overlay::Build(_) => f.write_str("Build(..)"),
        }
    }
}

/// Output options for [`SvgRenderer`].
#[derive(Debug)]
pub struct RenderOptions {
    /// Width and height of the document in user units
    pub size: f64,
    /// Corner radius as a share of half a module, at most 10
    pub radius_factor: f64,
    /// Separate radius factor for modules inside the finder areas
    pub corner_block_radius_factor: Option<f64>,
    /// Round corners on the outer side of a contour
    pub round_outer_corners: bool,
    /// Round corners bending into a region
    pub round_inner_corners: bool,
    /// Draw the three finder patterns as circular markers instead of
    /// traced module contours
    pub corner_blocks_as_circles: bool,
    /// Fill color of the root element
    pub fill: String,
    /// Markup placed before the paths
    pub pre_content: Option<Overlay>,
    /// Markup placed after the paths
    pub post_content: Option<Overlay>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            size: 256.0,
            radius_factor: 0.5,
            corner_block_radius_factor: None,
            round_outer_corners: true,
            round_inner_corners: true,
            corner_blocks_as_circles: false,
            fill: "currentColor".to_string(),
            pre_content: None,
            post_content: None,
        }
    }
}

/// Renders a module matrix as a single SVG document. Each 4-connected
/// region of dark modules becomes one path, holes included, so a
/// symbol stays a handful of elements instead of hundreds of rects.
#[derive(Debug)]
pub struct SvgRenderer {
    options: RenderOptions,
    matrix: BitMatrix,
    point_size: f64,
}

impl SvgRenderer {
    /// Validates the options and fixes the module pitch for the given
    /// matrix.
    pub fn new(matrix: &BitMatrix, options: RenderOptions) -> Result<Self> {
        if !(options.size > 0.0) {
            return Err(Error::InvalidSize { size: options.size });
        }
        debug_assert!(matrix.size() > 0);
        let point_size = options.size / matrix.size() as f64;
        tracing::debug!(
            point_size,
            matrix_size = matrix.size(),
            "computed module pitch"
        );
        Ok(SvgRenderer {
            options,
            matrix: matrix.clone(),
            point_size,
        })
    }

    /// Size of one module in user units
    pub fn point_size(&self) -> f64 {
        self.point_size
    }

    /// Side length of the matrix in modules
    pub fn matrix_size(&self) -> usize {
        self.matrix.size()
    }

    /// Builds the SVG document
    pub fn generate(&self) -> String {
        let circles = self.options.corner_blocks_as_circles;
        let regions = RegionMap::build(&self.matrix);
        let pools = region_segments(&regions, circles);
        let builder = PathBuilder::new(&self.options, self.point_size, self.matrix.size());

        let mut paths = Vec::new();
        for pool in &pools {
            // Regions that lie entirely inside the finder areas have
            // no segments when markers replace them.
            if pool.is_empty() {
                continue;
            }
            let (outline, crops) = chain_region(pool);
            paths.push(format!(
                r#"<path d="{}"/>"#,
                builder.region_path(&outline, &crops)
            ));
        }
        if circles {
            let far = self.matrix.size().saturating_sub(7);
            for (fx, fy) in [(0, 0), (0, far), (far, 0)] {
                paths.push(format!(r#"<path d="{}"/>"#, builder.marker_path(fx, fy)));
            }
        }
        tracing::debug!(
            regions = regions.count(),
            paths = paths.len(),
            "traced module regions"
        );

        let pre = self.overlay_markup(&self.options.pre_content);
        let post = self.overlay_markup(&self.options.post_content);
        let size = self.options.size;
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}" fill="{fill}">{pre}{body}{post}</svg>"#,
            size = size,
            fill = self.options.fill,
            pre = pre,
            body = paths.join("\n"),
            post = post,
        )
    }

    fn overlay_markup(&self, overlay: &Option<Overlay>) -> String {
        match overlay {
            None => String::new(),
            Some(Overlay::Markup(markup)) => markup.clone(),
            Some(Overlay::Build(build)) => build(self),
        }
    }
}

/// Renders an encoded symbol to an SVG document
pub fn render(symbol: &QRSymbol, options: RenderOptions) -> Result<String> {
    Ok(SvgRenderer::new(symbol.matrix(), options)?.generate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_size() {
        let matrix = BitMatrix::from_strings(&["#"]);
        let err = SvgRenderer::new(
            &matrix,
            RenderOptions {
                size: 0.0,
                ..RenderOptions::default()
            },
        )
        .unwrap_err();
        assert_eq!(err, Error::InvalidSize { size: 0.0 });

        let err = SvgRenderer::new(
            &matrix,
            RenderOptions {
                size: -12.0,
                ..RenderOptions::default()
            },
        )
        .unwrap_err();
        assert_eq!(err, Error::InvalidSize { size: -12.0 });

        let err = SvgRenderer::new(
            &matrix,
            RenderOptions {
                size: f64::NAN,
                ..RenderOptions::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSize { .. }));
    }

    #[test]
    fn test_point_size() {
        let matrix = BitMatrix::from_strings(&["#.", ".#"]);
        let renderer = SvgRenderer::new(&matrix, RenderOptions::default()).unwrap();
        assert_eq!(renderer.point_size(), 128.0);
        assert_eq!(renderer.matrix_size(), 2);
    }

    #[test]
    fn test_single_module_document() {
        let matrix = BitMatrix::from_strings(&["#"]);
        let svg = SvgRenderer::new(
            &matrix,
            RenderOptions {
                size: 10.0,
                round_outer_corners: false,
                round_inner_corners: false,
                ..RenderOptions::default()
            },
        )
        .unwrap()
        .generate();
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 10 10\" \
             width=\"10\" height=\"10\" fill=\"currentColor\">\
             <path d=\"M0 0 L10 0 L10 10 L0 10 L0 0 Z \"/></svg>"
        );
    }

    #[test]
    fn test_overlays_wrap_paths() {
        let matrix = BitMatrix::from_strings(&["#"]);
        let svg = SvgRenderer::new(
            &matrix,
            RenderOptions {
                size: 10.0,
                round_outer_corners: false,
                round_inner_corners: false,
                pre_content: Some(Overlay::Markup("<g id='pre'/>".to_string())),
                post_content: Some(Overlay::Build(Box::new(|renderer| {
                    format!("<g id='post-{}'/>", renderer.point_size())
                }))),
                ..RenderOptions::default()
            },
        )
        .unwrap()
        .generate();
        assert!(svg.contains("><g id='pre'/><path"), "{svg}");
        assert!(svg.ends_with("<g id='post-10'/></svg>"), "{svg}");
    }

    #[test]
    fn test_separate_regions_make_separate_paths() {
        let matrix = BitMatrix::from_strings(&["#.", ".#"]);
        let svg = SvgRenderer::new(
            &matrix,
            RenderOptions {
                size: 20.0,
                round_outer_corners: false,
                round_inner_corners: false,
                ..RenderOptions::default()
            },
        )
        .unwrap()
        .generate();
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("M0 0 L10 0 L10 10 L0 10 L0 0 Z "));
        assert!(svg.contains("M10 10 L20 10 L20 20 L10 20 L10 10 Z "));
    }
}
