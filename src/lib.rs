//! Color-based image segmentation.
//!
//! Scans an image pixel by pixel in raster order, groups adjacent pixels into
//! clusters of perceptually similar color, and recolors each cluster with a
//! representative color (a posterization / region-quantization effect).
//!
//! Two similarity variants share the same single-pass engine:
//! - per-channel threshold windows in an HSL space scaled to 0–100 on all
//!   three channels, with circular hue wraparound;
//! - a CIE94-style ΔE in CIE L*a*b* compared against a single tolerance.
//!
//! The engine never merges clusters: perceptually identical regions that are
//! spatially disconnected during the scan keep distinct cluster ids.

pub mod color;
pub mod recolor;
pub mod segment;
pub mod similarity;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export key types for easy usage
pub use color::{Hsl, Lab, Rgb};
pub use recolor::{posterize, representative, representative_colors};
pub use segment::{segment, Pixel, Segmentation, SimilarityMethod};
pub use similarity::{HslThresholds, LabTolerance};

pub mod prelude {
    pub use crate::color::{Hsl, Lab, Rgb};
    pub use crate::recolor::{posterize, representative, representative_colors};
    pub use crate::segment::{segment, Pixel, Segmentation, SimilarityMethod};
    pub use crate::similarity::{HslThresholds, LabTolerance};
}
