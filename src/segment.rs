//! Single-pass raster-scan clustering.
//!
//! The engine walks the pixel grid in row-major order and assigns each pixel
//! to the cluster of the first already-visited neighbor (left, top, top-left)
//! that passes the active similarity predicate, or starts a new cluster.
//! Clusters are never merged afterwards: two same-colored regions separated
//! during the scan keep distinct ids for the lifetime of the result.

use crate::color::{Hsl, Lab, Rgb};
use crate::similarity::{HslThresholds, LabTolerance};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Similarity variant driving the scan.
///
/// The two variants check neighbors in different precedence orders (see
/// [`segment`]); both orders are part of the observable contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimilarityMethod {
    /// Per-channel threshold windows in 0–100 HSL space
    Hsl(HslThresholds),
    /// CIE94 perceptual distance in Lab space
    Lab(LabTolerance),
}

impl Default for SimilarityMethod {
    fn default() -> Self {
        SimilarityMethod::Lab(LabTolerance::default())
    }
}

/// One grid cell after the pass: coordinates, source color, cluster id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pixel {
    pub x: usize,
    pub y: usize,
    pub rgb: Rgb,
    pub cluster: usize,
}

/// Result of one clustering pass.
///
/// `pixels` is the full grid in scan order (`y * width + x`). `clusters` is
/// indexed by cluster id; each entry lists member indices into `pixels` in
/// discovery order, which is scan order within a cluster but not spatial
/// order.
#[derive(Clone, Debug, Default)]
pub struct Segmentation {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Pixel>,
    pub clusters: Vec<Vec<usize>>,
}

impl Segmentation {
    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    pub fn cluster_at(&self, x: usize, y: usize) -> usize {
        self.pixels[y * self.width + x].cluster
    }
}

/// Already-visited neighbor of the pixel being classified.
#[derive(Clone, Copy, Debug)]
enum Neighbor {
    Left,
    Top,
    TopLeft,
}

impl Neighbor {
    /// Flat index of this neighbor of (x, y), if it is inside the grid.
    fn index(self, x: usize, y: usize, width: usize) -> Option<usize> {
        match self {
            Neighbor::Left => (x > 0).then(|| y * width + x - 1),
            Neighbor::Top => (y > 0).then(|| (y - 1) * width + x),
            Neighbor::TopLeft => (x > 0 && y > 0).then(|| (y - 1) * width + x - 1),
        }
    }
}

// The two variants inspect the same three neighbors in different orders, and
// ties are broken purely by that order, not by closeness.
const HSL_PRECEDENCE: [Neighbor; 3] = [Neighbor::Left, Neighbor::Top, Neighbor::TopLeft];
const LAB_PRECEDENCE: [Neighbor; 3] = [Neighbor::TopLeft, Neighbor::Left, Neighbor::Top];

/// Cluster a `width` × `height` grid of RGB samples.
///
/// `pixels` must hold exactly `width * height` samples in row-major order.
/// An empty grid (either dimension zero) yields an empty segmentation.
pub fn segment(pixels: &[Rgb], width: usize, height: usize, method: &SimilarityMethod) -> Segmentation {
    assert_eq!(
        pixels.len(),
        width * height,
        "pixel buffer length must equal width * height"
    );

    match method {
        SimilarityMethod::Hsl(thresholds) => {
            let colors = batch_to_hsl(pixels);
            let thresholds = *thresholds;
            scan(pixels, width, height, &colors, HSL_PRECEDENCE, move |n, c| {
                thresholds.matches(n, c)
            })
        }
        SimilarityMethod::Lab(tolerance) => {
            let colors = batch_to_lab(pixels);
            let tolerance = *tolerance;
            scan(pixels, width, height, &colors, LAB_PRECEDENCE, move |n, c| {
                tolerance.matches(n, c)
            })
        }
    }
}

/// The sequential pass. Each classification reads up to three already
/// computed neighbors, so the loop order is load-bearing and never
/// parallelized; only the up-front color conversion is batched.
fn scan<C, F>(
    rgb: &[Rgb],
    width: usize,
    height: usize,
    colors: &[C],
    precedence: [Neighbor; 3],
    matches: F,
) -> Segmentation
where
    C: Copy,
    F: Fn(C, C) -> bool,
{
    let mut pixels: Vec<Pixel> = Vec::with_capacity(rgb.len());
    let mut clusters: Vec<Vec<usize>> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let color = colors[idx];

            let mut assigned = None;
            for neighbor in precedence {
                if let Some(n_idx) = neighbor.index(x, y, width) {
                    if matches(colors[n_idx], color) {
                        assigned = Some(pixels[n_idx].cluster);
                        break;
                    }
                }
            }

            let cluster = match assigned {
                Some(id) => id,
                None => {
                    clusters.push(Vec::new());
                    clusters.len() - 1
                }
            };

            clusters[cluster].push(idx);
            pixels.push(Pixel {
                x,
                y,
                rgb: rgb[idx],
                cluster,
            });
        }
    }

    Segmentation {
        width,
        height,
        pixels,
        clusters,
    }
}

fn batch_to_hsl(pixels: &[Rgb]) -> Vec<Hsl> {
    #[cfg(feature = "parallel")]
    {
        pixels.par_iter().map(|p| p.to_hsl()).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        pixels.iter().map(|p| p.to_hsl()).collect()
    }
}

fn batch_to_lab(pixels: &[Rgb]) -> Vec<Lab> {
    #[cfg(feature = "parallel")]
    {
        pixels.par_iter().map(|p| p.to_lab()).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        pixels.iter().map(|p| p.to_lab()).collect()
    }
}
