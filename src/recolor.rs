//! Representative-color selection and posterized recoloring of a
//! segmentation result.

use crate::color::Rgb;
use crate::segment::Segmentation;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Representative color of a cluster: the RGB of the member at scan-order
/// index ⌊N/2⌋. This is a scan-sequence midpoint, not a spatial or
/// color-space centroid, so it is biased toward the middle of the cluster's
/// discovery sequence rather than its visual center.
///
/// Panics if `cluster` is out of range. Clusters are never empty: an id is
/// only allocated together with its first member.
pub fn representative(seg: &Segmentation, cluster: usize) -> Rgb {
    let members = &seg.clusters[cluster];
    seg.pixels[members[members.len() / 2]].rgb
}

/// Representative color for every cluster, indexed by cluster id.
pub fn representative_colors(seg: &Segmentation) -> Vec<Rgb> {
    (0..seg.num_clusters())
        .map(|cluster| representative(seg, cluster))
        .collect()
}

/// Recolor every pixel with its cluster's representative color. The output
/// is a row-major RGB buffer with the segmentation's dimensions.
pub fn posterize(seg: &Segmentation) -> Vec<Rgb> {
    let colors = representative_colors(seg);

    #[cfg(feature = "parallel")]
    {
        seg.pixels.par_iter().map(|p| colors[p.cluster]).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        seg.pixels.iter().map(|p| colors[p.cluster]).collect()
    }
}

/// Flatten an RGB buffer to RGBA bytes, alpha forced opaque.
pub fn to_rgba_bytes(pixels: &[Rgb]) -> Vec<u8> {
    pixels.iter().flat_map(|p| [p.r, p.g, p.b, 255]).collect()
}

/// Convert an RGB buffer to an `image::RgbImage` (requires 'native' feature)
#[cfg(feature = "native")]
pub fn to_image(pixels: &[Rgb], width: u32, height: u32) -> image::RgbImage {
    let mut img = image::RgbImage::new(width, height);
    for (i, pixel) in pixels.iter().enumerate() {
        let x = (i as u32) % width;
        let y = (i as u32) / width;
        img.put_pixel(x, y, (*pixel).into());
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{segment, SimilarityMethod};
    use crate::similarity::LabTolerance;

    fn lab_default() -> SimilarityMethod {
        SimilarityMethod::Lab(LabTolerance::default())
    }

    #[test]
    fn test_midpoint_selection() {
        // Three near-identical grays in one row form one cluster; the
        // representative is the member at index 3 / 2 = 1.
        let pixels = [
            Rgb::new(100, 100, 100),
            Rgb::new(101, 101, 101),
            Rgb::new(102, 102, 102),
        ];
        let seg = segment(&pixels, 3, 1, &lab_default());
        assert_eq!(seg.num_clusters(), 1);
        assert_eq!(representative(&seg, 0), pixels[1]);
    }

    #[test]
    fn test_single_member_cluster() {
        let pixels = [Rgb::new(128, 128, 128)];
        let seg = segment(&pixels, 1, 1, &lab_default());
        assert_eq!(representative(&seg, 0), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_representative_colors_indexed_by_id() {
        let pixels = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)];
        let seg = segment(&pixels, 2, 1, &lab_default());
        let colors = representative_colors(&seg);
        assert_eq!(colors, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]);
    }

    #[test]
    fn test_posterize_flattens_clusters() {
        // Two near-gray pixels cluster together, so both come out as the
        // representative; the red pixel keeps its own color.
        let pixels = [
            Rgb::new(100, 100, 100),
            Rgb::new(102, 102, 102),
            Rgb::new(255, 0, 0),
        ];
        let seg = segment(&pixels, 3, 1, &lab_default());
        assert_eq!(seg.num_clusters(), 2);

        let out = posterize(&seg);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], out[1]);
        assert_eq!(out[0], Rgb::new(102, 102, 102)); // member 2 / 2 = 1
        assert_eq!(out[2], Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_posterize_empty() {
        let seg = segment(&[], 0, 0, &lab_default());
        assert!(posterize(&seg).is_empty());
    }

    #[test]
    fn test_rgba_bytes_opaque() {
        let bytes = to_rgba_bytes(&[Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
        assert_eq!(bytes, vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
