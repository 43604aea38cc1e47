//! Similarity predicates deciding whether two perceptual colors belong in the
//! same cluster.
//!
//! Both predicates take (neighbor, candidate) in that order: the HSL windows
//! are centered on the neighbor's channel values, and the CIE94 scale factors
//! use the neighbor's chroma.

use crate::color::{Hsl, Lab};

/// Per-channel windows for the HSL variant, all on the 0–100 scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslThresholds {
    /// Half-width of the circular hue window
    pub hue: f32,
    /// Half-width of the saturation window
    pub saturation: f32,
    /// Half-width of the lightness window
    pub lightness: f32,
}

impl Default for HslThresholds {
    fn default() -> Self {
        Self {
            hue: 20.0,
            saturation: 5.0,
            lightness: 10.0,
        }
    }
}

impl HslThresholds {
    /// True when `candidate` falls inside all three windows around
    /// `neighbor`. Anything outside a window is a non-match; there is no
    /// other outcome.
    pub fn matches(&self, neighbor: Hsl, candidate: Hsl) -> bool {
        self.hue_close(neighbor.h, candidate.h)
            && within_window(candidate.s, neighbor.s, self.saturation)
            && within_window(candidate.l, neighbor.l, self.lightness)
    }

    /// Hue window with circular wraparound over [0, 100]: a window hanging
    /// below 0 also admits values in the tail near 100, and vice versa.
    fn hue_close(&self, neighbor: f32, candidate: f32) -> bool {
        let range_start = neighbor - self.hue;
        let range_end = neighbor + self.hue;

        if candidate >= range_start && candidate <= range_end {
            return true;
        }
        if range_start < 0.0 && candidate >= 100.0 + range_start {
            return true;
        }
        if range_end > 100.0 && candidate <= range_end - 100.0 {
            return true;
        }
        false
    }
}

/// Single ΔE tolerance for the Lab variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabTolerance {
    pub tolerance: f32,
}

impl Default for LabTolerance {
    fn default() -> Self {
        Self { tolerance: 3.5 }
    }
}

impl LabTolerance {
    /// True when the CIE94 distance from `neighbor` to `candidate` is
    /// strictly under the tolerance.
    pub fn matches(&self, neighbor: Lab, candidate: Lab) -> bool {
        neighbor.delta_e_cie94(candidate) < self.tolerance
    }
}

#[inline]
fn within_window(value: f32, center: f32, radius: f32) -> bool {
    value >= center - radius && value <= center + radius
}
