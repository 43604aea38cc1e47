//! Color types and the RGB → HSL / RGB → Lab conversions used by the
//! segmentation pass.

/// RGB color in 8-bit per channel format (sRGB gamma-encoded)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_array(arr: [u8; 3]) -> Self {
        Self { r: arr[0], g: arr[1], b: arr[2] }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb(self)
    }

    pub fn to_lab(self) -> Lab {
        Lab::from_rgb(self)
    }
}

#[cfg(feature = "native")]
impl From<Rgb> for image::Rgb<u8> {
    fn from(c: Rgb) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

// =============================================================================
// HSL (hue window comparison space)
// =============================================================================

/// HSL color with ALL THREE channels on a 0–100 scale (not the usual
/// 360/100/100). Hue is circular over [0, 100]; the wraparound window in the
/// similarity predicate depends on this range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f32 / 255.0;
        let g = rgb.g as f32 / 255.0;
        let b = rgb.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // achromatic
            return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        let mut h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;

        Hsl {
            h: h * 100.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

// =============================================================================
// CIE Lab (perceptual distance space)
// =============================================================================

/// CIE L*a*b* color, D65 reference white, sRGB gamma-corrected input.
/// L in [0, 100], a and b roughly in [-128, 127].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    const XN: f32 = 0.95047;
    const YN: f32 = 1.00000;
    const ZN: f32 = 1.08883;

    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = srgb_to_linear(rgb.r as f32 / 255.0);
        let g = srgb_to_linear(rgb.g as f32 / 255.0);
        let b = srgb_to_linear(rgb.b as f32 / 255.0);

        let x = (r * 0.4124 + g * 0.3576 + b * 0.1805) / Self::XN;
        let y = (r * 0.2126 + g * 0.7152 + b * 0.0722) / Self::YN;
        let z = (r * 0.0193 + g * 0.1192 + b * 0.9505) / Self::ZN;

        let fx = xyz_to_lab_f(x);
        let fy = xyz_to_lab_f(y);
        let fz = xyz_to_lab_f(z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// CIE94-style ΔE against `other`, with kL=1. The chroma scale factors
    /// are derived from `self`'s chroma (c1), so the result is
    /// order-dependent when the two chromas differ.
    pub fn delta_e_cie94(self, other: Self) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;

        let c1 = (self.a * self.a + self.b * self.b).sqrt();
        let c2 = (other.a * other.a + other.b * other.b).sqrt();
        let dc = c1 - c2;

        // ΔH² can go slightly negative from rounding; clamp before sqrt.
        let dh_sq = da * da + db * db - dc * dc;
        let dh = if dh_sq < 0.0 { 0.0 } else { dh_sq.sqrt() };

        let sc = 1.0 + 0.045 * c1;
        let sh = 1.0 + 0.015 * c1;

        let term = dl * dl + (dc / sc) * (dc / sc) + (dh / sh) * (dh / sh);
        if term < 0.0 {
            0.0
        } else {
            term.sqrt()
        }
    }
}

// =============================================================================
// Utils
// =============================================================================

#[inline]
pub fn srgb_to_linear(v: f32) -> f32 {
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

#[inline]
fn xyz_to_lab_f(t: f32) -> f32 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        let red = Rgb::new(255, 0, 0).to_hsl();
        assert!((red.h - 0.0).abs() < 1e-4);
        assert!((red.s - 100.0).abs() < 1e-4);
        assert!((red.l - 50.0).abs() < 1e-4);

        // Green and blue land at thirds of the 0-100 hue circle.
        let green = Rgb::new(0, 255, 0).to_hsl();
        assert!((green.h - 100.0 / 3.0).abs() < 1e-3);

        let blue = Rgb::new(0, 0, 255).to_hsl();
        assert!((blue.h - 200.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_hsl_achromatic() {
        for v in [0u8, 64, 128, 200, 255] {
            let hsl = Rgb::new(v, v, v).to_hsl();
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert!((hsl.l - v as f32 / 255.0 * 100.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_hsl_deterministic() {
        let c = Rgb::new(37, 190, 12);
        assert_eq!(c.to_hsl(), c.to_hsl());
    }

    #[test]
    fn test_lab_black_and_white() {
        let black = Rgb::new(0, 0, 0).to_lab();
        assert!(black.l.abs() < 1e-4);
        assert!(black.a.abs() < 1e-4);
        assert!(black.b.abs() < 1e-4);

        let white = Rgb::new(255, 255, 255).to_lab();
        assert!((white.l - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_lab_gray_is_neutral() {
        // The 4-digit sRGB matrix rows don't sum exactly to the white point,
        // so a/b come out near zero for grays rather than exactly zero.
        for v in [30u8, 100, 128, 220] {
            let lab = Rgb::new(v, v, v).to_lab();
            assert!(lab.a.abs() < 0.05, "a = {} for gray {}", lab.a, v);
            assert!(lab.b.abs() < 0.05, "b = {} for gray {}", lab.b, v);
        }
    }

    #[test]
    fn test_lab_red_reference() {
        // sRGB red against standard D65 tables.
        let red = Rgb::new(255, 0, 0).to_lab();
        assert!((red.l - 53.24).abs() < 0.5);
        assert!((red.a - 80.09).abs() < 0.5);
        assert!((red.b - 67.20).abs() < 0.5);
    }

    #[test]
    fn test_lab_deterministic() {
        let c = Rgb::new(12, 200, 255);
        assert_eq!(c.to_lab(), c.to_lab());
    }

    #[test]
    fn test_delta_e_identity() {
        for c in [Rgb::new(0, 0, 0), Rgb::new(255, 128, 3), Rgb::new(9, 9, 9)] {
            let lab = c.to_lab();
            assert_eq!(lab.delta_e_cie94(lab), 0.0);
        }
    }

    #[test]
    fn test_delta_e_symmetric_for_equal_chroma() {
        // CIE94 weights by the first color's chroma, so only equal-chroma
        // pairs are exactly symmetric. Grays all have chroma ~0.
        let a = Rgb::new(100, 100, 100).to_lab();
        let b = Rgb::new(140, 140, 140).to_lab();
        assert!((a.delta_e_cie94(b) - b.delta_e_cie94(a)).abs() < 1e-4);

        let c = Lab::new(50.0, 3.0, 4.0);
        let d = Lab::new(60.0, 4.0, 3.0);
        assert!((c.delta_e_cie94(d) - d.delta_e_cie94(c)).abs() < 1e-5);
    }

    #[test]
    fn test_delta_e_grows_with_lightness_gap() {
        let base = Rgb::new(100, 100, 100).to_lab();
        let near = Rgb::new(105, 105, 105).to_lab();
        let far = Rgb::new(200, 200, 200).to_lab();
        assert!(base.delta_e_cie94(near) < base.delta_e_cie94(far));
    }
}
