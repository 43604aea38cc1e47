//! WebAssembly interface for the color segmenter.

use crate::color::Rgb;
use crate::recolor::{posterize, to_rgba_bytes};
use crate::segment::{segment, SimilarityMethod};
use crate::similarity::{HslThresholds, LabTolerance};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ColorSegmenter {
    method: SimilarityMethod,
}

#[wasm_bindgen]
impl ColorSegmenter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            method: SimilarityMethod::default(),
        }
    }

    /// 0 = Lab/CIE94 (default), 1 = HSL threshold windows
    pub fn set_method(&mut self, method: u8) {
        self.method = match method {
            1 => SimilarityMethod::Hsl(HslThresholds::default()),
            _ => SimilarityMethod::Lab(LabTolerance::default()),
        };
    }

    /// ΔE tolerance; only applies to the Lab method.
    pub fn set_tolerance(&mut self, tolerance: f32) {
        if let SimilarityMethod::Lab(ref mut t) = self.method {
            t.tolerance = tolerance;
        }
    }

    /// Hue window half-width on the 0-100 scale; only applies to HSL.
    pub fn set_hue_threshold(&mut self, value: f32) {
        if let SimilarityMethod::Hsl(ref mut t) = self.method {
            t.hue = value;
        }
    }

    /// Saturation window half-width; only applies to HSL.
    pub fn set_saturation_threshold(&mut self, value: f32) {
        if let SimilarityMethod::Hsl(ref mut t) = self.method {
            t.saturation = value;
        }
    }

    /// Lightness window half-width; only applies to HSL.
    pub fn set_lightness_threshold(&mut self, value: f32) {
        if let SimilarityMethod::Hsl(ref mut t) = self.method {
            t.lightness = value;
        }
    }

    /// Segment an RGBA buffer and return the posterized RGBA buffer
    /// (alpha forced opaque).
    pub fn process(&self, rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
        let pixels = rgba_to_pixels(rgba);
        let seg = segment(&pixels, width, height, &self.method);
        to_rgba_bytes(&posterize(&seg))
    }

    /// Number of clusters the current settings produce for this input.
    pub fn cluster_count(&self, rgba: &[u8], width: usize, height: usize) -> usize {
        let pixels = rgba_to_pixels(rgba);
        segment(&pixels, width, height, &self.method).num_clusters()
    }
}

impl Default for ColorSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn rgba_to_pixels(rgba: &[u8]) -> Vec<Rgb> {
    rgba.chunks(4).map(|c| Rgb::new(c[0], c[1], c[2])).collect()
}
