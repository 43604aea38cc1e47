//! Command-line interface for color-segmenter
//!
//! Usage: color-segmenter [OPTIONS] <INPUT> <OUTPUT>

use color_segmenter::prelude::*;
use color_segmenter::recolor::to_image;
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let mut input_path = None;
    let mut output_path = None;
    let mut method = "lab".to_string();
    let mut tolerance: Option<f32> = None;
    let mut hue_threshold: Option<f32> = None;
    let mut sat_threshold: Option<f32> = None;
    let mut light_threshold: Option<f32> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-m" | "--method" => {
                i += 1;
                method = args[i].clone();
            }
            "-t" | "--tolerance" => {
                i += 1;
                tolerance = Some(args[i].parse().expect("Invalid tolerance"));
            }
            "--hue-threshold" => {
                i += 1;
                hue_threshold = Some(args[i].parse().expect("Invalid hue threshold"));
            }
            "--sat-threshold" => {
                i += 1;
                sat_threshold = Some(args[i].parse().expect("Invalid saturation threshold"));
            }
            "--light-threshold" => {
                i += 1;
                light_threshold = Some(args[i].parse().expect("Invalid lightness threshold"));
            }
            "--help" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg => {
                if input_path.is_none() {
                    input_path = Some(PathBuf::from(arg));
                } else if output_path.is_none() {
                    output_path = Some(PathBuf::from(arg));
                } else {
                    eprintln!("Unexpected argument: {}", arg);
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let input_path = input_path.expect("Missing input path");
    let output_path = output_path.expect("Missing output path");

    let similarity = match method.as_str() {
        "hsl" => {
            let mut thresholds = HslThresholds::default();
            if let Some(v) = hue_threshold {
                thresholds.hue = v;
            }
            if let Some(v) = sat_threshold {
                thresholds.saturation = v;
            }
            if let Some(v) = light_threshold {
                thresholds.lightness = v;
            }
            SimilarityMethod::Hsl(thresholds)
        }
        "lab" => {
            let mut lab = LabTolerance::default();
            if let Some(v) = tolerance {
                lab.tolerance = v;
            }
            SimilarityMethod::Lab(lab)
        }
        other => {
            eprintln!("Unknown method: {} (expected 'hsl' or 'lab')", other);
            std::process::exit(1);
        }
    };

    let img = image::open(&input_path)
        .expect("Failed to open input image")
        .to_rgb8();
    let (width, height) = img.dimensions();
    let pixels: Vec<Rgb> = img.pixels().map(|p| Rgb::from_array(p.0)).collect();

    let seg = segment(&pixels, width as usize, height as usize, &similarity);
    println!(
        "{}x{}: {} clusters ({} method)",
        width,
        height,
        seg.num_clusters(),
        method
    );

    let recolored = posterize(&seg);
    to_image(&recolored, width, height)
        .save(&output_path)
        .expect("Failed to save output image");
}

fn print_usage(program: &str) {
    println!("Usage: {} [OPTIONS] <INPUT> <OUTPUT>", program);
    println!();
    println!("Options:");
    println!("  -m, --method <hsl|lab>      Similarity method (default: lab)");
    println!("  -t, --tolerance <f32>       Lab ΔE tolerance (default: 3.5)");
    println!("  --hue-threshold <f32>       HSL hue window, 0-100 scale (default: 20)");
    println!("  --sat-threshold <f32>       HSL saturation window (default: 5)");
    println!("  --light-threshold <f32>     HSL lightness window (default: 10)");
    println!("  --help                      Show this help");
}
