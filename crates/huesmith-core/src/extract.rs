//! Dominant-color extraction from images
//!
//! Samples a downscaled copy of the image into a quantized RGB histogram,
//! refines the most-populated buckets to their mean color, and merges
//! near-duplicates. Output is dominant-first and bounded by
//! [`MAX_EXTRACTED_COLORS`]. The pipeline is deterministic: no random
//! seeding, so the same image always yields the same sequence.

use crate::error::HuesmithResult;
use crate::types::{HexColor, MAX_EXTRACTED_COLORS};
use image::DynamicImage;
use image::imageops::FilterType;
use std::collections::HashMap;
use std::path::Path;

/// Longest edge after downscaling; enough sampling density for dominance
const SAMPLE_EDGE: u32 = 128;

/// Bits dropped per channel when bucketing (4-bit buckets, 16 levels)
const QUANT_SHIFT: u8 = 4;

/// Two mean colors closer than this (Euclidean RGB) are one color
const MERGE_DISTANCE: f32 = 28.0;

/// Extract dominant colors from an image file
///
/// Undecodable input fails with a decode error; callers surface that as an
/// empty extraction rather than a user-facing failure.
pub fn extract_palette(path: &Path) -> HuesmithResult<Vec<HexColor>> {
    let img = image::open(path)?;
    Ok(extract_from_image(&img))
}

/// Extract dominant colors from a decoded image
pub fn extract_from_image(img: &DynamicImage) -> Vec<HexColor> {
    let rgb = if img.width().max(img.height()) > SAMPLE_EDGE {
        img.resize(SAMPLE_EDGE, SAMPLE_EDGE, FilterType::Triangle)
            .to_rgb8()
    } else {
        img.to_rgb8()
    };

    // Accumulate per-bucket population and channel sums
    let mut buckets: HashMap<(u8, u8, u8), BucketStats> = HashMap::new();
    for pixel in rgb.pixels() {
        let key = (
            pixel[0] >> QUANT_SHIFT,
            pixel[1] >> QUANT_SHIFT,
            pixel[2] >> QUANT_SHIFT,
        );
        let stats = buckets.entry(key).or_default();
        stats.count += 1;
        stats.sum_r += pixel[0] as u64;
        stats.sum_g += pixel[1] as u64;
        stats.sum_b += pixel[2] as u64;
    }

    // Most-populated buckets first; bucket key breaks ties deterministically
    let mut ranked: Vec<(&(u8, u8, u8), &BucketStats)> = buckets.iter().collect();
    ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.0.cmp(b.0)));

    let mut colors: Vec<(u8, u8, u8)> = Vec::new();
    for (_, stats) in ranked {
        if colors.len() >= MAX_EXTRACTED_COLORS {
            break;
        }
        let mean = stats.mean();
        if colors.iter().all(|c| color_distance(c, &mean) >= MERGE_DISTANCE) {
            colors.push(mean);
        }
    }

    colors
        .into_iter()
        .map(|(r, g, b)| HexColor::from_rgb(r, g, b))
        .collect()
}

#[derive(Default)]
struct BucketStats {
    count: u64,
    sum_r: u64,
    sum_g: u64,
    sum_b: u64,
}

impl BucketStats {
    fn mean(&self) -> (u8, u8, u8) {
        (
            (self.sum_r / self.count) as u8,
            (self.sum_g / self.count) as u8,
            (self.sum_b / self.count) as u8,
        )
    }
}

fn color_distance(a: &(u8, u8, u8), b: &(u8, u8, u8)) -> f32 {
    let dr = (a.0 as i16 - b.0 as i16) as f32;
    let dg = (a.1 as i16 - b.1 as i16) as f32;
    let db = (a.2 as i16 - b.2 as i16) as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}
