use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TourError};

/// Pixel-coordinate formula that produces the red and green channels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Xor,
    Average,
    Product,
}

impl Pattern {
    /// Channel value at pixel `(x, y)`, truncated to a byte.
    pub fn value(&self, x: u32, y: u32) -> u8 {
        match self {
            Pattern::Xor => (x ^ y) as u8,
            Pattern::Average => ((x as u64 + y as u64) / 2) as u8,
            Pattern::Product => x.wrapping_mul(y) as u8,
        }
    }
}

/**
 * Complete set of parameters that are fed in from the JSON for a pattern image.
 */
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PatternImageParams {
    pub resolution: [u32; 2], // [width, height]
    pub pattern: Pattern,
    pub blue: u8,
    pub alpha: u8,
}

/**
 * Procedurally generated image. Every pixel is `Rgba([v, v, blue, alpha])`,
 * where `v` is given by the pattern at that pixel.
 */
#[derive(Debug, Clone)]
pub struct PatternImage {
    params: PatternImageParams,
}

impl PatternImage {
    pub fn new(params: PatternImageParams) -> Result<PatternImage> {
        let [width, height] = params.resolution;
        if width == 0 || height == 0 {
            return Err(TourError::InvalidParameter(format!(
                "image resolution must be non-zero, got {}x{}",
                width, height
            )));
        }
        Ok(PatternImage { params })
    }

    /// (width, height) in pixels.
    pub fn bounds(&self) -> (u32, u32) {
        (self.params.resolution[0], self.params.resolution[1])
    }

    pub fn at(&self, x: u32, y: u32) -> image::Rgba<u8> {
        let v = self.params.pattern.value(x, y);
        image::Rgba([v, v, self.params.blue, self.params.alpha])
    }

    /// Evaluates every pixel, one column per parallel task.
    pub fn render(&self) -> image::RgbaImage {
        let (width, height) = self.bounds();
        let mut columns: Vec<Vec<image::Rgba<u8>>> =
            vec![vec![image::Rgba([0, 0, 0, 0]); height as usize]; width as usize];
        columns.par_iter_mut().enumerate().for_each(|(x, column)| {
            column.iter_mut().enumerate().for_each(|(y, pixel)| {
                *pixel = self.at(x as u32, y as u32);
            });
        });

        let mut imgbuf = image::RgbaImage::new(width, height);
        for (x, column) in columns.iter().enumerate() {
            for (y, pixel) in column.iter().enumerate() {
                imgbuf.put_pixel(x as u32, y as u32, *pixel);
            }
        }
        imgbuf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pattern: Pattern, resolution: [u32; 2]) -> PatternImageParams {
        PatternImageParams {
            resolution,
            pattern,
            blue: 255,
            alpha: 255,
        }
    }

    #[test]
    fn test_pattern_values() {
        assert_eq!(Pattern::Xor.value(5, 3), 6);
        assert_eq!(Pattern::Xor.value(300, 44), ((300u32 ^ 44) & 0xff) as u8);
        assert_eq!(Pattern::Average.value(10, 3), 6);
        assert_eq!(Pattern::Average.value(u32::MAX, u32::MAX), 0xff);
        assert_eq!(Pattern::Average.value(u32::MAX, 1), 0);
        assert_eq!(Pattern::Product.value(16, 17), 16);
    }

    #[test]
    fn test_at_uses_blue_and_alpha() {
        let image = PatternImage::new(PatternImageParams {
            resolution: [4, 4],
            pattern: Pattern::Xor,
            blue: 12,
            alpha: 200,
        })
        .unwrap();
        assert_eq!(image.at(1, 2), image::Rgba([3, 3, 12, 200]));
    }

    #[test]
    fn test_render_matches_at() {
        let image = PatternImage::new(params(Pattern::Average, [7, 5])).unwrap();
        let rendered = image.render();
        assert_eq!(rendered.dimensions(), (7, 5));
        for (x, y, pixel) in rendered.enumerate_pixels() {
            assert_eq!(*pixel, image.at(x, y));
        }
    }

    #[test]
    fn test_non_square_bounds() {
        let image = PatternImage::new(params(Pattern::Xor, [3, 9])).unwrap();
        assert_eq!(image.bounds(), (3, 9));
        assert_eq!(image.render().dimensions(), (3, 9));
    }

    #[test]
    fn test_zero_resolution_is_rejected() {
        let result = PatternImage::new(params(Pattern::Product, [0, 16]));
        assert!(matches!(result, Err(TourError::InvalidParameter(_))));
    }

    #[test]
    fn test_params_from_json() {
        let json = r#"{ "resolution": [256, 128], "pattern": "Xor", "blue": 255, "alpha": 255 }"#;
        let parsed: PatternImageParams = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.resolution, [256, 128]);
        assert_eq!(parsed.pattern, Pattern::Xor);
    }
}
