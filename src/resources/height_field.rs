//! Height fields backed by images.
//!
//! A [`HeightField`] exposes its size and 16-bit RGB colour per pixel.
//! [`sample`] turns one pixel into a displacement via its luminance.

use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, GrayImage, Pixel, RgbImage, RgbaImage};

/// A 2D colour grid that can be sampled for heights.
pub trait HeightField {
    /// `(width, height)` in pixels.
    fn bounds(&self) -> (u32, u32);

    /// Colour at pixel `(x, y)` with each channel in `0..=u16::MAX`.
    fn color_at(&self, x: u32, y: u32) -> [u16; 3];
}

/// Sample a displacement at normalized `(u, v)`.
///
/// Coordinates are truncated to the nearest pixel at or before them and
/// clamped to the last row/column, so `u = 1.0` reads column `width - 1`.
/// No filtering between pixels. The result is `magnitude * luminance / 255`.
pub fn sample<F: HeightField + ?Sized>(field: &F, magnitude: f32, u: f32, v: f32) -> f32 {
    let (width, height) = field.bounds();
    if width == 0 || height == 0 {
        log::warn!("cannot sample an empty height field, returning zero displacement");
        return 0.0;
    }
    let x = ((width as f32 * u) as u32).min(width - 1);
    let y = ((height as f32 * v) as u32).min(height - 1);
    let lum = luminance(field.color_at(x, y));
    magnitude * (lum as f32 / 255.0)
}

/// 8-bit luma from 16-bit RGB with weights 0.299, 0.587 and 0.114.
pub fn luminance([r, g, b]: [u16; 3]) -> u32 {
    // Weights are 16.16 fixed point; the shift drops both the fraction and
    // the extra 8 bits of channel depth.
    (19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + (1 << 15)) >> 24
}

/// Decode an image from disk for use as a height field.
pub fn load_height_field(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    image::open(path).with_context(|| format!("failed to load height field {}", path.display()))
}

fn widen(channel: u8) -> u16 {
    channel as u16 * 257
}

fn widen_rgb(rgb: image::Rgb<u8>) -> [u16; 3] {
    rgb.0.map(widen)
}

impl HeightField for DynamicImage {
    fn bounds(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn color_at(&self, x: u32, y: u32) -> [u16; 3] {
        match self {
            DynamicImage::ImageLuma16(img) => [img.get_pixel(x, y).0[0]; 3],
            DynamicImage::ImageLumaA16(img) => [img.get_pixel(x, y).0[0]; 3],
            DynamicImage::ImageRgb16(img) => img.get_pixel(x, y).0,
            DynamicImage::ImageRgba16(img) => {
                let [r, g, b, _] = img.get_pixel(x, y).0;
                [r, g, b]
            }
            other => widen_rgb(other.get_pixel(x, y).to_rgb()),
        }
    }
}

impl HeightField for RgbImage {
    fn bounds(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn color_at(&self, x: u32, y: u32) -> [u16; 3] {
        widen_rgb(*self.get_pixel(x, y))
    }
}

impl HeightField for RgbaImage {
    fn bounds(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn color_at(&self, x: u32, y: u32) -> [u16; 3] {
        widen_rgb(self.get_pixel(x, y).to_rgb())
    }
}

impl HeightField for GrayImage {
    fn bounds(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn color_at(&self, x: u32, y: u32) -> [u16; 3] {
        [widen(self.get_pixel(x, y).0[0]); 3]
    }
}
