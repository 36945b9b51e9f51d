use std::path::Path;

use glam::Vec3;
use image::{Rgb, RgbImage};

use crate::error::Error;

/// Row-major linear colors, one per pixel. Values may leave [0, 1].
#[derive(Debug, Clone)]
pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Vec3>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Framebuffer {
        Framebuffer {
            width,
            height,
            pixels: vec![Vec3::ZERO; width * height],
        }
    }

    pub fn get(&self, i: usize, j: usize) -> Vec3 {
        self.pixels[i + j * self.width]
    }

    pub fn non_finite_count(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_finite()).count()
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            to_rgb(self.get(x as usize, y as usize))
        })
    }

    /// Writes the buffer; the format follows the file extension.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        self.to_image().save(path)?;
        Ok(())
    }
}

/// Scales colors brighter than 1 back into range, then quantizes.
pub fn to_rgb(color: Vec3) -> Rgb<u8> {
    let max = color.max_element();
    let c = if max > 1.0 { color * (1.0 / max) } else { color };
    let c = (c.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).to_array();
    Rgb([c[0] as u8, c[1] as u8, c[2] as u8])
}
