use glam::Vec3;

use crate::error::Error;
use crate::ray::Ray;

/// Pinhole camera at the origin looking down -z.
///
/// `fov` is the vertical field of view in radians; the horizontal one follows
/// from the image aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub width: usize,
    pub height: usize,
    pub fov: f32,
    plane_z: f32,
}

impl Camera {
    pub fn new(width: usize, height: usize, fov: f32) -> Result<Camera, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig(format!("image size {}x{} is empty", width, height)));
        }
        if !(fov > 0.0 && fov < std::f32::consts::PI) {
            return Err(Error::InvalidConfig(format!("field of view {} rad is out of range", fov)));
        }

        Ok(Camera {
            width,
            height,
            fov,
            plane_z: -(height as f32) / (2.0 * (fov * 0.5).tan()),
        })
    }

    pub fn from_degrees(width: usize, height: usize, fov_deg: f32) -> Result<Camera, Error> {
        Camera::new(width, height, fov_deg.to_radians())
    }

    pub fn origin(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// Primary ray through the center of pixel (`i`, `j`), rows counted from the top.
    pub fn calc_ray(&self, i: usize, j: usize) -> Ray {
        let x = (i as f32 + 0.5) - self.width as f32 * 0.5;
        let y = -(j as f32 + 0.5) + self.height as f32 * 0.5;

        return Ray::new(self.origin(), Vec3::new(x, y, self.plane_z).normalize());
    }
}
