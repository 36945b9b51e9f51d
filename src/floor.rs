use glam::Vec3;

use crate::material::Material;
use crate::ray::Ray;

/// Horizontal checkerboard tile bounded in x and z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    pub level: f32,
    pub half_width: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Rays whose |direction.y| does not exceed this are treated as parallel.
    pub min_slope: f32,
    /// Everything but the diffuse color, which comes from the checker.
    pub mat: Material,
    pub even: Vec3,
    pub odd: Vec3,
}

impl Floor {
    pub fn normal(&self) -> Vec3 {
        Vec3::Y
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        if ray.direction.y.abs() <= self.min_slope {
            return None;
        }

        let t = -(ray.origin.y - self.level) / ray.direction.y;
        if t <= 0.0 {
            return None;
        }

        let p = ray.at(t);
        if p.x.abs() < self.half_width && p.z < self.z_near && p.z > self.z_far {
            Some(t)
        } else {
            None
        }
    }

    /// Material of the tile under `p`, colored by checker parity.
    pub fn material_at(&self, p: &Vec3) -> Material {
        // the +1000 keeps the x term positive so parity stays consistent across x = 0
        let cell = (0.5 * p.x + 1000.0).floor() as i64 + (0.5 * p.z).floor() as i64;
        let diffuse = if cell.rem_euclid(2) == 0 {
            self.even
        } else {
            self.odd
        };

        Material {
            diffuse,
            ..self.mat
        }
    }
}

impl Default for Floor {
    fn default() -> Self {
        Floor {
            level: -5.0,
            half_width: 10.0,
            z_near: -10.0,
            z_far: -30.0,
            min_slope: 1e-3,
            mat: Material::default(),
            even: Vec3::new(0.3, 0.3, 0.3),
            odd: Vec3::new(0.3, 0.2, 0.1),
        }
    }
}
