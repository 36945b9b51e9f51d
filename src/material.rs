use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Phong-style surface description.
///
/// `albedo` weights the four contributions of the final color in order:
/// diffuse, specular, reflected, refracted. The weights are not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default = "Material::default_refractive_index")]
    pub refractive_index: f32,
    pub albedo: Vec4,
    pub diffuse: Vec3,
    #[serde(default)]
    pub specular_exponent: f32,
}

impl Material {
    pub fn new(refractive_index: f32, albedo: Vec4, diffuse: Vec3, specular_exponent: f32) -> Material {
        Material {
            refractive_index,
            albedo,
            diffuse,
            specular_exponent,
        }
    }

    fn default_refractive_index() -> f32 {
        1.0
    }

    pub fn ivory() -> Material {
        Material::new(1.0, Vec4::new(0.6, 0.3, 0.1, 0.0), Vec3::new(0.4, 0.4, 0.3), 50.0)
    }

    pub fn fuchsia() -> Material {
        Material::new(1.0, Vec4::new(0.6, 0.3, 0.1, 0.0), Vec3::new(0.4, 0.1, 0.7), 50.0)
    }

    pub fn red_rubber() -> Material {
        Material::new(1.0, Vec4::new(0.9, 0.1, 0.0, 0.0), Vec3::new(0.3, 0.1, 0.1), 10.0)
    }

    pub fn mirror() -> Material {
        Material::new(1.0, Vec4::new(0.0, 10.0, 0.8, 0.0), Vec3::new(1.0, 1.0, 1.0), 1425.0)
    }

    pub fn glass() -> Material {
        Material::new(1.5, Vec4::new(0.0, 0.5, 0.1, 0.8), Vec3::new(0.6, 0.7, 0.8), 125.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            refractive_index: 1.0,
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse: Vec3::ZERO,
            specular_exponent: 0.0,
        }
    }
}
