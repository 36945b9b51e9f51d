use glam::Vec3;

use crate::material::Material;
use crate::ray::Ray;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub mat: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, mat: Material) -> Sphere {
        Sphere {
            center,
            radius,
            mat,
        }
    }

    /**
     * Geometric ray/sphere test. Returns the distance to the nearest hit in
     * front of the ray origin, or the far hit when the origin is inside.
     */
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let v = self.center - ray.origin;
        let tca = v.dot(ray.direction);
        let d2 = v.dot(v) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let mut t = tca - thc;
        if t < 0.0 {
            t = tca + thc;
        }
        if t < 0.0 {
            return None;
        }

        return Some(t);
    }

    pub fn normal_at(&self, p: &Vec3) -> Vec3 {
        (*p - self.center).normalize()
    }
}
