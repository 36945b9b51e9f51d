use glam::Vec3;
use rayon::prelude::*;

use crate::{
    camera::Camera,
    framebuffer::Framebuffer,
    ray::Ray,
    scene::Scene,
    utils::{offset_origin, reflect, refract, BIAS},
};

/// Constants steering the recursive tracer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSettings {
    /// Deepest bounce still shaded; rays past it return `background`.
    pub max_depth: u32,
    pub bias: f32,
    pub background: Vec3,
    /// Hits at or beyond this distance count as misses.
    pub horizon: f32,
}

impl Default for TraceSettings {
    fn default() -> Self {
        TraceSettings {
            max_depth: 5,
            bias: BIAS,
            background: Vec3::new(0.5, 0.2, 0.4),
            horizon: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Raytracer {
    pub settings: TraceSettings,
}

impl Raytracer {
    pub fn new(settings: TraceSettings) -> Raytracer {
        Raytracer {
            settings,
        }
    }

    pub fn trace(&self, scene: &Scene, ray: &Ray, depth: u32) -> Vec3 {
        // limit recursion
        if depth > self.settings.max_depth {
            return self.settings.background;
        }

        let hit = match scene.intersect(ray, self.settings.horizon) {
            Some(hit) => hit,
            None => return self.settings.background,
        };
        let (point, nrm, mat) = (hit.pos, hit.nrm, hit.mat);

        // secondary rays
        let reflect_dir = reflect(&ray.direction, &nrm).normalize();
        let refract_dir = refract(&ray.direction, &nrm, mat.refractive_index, 1.0).normalize();
        let reflect_ray = Ray::new(offset_origin(&point, &nrm, &reflect_dir, self.settings.bias), reflect_dir);
        let refract_ray = Ray::new(offset_origin(&point, &nrm, &refract_dir, self.settings.bias), refract_dir);
        let reflect_color = self.trace(scene, &reflect_ray, depth + 1);
        let refract_color = self.trace(scene, &refract_ray, depth + 1);

        // direct lighting with hard shadows
        let mut diffuse_intensity = 0.0;
        let mut specular_intensity = 0.0;
        for light in &scene.lights {
            let (light_dir, light_dist) = light.direction_from(&point);

            let shadow_ray = Ray::new(offset_origin(&point, &nrm, &light_dir, self.settings.bias), light_dir);
            if let Some(blocker) = scene.intersect(&shadow_ray, self.settings.horizon) {
                if blocker.t < light_dist {
                    continue;
                }
            }

            diffuse_intensity += light.intensity * light_dir.dot(nrm).max(0.0);
            specular_intensity += (-reflect(&-light_dir, &nrm).dot(ray.direction))
                .max(0.0)
                .powf(mat.specular_exponent)
                * light.intensity;
        }

        return mat.diffuse * diffuse_intensity * mat.albedo.x
            + Vec3::ONE * specular_intensity * mat.albedo.y
            + reflect_color * mat.albedo.z
            + refract_color * mat.albedo.w;
    }

    /// Traces one primary ray per pixel. Rows are filled in parallel.
    pub fn render(&self, scene: &Scene, camera: &Camera) -> Framebuffer {
        let mut film = Framebuffer::new(camera.width, camera.height);

        film.pixels
            .par_chunks_mut(camera.width)
            .enumerate()
            .for_each(|(j, row)| {
                for (i, pixel) in row.iter_mut().enumerate() {
                    *pixel = self.trace(scene, &camera.calc_ray(i, j), 0);
                }
            });

        film
    }
}
