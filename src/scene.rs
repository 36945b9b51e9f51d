use std::collections::HashMap;
use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    floor::Floor,
    intersection::{Intersection, Surface},
    light::Light,
    material::Material,
    ray::Ray,
    sphere::Sphere,
};

/// Read-only scene shared by every ray of a render.
#[derive(Debug, Clone)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub floor: Option<Floor>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            spheres: Vec::new(),
            lights: Vec::new(),
            floor: Some(Floor::default()),
        }
    }

    /// Six spheres over the checkerboard, lit by three point lights.
    pub fn showcase() -> Scene {
        Scene {
            spheres: vec![
                Sphere::new(Vec3::new(-3.0, -1.0, -16.0), 2.0, Material::ivory()),
                Sphere::new(Vec3::new(6.0, -4.0, -12.0), 1.0, Material::fuchsia()),
                Sphere::new(Vec3::new(-7.0, -1.0, -12.0), 2.0, Material::fuchsia()),
                Sphere::new(Vec3::new(-1.0, -2.5, -12.0), 2.0, Material::glass()),
                Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, Material::red_rubber()),
                Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::mirror()),
            ],
            lights: vec![
                Light::new(Vec3::new(-17.0, 20.0, 20.0), 1.5),
                Light::new(Vec3::new(31.0, 45.0, -24.0), 1.8),
                Light::new(Vec3::new(32.0, 20.0, 30.0), 1.7),
            ],
            floor: Some(Floor::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Scene, Error> {
        let input = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Scene::from_json(&input)
    }

    pub fn from_json(input: &str) -> Result<Scene, Error> {
        let data: SceneData = serde_json::from_str(input)?;
        Scene::try_from(data)
    }

    /**
     * Nearest hit closer than `horizon`. Spheres are tested first and the
     * floor only replaces a sphere hit when strictly closer, so exact ties
     * resolve to the sphere.
     */
    pub fn intersect(&self, ray: &Ray, horizon: f32) -> Option<Intersection> {
        let mut hit_dist = f32::MAX;
        let mut hit_isect: Option<Intersection> = None;

        for (i, sphere) in self.spheres.iter().enumerate() {
            if let Some(t) = sphere.intersect(ray) {
                if t < hit_dist {
                    hit_dist = t;
                    let pos = ray.at(t);
                    hit_isect = Some(Intersection {
                        t,
                        pos,
                        nrm: sphere.normal_at(&pos),
                        mat: sphere.mat,
                        surface: Surface::Sphere(i),
                    });
                }
            }
        }

        if let Some(floor) = &self.floor {
            if let Some(t) = floor.intersect(ray) {
                if t < hit_dist {
                    hit_dist = t;
                    let pos = ray.at(t);
                    hit_isect = Some(Intersection {
                        t,
                        pos,
                        nrm: floor.normal(),
                        mat: floor.material_at(&pos),
                        surface: Surface::Floor,
                    });
                }
            }
        }

        if hit_dist < horizon {
            hit_isect
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (i, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                return Err(Error::InvalidScene(format!(
                    "sphere {} has non-positive radius {}",
                    i, sphere.radius
                )));
            }
            if !sphere.center.is_finite() {
                return Err(Error::InvalidScene(format!("sphere {} has a non-finite center", i)));
            }
            validate_material(&sphere.mat, &format!("sphere {}", i))?;
        }
        for (i, light) in self.lights.iter().enumerate() {
            if !(light.position.is_finite() && light.intensity.is_finite()) {
                return Err(Error::InvalidScene(format!("light {} is not finite", i)));
            }
        }
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}

fn validate_material(mat: &Material, owner: &str) -> Result<(), Error> {
    if !(mat.refractive_index >= 1.0) {
        return Err(Error::InvalidScene(format!(
            "{}: refractive index {} is below 1",
            owner, mat.refractive_index
        )));
    }
    if !(mat.specular_exponent >= 0.0) {
        return Err(Error::InvalidScene(format!(
            "{}: negative specular exponent {}",
            owner, mat.specular_exponent
        )));
    }
    Ok(())
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SphereData {
    pub center: Vec3,
    pub radius: f32,
    pub material: String,
}

/// On-disk scene layout. Spheres name their material from `materials`.
#[derive(Clone, Serialize, Deserialize)]
pub struct SceneData {
    #[serde(default)]
    pub materials: HashMap<String, Material>,
    #[serde(default)]
    pub spheres: Vec<SphereData>,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default = "default_floor")]
    pub floor: bool,
}

fn default_floor() -> bool {
    true
}

impl TryFrom<SceneData> for Scene {
    type Error = Error;

    fn try_from(data: SceneData) -> Result<Self, Self::Error> {
        let spheres = data
            .spheres
            .into_iter()
            .map(|s| {
                let mat = data.materials.get(&s.material).copied().ok_or_else(|| {
                    Error::InvalidScene(format!("unknown material \"{}\"", s.material))
                })?;
                Ok(Sphere::new(s.center, s.radius, mat))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let scene = Scene {
            spheres,
            lights: data.lights,
            floor: if data.floor { Some(Floor::default()) } else { None },
        };
        scene.validate()?;
        Ok(scene)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const HORIZON: f32 = 1000.0;

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        assert!(scene.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), HORIZON).is_none());
        assert!(scene.intersect(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), HORIZON).is_none());
    }

    #[test]
    fn test_nearest_sphere_wins() {
        let mut scene = Scene::new();
        scene.spheres.push(Sphere::new(Vec3::new(0.0, 0.0, -20.0), 1.0, Material::red_rubber()));
        scene.spheres.push(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, Material::ivory()));

        let hit = scene.intersect(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), HORIZON).unwrap();
        assert_eq!(hit.surface, Surface::Sphere(1));
        assert!((hit.t - 9.0).abs() < 1e-5);
        assert!(hit.nrm.abs_diff_eq(Vec3::Z, 1e-6));
        assert_eq!(hit.mat, Material::ivory());
    }

    #[test]
    fn test_floor_hit_carries_checker_material() {
        let scene = Scene::new();
        let dir = Vec3::new(1.0, -5.0, -11.0).normalize();
        let hit = scene.intersect(&Ray::new(Vec3::ZERO, dir), HORIZON).unwrap();
        assert_eq!(hit.surface, Surface::Floor);
        assert_eq!(hit.nrm, Vec3::Y);
        let floor = Floor::default();
        assert_eq!(hit.mat, floor.material_at(&hit.pos));
    }

    #[test]
    fn test_sphere_wins_exact_tie_with_floor() {
        // straight down onto (0, -5, -15): the floor and the top of the sphere
        // are both exactly 5 away
        let mut scene = Scene::new();
        scene.spheres.push(Sphere::new(Vec3::new(0.0, -7.0, -15.0), 2.0, Material::ivory()));
        let ray = Ray::new(Vec3::new(0.0, 0.0, -15.0), Vec3::NEG_Y);

        assert_eq!(scene.floor.unwrap().intersect(&ray), Some(5.0));
        assert_eq!(scene.spheres[0].intersect(&ray), Some(5.0));

        let hit = scene.intersect(&ray, HORIZON).unwrap();
        assert_eq!(hit.surface, Surface::Sphere(0));
        assert_eq!(hit.mat, Material::ivory());
    }

    #[test]
    fn test_floor_in_front_of_sphere() {
        let mut scene = Scene::new();
        // sphere far below the floor tile, hidden behind it
        scene.spheres.push(Sphere::new(Vec3::new(0.0, -10.0, -30.0), 2.0, Material::ivory()));
        let dir = Vec3::new(0.0, -10.0, -30.0).normalize();
        let hit = scene.intersect(&Ray::new(Vec3::ZERO, dir), HORIZON).unwrap();
        assert_eq!(hit.surface, Surface::Floor);
    }

    #[test]
    fn test_horizon_cuts_far_hits() {
        let mut scene = Scene::new();
        scene.spheres.push(Sphere::new(Vec3::new(0.0, 0.0, -2000.0), 1.0, Material::ivory()));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(scene.intersect(&ray, HORIZON).is_none());
        assert!(scene.intersect(&ray, 5000.0).is_some());
    }

    #[test]
    fn test_parse_scene_json() {
        let scene = Scene::from_json(
            r#"{
                "materials": {
                    "ivory": { "refractive_index": 1.0, "albedo": [0.6, 0.3, 0.1, 0.0], "diffuse": [0.4, 0.4, 0.3], "specular_exponent": 50.0 }
                },
                "spheres": [ { "center": [-3.0, -1.0, -16.0], "radius": 2.0, "material": "ivory" } ],
                "lights": [ { "position": [-17.0, 20.0, 20.0], "intensity": 1.5 } ],
                "floor": false
            }"#,
        )
        .expect("failed to parse scene");
        assert_eq!(scene.spheres.len(), 1);
        assert_eq!(scene.spheres[0].mat, Material::ivory());
        assert_eq!(scene.lights[0].intensity, 1.5);
        assert!(scene.floor.is_none());
    }

    #[test]
    fn test_parse_defaults() {
        let scene = Scene::from_json(
            r#"{
                "materials": { "plain": { "albedo": [1.0, 0.0, 0.0, 0.0], "diffuse": [1.0, 1.0, 1.0] } },
                "spheres": [ { "center": [0.0, 0.0, -5.0], "radius": 1.0, "material": "plain" } ]
            }"#,
        )
        .expect("failed to parse scene");
        assert_eq!(scene.spheres[0].mat.refractive_index, 1.0);
        assert_eq!(scene.spheres[0].mat.specular_exponent, 0.0);
        assert!(scene.lights.is_empty());
        assert!(scene.floor.is_some());
    }

    #[test]
    fn test_unknown_material_is_rejected() {
        let err = Scene::from_json(
            r#"{ "spheres": [ { "center": [0.0, 0.0, -5.0], "radius": 1.0, "material": "nope" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidScene(_)), "{}", err);
    }

    #[test]
    fn test_invalid_geometry_is_rejected() {
        let mut scene = Scene::new();
        scene.spheres.push(Sphere::new(Vec3::ZERO, 0.0, Material::ivory()));
        assert!(matches!(scene.validate(), Err(Error::InvalidScene(_))));

        let mut scene = Scene::new();
        let mut mat = Material::glass();
        mat.refractive_index = 0.5;
        scene.spheres.push(Sphere::new(Vec3::ZERO, 1.0, mat));
        assert!(matches!(scene.validate(), Err(Error::InvalidScene(_))));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(Scene::from_json("{ \"spheres\": 3 }"), Err(Error::Json(_))));
    }

    #[test]
    fn test_bundled_showcase_matches_builtin() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes/showcase.json");
        let scene = Scene::load(&path).expect("failed to load showcase scene");
        let builtin = Scene::showcase();
        assert_eq!(scene.spheres, builtin.spheres);
        assert_eq!(scene.lights, builtin.lights);
        assert_eq!(scene.floor, builtin.floor);
        assert!(builtin.validate().is_ok());
    }
}
