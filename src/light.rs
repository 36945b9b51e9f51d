use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32) -> Light {
        Light {
            position,
            intensity,
        }
    }

    /// Unit direction from `p` towards the light, and the distance to it.
    pub fn direction_from(&self, p: &Vec3) -> (Vec3, f32) {
        let to_light = self.position - *p;
        return (to_light.normalize(), to_light.length());
    }
}
