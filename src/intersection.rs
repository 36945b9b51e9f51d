use glam::Vec3;

use crate::material::Material;

/// Which surface produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Sphere(usize),
    Floor,
}

#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    pub t: f32,
    pub pos: Vec3,
    pub nrm: Vec3,
    pub mat: Material,
    pub surface: Surface,
}
