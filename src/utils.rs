use glam::Vec3;

/// Offset applied to hit points before spawning secondary rays.
pub const BIAS: f32 = 1e-3;

/// Direction returned by `refract` on total internal reflection.
pub const TIR_DIRECTION: Vec3 = Vec3::new(1.0, 0.0, 0.0);

pub fn reflect(incoming: &Vec3, normal: &Vec3) -> Vec3 {
    return *incoming - (*normal * normal.dot(*incoming) * 2.0);
}

/**
 * Snell's law through a two-sided boundary. `eta_t` is the index on the far
 * side of `normal`, `eta_i` the index the ray travels in. A ray leaving the
 * medium (incoming on the same side the normal points to) swaps the media.
 *
 * The result is not normalized.
 */
pub fn refract(incoming: &Vec3, normal: &Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    let cos_i = -incoming.dot(*normal).clamp(-1.0, 1.0);
    if cos_i < 0.0 {
        return refract(incoming, &-*normal, eta_i, eta_t);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return TIR_DIRECTION;
    }

    return *incoming * eta + *normal * (eta * cos_i - k.sqrt());
}

/// Nudges `point` off the surface towards the side `direction` heads into.
pub fn offset_origin(point: &Vec3, normal: &Vec3, direction: &Vec3, bias: f32) -> Vec3 {
    if direction.dot(*normal) < 0.0 {
        *point - *normal * bias
    } else {
        *point + *normal * bias
    }
}
