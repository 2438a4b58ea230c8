use cgmath::vec3;

use crate::{math::normalized, sdf::Sdf, types::{Float, Point, Vec3}};

/// Central-difference gradient of `sdf` at `p`, normalized.
///
/// Six evaluations. `epsilon` has to be small next to the surface curvature;
/// the march epsilon works well enough.
pub fn estimate_normal<S: Sdf + ?Sized>(p: Point, sdf: &S, epsilon: Float) -> Vec3 {
    let dx = vec3(epsilon, 0.0, 0.0);
    let dy = vec3(0.0, epsilon, 0.0);
    let dz = vec3(0.0, 0.0, epsilon);
    normalized(vec3(
        sdf.distance(p + dx) - sdf.distance(p - dx),
        sdf.distance(p + dy) - sdf.distance(p - dy),
        sdf.distance(p + dz) - sdf.distance(p - dz),
    ))
}
