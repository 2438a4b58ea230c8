use cgmath::{vec3, EuclideanSpace, InnerSpace as _};

use crate::types::{Float, Point, Vec3};

/// Axis-aligned box centered at the origin, exact both inside and outside.
pub fn cuboid_sdf(p: Point, half_extents: Vec3) -> Float {
    let q = p.to_vec().map(Float::abs) - half_extents;
    let outside = vec3(q.x.max(0.0), q.y.max(0.0), q.z.max(0.0)).magnitude();
    let inside = q.x.max(q.y).max(q.z).min(0.0);
    outside + inside
}

#[derive(Debug, Clone, Copy)]
pub struct Cuboid {
    pub half_extents: Vec3,
}

impl Cuboid {
    pub fn distance(&self, p: Point) -> Float {
        cuboid_sdf(p, self.half_extents)
    }
}
