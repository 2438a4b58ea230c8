use cgmath::{EuclideanSpace, InnerSpace};

use crate::types::{Float, Point};

/// Sphere centered at the origin. Callers move `p` into its frame first.
pub fn sphere_sdf(p: Point, radius: Float) -> Float {
    p.to_vec().magnitude() - radius
}

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub radius: Float,
}

impl Sphere {
    pub fn distance(&self, p: Point) -> Float {
        sphere_sdf(p, self.radius)
    }
}
