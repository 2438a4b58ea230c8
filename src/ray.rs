use crate::{math::normalized, types::{Float, Point, Vec3}};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    pub dir: Vec3,
}

impl Ray {
    /// `dir` is normalized here; marching relies on unit steps.
    pub fn new(origin: Point, dir: Vec3) -> Self {
        Self { origin, dir: normalized(dir) }
    }

    pub fn position_at(&self, t: Float) -> Point {
        self.origin + self.dir * t
    }
}
