pub mod sphere;
pub mod plane;
pub mod cuboid;

pub use sphere::Sphere;
pub use plane::Plane;
pub use cuboid::Cuboid;

use crate::types::{Float, Point};

#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Cuboid(Cuboid),
}

impl Shape {
    /// Distance in the shape's own frame.
    pub fn distance(&self, p: Point) -> Float {
        match self {
            Shape::Sphere(sphere) => sphere.distance(p),
            Shape::Plane(plane) => plane.distance(p),
            Shape::Cuboid(cuboid) => cuboid.distance(p),
        }
    }
}
