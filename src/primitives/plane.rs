use cgmath::{EuclideanSpace, InnerSpace as _};

use crate::types::{Float, Point, Vec3};

/// Signed distance to the plane `dot(normal, x) = -h`.
///
/// Only metric when `normal` has unit length.
pub fn plane_sdf(p: Point, normal: Vec3, h: Float) -> Float {
    p.to_vec().dot(normal) + h
}

#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: Float,
}

impl Plane {
    pub fn distance(&self, p: Point) -> Float {
        plane_sdf(p, self.normal, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{assert_abs_diff_eq, point3};

    use super::*;

    #[test]
    fn distance_above_and_below() {
        let floor = Plane { normal: Vec3::unit_y(), offset: 0.2 };
        assert_abs_diff_eq!(floor.distance(point3(3.0, 0.0, -1.0)), 0.2);
        assert_abs_diff_eq!(floor.distance(point3(0.0, -0.2, 0.0)), 0.0);
        assert_abs_diff_eq!(floor.distance(point3(0.0, -0.5, 7.0)), -0.3, epsilon = 1e-12);
    }
}
