use cgmath::{EuclideanSpace, InnerSpace, Matrix3, Rad};

use crate::{image::RGB, types::{Float, Mat3, Point, Vec3}};

pub fn clamp(t: Float, lower: Float, upper: Float) -> Float {
    t.max(lower).min(upper)
}

/// Maps `t` in [0, 1] onto [lower, upper]. `t` is clamped first.
pub fn lerp(t: Float, lower: Float, upper: Float) -> Float {
    lower + (upper - lower) * clamp(t, 0.0, 1.0)
}

/// Inverse of [`lerp`]: where `t` sits between the bounds, clamped to [0, 1].
pub fn inv_lerp(t: Float, lower: Float, upper: Float) -> Float {
    clamp((t - lower) / (upper - lower), 0.0, 1.0)
}

/// Unit vector along `v`.
///
/// Precondition: `v` has non-zero length. A zero vector has no direction and
/// would turn every later computation into NaN.
pub fn normalized(v: Vec3) -> Vec3 {
    debug_assert!(v.magnitude2() > 0.0, "cannot normalize a zero-length vector");
    v.normalize()
}

pub fn direction_between(start: Point, end: Point) -> Vec3 {
    normalized(end - start)
}

pub fn rotation_x(angle: Float) -> Mat3 {
    Matrix3::from_angle_x(Rad(angle))
}

pub fn rotation_y(angle: Float) -> Mat3 {
    Matrix3::from_angle_y(Rad(angle))
}

pub fn rotation_z(angle: Float) -> Mat3 {
    Matrix3::from_angle_z(Rad(angle))
}

/// `t2` is applied first, then `t1`. Order matters.
pub fn combine(t1: Mat3, t2: Mat3) -> Mat3 {
    t1 * t2
}

/// Rotation about x, then y, then z.
pub fn rotation_from_euler(angles: Vec3) -> Mat3 {
    combine(rotation_z(angles.z), combine(rotation_y(angles.y), rotation_x(angles.x)))
}

/// Rotates a location about the origin.
pub fn rotate_point(t: &Mat3, p: Point) -> Point {
    Point::from_vec(*t * p.to_vec())
}

/// Weighted sum of two colors. Weights need not add up to one.
pub fn mix_colors(c1: RGB, c2: RGB, t1: Float, t2: Float) -> RGB {
    c1 * t1 + c2 * t2
}
