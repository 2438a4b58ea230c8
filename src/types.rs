use cgmath::{Matrix3, Point3, Vector2, Vector3};

pub type Float = f64;
pub type Vec2 = Vector2<Float>;
pub type Vec3 = Vector3<Float>;
pub type Point = Point3<Float>;
pub type Mat3 = Matrix3<Float>;

/// Convergence threshold shared by marching, normal taps and shadow probes.
pub const SDF_EPSILON: Float = 1e-4;

/// Secondary rays start this many epsilons away from the surface they leave.
pub const SURFACE_BIAS_FACTOR: Float = 50.0;
