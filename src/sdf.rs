//! Signed distance fields and the combinators that build scenes out of them.
//!
//! Distances are negative inside a surface and positive outside. Their
//! magnitude never exceeds the true distance to the nearest surface, which is
//! what lets the marcher step by the sampled value without skipping geometry.

use crate::{material::Material, types::{Float, Point}};

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub distance: Float,
    pub material: Material,
}

impl Sample {
    /// Infinitely far away. Identity element of [`union_samples`].
    pub fn background() -> Self {
        Self { distance: Float::INFINITY, material: Material::BLACK }
    }
}

/// Anything that can report the distance and material nearest to a point.
///
/// Marching, shadows and normals only depend on this, so scenes can be swapped
/// freely. `Sync` lets render workers share one field.
pub trait Sdf: Sync {
    fn sample(&self, p: Point) -> Sample;

    fn distance(&self, p: Point) -> Float {
        self.sample(p).distance
    }
}

impl<F> Sdf for F
where
    F: Fn(Point) -> Sample + Sync,
{
    fn sample(&self, p: Point) -> Sample {
        self(p)
    }
}

pub fn union(d1: Float, d2: Float) -> Float {
    d1.min(d2)
}

/// Keeps whichever sample is closer.
///
/// On an exact tie the first operand wins, so primitive order decides the
/// material where two surfaces touch.
pub fn union_samples(a: Sample, b: Sample) -> Sample {
    if b.distance < a.distance { b } else { a }
}
