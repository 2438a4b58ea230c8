use cgmath::{num_traits::zero, vec3, ElementWise, InnerSpace};
use serde::Deserialize;

use crate::{
    image::RGB,
    march::{ray_march, MarchSettings},
    material::{fresnel_conductor, Material},
    math::{clamp, direction_between, inv_lerp, mix_colors},
    normal::estimate_normal,
    ray::Ray,
    sdf::Sdf,
    shadow::soft_shadow,
    types::{Float, Point, Vec3, SURFACE_BIAS_FACTOR},
};

/// Returned when a conductor is hit with no bounces left. Scenes with many
/// facing mirrors need a larger budget to hide it.
pub const FALLBACK_COLOR: RGB = RGB { x: 1.0, y: 1.0, z: 1.0 };

const CLASSIC_AMBIENT: Float = 0.2;
const CLASSIC_MAX_DIFFUSE: Float = 0.7;
const CLASSIC_SPECULAR: Float = 0.04;
const CLASSIC_SPECULAR_CUTOFF: Float = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingModel {
    /// Ambient, diffuse and a narrow specular highlight. No shadows, no
    /// reflections.
    Classic,
    /// Soft-shadowed diffuse surfaces and recursive Fresnel-weighted metals.
    #[default]
    Physical,
}

#[derive(Debug, Clone)]
pub struct Shading {
    pub model: ShadingModel,
    pub light: Point,
    pub background: RGB,
    pub shadow_softness: Float,
    pub max_bounces: u32,
    pub march: MarchSettings,
}

/// Color seen along a camera ray.
pub fn pixel_color<S: Sdf + ?Sized>(ray: &Ray, sdf: &S, shading: &Shading) -> RGB {
    match ray_march(ray, sdf, &shading.march) {
        Some(point) => shade(point, ray, sdf, shading, shading.max_bounces),
        None => shading.background,
    }
}

/// Color of a surface point reached by `incoming`.
///
/// Conductors recurse along the mirror direction; each level spends one of
/// `bounces_left`, and an empty budget yields [`FALLBACK_COLOR`].
pub fn shade<S: Sdf + ?Sized>(point: Point, incoming: &Ray, sdf: &S, shading: &Shading, bounces_left: u32) -> RGB {
    let material = sdf.sample(point).material;
    let normal = estimate_normal(point, sdf, shading.march.epsilon);
    match shading.model {
        ShadingModel::Classic => classic(point, normal, material.albedo(), shading),
        ShadingModel::Physical => match material {
            Material::Diffuse { albedo } => diffuse(point, normal, albedo, sdf, shading),
            Material::Conductor { ior, extinction, .. } => {
                if bounces_left == 0 {
                    return FALLBACK_COLOR;
                }
                let cos_theta = clamp((-incoming.dir).dot(normal), 0.0, 1.0);
                let reflected = reflected_ray(point, incoming, normal, shading.march.epsilon);
                let color = match ray_march(&reflected, sdf, &shading.march) {
                    Some(hit) => shade(hit, &reflected, sdf, shading, bounces_left - 1),
                    None => shading.background,
                };
                color.mul_element_wise(fresnel_conductor(cos_theta, ior, extinction))
            }
        },
    }
}

fn reflected_ray(point: Point, incoming: &Ray, normal: Vec3, epsilon: Float) -> Ray {
    let dir = incoming.dir - 2.0 * normal.dot(incoming.dir) * normal;
    Ray::new(point + dir * (SURFACE_BIAS_FACTOR * epsilon), dir)
}

fn diffuse<S: Sdf + ?Sized>(point: Point, normal: Vec3, albedo: RGB, sdf: &S, shading: &Shading) -> RGB {
    let to_light = direction_between(point, shading.light);
    let shadow = soft_shadow(point, shading.light, sdf, shading.shadow_softness, &shading.march);
    let lit = clamp(normal.dot(to_light), 0.0, 1.0) * shadow;
    // [-1, 1] -> [0, 1]; unlit surfaces keep half their albedo
    albedo * inv_lerp(lit, -1.0, 1.0)
}

fn classic(point: Point, normal: Vec3, albedo: RGB, shading: &Shading) -> RGB {
    let dp = normal.dot(direction_between(point, shading.light));
    let specular = inv_lerp(dp, CLASSIC_SPECULAR_CUTOFF, 1.0) * CLASSIC_SPECULAR;
    let diffuse = dp.max(0.0) * CLASSIC_MAX_DIFFUSE;
    mix_colors(albedo, vec3(1.0, 1.0, 1.0), CLASSIC_AMBIENT + diffuse, specular)
}

impl Default for Shading {
    fn default() -> Self {
        Self {
            model: ShadingModel::default(),
            light: Point::new(-0.2, 0.2, 0.5),
            background: zero(),
            shadow_softness: 8.0,
            max_bounces: 64,
            march: MarchSettings::default(),
        }
    }
}
