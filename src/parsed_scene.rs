use serde::Deserialize;

use crate::{shading::ShadingModel, types::Float};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    Diffuse {
        albedo: [Float; 3],
    },
    Conductor {
        albedo: Option<[Float; 3]>,
        ior: [Float; 3],
        extinction: [Float; 3],
    },
    Gold,
    Silver,
    Copper,
    Mirror,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveType {
    Sphere {
        radius: Float,
    },
    Plane {
        normal: [Float; 3],
        #[serde(default)]
        offset: Float,
    },
    Cuboid {
        half_extents: [Float; 3],
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Primitive {
    pub shape: PrimitiveType,
    pub position: Option<[Float; 3]>,
    /// Euler angles in radians, applied x, then y, then z.
    pub rotation: Option<[Float; 3]>,
    pub material: Option<Material>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraParams {
    pub position: Option<[Float; 3]>,
    pub right: Option<[Float; 3]>,
    pub up: Option<[Float; 3]>,
    pub forward: Option<[Float; 3]>,
    pub fov_x: Option<Float>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarchParams {
    pub max_steps: Option<usize>,
    pub epsilon: Option<Float>,
    pub max_distance: Option<Float>,
    pub high_quality: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostParams {
    pub aces: bool,
    pub gamma: Option<Float>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    pub dimensions: Option<[usize; 2]>,
    pub samples: Option<usize>,
    pub jitter: bool,
    pub background: Option<[Float; 3]>,
    pub camera: CameraParams,
    pub light: Option<[Float; 3]>,
    pub shading: Option<ShadingModel>,
    pub max_bounces: Option<u32>,
    pub shadow_softness: Option<Float>,
    pub march: MarchParams,
    pub post: PostParams,
    pub primitives: Vec<Primitive>,
}
