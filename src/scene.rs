use cgmath::{num_traits::zero, vec2, vec3, InnerSpace, Matrix, SquareMatrix, Vector2};
use log::debug;

use crate::{
    error::RenderError,
    image::RGB,
    march::{MarchSettings, DEFAULT_MAX_STEPS, HIGH_QUALITY_MAX_STEPS},
    material::Material,
    math::{rotate_point, rotation_from_euler},
    parsed_scene::{self, PrimitiveType},
    primitives::{Cuboid, Plane, Shape, Sphere},
    sdf::{union, union_samples, Sample, Sdf},
    shading::Shading,
    types::{Float, Mat3, Point, Vec3, SDF_EPSILON},
};

#[derive(Debug, Clone)]
pub struct Primitive {
    pub shape: Shape,
    pub position: Vec3,
    /// World-to-model rotation, the transpose of the placement rotation.
    pub inverse_rotation: Mat3,
    pub material: Material,
}

impl Primitive {
    pub fn new(shape: Shape, position: Vec3, rotation: Mat3, material: Material) -> Self {
        Self { shape, position, inverse_rotation: rotation.transpose(), material }
    }

    pub fn distance(&self, p: Point) -> Float {
        self.shape.distance(rotate_point(&self.inverse_rotation, p - self.position))
    }

    pub fn sample(&self, p: Point) -> Sample {
        Sample { distance: self.distance(p), material: self.material }
    }
}

/// The whole scene as one field: every primitive in its own frame, folded
/// through [`union_samples`] in declaration order.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub primitives: Vec<Primitive>,
}

impl Sdf for Geometry {
    fn sample(&self, p: Point) -> Sample {
        self.primitives
            .iter()
            .fold(Sample::background(), |nearest, primitive| union_samples(nearest, primitive.sample(p)))
    }

    // Marching only needs the distance; skip carrying materials along.
    fn distance(&self, p: Point) -> Float {
        self.primitives.iter().map(|primitive| primitive.distance(p)).fold(Float::INFINITY, union)
    }
}

#[derive(Debug, Clone)]
pub struct CameraParams {
    pub position: Point,
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
    pub fov_x: Float,
}

#[derive(Debug, Clone, Default)]
pub struct PostProcessing {
    pub aces: bool,
    pub gamma: Option<Float>,
}

#[derive(Debug)]
pub struct Scene {
    pub geometry: Geometry,
    pub shading: Shading,
    pub camera: CameraParams,
    pub dimensions: Vector2<usize>,
    pub samples: usize,
    pub jitter: bool,
    pub post: PostProcessing,
}

impl Default for CameraParams {
    /// Looks down -z from z = 0.5 through a 1x1 viewport one unit away.
    fn default() -> Self {
        Self {
            position: Point::new(0.0, 0.0, 0.5),
            right: Vec3::unit_x(),
            up: Vec3::unit_y(),
            forward: -Vec3::unit_z(),
            fov_x: 2.0 * (0.5 as Float).atan(),
        }
    }
}

impl CameraParams {
    fn new(camera: parsed_scene::CameraParams) -> Result<Self, RenderError> {
        let defaults = Self::default();
        let fov_x = camera.fov_x.unwrap_or(defaults.fov_x);
        if !(fov_x > 0.0 && fov_x < std::f64::consts::PI as Float) {
            return Err(invalid(format!("camera fov_x must be in (0, pi), got {fov_x}")));
        }
        Ok(Self {
            position: camera.position.map(Point::from).unwrap_or(defaults.position),
            right: unit_or(camera.right, defaults.right, "camera right")?,
            up: unit_or(camera.up, defaults.up, "camera up")?,
            forward: unit_or(camera.forward, defaults.forward, "camera forward")?,
            fov_x,
        })
    }
}

impl MarchSettings {
    fn new(params: &parsed_scene::MarchParams) -> Result<Self, RenderError> {
        let default_steps = if params.high_quality { HIGH_QUALITY_MAX_STEPS } else { DEFAULT_MAX_STEPS };
        let settings = Self {
            max_steps: params.max_steps.unwrap_or(default_steps),
            epsilon: params.epsilon.unwrap_or(SDF_EPSILON),
            max_distance: params.max_distance,
        };
        if settings.max_steps == 0 {
            return Err(invalid("march max_steps must be positive"));
        }
        if !(settings.epsilon > 0.0) {
            return Err(invalid("march epsilon must be positive"));
        }
        if settings.max_distance.is_some_and(|d| !(d > 0.0)) {
            return Err(invalid("march max_distance must be positive"));
        }
        Ok(settings)
    }
}

fn resolve_material(material: Option<parsed_scene::Material>) -> Material {
    match material {
        None => Material::Diffuse { albedo: vec3(1.0, 1.0, 1.0) },
        Some(parsed_scene::Material::Diffuse { albedo }) => Material::Diffuse { albedo: albedo.into() },
        Some(parsed_scene::Material::Conductor { albedo, ior, extinction }) => Material::Conductor {
            albedo: albedo.map(RGB::from).unwrap_or(vec3(1.0, 1.0, 1.0)),
            ior: ior.into(),
            extinction: extinction.into(),
        },
        Some(parsed_scene::Material::Gold) => Material::GOLD,
        Some(parsed_scene::Material::Silver) => Material::SILVER,
        Some(parsed_scene::Material::Copper) => Material::COPPER,
        Some(parsed_scene::Material::Mirror) => Material::MIRROR,
    }
}

fn resolve_shape(prim_type: PrimitiveType) -> Result<Shape, RenderError> {
    Ok(match prim_type {
        PrimitiveType::Sphere { radius } => {
            if !(radius > 0.0) {
                return Err(invalid(format!("sphere radius must be positive, got {radius}")));
            }
            Shape::Sphere(Sphere { radius })
        }
        PrimitiveType::Plane { normal, offset } => {
            Shape::Plane(Plane { normal: unit(normal.into(), "plane normal")?, offset })
        }
        PrimitiveType::Cuboid { half_extents } => {
            let half_extents: Vec3 = half_extents.into();
            if !(half_extents.x > 0.0 && half_extents.y > 0.0 && half_extents.z > 0.0) {
                return Err(invalid("cuboid half extents must be positive"));
            }
            Shape::Cuboid(Cuboid { half_extents })
        }
    })
}

impl Primitive {
    fn from_parsed(primitive: parsed_scene::Primitive) -> Result<Self, RenderError> {
        let rotation = primitive
            .rotation
            .map(|angles| rotation_from_euler(angles.into()))
            .unwrap_or(Mat3::identity());
        Ok(Self::new(
            resolve_shape(primitive.shape)?,
            primitive.position.map(Vec3::from).unwrap_or(zero()),
            rotation,
            resolve_material(primitive.material),
        ))
    }
}

impl Scene {
    pub fn new(scene: parsed_scene::Scene) -> Result<Self, RenderError> {
        let dimensions = scene.dimensions.map(|[w, h]| vec2(w, h)).unwrap_or(vec2(256, 256));
        if dimensions.x == 0 || dimensions.y == 0 {
            return Err(invalid("image dimensions must be non-zero"));
        }
        let samples = scene.samples.unwrap_or(1);
        if samples == 0 {
            return Err(invalid("samples per pixel must be positive"));
        }
        if scene.primitives.is_empty() {
            return Err(invalid("scene has no primitives"));
        }
        if scene.post.gamma.is_some_and(|g| !(g > 0.0)) {
            return Err(invalid("gamma must be positive"));
        }

        let defaults = Shading::default();
        let shading = Shading {
            model: scene.shading.unwrap_or(defaults.model),
            light: scene.light.map(Point::from).unwrap_or(defaults.light),
            background: scene.background.map(RGB::from).unwrap_or(defaults.background),
            shadow_softness: scene.shadow_softness.unwrap_or(defaults.shadow_softness),
            max_bounces: scene.max_bounces.unwrap_or(defaults.max_bounces),
            march: MarchSettings::new(&scene.march)?,
        };

        let primitives = scene
            .primitives
            .into_iter()
            .map(Primitive::from_parsed)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "Resolved {} primitives ({} conductive), {:?} shading",
            primitives.len(),
            primitives.iter().filter(|primitive| primitive.material.is_conductive()).count(),
            shading.model
        );

        Ok(Self {
            geometry: Geometry { primitives },
            shading,
            camera: CameraParams::new(scene.camera)?,
            dimensions,
            samples,
            jitter: scene.jitter,
            post: PostProcessing { aces: scene.post.aces, gamma: scene.post.gamma },
        })
    }
}

fn invalid(message: impl Into<String>) -> RenderError {
    RenderError::InvalidScene(message.into())
}

fn unit(v: Vec3, what: &str) -> Result<Vec3, RenderError> {
    let length = v.magnitude();
    if !(length > 0.0 && length.is_finite()) {
        return Err(invalid(format!("{what} must have non-zero length")));
    }
    Ok(v / length)
}

fn unit_or(v: Option<[Float; 3]>, default: Vec3, what: &str) -> Result<Vec3, RenderError> {
    match v {
        Some(v) => unit(v.into(), what),
        None => Ok(default),
    }
}
