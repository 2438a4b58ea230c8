use cgmath::{vec3, Vector3};

use crate::{image::RGB, math::clamp, types::Float};

/// Surface response attached to a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Dielectric surface lit with a diffuse term only.
    Diffuse { albedo: RGB },
    /// Metal. Reflects the scene, weighted by per-channel Fresnel reflectance
    /// from the complex index of refraction `ior + i * extinction`.
    Conductor { albedo: RGB, ior: RGB, extinction: RGB },
}

const fn rgb(x: Float, y: Float, z: Float) -> RGB {
    Vector3 { x, y, z }
}

impl Material {
    pub const BLACK: Material = Material::Diffuse { albedo: rgb(0.0, 0.0, 0.0) };

    pub const GOLD: Material = Material::Conductor {
        albedo: rgb(1.0, 0.78, 0.34),
        ior: rgb(0.18299, 0.42108, 1.3734),
        extinction: rgb(3.4242, 2.3459, 1.7704),
    };

    pub const SILVER: Material = Material::Conductor {
        albedo: rgb(0.97, 0.96, 0.91),
        ior: rgb(0.15943, 0.14512, 0.13547),
        extinction: rgb(3.9291, 3.19, 2.3808),
    };

    pub const COPPER: Material = Material::Conductor {
        albedo: rgb(0.95, 0.64, 0.54),
        ior: rgb(0.27105, 0.67693, 1.3164),
        extinction: rgb(3.6092, 2.6248, 2.2921),
    };

    // Aluminium
    pub const MIRROR: Material = Material::Conductor {
        albedo: rgb(0.91, 0.92, 0.92),
        ior: rgb(1.6574, 0.88037, 0.5212),
        extinction: rgb(9.2238, 6.2695, 4.837),
    };

    pub fn albedo(&self) -> RGB {
        match self {
            Material::Diffuse { albedo } => *albedo,
            Material::Conductor { albedo, .. } => *albedo,
        }
    }

    pub fn is_conductive(&self) -> bool {
        matches!(self, Material::Conductor { .. })
    }
}

/// Unpolarized reflectance of a conductor, per channel.
///
/// `cos_theta` is the cosine of the incidence angle.
pub fn fresnel_conductor(cos_theta: Float, ior: RGB, extinction: RGB) -> RGB {
    vec3(
        fresnel_conductor_channel(cos_theta, ior.x, extinction.x),
        fresnel_conductor_channel(cos_theta, ior.y, extinction.y),
        fresnel_conductor_channel(cos_theta, ior.z, extinction.z),
    )
}

fn fresnel_conductor_channel(cos_theta: Float, n: Float, k: Float) -> Float {
    let cos_theta = clamp(cos_theta, 0.0, 1.0);
    let cos2 = cos_theta * cos_theta;
    let sin2 = 1.0 - cos2;
    let n2 = n * n;
    let k2 = k * k;

    let t0 = n2 - k2 - sin2;
    let a2_plus_b2 = (t0 * t0 + 4.0 * n2 * k2).sqrt();
    let a = (0.5 * (a2_plus_b2 + t0)).max(0.0).sqrt();

    let t1 = a2_plus_b2 + cos2;
    let t2 = 2.0 * a * cos_theta;
    let rs = (t1 - t2) / (t1 + t2);

    let t3 = a2_plus_b2 * cos2 + sin2 * sin2;
    let t4 = t2 * sin2;
    let rp = rs * (t3 - t4) / (t3 + t4);

    0.5 * (rp + rs)
}
