use cgmath::InnerSpace;

use crate::{march::MarchSettings, math::clamp, sdf::Sdf, types::{Float, Point, SURFACE_BIAS_FACTOR}};

/// Penumbra factor for `point` lit from `light`: 0 fully occluded, 1 fully lit.
///
/// Marches towards the light keeping the smallest `k * d / t`, the closest
/// approach to any surface relative to distance travelled. Larger `k` gives
/// harder shadow edges. The march starts a small bias away from `point` so the
/// surface being shaded does not occlude itself.
pub fn soft_shadow<S: Sdf + ?Sized>(point: Point, light: Point, sdf: &S, k: Float, settings: &MarchSettings) -> Float {
    let to_light = light - point;
    let light_distance = to_light.magnitude();
    if light_distance <= 0.0 {
        return 1.0;
    }
    let dir = to_light / light_distance;

    let mut result: Float = 1.0;
    let mut t = SURFACE_BIAS_FACTOR * settings.epsilon;
    for _ in 0..settings.max_steps {
        if t >= light_distance {
            break;
        }
        let d = sdf.distance(point + dir * t);
        if d <= settings.epsilon {
            return 0.0;
        }
        result = result.min(k * d / t);
        t += d;
    }
    clamp(result, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use cgmath::{assert_abs_diff_eq, point3, vec3, EuclideanSpace};

    use super::*;
    use crate::{material::Material, primitives::sphere::sphere_sdf, sdf::Sample, types::Vec3};

    fn occluder(center: Vec3) -> impl Fn(Point) -> Sample + Sync {
        move |p| Sample { distance: sphere_sdf(p - center, 0.1), material: Material::BLACK }
    }

    #[test]
    fn unoccluded_is_fully_lit() {
        let field = occluder(vec3(5.0, 0.0, 1.0));
        let factor = soft_shadow(Point::origin(), point3(0.0, 0.0, 2.0), &field, 2.0, &MarchSettings::default());
        assert_abs_diff_eq!(factor, 1.0);
    }

    #[test]
    fn occluder_on_segment_blocks_light() {
        let field = occluder(vec3(0.0, 0.0, 1.0));
        let factor = soft_shadow(Point::origin(), point3(0.0, 0.0, 2.0), &field, 2.0, &MarchSettings::default());
        assert_abs_diff_eq!(factor, 0.0);
    }

    #[test]
    fn shadow_darkens_as_occluder_approaches_segment() {
        let settings = MarchSettings::default();
        let factors: Vec<Float> = [2.0, 0.4, 0.2, 0.0]
            .into_iter()
            .map(|x| soft_shadow(Point::origin(), point3(0.0, 0.0, 2.0), &occluder(vec3(x, 0.0, 1.0)), 2.0, &settings))
            .collect();
        assert_abs_diff_eq!(factors[0], 1.0);
        assert_abs_diff_eq!(factors[3], 0.0);
        for pair in factors.windows(2) {
            assert!(pair[0] >= pair[1], "{factors:?} is not non-increasing");
        }
        assert!(factors[1] < 1.0 && factors[2] < factors[1]);
    }

    #[test]
    fn larger_k_sharpens_penumbra() {
        let field = occluder(vec3(0.4, 0.0, 1.0));
        let settings = MarchSettings::default();
        let soft = soft_shadow(Point::origin(), point3(0.0, 0.0, 2.0), &field, 1.0, &settings);
        let hard = soft_shadow(Point::origin(), point3(0.0, 0.0, 2.0), &field, 1.5, &settings);
        assert!(hard > soft);
    }
}
