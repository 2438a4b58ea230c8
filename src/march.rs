use crate::{ray::Ray, sdf::Sdf, types::{Float, Point, SDF_EPSILON}};

pub const DEFAULT_MAX_STEPS: usize = 128;
pub const HIGH_QUALITY_MAX_STEPS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchSettings {
    pub max_steps: usize,
    pub epsilon: Float,
    /// Optional cutoff for rays that leave the scene. Without it a clear miss
    /// burns the whole step budget.
    pub max_distance: Option<Float>,
}

impl Default for MarchSettings {
    fn default() -> Self {
        Self { max_steps: DEFAULT_MAX_STEPS, epsilon: SDF_EPSILON, max_distance: None }
    }
}

/// Sphere-traces `ray` through `sdf`.
///
/// Returns the first point whose distance is within `epsilon`, or `None` when
/// the step budget (or the distance cutoff) runs out first. A miss is a normal
/// outcome and callers treat it as background.
pub fn ray_march<S: Sdf + ?Sized>(ray: &Ray, sdf: &S, settings: &MarchSettings) -> Option<Point> {
    let mut t: Float = 0.0;
    for _ in 0..settings.max_steps {
        let point = ray.position_at(t);
        let d = sdf.distance(point);
        if d <= settings.epsilon {
            return Some(point);
        }
        t += d;
        if settings.max_distance.is_some_and(|max| t > max) {
            return None;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use cgmath::{point3, vec3, EuclideanSpace, InnerSpace};

    use super::*;
    use crate::{material::Material, primitives::sphere::sphere_sdf, sdf::Sample, types::Vec3};

    fn sphere(radius: Float) -> impl Fn(Point) -> Sample + Sync {
        move |p| Sample { distance: sphere_sdf(p, radius), material: Material::BLACK }
    }

    #[test]
    fn ray_towards_center_hits_surface() {
        let radius = 0.2;
        let field = sphere(radius);
        let settings = MarchSettings::default();
        for origin in [point3(0.0, 0.0, 0.5), point3(3.0, -2.0, 1.0), point3(-0.3, 0.3, 0.3)] {
            let ray = Ray::new(origin, Point::origin() - origin);
            let hit = ray_march(&ray, &field, &settings).expect("ray aimed at the center must hit");
            assert!(field.distance(hit) <= settings.epsilon);
            assert!((hit.to_vec().magnitude() - radius).abs() <= settings.epsilon);
        }
    }

    #[test]
    fn ray_pointing_away_misses() {
        let field = sphere(0.2);
        let ray = Ray::new(point3(0.0, 0.0, 0.5), vec3(0.0, 0.0, 1.0));
        assert_eq!(ray_march(&ray, &field, &MarchSettings::default()), None);
    }

    #[test]
    fn miss_spends_full_step_budget_without_cutoff() {
        let calls = AtomicUsize::new(0);
        let field = |p: Point| {
            calls.fetch_add(1, Ordering::Relaxed);
            Sample { distance: p.x.abs() + 1.0, material: Material::BLACK }
        };
        let settings = MarchSettings { max_steps: 40, ..MarchSettings::default() };
        let ray = Ray::new(Point::origin(), Vec3::unit_y());
        assert_eq!(ray_march(&ray, &field, &settings), None);
        assert_eq!(calls.load(Ordering::Relaxed), 40);
    }

    #[test]
    fn distance_cutoff_ends_clear_misses_early() {
        let calls = AtomicUsize::new(0);
        let field = |_: Point| {
            calls.fetch_add(1, Ordering::Relaxed);
            Sample { distance: 1.0, material: Material::BLACK }
        };
        let settings = MarchSettings { max_steps: 40, max_distance: Some(5.5), ..MarchSettings::default() };
        let ray = Ray::new(Point::origin(), Vec3::unit_y());
        assert_eq!(ray_march(&ray, &field, &settings), None);
        assert_eq!(calls.load(Ordering::Relaxed), 6);
    }
}
