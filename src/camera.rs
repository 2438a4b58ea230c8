use cgmath::{num_traits::AsPrimitive, Vector2};

use crate::{math::{inv_lerp, lerp}, ray::Ray, scene::CameraParams, types::{Float, Point, Vec2, Vec3}};

pub struct Camera {
    position: Point,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    tan_half_fov_x: Float,
    tan_half_fov_y: Float,
    width: Float,
    height: Float,
}

impl Camera {
    pub fn new(params: &CameraParams, width: usize, height: usize) -> Self {
        let fwidth: Float = width.as_();
        let fheight: Float = height.as_();
        let tan_half_fov_x = (params.fov_x / 2.0).tan();
        let aspect_ratio = fwidth / fheight;
        let tan_half_fov_y = tan_half_fov_x / aspect_ratio;
        Self {
            position: params.position,
            right: params.right,
            up: params.up,
            forward: params.forward,
            tan_half_fov_x,
            tan_half_fov_y,
            width: fwidth,
            height: fheight,
        }
    }

    /// Ray through `pixel` at `offset` within it, both axes in [0, 1).
    /// Row 0 is the top of the image.
    pub fn ray(&self, pixel: Vector2<usize>, offset: Vec2) -> Ray {
        let px = pixel.x as Float + offset.x;
        let py = pixel.y as Float + offset.y;
        let x = lerp(inv_lerp(px, 0.0, self.width), -self.tan_half_fov_x, self.tan_half_fov_x);
        let y = lerp(inv_lerp(py, 0.0, self.height), self.tan_half_fov_y, -self.tan_half_fov_y);
        let dir = x * self.right + y * self.up + self.forward;
        Ray::new(self.position, dir)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{assert_abs_diff_eq, vec2, vec3, InnerSpace};

    use super::*;

    fn camera(width: usize, height: usize) -> Camera {
        Camera::new(&CameraParams::default(), width, height)
    }

    #[test]
    fn center_ray_looks_forward() {
        let ray = camera(256, 256).ray(vec2(128, 128), vec2(0.0, 0.0));
        assert_abs_diff_eq!(ray.dir, vec3(0.0, 0.0, -1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(ray.origin, Point::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn corners_span_unit_viewport_at_unit_distance() {
        let cam = camera(4, 4);
        let top_left = cam.ray(vec2(0, 0), vec2(0.0, 0.0));
        assert_abs_diff_eq!(top_left.dir, vec3(-0.5, 0.5, -1.0).normalize(), epsilon = 1e-12);
        let bottom_right = cam.ray(vec2(3, 3), vec2(1.0, 1.0));
        assert_abs_diff_eq!(bottom_right.dir, vec3(0.5, -0.5, -1.0).normalize(), epsilon = 1e-12);
    }

    #[test]
    fn directions_are_unit_length() {
        let cam = camera(7, 3);
        for (x, y) in [(0, 0), (6, 2), (3, 1)] {
            assert_abs_diff_eq!(cam.ray(vec2(x, y), vec2(0.25, 0.75)).dir.magnitude(), 1.0, epsilon = 1e-12);
        }
    }
}
