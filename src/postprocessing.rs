use cgmath::{vec3, ElementWise};

use crate::{image::RGB, math::clamp, scene::PostProcessing, types::Float};

pub fn apply(post: &PostProcessing, color: RGB) -> RGB {
    let color = if post.aces { aces_tonemap(color) } else { color };
    match post.gamma {
        Some(gamma) => correct_gamma(color, gamma),
        None => color,
    }
}

pub fn correct_gamma(x: RGB, gamma: Float) -> RGB {
    x.map(|e| e.max(0.0).powf(1.0 / gamma))
}

pub fn aces_tonemap(x: RGB) -> RGB {
    let a: Float = 2.51;
    let b: Float = 0.03;
    let c: Float = 2.43;
    let d: Float = 0.59;
    let e: Float = 0.14;

    // saturate((x * (a * x + b)) / (x * (c * x + d) + e))
    saturate(
        mul_add(x, a, b).mul_element_wise(x).div_element_wise(mul_add(x, c, d).mul_element_wise(x).add_element_wise(e))
    )
}

fn saturate(color: RGB) -> RGB {
    vec3(
        clamp(color.x, 0.0, 1.0),
        clamp(color.y, 0.0, 1.0),
        clamp(color.z, 0.0, 1.0),
    )
}

// a * x + b
fn mul_add(x: RGB, a: Float, b: Float) -> RGB {
    (a * x).add_element_wise(b)
}

#[cfg(test)]
mod tests {
    use cgmath::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn disabled_post_is_identity() {
        let color = vec3(0.2, 1.5, 0.0);
        assert_eq!(apply(&PostProcessing::default(), color), color);
    }

    #[test]
    fn aces_maps_black_to_black_and_saturates() {
        assert_abs_diff_eq!(aces_tonemap(vec3(0.0, 0.0, 0.0)), vec3(0.0, 0.0, 0.0));
        assert_abs_diff_eq!(aces_tonemap(vec3(100.0, 100.0, 100.0)), vec3(1.0, 1.0, 1.0));
    }

    #[test]
    fn gamma_brightens_midtones() {
        let corrected = correct_gamma(vec3(0.25, 0.25, 0.25), 2.0);
        assert_abs_diff_eq!(corrected, vec3(0.5, 0.5, 0.5), epsilon = 1e-12);
    }
}
