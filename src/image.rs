use cgmath::num_traits::zero;

use crate::types::Float;

pub type RGB = cgmath::Vector3<Float>;

/// Linear float colors, row-major, row 0 at the top.
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<RGB>,
}

impl Image {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![zero(); width * height] }
    }

    pub fn pixel(&self, x: usize, y: usize) -> RGB {
        self.pixels[y * self.width + x]
    }
}

pub fn float_to_byte(v: Float) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn to_bytes(v: &RGB) -> [u8; 3] {
    [float_to_byte(v.x), float_to_byte(v.y), float_to_byte(v.z)]
}
