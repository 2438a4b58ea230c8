use std::io::Write;

use crate::{error::RenderError, image::{to_bytes, Image}};

pub fn write_ppm(image: &Image, mut out: impl Write) -> Result<(), RenderError> {
    out.write_all(b"P6\n")?;
    out.write_fmt(format_args!("{} {}\n", image.width, image.height))?;
    out.write_all(b"255\n")?;
    for pixel in &image.pixels {
        out.write_all(&to_bytes(pixel))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use cgmath::vec3;

    use super::*;

    #[test]
    fn header_then_rgb_triplets() {
        let mut image = Image::new(2, 1);
        image.pixels[0] = vec3(1.0, 0.0, 0.0);
        image.pixels[1] = vec3(0.0, 0.0, 1.0);
        let mut bytes = Vec::new();
        write_ppm(&image, &mut bytes).unwrap();
        assert_eq!(bytes, b"P6\n2 1\n255\n\xff\x00\x00\x00\x00\xff");
    }
}
