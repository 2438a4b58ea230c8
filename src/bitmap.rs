//! Uncompressed 24-bit BMP output.
//!
//! A 14-byte file header and a 40-byte `BITMAPINFOHEADER`, followed by the
//! pixel rows bottom-up in BGR order, each padded to four bytes.

use std::io::Write;

use crate::{error::RenderError, image::{to_bytes, Image}};

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const BYTES_PER_PIXEL: usize = 3;

fn row_stride(width: usize) -> usize {
    (width * BYTES_PER_PIXEL + 3) / 4 * 4
}

pub fn write_bitmap(image: &Image, mut out: impl Write) -> Result<(), RenderError> {
    let stride = row_stride(image.width);
    let image_size = u32::try_from(stride * image.height)
        .map_err(|_| RenderError::UnsupportedFormat("image too large for BMP".to_string()))?;
    let width = i32::try_from(image.width)
        .map_err(|_| RenderError::UnsupportedFormat("image too wide for BMP".to_string()))?;
    let height = i32::try_from(image.height)
        .map_err(|_| RenderError::UnsupportedFormat("image too tall for BMP".to_string()))?;
    let pixels_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
    let file_size = pixels_offset
        .checked_add(image_size)
        .ok_or_else(|| RenderError::UnsupportedFormat("image too large for BMP".to_string()))?;

    out.write_all(b"BM")?;
    out.write_all(&file_size.to_le_bytes())?;
    out.write_all(&0u16.to_le_bytes())?;
    out.write_all(&0u16.to_le_bytes())?;
    out.write_all(&pixels_offset.to_le_bytes())?;

    out.write_all(&INFO_HEADER_SIZE.to_le_bytes())?;
    out.write_all(&width.to_le_bytes())?;
    // positive height: rows are stored bottom-up
    out.write_all(&height.to_le_bytes())?;
    out.write_all(&1u16.to_le_bytes())?;
    out.write_all(&((BYTES_PER_PIXEL * 8) as u16).to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?; // BI_RGB
    out.write_all(&image_size.to_le_bytes())?;
    out.write_all(&0i32.to_le_bytes())?;
    out.write_all(&0i32.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?;

    let mut row = Vec::with_capacity(stride);
    for y in (0..image.height).rev() {
        row.clear();
        for x in 0..image.width {
            let [r, g, b] = to_bytes(&image.pixel(x, y));
            row.extend_from_slice(&[b, g, r]);
        }
        row.resize(stride, 0);
        out.write_all(&row)?;
    }
    out.flush()?;
    Ok(())
}
