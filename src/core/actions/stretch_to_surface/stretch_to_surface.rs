use rayon::prelude::*;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::surface_size::SurfaceSize;

/// Nearest-neighbour stretch of a raster onto the full presentation surface.
///
/// Every output pixel is written, so the result fully replaces whatever was
/// presented before. An empty source on a non-empty surface gives opaque black.
pub fn stretch_to_surface(
    source: &PixelBuffer,
    surface: SurfaceSize,
) -> Result<PixelBuffer, PixelBufferError> {
    if surface.is_empty() {
        return Ok(PixelBuffer::new(surface));
    }

    if source.is_empty() {
        return Ok(PixelBuffer::filled(surface, Colour::BLACK));
    }

    if source.size() == surface {
        return Ok(source.clone());
    }

    let src_size = source.size();
    let src = source.buffer();
    let src_row_bytes = src_size.width as usize * BYTES_PER_PIXEL;
    let dst_row_bytes = surface.width as usize * BYTES_PER_PIXEL;

    let column_offsets: Vec<usize> = (0..surface.width)
        .map(|x| nearest_source_index(x, surface.width, src_size.width) * BYTES_PER_PIXEL)
        .collect();

    let mut dst = vec![0u8; surface.pixel_count() * BYTES_PER_PIXEL];

    dst.par_chunks_exact_mut(dst_row_bytes)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let src_y = nearest_source_index(y as u32, surface.height, src_size.height);
            let src_row = &src[src_y * src_row_bytes..(src_y + 1) * src_row_bytes];

            for (dst_pixel, &offset) in dst_row
                .chunks_exact_mut(BYTES_PER_PIXEL)
                .zip(&column_offsets)
            {
                dst_pixel.copy_from_slice(&src_row[offset..offset + BYTES_PER_PIXEL]);
            }
        });

    PixelBuffer::from_data(surface, dst)
}

#[inline]
fn nearest_source_index(dst_index: u32, dst_len: u32, src_len: u32) -> usize {
    ((u64::from(dst_index) * u64::from(src_len)) / u64::from(dst_len)) as usize
}
