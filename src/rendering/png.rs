use crate::error::RenderError;
use std::io::Cursor;

/// Encode an interleaved 8-bit RGB buffer as PNG.
///
/// Each source pixel becomes a `scale`×`scale` block (nearest neighbor), so a
/// 48×48 mosaic at scale 10 is written as a 480×480 image.
pub fn encode_rgb_png(
    rgb: &[u8],
    width: u32,
    height: u32,
    scale: u32,
) -> Result<Vec<u8>, RenderError> {
    if width == 0 || height == 0 || scale == 0 {
        return Err(RenderError::UnsupportedDimensions { width, height });
    }
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(RenderError::PngEncode(format!(
            "buffer length {} does not match {width}x{height} RGB ({expected})",
            rgb.len()
        )));
    }

    let (out_w, out_h) = (width * scale, height * scale);
    let data = if scale == 1 {
        rgb.to_vec()
    } else {
        upscale_nearest(rgb, width as usize, scale as usize)
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, out_w, out_h);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }

    tracing::debug!(width = out_w, height = out_h, bytes = buf.get_ref().len(), "Encoded PNG");
    Ok(buf.into_inner())
}

/// Repeat every pixel `scale` times horizontally and every row `scale` times.
fn upscale_nearest(rgb: &[u8], width: usize, scale: usize) -> Vec<u8> {
    let row_bytes = width * 3;
    let mut out = Vec::with_capacity(rgb.len() * scale * scale);

    for row in rgb.chunks_exact(row_bytes) {
        let start = out.len();
        for px in row.chunks_exact(3) {
            for _ in 0..scale {
                out.extend_from_slice(px);
            }
        }
        let wide = out[start..].to_vec();
        for _ in 1..scale {
            out.extend_from_slice(&wide);
        }
    }
    out
}
