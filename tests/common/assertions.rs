//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::io::Cursor;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes are a valid RGB PNG and return (width, height, pixels)
pub fn assert_png(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder.read_info().expect("PNG header should decode");
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).expect("PNG frame should decode");
    data.truncate(info.buffer_size());

    assert_eq!(info.color_type, png::ColorType::Rgb, "Expected RGB PNG");
    assert_eq!(info.bit_depth, png::BitDepth::Eight, "Expected 8-bit PNG");
    (info.width, info.height, data)
}

/// Read the RGB triple at (x, y) from decoded PNG data
pub fn pixel_at(data: &[u8], width: u32, x: u32, y: u32) -> [u8; 3] {
    let i = ((y * width + x) * 3) as usize;
    [data[i], data[i + 1], data[i + 2]]
}
