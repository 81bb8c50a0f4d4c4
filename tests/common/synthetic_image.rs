/// Generates an RGBA checkerboard alternating opaque red cells and fully
/// transparent cells. Transparent cells carry nonzero RGB so tests can verify
/// they survive bit-identical.
pub fn alpha_checkerboard_rgba(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height * 4];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let px = if sum & 1 == 0 {
                [200u8, 30, 40, 255]
            } else {
                [7u8, 8, 9, 0]
            };
            let start = (y * width + x) * 4;
            img[start..start + 4].copy_from_slice(&px);
        }
    }
    img
}

/// Generates a fully transparent RGBA image with nonzero RGB everywhere.
pub fn transparent_rgba(width: usize, height: usize) -> Vec<u8> {
    let mut img = vec![0u8; width * height * 4];
    for px in img.chunks_exact_mut(4) {
        px.copy_from_slice(&[120, 130, 140, 0]);
    }
    img
}
