//! Synthetic RGBA drawing-pad buffers for end-to-end tests.

pub const BLACK: [u8; 3] = [0, 0, 0];
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Uniformly coloured, fully opaque RGBA buffer.
pub fn solid_rgba(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        img.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
    }
    img
}

/// Fill the axis-aligned rectangle `[x0, x0 + w) × [y0, y0 + h)`.
pub fn fill_rect(
    img: &mut [u8],
    width: usize,
    x0: usize,
    y0: usize,
    w: usize,
    h: usize,
    rgb: [u8; 3],
) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            let i = (y * width + x) * 4;
            img[i..i + 3].copy_from_slice(&rgb);
        }
    }
}

/// Stroke of `thickness` along the segment `(x0, y0) → (x1, y1)`, drawn as
/// square stamps the way a pad brush would.
pub fn stroke(
    img: &mut [u8],
    width: usize,
    height: usize,
    from: (usize, usize),
    to: (usize, usize),
    thickness: usize,
    rgb: [u8; 3],
) {
    let (fx, fy) = (from.0 as f32, from.1 as f32);
    let (tx, ty) = (to.0 as f32, to.1 as f32);
    let steps = ((tx - fx).abs().max((ty - fy).abs()) as usize).max(1);
    let half = thickness / 2;
    for s in 0..=steps {
        let t = s as f32 / steps as f32;
        let cx = (fx + (tx - fx) * t).round() as usize;
        let cy = (fy + (ty - fy) * t).round() as usize;
        let x0 = cx.saturating_sub(half);
        let y0 = cy.saturating_sub(half);
        let w = thickness.min(width - x0);
        let h = thickness.min(height - y0);
        fill_rect(img, width, x0, y0, w, h, rgb);
    }
}
