//! Pixel buffer conversion from a [`PixelGrid`].

use colorful_core::{PixelGrid, Rgba};

/// Quantizes a grid to a row-major RGBA8 buffer of `width * height * 4` bytes.
pub fn grid_to_rgba(grid: &PixelGrid) -> Vec<u8> {
    grid.data().iter().flat_map(|p| p.to_rgba8()).collect()
}

/// Like [`grid_to_rgba`], but surrounded by a 1px `border`, giving the
/// surface's outer size.
pub fn framed_rgba(grid: &PixelGrid, border: Rgba) -> Vec<u8> {
    let (w, h) = (grid.width() + 2, grid.height() + 2);
    let edge = border.to_rgba8();
    let mut buf = Vec::with_capacity(w * h * 4);
    for y in 0..h {
        for x in 0..w {
            let inside = (1..w - 1).contains(&x) && (1..h - 1).contains(&y);
            let px = if inside {
                grid.get(x as isize - 1, y as isize - 1)
                    .map_or(edge, Rgba::to_rgba8)
            } else {
                edge
            };
            buf.extend_from_slice(&px);
        }
    }
    buf
}
