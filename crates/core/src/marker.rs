//! Position marker glyphs drawn over picker surfaces.
//!
//! Offsets are relative to the marker anchor. Every pixel is bounds-checked
//! on its own, so a marker at the first or last row is clipped instead of
//! being dropped or running off the grid.

use crate::color::Rgba;
use crate::grid::PixelGrid;

/// 3×3 ring around the anchor; the anchor pixel itself stays visible.
pub const RING: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Left-edge bracket: a small triangle pointing right at the anchor row.
/// The right-edge bracket mirrors it horizontally.
pub const BRACKET: [(isize, isize); 9] = [
    (0, -2),
    (0, -1),
    (1, -1),
    (0, 0),
    (1, 0),
    (2, 0),
    (0, 1),
    (1, 1),
    (0, 2),
];

/// Draws [`RING`] around `(x, y)`. Returns the number of pixels written.
pub fn draw_ring(grid: &mut PixelGrid, x: isize, y: isize, color: Rgba) -> usize {
    RING.iter()
        .filter(|(dx, dy)| grid.put(x + dx, y + dy, color))
        .count()
}

/// Draws [`BRACKET`] on both vertical edges at `row`. Returns the number of
/// pixels written.
pub fn draw_brackets(grid: &mut PixelGrid, row: isize, color: Rgba) -> usize {
    let right = grid.width() as isize - 1;
    BRACKET
        .iter()
        .map(|&(dx, dy)| {
            let left = grid.put(dx, row + dy, color) as usize;
            left + grid.put(right - dx, row + dy, color) as usize
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_black(grid: &PixelGrid) -> usize {
        grid.data().iter().filter(|&&p| p == Rgba::BLACK).count()
    }

    #[test]
    fn ring_in_the_middle_draws_eight_pixels() {
        let mut grid = PixelGrid::new(9, 9).unwrap();
        assert_eq!(draw_ring(&mut grid, 4, 4, Rgba::BLACK), 8);
        assert_eq!(grid.get(4, 4), Some(Rgba::TRANSPARENT));
        assert_eq!(grid.get(3, 3), Some(Rgba::BLACK));
        assert_eq!(grid.get(5, 5), Some(Rgba::BLACK));
    }

    #[test]
    fn ring_in_a_corner_is_clipped() {
        let mut grid = PixelGrid::new(9, 9).unwrap();
        assert_eq!(draw_ring(&mut grid, 0, 0, Rgba::BLACK), 3);
        assert_eq!(count_black(&grid), 3);
        let mut grid = PixelGrid::new(9, 9).unwrap();
        assert_eq!(draw_ring(&mut grid, 8, 8, Rgba::BLACK), 3);
    }

    #[test]
    fn brackets_mirror_on_both_edges() {
        let mut grid = PixelGrid::new(13, 20).unwrap();
        assert_eq!(draw_brackets(&mut grid, 10, Rgba::BLACK), 18);
        for x in [0, 1, 2, 10, 11, 12] {
            assert_eq!(grid.get(x, 10), Some(Rgba::BLACK), "x={x}");
        }
        assert_eq!(grid.get(3, 10), Some(Rgba::TRANSPARENT));
        assert_eq!(grid.get(0, 8), Some(Rgba::BLACK));
        assert_eq!(grid.get(12, 12), Some(Rgba::BLACK));
        assert_eq!(grid.get(1, 8), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn brackets_at_the_top_row_are_clipped() {
        let mut grid = PixelGrid::new(13, 20).unwrap();
        // rows -2 and -1 fall off: 3 + 2 + 1 pixels per side remain
        assert_eq!(draw_brackets(&mut grid, 0, Rgba::BLACK), 12);
        assert_eq!(count_black(&grid), 12);
    }

    #[test]
    fn brackets_at_the_bottom_row_are_clipped() {
        let mut grid = PixelGrid::new(13, 20).unwrap();
        assert_eq!(draw_brackets(&mut grid, 19, Rgba::BLACK), 12);
    }
}
