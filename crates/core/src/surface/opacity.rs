use crate::color::{hsb_to_rgba, ColorValue, Rgba};
use crate::config::SurfaceSize;
use crate::error::PickerError;
use crate::grid::{checkerboard, PixelGrid};
use crate::marker::draw_brackets;

use super::{
    clamp_coord, index_to_unit, interior_grid, unit_to_index, ColorRenderer, PickerSurface,
    PointerUpdate, SurfaceKind,
};

/// Vertical strip of the current color from opaque (top) to transparent
/// (bottom), composited over the checkerboard backdrop.
#[derive(Debug, Clone)]
pub struct OpacityStrip {
    size: SurfaceSize,
    grid: PixelGrid,
}

impl OpacityStrip {
    pub fn new(size: SurfaceSize) -> Result<Self, PickerError> {
        Ok(Self {
            size,
            grid: interior_grid(size)?,
        })
    }

    /// Opacity shown at interior row `y`.
    pub fn opacity_at(&self, y: f64) -> f64 {
        let h = self.grid.height();
        index_to_unit((h - 1) as f64 - y, h)
    }
}

impl ColorRenderer for OpacityStrip {
    fn render(&mut self, color: &ColorValue) {
        let hsb = color.hsb();
        let h = self.grid.height();
        let rows: Vec<Rgba> = (0..h)
            .map(|y| hsb_to_rgba(hsb, index_to_unit((h - 1 - y) as f64, h)))
            .collect();
        self.grid.fill_with(|x, y| rows[y].over(checkerboard(x, y)));

        let (_, row) = self.marker_position(color);
        draw_brackets(&mut self.grid, row, Rgba::BLACK);
    }
}

impl PickerSurface for OpacityStrip {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Opacity
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    fn marker_position(&self, color: &ColorValue) -> (isize, isize) {
        let h = self.grid.height();
        (0, (h - 1) as isize - unit_to_index(color.opacity(), h))
    }

    fn map_pointer(&self, _x: f64, y: f64) -> PointerUpdate {
        let y = clamp_coord(y, self.grid.height());
        PointerUpdate::Opacity(self.opacity_at(y))
    }
}
