use crate::color::{hsb_to_rgba, ColorValue, Hsb, Rgba};
use crate::config::SurfaceSize;
use crate::error::PickerError;
use crate::grid::PixelGrid;
use crate::marker::draw_brackets;

use super::{
    clamp_coord, index_to_unit, interior_grid, unit_to_index, ColorRenderer, PickerSurface,
    PointerUpdate, SurfaceKind,
};

/// Vertical strip of fully saturated, fully bright hues.
///
/// Row `y` shows hue `y * 360 / (h - 1)`, so the top row is 0° and the
/// bottom row is 360° (which the model stores as 0°).
#[derive(Debug, Clone)]
pub struct HueStrip {
    size: SurfaceSize,
    grid: PixelGrid,
}

impl HueStrip {
    pub fn new(size: SurfaceSize) -> Result<Self, PickerError> {
        Ok(Self {
            size,
            grid: interior_grid(size)?,
        })
    }

    /// Hue shown at interior row `y`.
    pub fn hue_at(&self, y: f64) -> f64 {
        index_to_unit(y, self.grid.height()) * 360.0
    }
}

impl ColorRenderer for HueStrip {
    fn render(&mut self, color: &ColorValue) {
        let h = self.grid.height();
        let rows: Vec<Rgba> = (0..h)
            .map(|y| {
                let hsb = Hsb {
                    hue: index_to_unit(y as f64, h) * 360.0,
                    saturation: 1.0,
                    brightness: 1.0,
                };
                hsb_to_rgba(hsb, 1.0)
            })
            .collect();
        self.grid.fill_with(|_, y| rows[y]);

        let (_, row) = self.marker_position(color);
        draw_brackets(&mut self.grid, row, Rgba::BLACK);
    }
}

impl PickerSurface for HueStrip {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Hue
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    fn marker_position(&self, color: &ColorValue) -> (isize, isize) {
        (0, unit_to_index(color.hue() / 360.0, self.grid.height()))
    }

    fn map_pointer(&self, _x: f64, y: f64) -> PointerUpdate {
        let y = clamp_coord(y, self.grid.height());
        PointerUpdate::Hue(self.hue_at(y))
    }
}
