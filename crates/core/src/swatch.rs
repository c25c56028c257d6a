//! Flat preview of the picked color over the checkerboard backdrop.

use crate::color::{ColorValue, Rgba};
use crate::config::SurfaceSize;
use crate::error::PickerError;
use crate::grid::{checkerboard, PixelGrid};
use crate::surface::{interior_grid, ColorRenderer};

/// Non-interactive preview of the current color at its opacity.
#[derive(Debug, Clone)]
pub struct Swatch {
    size: SurfaceSize,
    grid: PixelGrid,
    fill: Rgba,
}

impl Swatch {
    pub fn new(size: SurfaceSize) -> Result<Self, PickerError> {
        Ok(Self {
            size,
            grid: interior_grid(size)?,
            fill: ColorValue::default().to_rgba(),
        })
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// The unblended fill color from the last render, alpha included.
    pub fn fill(&self) -> Rgba {
        self.fill
    }
}

impl ColorRenderer for Swatch {
    fn render(&mut self, color: &ColorValue) {
        let fill = color.to_rgba();
        self.fill = fill;
        self.grid.fill_with(|x, y| fill.over(checkerboard(x, y)));
    }
}
