//! Fixed-size two-dimensional pixel buffer.
//!
//! A `PixelGrid` stores `width * height` [`Rgba`] pixels in row-major order.
//! Coordinates are signed so glyphs centered near an edge can be drawn with
//! plain offsets; anything outside the grid is skipped rather than wrapped.

use crate::color::Rgba;
use crate::error::PickerError;

/// Side of one checkerboard block in pixels.
pub const CHECKER_SIZE: usize = 3;

/// Row-major RGBA pixel buffer with bounds-checked signed access.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<Rgba>,
}

impl PixelGrid {
    /// Creates a transparent grid of the given dimensions.
    ///
    /// Returns `PickerError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, PickerError> {
        if width == 0 || height == 0 {
            return Err(PickerError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(PickerError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![Rgba::TRANSPARENT; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major pixels.
    pub fn data(&self) -> &[Rgba] {
        &self.data
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// The pixel at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: isize, y: isize) -> Option<Rgba> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Writes the pixel at `(x, y)`. Returns false (and writes nothing) if
    /// the coordinate lies outside the grid.
    pub fn put(&mut self, x: isize, y: isize, color: Rgba) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.data[i] = color;
                true
            }
            None => false,
        }
    }

    /// Overwrites every pixel with `f(x, y)`.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize) -> Rgba) {
        let width = self.width;
        for (i, px) in self.data.iter_mut().enumerate() {
            *px = f(i % width, i / width);
        }
    }
}

/// The transparency backdrop: 3×3 blocks alternating gray 0.75 and white.
pub fn checkerboard(x: usize, y: usize) -> Rgba {
    if (x / CHECKER_SIZE) % 2 == (y / CHECKER_SIZE) % 2 {
        Rgba::gray(0.75)
    } else {
        Rgba::gray(1.0)
    }
}
