//! PNG snapshots of picker surfaces.
//!
//! Feature-gated behind `png` (default on). The buffer conversion lives in
//! [`crate::pixel`].

use std::path::{Path, PathBuf};

use colorful_core::{Picker, PickerError, PixelGrid, Rgba, SurfaceKind};

use crate::pixel::{framed_rgba, grid_to_rgba};

/// Border color used for framed snapshots.
pub const BORDER: Rgba = Rgba {
    r: 0.6,
    g: 0.6,
    b: 0.6,
    a: 1.0,
};

/// Writes a grid's interior as a PNG image.
///
/// Returns `PickerError::InvalidDimensions` if the grid dimensions overflow
/// `u32`, or `PickerError::Io` on write failure.
pub fn write_png(grid: &PixelGrid, path: &Path) -> Result<(), PickerError> {
    save(grid.width(), grid.height(), grid_to_rgba(grid), path)
}

/// Writes a grid at its outer size, with a 1px [`BORDER`] around the interior.
pub fn write_framed_png(grid: &PixelGrid, path: &Path) -> Result<(), PickerError> {
    save(
        grid.width() + 2,
        grid.height() + 2,
        framed_rgba(grid, BORDER),
        path,
    )
}

/// Writes every surface and the swatch of `picker` into `dir` as
/// `hue.png`, `field.png`, `opacity.png` and `swatch.png`.
pub fn write_picker(picker: &Picker, dir: &Path) -> Result<Vec<PathBuf>, PickerError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| PickerError::Io(format!("{}: {e}", dir.display())))?;
    let mut written = Vec::with_capacity(SurfaceKind::ALL.len() + 1);
    for kind in SurfaceKind::ALL {
        let path = dir.join(format!("{}.png", kind.name()));
        write_framed_png(&picker.grid(kind), &path)?;
        written.push(path);
    }
    let path = dir.join("swatch.png");
    write_framed_png(picker.swatch().grid(), &path)?;
    written.push(path);
    log::info!("wrote {} snapshots to {}", written.len(), dir.display());
    Ok(written)
}

fn save(width: usize, height: usize, rgba: Vec<u8>, path: &Path) -> Result<(), PickerError> {
    let w = u32::try_from(width).map_err(|_| PickerError::InvalidDimensions { width, height })?;
    let h = u32::try_from(height).map_err(|_| PickerError::InvalidDimensions { width, height })?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| PickerError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path)
        .map_err(|e| PickerError::Io(format!("{}: {e}", path.display())))
}
