//! Picker surfaces: the hue strip, the saturation/brightness field and the
//! opacity strip.
//!
//! Each surface paints its interior (outer size minus a 1px border on every
//! side) as a function of the current color and overlays a marker at the
//! pixel of the current value. Pointer input is mapped back to channel
//! values with the exact inverse of the painting formulas. All pixel/value
//! conversions divide by `len - 1`, so pixel 0 is the domain minimum and
//! pixel `len - 1` is the domain maximum.

mod field;
mod hue;
mod opacity;

pub use field::SaturationBrightnessField;
pub use hue::HueStrip;
pub use opacity::OpacityStrip;

use serde::{Deserialize, Serialize};

use crate::color::ColorValue;
use crate::config::SurfaceSize;
use crate::error::PickerError;
use crate::grid::PixelGrid;
use crate::model::ColorModel;

/// Identifies one of the three interactive surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    Hue,
    Field,
    Opacity,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 3] = [SurfaceKind::Hue, SurfaceKind::Field, SurfaceKind::Opacity];

    pub fn name(self) -> &'static str {
        match self {
            SurfaceKind::Hue => "hue",
            SurfaceKind::Field => "field",
            SurfaceKind::Opacity => "opacity",
        }
    }

    pub fn from_name(name: &str) -> Option<SurfaceKind> {
        SurfaceKind::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Channel values produced by a pointer event on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerUpdate {
    Hue(f64),
    SaturationBrightness { saturation: f64, brightness: f64 },
    Opacity(f64),
}

impl PointerUpdate {
    /// Writes the values into the model as one mutation.
    pub fn apply(self, model: &ColorModel) -> bool {
        match self {
            PointerUpdate::Hue(h) => model.set_hue(h),
            PointerUpdate::SaturationBrightness {
                saturation,
                brightness,
            } => model.set_saturation_brightness(saturation, brightness),
            PointerUpdate::Opacity(o) => model.set_opacity(o),
        }
    }
}

/// Anything repainted from the current color on every propagation batch.
pub trait ColorRenderer {
    fn render(&mut self, color: &ColorValue);
}

/// An interactive picker surface.
pub trait PickerSurface: ColorRenderer {
    fn kind(&self) -> SurfaceKind;

    /// Outer size including the border.
    fn size(&self) -> SurfaceSize;

    /// The painted interior.
    fn grid(&self) -> &PixelGrid;

    /// Interior pixel at which the marker for `color` is anchored.
    fn marker_position(&self, color: &ColorValue) -> (isize, isize);

    /// Maps an interior pointer coordinate to channel values. Coordinates
    /// outside the interior are clamped to the nearest edge pixel.
    fn map_pointer(&self, x: f64, y: f64) -> PointerUpdate;

    /// Click/drag handling for a surface driven directly: map, write into the
    /// model, repaint from the model.
    ///
    /// A surface that is also subscribed to the model (as in [`crate::Picker`])
    /// should use [`map_pointer`](Self::map_pointer) and
    /// [`PointerUpdate::apply`] instead and let the batch repaint it.
    fn handle_pointer(&mut self, model: &ColorModel, x: f64, y: f64) -> bool {
        let applied = self.map_pointer(x, y).apply(model);
        self.render(&model.value());
        applied
    }
}

/// Allocates the interior grid for a surface of the given outer size.
pub(crate) fn interior_grid(size: SurfaceSize) -> Result<PixelGrid, PickerError> {
    size.validate()?;
    let (w, h) = size.interior();
    PixelGrid::new(w, h)
}

/// Clamps a pointer coordinate into `[0, len - 1]`. NaN maps to 0.
pub(crate) fn clamp_coord(v: f64, len: usize) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, (len - 1) as f64)
}

/// Pixel index to a fraction in [0, 1].
pub(crate) fn index_to_unit(i: f64, len: usize) -> f64 {
    i / (len - 1) as f64
}

/// Fraction in [0, 1] to the nearest pixel index.
pub(crate) fn unit_to_index(u: f64, len: usize) -> isize {
    (u * (len - 1) as f64).round() as isize
}
