use crate::color::{hsb_to_rgba, ColorValue, Hsb, Rgba};
use crate::config::SurfaceSize;
use crate::error::PickerError;
use crate::grid::PixelGrid;
use crate::marker::draw_ring;

use super::{
    clamp_coord, index_to_unit, interior_grid, unit_to_index, ColorRenderer, PickerSurface,
    PointerUpdate, SurfaceKind,
};

/// Square of saturation (left to right) against brightness (bottom to top),
/// painted at the current hue.
#[derive(Debug, Clone)]
pub struct SaturationBrightnessField {
    size: SurfaceSize,
    grid: PixelGrid,
}

impl SaturationBrightnessField {
    pub fn new(size: SurfaceSize) -> Result<Self, PickerError> {
        Ok(Self {
            size,
            grid: interior_grid(size)?,
        })
    }

    /// Saturation and brightness shown at interior pixel `(x, y)`.
    pub fn values_at(&self, x: f64, y: f64) -> (f64, f64) {
        let h = self.grid.height();
        let saturation = index_to_unit(x, self.grid.width());
        let brightness = index_to_unit((h - 1) as f64 - y, h);
        (saturation, brightness)
    }
}

impl ColorRenderer for SaturationBrightnessField {
    fn render(&mut self, color: &ColorValue) {
        let hue = color.hue();
        let (w, h) = (self.grid.width(), self.grid.height());
        self.grid.fill_with(|x, y| {
            let hsb = Hsb {
                hue,
                saturation: index_to_unit(x as f64, w),
                brightness: index_to_unit((h - 1 - y) as f64, h),
            };
            hsb_to_rgba(hsb, 1.0)
        });

        let (x, y) = self.marker_position(color);
        // contrast against whatever is under the marker
        let ink = self.grid.get(x, y).map_or(Rgba::BLACK, Rgba::invert);
        draw_ring(&mut self.grid, x, y, ink);
    }
}

impl PickerSurface for SaturationBrightnessField {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Field
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    fn marker_position(&self, color: &ColorValue) -> (isize, isize) {
        let (w, h) = (self.grid.width(), self.grid.height());
        let x = unit_to_index(color.saturation(), w);
        let y = (h - 1) as isize - unit_to_index(color.brightness(), h);
        (x, y)
    }

    fn map_pointer(&self, x: f64, y: f64) -> PointerUpdate {
        let x = clamp_coord(x, self.grid.width());
        let y = clamp_coord(y, self.grid.height());
        let (saturation, brightness) = self.values_at(x, y);
        PointerUpdate::SaturationBrightness {
            saturation,
            brightness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorModel;

    fn field() -> SaturationBrightnessField {
        SaturationBrightnessField::new(SurfaceSize::SQUARE).unwrap()
    }

    fn sb(update: PointerUpdate) -> (f64, f64) {
        match update {
            PointerUpdate::SaturationBrightness {
                saturation,
                brightness,
            } => (saturation, brightness),
            other => panic!("unexpected update {other:?}"),
        }
    }

    #[test]
    fn origin_is_unsaturated_and_bright() {
        assert_eq!(sb(field().map_pointer(0.0, 0.0)), (0.0, 1.0));
    }

    #[test]
    fn far_corner_is_saturated_and_dark() {
        let f = field();
        assert_eq!(sb(f.map_pointer(197.0, 197.0)), (1.0, 0.0));
        // outer width - 2 / height - 2 clamps onto the same pixel
        assert_eq!(sb(f.map_pointer(198.0, 198.0)), (1.0, 0.0));
    }

    #[test]
    fn pointer_outside_is_clamped_per_axis() {
        let f = field();
        assert_eq!(sb(f.map_pointer(-10.0, 1e6)), (0.0, 0.0));
        assert_eq!(sb(f.map_pointer(1e6, -10.0)), (1.0, 1.0));
    }

    #[test]
    fn corners_paint_white_black_and_hue() {
        let mut f = field();
        let model = ColorModel::new();
        model.set_hue(240.0);
        f.render(&model.value());
        let g = f.grid();
        assert_eq!(g.get(0, 0).unwrap().to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(g.get(0, 197).unwrap().to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(g.get(197, 197).unwrap().to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(g.get(197, 0).unwrap().to_rgba8(), [0, 0, 255, 255]);
    }

    #[test]
    fn hue_change_repaints_the_whole_field() {
        let mut f = field();
        let model = ColorModel::new();
        f.render(&model.value());
        let before = f.grid().get(150, 20).unwrap();
        model.set_hue(120.0);
        f.render(&model.value());
        assert_ne!(f.grid().get(150, 20).unwrap(), before);
    }

    #[test]
    fn marker_ring_is_inverted_from_the_pixel_under_it() {
        let mut f = field();
        let model = ColorModel::new();
        model.set_saturation_brightness(0.5, 0.5);
        f.render(&model.value());
        let (x, y) = f.marker_position(&model.value());
        assert_eq!((x, y), (99, 98));
        let center = f.grid().get(x, y).unwrap();
        assert_eq!(f.grid().get(x + 1, y), Some(center.invert()));
        assert_eq!(f.grid().get(x, y - 1), Some(center.invert()));
    }

    #[test]
    fn marker_at_default_white_is_clipped_to_three_pixels() {
        let mut f = field();
        f.render(&ColorValue::default());
        assert_eq!(f.marker_position(&ColorValue::default()), (0, 0));
        let ink = Rgba::gray(1.0).invert();
        assert_eq!(f.grid().get(1, 0), Some(ink));
        assert_eq!(f.grid().get(0, 1), Some(ink));
        assert_eq!(f.grid().get(1, 1), Some(ink));
        assert_eq!(f.grid().get(0, 0).unwrap().to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn handle_pointer_is_one_batch() {
        let mut f = field();
        let model = ColorModel::new();
        assert!(f.handle_pointer(&model, 197.0, 0.0));
        assert_eq!(model.hub().batches(), 1);
        assert_eq!(model.hex(), "#FF0000");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pointer_then_marker_returns_to_the_same_pixel(x in 0usize..198, y in 0usize..198) {
                let f = field();
                let model = ColorModel::new();
                f.map_pointer(x as f64, y as f64).apply(&model);
                prop_assert_eq!(f.marker_position(&model.value()), (x as isize, y as isize));
            }

            #[test]
            fn mapped_values_stay_in_unit_range(x in -1e4_f64..1e4, y in -1e4_f64..1e4) {
                let (s, b) = sb(field().map_pointer(x, y));
                prop_assert!((0.0..=1.0).contains(&s));
                prop_assert!((0.0..=1.0).contains(&b));
            }
        }
    }
}
