//! A complete picker session: one shared model driving three surfaces and a
//! swatch.
//!
//! Every surface and the swatch is registered with the model's change
//! notification, so any mutation (pointer, bound widget, programmatic `set`)
//! repaints all of them exactly once, inside the same batch.
//!
//! Grids are handed out as `Ref` borrows. Drop them before mutating the
//! picker; a repaint while a borrow is alive would conflict with it.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::channel::{Channel, Source};
use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::grid::PixelGrid;
use crate::model::ColorModel;
use crate::surface::{
    ColorRenderer, HueStrip, OpacityStrip, PickerSurface, SaturationBrightnessField, SurfaceKind,
};
use crate::swatch::Swatch;
use crate::sync::SubscriptionId;

/// One picker session: the shared [`ColorModel`], the hue strip, the
/// saturation/brightness field, the opacity strip and the swatch.
///
/// Dropping the picker unsubscribes its surfaces; the model stays usable
/// through any `Rc` handed out by [`model`](Self::model).
pub struct Picker {
    config: PickerConfig,
    model: Rc<ColorModel>,
    hue: Rc<RefCell<HueStrip>>,
    field: Rc<RefCell<SaturationBrightnessField>>,
    opacity: Rc<RefCell<OpacityStrip>>,
    swatch: Rc<RefCell<Swatch>>,
    renderers: Vec<SubscriptionId>,
}

impl Picker {
    /// Builds the surfaces from `config`, paints them with the initial color
    /// and subscribes them to the model.
    pub fn new(config: PickerConfig) -> Result<Self, PickerError> {
        config.validate()?;
        let model = Rc::new(ColorModel::with_value(config.initial.to_value()));
        let hue = Rc::new(RefCell::new(HueStrip::new(config.hue_strip)?));
        let field = Rc::new(RefCell::new(SaturationBrightnessField::new(config.field)?));
        let opacity = Rc::new(RefCell::new(OpacityStrip::new(config.opacity_strip)?));
        let swatch = Rc::new(RefCell::new(Swatch::new(config.swatch)?));

        let renderers = vec![
            attach(&model, &hue),
            attach(&model, &field),
            attach(&model, &opacity),
            attach(&model, &swatch),
        ];
        log::debug!(
            "picker ready: initial {} rgb_controls={}",
            model.hex(),
            config.rgb_controls
        );

        Ok(Self {
            config,
            model,
            hue,
            field,
            opacity,
            swatch,
            renderers,
        })
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The shared model, for collaborators that need more than [`bind`](Self::bind).
    pub fn model(&self) -> &Rc<ColorModel> {
        &self.model
    }

    /// Click or drag at interior coordinate `(x, y)` of the named surface.
    pub fn pointer(&self, kind: SurfaceKind, x: f64, y: f64) -> bool {
        let update = match kind {
            SurfaceKind::Hue => self.hue.borrow().map_pointer(x, y),
            SurfaceKind::Field => self.field.borrow().map_pointer(x, y),
            SurfaceKind::Opacity => self.opacity.borrow().map_pointer(x, y),
        };
        log::trace!("pointer on {} at ({x}, {y}): {update:?}", kind.name());
        update.apply(&self.model)
    }

    /// Writes a channel value as if typed into its numeric control.
    pub fn set(&self, channel: Channel, v: f64) -> Result<bool, PickerError> {
        self.check_enabled(channel)?;
        Ok(self.model.set(channel, v))
    }

    /// Binds an external control to a channel.
    ///
    /// Fails with `ChannelDisabled` for red/green/blue when the picker was
    /// configured without RGB controls.
    pub fn bind(
        &self,
        channel: Channel,
        f: impl FnMut(f64) + 'static,
    ) -> Result<SubscriptionId, PickerError> {
        self.check_enabled(channel)?;
        Ok(self.model.subscribe(channel, f))
    }

    /// Binds an external hex text field.
    pub fn bind_hex(&self, f: impl FnMut(&str) + 'static) -> SubscriptionId {
        self.model.on_hex(f)
    }

    pub fn unbind(&self, id: SubscriptionId) -> bool {
        self.model.unsubscribe(id)
    }

    pub fn hex(&self) -> String {
        self.model.hex()
    }

    pub fn surface(&self, kind: SurfaceKind) -> Ref<'_, dyn PickerSurface> {
        match kind {
            SurfaceKind::Hue => Ref::map(self.hue.borrow(), |s| s as &dyn PickerSurface),
            SurfaceKind::Field => Ref::map(self.field.borrow(), |s| s as &dyn PickerSurface),
            SurfaceKind::Opacity => Ref::map(self.opacity.borrow(), |s| s as &dyn PickerSurface),
        }
    }

    pub fn grid(&self, kind: SurfaceKind) -> Ref<'_, PixelGrid> {
        Ref::map(self.surface(kind), |s| s.grid())
    }

    pub fn swatch(&self) -> Ref<'_, Swatch> {
        self.swatch.borrow()
    }

    fn check_enabled(&self, channel: Channel) -> Result<(), PickerError> {
        if !self.config.rgb_controls && channel.source() == Source::Rgb {
            return Err(PickerError::ChannelDisabled(channel));
        }
        Ok(())
    }
}

impl Drop for Picker {
    fn drop(&mut self) {
        for id in self.renderers.drain(..) {
            self.model.unsubscribe(id);
        }
    }
}

/// Paints `renderer` with the current color and repaints it on every batch.
fn attach<R: ColorRenderer + 'static>(
    model: &ColorModel,
    renderer: &Rc<RefCell<R>>,
) -> SubscriptionId {
    renderer.borrow_mut().render(&model.value());
    let renderer = Rc::clone(renderer);
    model.on_change(move |change| renderer.borrow_mut().render(&change.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::config::SurfaceSize;
    use std::cell::Cell;

    fn picker() -> Picker {
        Picker::new(PickerConfig::default()).unwrap()
    }

    #[test]
    fn starts_painted_with_the_initial_color() {
        let p = picker();
        assert_eq!(p.hex(), "#FFFFFF");
        assert_eq!(p.swatch().fill(), Rgba::gray(1.0));
        assert_eq!(
            p.grid(SurfaceKind::Field).get(0, 197).unwrap().to_rgba8(),
            [0, 0, 0, 255]
        );
        assert_eq!(p.model().hub().batches(), 0);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = PickerConfig {
            hue_strip: SurfaceSize {
                width: 1,
                height: 1,
            },
            ..PickerConfig::default()
        };
        assert!(matches!(
            Picker::new(config),
            Err(PickerError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn field_pointer_repaints_every_surface_once() {
        let p = picker();
        assert!(p.pointer(SurfaceKind::Field, 197.0, 0.0));
        assert_eq!(p.hex(), "#FF0000");
        assert_eq!(p.model().hub().batches(), 1);
        assert_eq!(p.swatch().fill().to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(
            p.grid(SurfaceKind::Opacity).get(6, 0).unwrap().to_rgba8(),
            [255, 0, 0, 255]
        );
        let marker = p.surface(SurfaceKind::Field).marker_position(&p.model().value());
        assert_eq!(marker, (197, 0));
    }

    #[test]
    fn hue_pointer_recolors_the_field() {
        let p = picker();
        let before = p.grid(SurfaceKind::Field).get(197, 0).unwrap();
        p.pointer(SurfaceKind::Hue, 0.0, 197.0 * 2.0 / 3.0);
        let after = p.grid(SurfaceKind::Field).get(197, 0).unwrap();
        assert_ne!(before, after);
        assert_eq!(after.to_rgba8(), [0, 0, 255, 255]);
    }

    #[test]
    fn opacity_pointer_reaches_hex_and_swatch() {
        let p = picker();
        p.pointer(SurfaceKind::Field, 197.0, 98.5);
        p.pointer(SurfaceKind::Opacity, 0.0, 500.0);
        assert_eq!(p.hex(), "#80000000");
        assert_eq!(p.swatch().grid().get(0, 0), Some(crate::grid::checkerboard(0, 0)));
    }

    #[test]
    fn bound_control_sees_pointer_changes() {
        let p = picker();
        let green = Rc::new(Cell::new(-1.0));
        let seen = Rc::clone(&green);
        p.bind(Channel::Green, move |v| seen.set(v)).unwrap();
        p.pointer(SurfaceKind::Field, 197.0, 0.0);
        assert_eq!(green.get(), 0.0);
    }

    #[test]
    fn bound_hex_field_follows_model() {
        let p = picker();
        let hex = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&hex);
        p.bind_hex(move |h| *sink.borrow_mut() = h.to_string());
        p.set(Channel::Brightness, 0.0).unwrap();
        assert_eq!(*hex.borrow(), "#000000");
    }

    #[test]
    fn rgb_channels_can_be_disabled() {
        let p = Picker::new(PickerConfig {
            rgb_controls: false,
            ..PickerConfig::default()
        })
        .unwrap();
        assert!(matches!(
            p.bind(Channel::Red, |_| {}),
            Err(PickerError::ChannelDisabled(Channel::Red))
        ));
        assert!(matches!(
            p.set(Channel::Blue, 10.0),
            Err(PickerError::ChannelDisabled(Channel::Blue))
        ));
        assert!(p.bind(Channel::Opacity, |_| {}).is_ok());
        assert!(p.set(Channel::Hue, 90.0).unwrap());
    }

    #[test]
    fn rgb_set_updates_surfaces() {
        let p = picker();
        p.set(Channel::Green, 0.0).unwrap();
        p.set(Channel::Blue, 0.0).unwrap();
        assert_eq!(p.hex(), "#FF0000");
        assert_eq!(
            p.surface(SurfaceKind::Field).marker_position(&p.model().value()),
            (197, 0)
        );
    }

    #[test]
    fn unbind_stops_notifications() {
        let p = picker();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = p.bind(Channel::Hue, move |_| counter.set(counter.get() + 1)).unwrap();
        p.set(Channel::Hue, 10.0).unwrap();
        assert!(p.unbind(id));
        p.set(Channel::Hue, 20.0).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn drop_releases_renderer_subscriptions() {
        let p = picker();
        let model = Rc::clone(p.model());
        assert_eq!(model.hub().listener_count(), 4);
        drop(p);
        assert_eq!(model.hub().listener_count(), 0);
        assert!(model.set_hue(30.0));
    }

    #[test]
    fn initial_color_comes_from_config() {
        let mut config = PickerConfig::default();
        config.initial.saturation = 1.0;
        config.initial.opacity = 0.5;
        let p = Picker::new(config).unwrap();
        assert_eq!(p.hex(), "#FF000080");
        assert_eq!(p.swatch().fill().a, 0.5);
    }
}
