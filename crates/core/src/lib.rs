#![deny(unsafe_code)]
//! Core of the colorful color picker.
//!
//! A [`ColorModel`] holds one color in two synchronized representations
//! (HSB and 8-bit RGB, plus opacity and a hex string). Every mutation runs
//! through a [`SyncHub`], which recomputes the other representation and then
//! notifies subscribers in a single batch. The three [`PickerSurface`]s and
//! the [`Swatch`] paint [`PixelGrid`]s from the current color; a [`Picker`]
//! wires them all to one shared model.

pub mod channel;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod marker;
pub mod model;
pub mod picker;
pub mod surface;
pub mod swatch;
pub mod sync;

pub use channel::{Channel, Source};
pub use color::{ColorValue, Hsb, Rgb8, Rgba};
pub use config::{InitialColor, PickerConfig, SurfaceSize};
pub use error::PickerError;
pub use export::{css_hsl, css_rgb};
pub use grid::{checkerboard, PixelGrid};
pub use model::ColorModel;
pub use picker::Picker;
pub use surface::{
    ColorRenderer, HueStrip, OpacityStrip, PickerSurface, PointerUpdate,
    SaturationBrightnessField, SurfaceKind,
};
pub use swatch::Swatch;
pub use sync::{ColorChange, HubState, SubscriptionId, SyncHub};
