//! The color model: one owned [`ColorValue`] behind observable channels.
//!
//! Every setter clamps its input and routes through the model's
//! [`SyncHub`], so when a setter returns the value is consistent across HSB,
//! RGB and hex, and each subscriber has been told exactly once.
//!
//! Setters take `&self`. A model is meant to be shared through `Rc` with the
//! surfaces and widgets bound to it; a widget that writes back into the model
//! while it is being notified is ignored by the hub.

use std::cell::RefCell;

use crate::channel::{Channel, Source};
use crate::color::{clamp_unit, wrap_hue, ColorValue};
use crate::sync::{ColorChange, Listener, SubscriptionId, SyncHub};

/// Owner of the color value for one picker session.
#[derive(Debug, Default)]
pub struct ColorModel {
    value: RefCell<ColorValue>,
    hub: SyncHub,
}

impl ColorModel {
    /// Creates a model holding opaque white.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model holding `value`.
    pub fn with_value(value: ColorValue) -> Self {
        Self {
            value: RefCell::new(value),
            hub: SyncHub::new(),
        }
    }

    /// Snapshot of the current value.
    pub fn value(&self) -> ColorValue {
        self.value.borrow().clone()
    }

    pub fn hub(&self) -> &SyncHub {
        &self.hub
    }

    pub fn get(&self, channel: Channel) -> f64 {
        self.value.borrow().get(channel)
    }

    pub fn hue(&self) -> f64 {
        self.value.borrow().hue()
    }

    pub fn saturation(&self) -> f64 {
        self.value.borrow().saturation()
    }

    pub fn brightness(&self) -> f64 {
        self.value.borrow().brightness()
    }

    pub fn opacity(&self) -> f64 {
        self.value.borrow().opacity()
    }

    pub fn red(&self) -> u8 {
        self.value.borrow().red()
    }

    pub fn green(&self) -> u8 {
        self.value.borrow().green()
    }

    pub fn blue(&self) -> u8 {
        self.value.borrow().blue()
    }

    pub fn hex(&self) -> String {
        self.value.borrow().hex().to_string()
    }

    /// Writes one channel and propagates.
    ///
    /// Hue wraps modulo 360, saturation/brightness/opacity clamp to [0, 1],
    /// RGB rounds to the nearest integer and clamps to [0, 255]. Returns false
    /// if the write was dropped: a NaN (or infinite hue) input, or a write
    /// made from inside a notification.
    pub fn set(&self, channel: Channel, v: f64) -> bool {
        if v.is_nan() || (channel == Channel::Hue && v.is_infinite()) {
            log::warn!("ignoring non-finite {} value {v}", channel.name());
            return false;
        }
        self.hub
            .propagate(&self.value, channel.source(), |c| write_channel(c, channel, v))
    }

    pub fn set_hue(&self, v: f64) -> bool {
        self.set(Channel::Hue, v)
    }

    pub fn set_saturation(&self, v: f64) -> bool {
        self.set(Channel::Saturation, v)
    }

    pub fn set_brightness(&self, v: f64) -> bool {
        self.set(Channel::Brightness, v)
    }

    pub fn set_opacity(&self, v: f64) -> bool {
        self.set(Channel::Opacity, v)
    }

    pub fn set_red(&self, v: f64) -> bool {
        self.set(Channel::Red, v)
    }

    pub fn set_green(&self, v: f64) -> bool {
        self.set(Channel::Green, v)
    }

    pub fn set_blue(&self, v: f64) -> bool {
        self.set(Channel::Blue, v)
    }

    /// Writes saturation and brightness as a single mutation (one batch).
    pub fn set_saturation_brightness(&self, saturation: f64, brightness: f64) -> bool {
        if saturation.is_nan() || brightness.is_nan() {
            log::warn!("ignoring non-finite saturation/brightness ({saturation}, {brightness})");
            return false;
        }
        self.hub.propagate(&self.value, Source::Hsb, |c| {
            write_channel(c, Channel::Saturation, saturation);
            write_channel(c, Channel::Brightness, brightness);
        })
    }

    /// Calls `f` with the new value of `channel` in every batch that changes it.
    pub fn subscribe(&self, channel: Channel, f: impl FnMut(f64) + 'static) -> SubscriptionId {
        self.hub.subscribe(Listener::Channel(channel, Box::new(f)))
    }

    /// Calls `f` once per propagation batch.
    pub fn on_change(&self, f: impl FnMut(&ColorChange) + 'static) -> SubscriptionId {
        self.hub.subscribe(Listener::Change(Box::new(f)))
    }

    /// Calls `f` with the hex string once per propagation batch.
    pub fn on_hex(&self, f: impl FnMut(&str) + 'static) -> SubscriptionId {
        self.hub.subscribe(Listener::Hex(Box::new(f)))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.hub.unsubscribe(id)
    }
}

fn write_channel(c: &mut ColorValue, channel: Channel, v: f64) {
    match channel {
        Channel::Hue => c.hue = wrap_hue(v),
        Channel::Saturation => c.saturation = clamp_unit(v),
        Channel::Brightness => c.brightness = clamp_unit(v),
        Channel::Opacity => c.opacity = clamp_unit(v),
        Channel::Red => c.red = clamp_byte(v),
        Channel::Green => c.green = clamp_byte(v),
        Channel::Blue => c.blue = clamp_byte(v),
    }
}

fn clamp_byte(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
