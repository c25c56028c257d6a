//! Color types and conversion functions for the picker.
//!
//! [`ColorValue`] is the canonical state of one picked color: the four base
//! channels (hue, saturation, brightness, opacity) plus the derived 8-bit RGB
//! triple and hex string. [`Rgba`] is the unit-range pixel color the surfaces
//! paint with. Conversions are pure functions.

use serde::{Deserialize, Serialize};

use crate::channel::Channel;

/// Hue, saturation and brightness. Hue in degrees [0, 360), the others in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Pixel color with all components in [0, 1], alpha not premultiplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque gray of the given level.
    pub fn gray(level: f64) -> Rgba {
        let v = level.clamp(0.0, 1.0);
        Rgba {
            r: v,
            g: v,
            b: v,
            a: 1.0,
        }
    }

    /// Inverts the color components, keeping alpha.
    pub fn invert(self) -> Rgba {
        Rgba {
            r: 1.0 - self.r,
            g: 1.0 - self.g,
            b: 1.0 - self.b,
            a: self.a,
        }
    }

    /// Composites `self` over `background` (source-over).
    pub fn over(self, background: Rgba) -> Rgba {
        let a = self.a + background.a * (1.0 - self.a);
        if a <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        let mix = |fg: f64, bg: f64| (fg * self.a + bg * background.a * (1.0 - self.a)) / a;
        Rgba {
            r: mix(self.r, background.r),
            g: mix(self.g, background.g),
            b: mix(self.b, background.b),
            a,
        }
    }

    /// Quantizes to four bytes, rounding each component.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            unit_to_byte(self.r),
            unit_to_byte(self.g),
            unit_to_byte(self.b),
            unit_to_byte(self.a),
        ]
    }
}

/// The canonical state of one picked color.
///
/// The HSB channels and opacity are the base values; `red`, `green`, `blue`
/// and `hex` are derived and kept consistent by the model after every
/// propagation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorValue {
    pub(crate) hue: f64,
    pub(crate) saturation: f64,
    pub(crate) brightness: f64,
    pub(crate) opacity: f64,
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
    pub(crate) hex: String,
}

impl Default for ColorValue {
    /// White, fully opaque.
    fn default() -> Self {
        ColorValue::from_hsb(
            Hsb {
                hue: 0.0,
                saturation: 0.0,
                brightness: 1.0,
            },
            1.0,
        )
    }
}

impl ColorValue {
    /// Builds a consistent value from HSB and opacity, clamping every channel.
    pub fn from_hsb(hsb: Hsb, opacity: f64) -> Self {
        let hsb = Hsb {
            hue: wrap_hue(hsb.hue),
            saturation: clamp_unit(hsb.saturation),
            brightness: clamp_unit(hsb.brightness),
        };
        let opacity = clamp_unit(opacity);
        let rgb = hsb_to_rgb8(hsb);
        ColorValue {
            hue: hsb.hue,
            saturation: hsb.saturation,
            brightness: hsb.brightness,
            opacity,
            red: rgb.r,
            green: rgb.g,
            blue: rgb.b,
            hex: format_hex(rgb, opacity),
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Reads any channel as `f64`. RGB channels are in [0, 255].
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Brightness => self.brightness,
            Channel::Opacity => self.opacity,
            Channel::Red => self.red as f64,
            Channel::Green => self.green as f64,
            Channel::Blue => self.blue as f64,
        }
    }

    /// `#RRGGBB` when fully opaque, `#RRGGBBAA` otherwise.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn hsb(&self) -> Hsb {
        Hsb {
            hue: self.hue,
            saturation: self.saturation,
            brightness: self.brightness,
        }
    }

    pub fn rgb(&self) -> Rgb8 {
        Rgb8 {
            r: self.red,
            g: self.green,
            b: self.blue,
        }
    }

    /// Unquantized pixel color of the current HSB at the current opacity.
    pub fn to_rgba(&self) -> Rgba {
        hsb_to_rgba(self.hsb(), self.opacity)
    }

    /// Recomputes the RGB triple from the HSB channels.
    pub(crate) fn derive_rgb(&mut self) {
        let rgb = hsb_to_rgb8(self.hsb());
        self.red = rgb.r;
        self.green = rgb.g;
        self.blue = rgb.b;
    }

    /// Recomputes the HSB channels from the RGB triple, keeping the hue when
    /// the triple is achromatic.
    pub(crate) fn derive_hsb(&mut self) {
        let hsb = rgb8_to_hsb(self.rgb(), self.hue);
        self.hue = hsb.hue;
        self.saturation = hsb.saturation;
        self.brightness = hsb.brightness;
    }

    pub(crate) fn refresh_hex(&mut self) {
        self.hex = format_hex(self.rgb(), self.opacity);
    }
}

/// Wraps a hue into [0, 360). 360 canonicalizes to 0.
pub fn wrap_hue(hue: f64) -> f64 {
    let h = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Clamps to [0, 1].
pub fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

fn unit_to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Sector-based HSB to RGB with unit-range output, unrounded.
pub fn hsb_to_unit_rgb(hsb: Hsb) -> (f64, f64, f64) {
    let s = clamp_unit(hsb.saturation);
    let v = clamp_unit(hsb.brightness);
    let h = wrap_hue(hsb.hue) / 60.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// HSB to pixel color at the given opacity.
pub fn hsb_to_rgba(hsb: Hsb, opacity: f64) -> Rgba {
    let (r, g, b) = hsb_to_unit_rgb(hsb);
    Rgba {
        r,
        g,
        b,
        a: clamp_unit(opacity),
    }
}

/// HSB to 8-bit RGB, each component rounded to nearest.
pub fn hsb_to_rgb8(hsb: Hsb) -> Rgb8 {
    let (r, g, b) = hsb_to_unit_rgb(hsb);
    Rgb8 {
        r: unit_to_byte(r),
        g: unit_to_byte(g),
        b: unit_to_byte(b),
    }
}

/// 8-bit RGB to HSB using the max/min/delta formula.
///
/// For achromatic input (`delta == 0`) the hue is not defined by the RGB
/// triple, so `previous_hue` is returned unchanged. This keeps the hue strip
/// marker where the user left it when saturation drops to zero.
pub fn rgb8_to_hsb(rgb: Rgb8, previous_hue: f64) -> Hsb {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    let hue = if delta == 0.0 {
        previous_hue
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsb {
        hue: wrap_hue(hue),
        saturation,
        brightness: max,
    }
}

/// Formats `#RRGGBB`, or `#RRGGBBAA` when opacity is not exactly 1.0.
///
/// The alpha byte is `round(opacity * 255)`, so 0.5 becomes `80`.
pub fn format_hex(rgb: Rgb8, opacity: f64) -> String {
    if opacity == 1.0 {
        format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
    } else {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            rgb.r,
            rgb.g,
            rgb.b,
            unit_to_byte(opacity)
        )
    }
}
