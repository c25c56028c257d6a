//! CSS-style text forms of a color, as copied to the clipboard.
//!
//! The alpha variants (`rgba(...)`, `hsla(...)`) are used only when the
//! color is not fully opaque. Opacity is written with two decimals, ties
//! rounded up (0.125 becomes `0.13`).

use crate::color::ColorValue;

/// `rgb(r, g, b)`, or `rgba(r, g, b, o)` when translucent.
pub fn css_rgb(color: &ColorValue) -> String {
    let (r, g, b) = (color.red(), color.green(), color.blue());
    let o = color.opacity();
    if o < 1.0 {
        format!("rgba({r}, {g}, {b}, {})", two_decimals(o))
    } else {
        format!("rgb({r}, {g}, {b})")
    }
}

/// `hsl(h, s%, b%)`, or `hsla(h, s%, b%, o)` when translucent.
///
/// The values are the model's HSB components; the `hsl` label is kept for
/// compatibility with existing clipboard consumers.
pub fn css_hsl(color: &ColorValue) -> String {
    let h = color.hue().round() as i64;
    let s = (color.saturation() * 100.0).round() as i64;
    let b = (color.brightness() * 100.0).round() as i64;
    let o = color.opacity();
    if o < 1.0 {
        format!("hsla({h}, {s}%, {b}%, {})", two_decimals(o))
    } else {
        format!("hsl({h}, {s}%, {b}%)")
    }
}

/// `{:.2}` alone rounds exact ties to even; round to hundredths first.
fn two_decimals(v: f64) -> String {
    format!("{:.2}", (v * 100.0).round() / 100.0)
}
