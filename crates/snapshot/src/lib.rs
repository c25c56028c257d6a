#![deny(unsafe_code)]
//! Offscreen output for picker surfaces.
//!
//! [`pixel`] converts a [`PixelGrid`](colorful_core::PixelGrid) into an RGBA8
//! buffer and is always available. [`snapshot`] writes PNG files and is gated
//! behind the default `png` feature so the buffer conversion can be used
//! without pulling in the `image` crate.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;
