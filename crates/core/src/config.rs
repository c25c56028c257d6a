//! Picker configuration.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields the standard layout: 15×200 strips, 200×200 field and swatch, RGB
//! controls enabled and an opaque white starting color.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{ColorValue, Hsb};
use crate::error::PickerError;

/// Outer pixel size of a surface, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: usize,
    pub height: usize,
}

impl SurfaceSize {
    /// Default size of the hue and opacity strips.
    pub const STRIP: SurfaceSize = SurfaceSize {
        width: 15,
        height: 200,
    };

    /// Default size of the saturation/brightness field and the swatch.
    pub const SQUARE: SurfaceSize = SurfaceSize {
        width: 200,
        height: 200,
    };

    /// Smallest outer size that still leaves a 2×2 interior.
    pub const MIN: usize = 4;

    /// Interior size after removing the 1px border on every side.
    pub fn interior(self) -> (usize, usize) {
        (
            self.width.saturating_sub(2),
            self.height.saturating_sub(2),
        )
    }

    pub fn validate(self) -> Result<(), PickerError> {
        if self.width < Self::MIN || self.height < Self::MIN {
            return Err(PickerError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Starting color of a picker, in HSB plus opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialColor {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub opacity: f64,
}

impl Default for InitialColor {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            brightness: 1.0,
            opacity: 1.0,
        }
    }
}

impl InitialColor {
    /// Builds the consistent color value, clamping out-of-range fields.
    pub fn to_value(self) -> ColorValue {
        ColorValue::from_hsb(
            Hsb {
                hue: self.hue,
                saturation: self.saturation,
                brightness: self.brightness,
            },
            self.opacity,
        )
    }
}

/// Layout and behavior of a [`crate::Picker`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub hue_strip: SurfaceSize,
    pub field: SurfaceSize,
    pub opacity_strip: SurfaceSize,
    pub swatch: SurfaceSize,
    /// When false the red/green/blue channels cannot be bound or set
    /// through the picker.
    pub rgb_controls: bool,
    pub initial: InitialColor,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            hue_strip: SurfaceSize::STRIP,
            field: SurfaceSize::SQUARE,
            opacity_strip: SurfaceSize::STRIP,
            swatch: SurfaceSize::SQUARE,
            rgb_controls: true,
            initial: InitialColor::default(),
        }
    }
}

impl PickerConfig {
    pub fn validate(&self) -> Result<(), PickerError> {
        for size in [self.hue_strip, self.field, self.opacity_strip, self.swatch] {
            size.validate()?;
        }
        let i = self.initial;
        if [i.hue, i.saturation, i.brightness, i.opacity]
            .iter()
            .any(|v| !v.is_finite())
        {
            return Err(PickerError::InvalidConfig(
                "initial color components must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        let config: PickerConfig =
            serde_json::from_str(json).map_err(|e| PickerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, PickerError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| PickerError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let c = PickerConfig::default();
        assert_eq!(c.hue_strip, SurfaceSize::STRIP);
        assert_eq!(c.field, SurfaceSize::SQUARE);
        assert_eq!(c.opacity_strip, SurfaceSize::STRIP);
        assert_eq!(c.swatch, SurfaceSize::SQUARE);
        assert!(c.rgb_controls);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn default_initial_color_is_opaque_white() {
        let v = InitialColor::default().to_value();
        assert_eq!(v.hex(), "#FFFFFF");
        assert_eq!(v.opacity(), 1.0);
    }

    #[test]
    fn interior_removes_border() {
        assert_eq!(SurfaceSize::STRIP.interior(), (13, 198));
        assert_eq!(
            SurfaceSize {
                width: 4,
                height: 4
            }
            .interior(),
            (2, 2)
        );
    }

    #[test]
    fn validate_rejects_small_surfaces() {
        let size = SurfaceSize {
            width: 3,
            height: 200,
        };
        assert!(matches!(
            size.validate(),
            Err(PickerError::InvalidDimensions {
                width: 3,
                height: 200
            })
        ));
        let config = PickerConfig {
            swatch: size,
            ..PickerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_json_is_the_default() {
        assert_eq!(PickerConfig::from_json("{}").unwrap(), PickerConfig::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let c = PickerConfig::from_json(
            r#"{"rgb_controls": false, "initial": {"saturation": 1.0, "opacity": 0.5}}"#,
        )
        .unwrap();
        assert!(!c.rgb_controls);
        assert_eq!(c.field, SurfaceSize::SQUARE);
        assert_eq!(c.initial.brightness, 1.0);
        assert_eq!(c.initial.to_value().hex(), "#FF000080");
    }

    #[test]
    fn initial_color_is_clamped() {
        let v = InitialColor {
            hue: 400.0,
            saturation: 2.0,
            brightness: -1.0,
            opacity: 7.0,
        }
        .to_value();
        assert_eq!(v.hue(), 40.0);
        assert_eq!(v.saturation(), 1.0);
        assert_eq!(v.brightness(), 0.0);
        assert_eq!(v.opacity(), 1.0);
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        assert!(matches!(
            PickerConfig::from_json("{not json"),
            Err(PickerError::InvalidConfig(_))
        ));
        assert!(matches!(
            PickerConfig::from_json(r#"{"field": {"width": 2, "height": 2}}"#),
            Err(PickerError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PickerConfig::from_path(Path::new("/nonexistent/colorful.json")).unwrap_err();
        assert!(matches!(err, PickerError::Io(_)));
        assert!(err.to_string().contains("colorful.json"));
    }

    #[test]
    fn serialize_round_trips() {
        let c = PickerConfig {
            rgb_controls: false,
            ..PickerConfig::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(PickerConfig::from_json(&json).unwrap(), c);
    }
}
