//! Error types for the colorful core.
//!
//! Channel values and pointer coordinates are clamped, never rejected, so
//! nothing here is produced by a setter or a pointer event. These errors only
//! come from construction and configuration.

use thiserror::Error;

use crate::channel::Channel;

/// Errors produced while building or configuring a picker.
#[derive(Debug, Error)]
pub enum PickerError {
    /// A surface was too small to hold a 2×2 interior inside its 1px border.
    #[error("invalid dimensions {width}x{height}: surfaces need at least 4x4 pixels")]
    InvalidDimensions { width: usize, height: usize },

    /// An RGB channel was bound on a picker configured without RGB controls.
    #[error("channel '{}' is disabled by the picker configuration", .0.name())]
    ChannelDisabled(Channel),

    /// A configuration value could not be used.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// An I/O error (file read/write).
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_includes_size() {
        let err = PickerError::InvalidDimensions {
            width: 3,
            height: 200,
        };
        let msg = format!("{err}");
        assert!(msg.contains("3x200"), "missing dimensions in: {msg}");
    }

    #[test]
    fn channel_disabled_names_channel() {
        let err = PickerError::ChannelDisabled(Channel::Green);
        let msg = format!("{err}");
        assert!(msg.contains("green"), "missing channel name in: {msg}");
    }

    #[test]
    fn invalid_config_includes_message() {
        let err = PickerError::InvalidConfig("bad json".into());
        assert!(err.to_string().contains("bad json"));
    }

    #[test]
    fn io_includes_message() {
        let err = PickerError::Io("disk full".into());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn picker_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PickerError>();
    }

    #[test]
    fn picker_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<PickerError>();
    }
}
