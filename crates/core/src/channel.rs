//! Channel identifiers for the observable color channels.

use serde::{Deserialize, Serialize};

/// Which representation a mutation originates in.
///
/// Opacity belongs to the HSB side: changing it recomputes RGB from HSB,
/// which leaves the RGB triple unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Hsb,
    Rgb,
}

/// One scalar component of the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Hue,
    Saturation,
    Brightness,
    Opacity,
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 7] = [
        Channel::Hue,
        Channel::Saturation,
        Channel::Brightness,
        Channel::Opacity,
        Channel::Red,
        Channel::Green,
        Channel::Blue,
    ];

    /// The representation a write to this channel originates in.
    pub fn source(self) -> Source {
        match self {
            Channel::Hue | Channel::Saturation | Channel::Brightness | Channel::Opacity => {
                Source::Hsb
            }
            Channel::Red | Channel::Green | Channel::Blue => Source::Rgb,
        }
    }

    /// Lowercase name, as used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Brightness => "brightness",
            Channel::Opacity => "opacity",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// Parses a lowercase channel name.
    pub fn from_name(name: &str) -> Option<Channel> {
        Channel::ALL.into_iter().find(|c| c.name() == name)
    }
}
