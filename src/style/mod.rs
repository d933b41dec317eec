//! # Style
//!
//! Visual hints for a single node. The builder only reads background color,
//! text color and font size; corner radius and border color are parsed and
//! kept on the model for hosts that want them.

use crate::model::de;
use serde::{Deserialize, Serialize};

/// Appearance of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Fill color. Presence, not value, decides whether it is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Text color. Presence, not value, decides whether it is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// Font size; 0 leaves the host default in place.
    #[serde(default, deserialize_with = "de::int")]
    pub font_size: i32,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub corner_radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
}

/// An RGBA color with float channels. Missing channels default to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(default = "de::one", deserialize_with = "de::channel")]
    pub r: f64,
    #[serde(default = "de::one", deserialize_with = "de::channel")]
    pub g: f64,
    #[serde(default = "de::one", deserialize_with = "de::channel")]
    pub b: f64,
    #[serde(default = "de::one", deserialize_with = "de::channel")]
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Resolve against a fallback.
    ///
    /// An alpha of exactly 0 is read as "unset" and replaced by the
    /// fallback's alpha. The color channels are always taken as written.
    pub fn resolve(&self, fallback: Color) -> Color {
        Color {
            a: if self.a == 0.0 { fallback.a } else { self.a },
            ..*self
        }
    }
}
