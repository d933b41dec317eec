//! Every literal default the builder falls back on, in one place.
//!
//! `BuildDefaults::default()` reproduces the stock importer. A JSON override
//! file only needs the keys it changes:
//!
//! ```json
//! { "buttonBackground": { "r": 0.2, "g": 0.4, "b": 0.9 }, "alignmentFallback": "MiddleCenter" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ImportError;
use crate::model::{Alignment, Vec2};
use crate::style::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildDefaults {
    /// Panel fill when the node has no background color.
    pub panel_background: Color,
    /// Alpha donor for panel background colors.
    pub panel_color_fallback: Color,
    /// Alpha donor for text colors.
    pub text_color_fallback: Color,
    /// Button fill, and alpha donor for button background colors.
    pub button_background: Color,
    /// Alpha donor for image colors.
    pub image_color_fallback: Color,
    /// Child alignment used when a layout's alignment is missing or unknown.
    pub alignment_fallback: Alignment,
    /// Alignment of text inside its box.
    pub text_alignment: Alignment,
    /// Grid cell size when a grid layout gives none.
    pub grid_cell_size: Vec2,
    /// Name of the label record synthesized inside buttons.
    pub label_name: String,
    pub canvas: CanvasDefaults,
}

impl Default for BuildDefaults {
    fn default() -> Self {
        Self {
            panel_background: Color::rgba(1.0, 1.0, 1.0, 0.05),
            panel_color_fallback: Color::WHITE,
            text_color_fallback: Color::BLACK,
            button_background: Color::rgba(0.9, 0.9, 0.9, 1.0),
            image_color_fallback: Color::WHITE,
            alignment_fallback: Alignment::UpperLeft,
            text_alignment: Alignment::MiddleCenter,
            grid_cell_size: Vec2::new(100.0, 100.0),
            label_name: "Label".to_string(),
            canvas: CanvasDefaults::default(),
        }
    }
}

impl BuildDefaults {
    /// Read overrides from JSON. Keys that are absent keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        serde_json::from_str(json).map_err(|source| ImportError::Defaults { source })
    }
}

/// Settings for the full-screen canvas the imported tree hangs under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasDefaults {
    pub name: String,
    /// Screen size the layout was authored for.
    pub reference_resolution: Vec2,
    /// 0 scales with width, 1 with height, anything between blends.
    pub match_width_or_height: f64,
}

impl Default for CanvasDefaults {
    fn default() -> Self {
        Self {
            name: "ImportedCanvas".to_string(),
            reference_resolution: Vec2::new(1080.0, 1920.0),
            match_width_or_height: 0.5,
        }
    }
}
