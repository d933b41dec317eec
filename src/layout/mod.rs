//! # Layout Groups
//!
//! A node's `layout` describes how it arranges its children. This module
//! holds the hint as parsed from the document and turns it into the
//! [`LayoutGroup`] instruction the host realizes.
//!
//! Vertical and horizontal groups let the host control child sizes without
//! force-expanding them, so each child keeps its own preferred size along the
//! growth axis. Grid groups always use a fixed column count.

use serde::{Deserialize, Serialize};

use crate::build::BuildDefaults;
use crate::model::{de, Alignment, LayoutKind, Offsets, Vec2};

/// Layout hint for a node's children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Kind string, resolved through [`LayoutKind::parse`].
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Offsets>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub spacing: f64,
    /// Alignment string, resolved through [`Alignment::parse_or`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    /// Grid column count. Values below 1 are clamped when used.
    #[serde(default = "de::one_i32", deserialize_with = "de::int_or_one")]
    pub columns: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_size: Option<Vec2>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            kind: None,
            padding: None,
            spacing: 0.0,
            alignment: None,
            columns: 1,
            cell_size: None,
        }
    }
}

impl Layout {
    pub fn layout_kind(&self) -> LayoutKind {
        LayoutKind::parse(self.kind.as_deref())
    }

    pub fn padding_or_zero(&self) -> Offsets {
        self.padding.unwrap_or_default()
    }

    /// Column count as used by grids: never below 1.
    pub fn column_count(&self) -> u32 {
        self.columns.max(1) as u32
    }
}

/// Integer padding as layout groups consume it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl From<Offsets> for Padding {
    /// Truncates toward zero.
    fn from(o: Offsets) -> Self {
        Self {
            left: o.left as i32,
            right: o.right as i32,
            top: o.top as i32,
            bottom: o.bottom as i32,
        }
    }
}

/// Instruction: arrange this record's children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutGroup {
    Vertical(LinearGroup),
    Horizontal(LinearGroup),
    Grid(GridGroup),
}

impl LayoutGroup {
    pub fn kind(&self) -> LayoutKind {
        match self {
            LayoutGroup::Vertical(_) => LayoutKind::Vertical,
            LayoutGroup::Horizontal(_) => LayoutKind::Horizontal,
            LayoutGroup::Grid(_) => LayoutKind::Grid,
        }
    }
}

/// A single-axis stack of children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearGroup {
    pub padding: Padding,
    pub spacing: f64,
    pub child_alignment: Alignment,
    pub child_control_width: bool,
    pub child_control_height: bool,
    pub child_force_expand_width: bool,
    pub child_force_expand_height: bool,
}

/// A grid of equally sized cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridGroup {
    pub padding: Padding,
    pub spacing: Vec2,
    pub cell_size: Vec2,
    pub constraint: GridConstraint,
    pub child_alignment: Alignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GridConstraint {
    FixedColumnCount(u32),
}

/// Turn a layout hint into a layout-group instruction.
///
/// Returns `None` for `LayoutKind::None`, which covers absent and
/// unrecognized kinds.
pub fn layout_group(layout: &Layout, defaults: &BuildDefaults) -> Option<LayoutGroup> {
    let padding = Padding::from(layout.padding_or_zero());
    let child_alignment =
        Alignment::parse_or(layout.alignment.as_deref(), defaults.alignment_fallback);

    let linear = || LinearGroup {
        padding,
        spacing: layout.spacing,
        child_alignment,
        child_control_width: true,
        child_control_height: true,
        child_force_expand_width: false,
        child_force_expand_height: false,
    };

    match layout.layout_kind() {
        LayoutKind::Vertical => Some(LayoutGroup::Vertical(linear())),
        LayoutKind::Horizontal => Some(LayoutGroup::Horizontal(linear())),
        LayoutKind::Grid => Some(LayoutGroup::Grid(GridGroup {
            padding,
            spacing: Vec2::splat(layout.spacing),
            cell_size: layout.cell_size.unwrap_or(defaults.grid_cell_size),
            constraint: GridConstraint::FixedColumnCount(layout.column_count()),
            child_alignment,
        })),
        LayoutKind::None => None,
    }
}
