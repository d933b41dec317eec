//! # Widget-Construction Records
//!
//! The builder's output. Each record names one widget to create, where it is
//! anchored, which instructions to apply to it, and its children in order.
//! Records are plain data: a host walks them and creates its own widgets
//! (see [`crate::host::realize`]).

use std::fmt;

use serde::Serialize;

use super::defaults::CanvasDefaults;
use super::text::TextRender;
use crate::layout::LayoutGroup;
use crate::model::{NodePath, Size, Vec2};
use crate::style::Color;

/// What widget a record asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WidgetKind {
    Container,
    Panel,
    Text,
    Button,
    Image,
    /// The text child synthesized inside a labelled button.
    Label,
}

/// One widget to create.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetRecord {
    pub name: String,
    pub kind: WidgetKind,
    /// Path of the document node this record came from. A button label
    /// shares its button's path.
    pub source: NodePath,
    pub rect: RectDescriptor,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<Instruction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetRecord>,
}

impl WidgetRecord {
    /// A centered, zero-size record with no instructions.
    pub fn new(name: impl Into<String>, kind: WidgetKind, source: NodePath) -> Self {
        Self {
            name: name.into(),
            kind,
            source,
            rect: RectDescriptor::centered(),
            instructions: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn background(&self) -> Option<&BackgroundFill> {
        self.instructions.iter().find_map(|i| match i {
            Instruction::Background(b) => Some(b),
            _ => None,
        })
    }

    pub fn text(&self) -> Option<&TextRender> {
        self.instructions.iter().find_map(|i| match i {
            Instruction::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn interactive(&self) -> Option<&Interactive> {
        self.instructions.iter().find_map(|i| match i {
            Instruction::Interactive(x) => Some(x),
            _ => None,
        })
    }

    pub fn sizing(&self) -> Option<&SizingHint> {
        self.instructions.iter().find_map(|i| match i {
            Instruction::Sizing(s) => Some(s),
            _ => None,
        })
    }

    pub fn layout(&self) -> Option<&LayoutGroup> {
        self.instructions.iter().find_map(|i| match i {
            Instruction::Layout(l) => Some(l),
            _ => None,
        })
    }

    /// Number of records in this subtree, this one included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(WidgetRecord::count).sum::<usize>()
    }

    /// Visit every record in the subtree, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a WidgetRecord, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, depth: usize, visit: &mut dyn FnMut(&'a WidgetRecord, usize)) {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }
}

/// Outline form, one record per line, indented by depth.
impl fmt::Display for WidgetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.walk(&mut |record, depth| {
            if result.is_err() {
                return;
            }
            result = write_outline_line(f, record, depth);
        });
        result
    }
}

fn write_outline_line(f: &mut fmt::Formatter<'_>, record: &WidgetRecord, depth: usize) -> fmt::Result {
    write!(f, "{:indent$}{:?} \"{}\"", "", record.kind, record.name, indent = depth * 2)?;
    if !record.instructions.is_empty() {
        let tags: Vec<String> = record.instructions.iter().map(Instruction::tag).collect();
        write!(f, " [{}]", tags.join(", "))?;
    }
    writeln!(f)
}

/// Something to apply to a widget once it exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Instruction {
    Background(BackgroundFill),
    Text(TextRender),
    Interactive(Interactive),
    Sizing(SizingHint),
    Layout(LayoutGroup),
}

impl Instruction {
    /// Short label used in outlines.
    pub fn tag(&self) -> String {
        match self {
            Instruction::Background(_) => "background".to_string(),
            Instruction::Text(t) => format!("text {:?}", t.content),
            Instruction::Interactive(_) => "interactive".to_string(),
            Instruction::Sizing(_) => "sizing".to_string(),
            Instruction::Layout(l) => format!("layout:{:?}", l.kind()).to_lowercase(),
        }
    }
}

/// Instruction: fill the widget with a solid color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackgroundFill {
    pub color: Color,
}

/// Instruction: make the widget clickable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interactive {
    pub transition: Transition,
}

impl Default for Interactive {
    fn default() -> Self {
        Self {
            transition: Transition::ColorTint,
        }
    }
}

/// How an interactive widget shows hover and press states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transition {
    ColorTint,
}

/// Instruction: size hints for the parent's layout group.
///
/// Only strictly positive values from the document are carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingHint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
}

impl From<&Size> for SizingHint {
    fn from(size: &Size) -> Self {
        let positive = |v: f64| (v > 0.0).then_some(v);
        Self {
            preferred_width: positive(size.preferred_width),
            preferred_height: positive(size.preferred_height),
            min_width: positive(size.min_width),
            min_height: positive(size.min_height),
        }
    }
}

/// Anchor-based placement relative to the parent rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RectDescriptor {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub pivot: Vec2,
    pub anchored_position: Vec2,
    pub size_delta: Vec2,
}

impl RectDescriptor {
    /// Anchored at the parent's center with zero offset and zero size.
    pub const fn centered() -> Self {
        Self {
            anchor_min: Vec2::HALF,
            anchor_max: Vec2::HALF,
            pivot: Vec2::HALF,
            anchored_position: Vec2::ZERO,
            size_delta: Vec2::ZERO,
        }
    }

    /// Stretched to cover the parent exactly.
    pub const fn stretch() -> Self {
        Self {
            anchor_min: Vec2::ZERO,
            anchor_max: Vec2::ONE,
            pivot: Vec2::HALF,
            anchored_position: Vec2::ZERO,
            size_delta: Vec2::ZERO,
        }
    }
}

/// The full-screen surface the imported tree is placed under.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasDescriptor {
    pub name: String,
    pub render_mode: RenderMode,
    pub scale_mode: ScaleMode,
    pub reference_resolution: Vec2,
    pub match_width_or_height: f64,
    pub rect: RectDescriptor,
    /// The canvas should receive pointer input.
    pub raycaster: bool,
    /// The host should make sure an input event system exists.
    pub event_system: bool,
}

impl CanvasDescriptor {
    pub fn from_defaults(defaults: &CanvasDefaults) -> Self {
        Self {
            name: defaults.name.clone(),
            render_mode: RenderMode::ScreenSpaceOverlay,
            scale_mode: ScaleMode::ScaleWithScreenSize,
            reference_resolution: defaults.reference_resolution,
            match_width_or_height: defaults.match_width_or_height,
            rect: RectDescriptor::stretch(),
            raycaster: true,
            event_system: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderMode {
    ScreenSpaceOverlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScaleMode {
    ScaleWithScreenSize,
}
