//! Enumerated string fields and their fallback policy.
//!
//! Every enumeration is matched case-insensitively against its member names,
//! ignoring surrounding whitespace. A string that matches nothing never fails
//! the import; each field has its own documented fallback instead.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An enumeration whose variants can be looked up by name.
pub(crate) trait NamedVariant: Copy + 'static {
    const VARIANTS: &'static [Self];

    fn name(self) -> &'static str;
}

pub(crate) fn lookup<T: NamedVariant>(value: &str) -> Option<T> {
    let value = value.trim();
    T::VARIANTS
        .iter()
        .copied()
        .find(|v| v.name().eq_ignore_ascii_case(value))
}

/// What a document node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    /// A plain grouping element with no visuals of its own.
    Container,
    /// A container with a filled background.
    Panel,
    Text,
    Button,
    Image,
    /// A kind string that names none of the above.
    Unknown,
}

impl NamedVariant for NodeKind {
    const VARIANTS: &'static [Self] = &[
        NodeKind::Container,
        NodeKind::Panel,
        NodeKind::Text,
        NodeKind::Button,
        NodeKind::Image,
        NodeKind::Unknown,
    ];

    fn name(self) -> &'static str {
        match self {
            NodeKind::Container => "Container",
            NodeKind::Panel => "Panel",
            NodeKind::Text => "Text",
            NodeKind::Button => "Button",
            NodeKind::Image => "Image",
            NodeKind::Unknown => "Unknown",
        }
    }
}

impl NodeKind {
    /// Absent or empty means `Container`; anything unrecognized is `Unknown`.
    pub fn parse(value: Option<&str>) -> NodeKind {
        match value {
            None | Some("") => NodeKind::Container,
            Some(v) => lookup(v).unwrap_or(NodeKind::Unknown),
        }
    }
}

/// How a node arranges its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum LayoutKind {
    #[default]
    None,
    Vertical,
    Horizontal,
    Grid,
}

impl NamedVariant for LayoutKind {
    const VARIANTS: &'static [Self] = &[
        LayoutKind::None,
        LayoutKind::Vertical,
        LayoutKind::Horizontal,
        LayoutKind::Grid,
    ];

    fn name(self) -> &'static str {
        match self {
            LayoutKind::None => "None",
            LayoutKind::Vertical => "Vertical",
            LayoutKind::Horizontal => "Horizontal",
            LayoutKind::Grid => "Grid",
        }
    }
}

impl LayoutKind {
    /// Absent, empty, or unrecognized all mean `None`.
    pub fn parse(value: Option<&str>) -> LayoutKind {
        value.and_then(lookup).unwrap_or_default()
    }
}

/// Where children sit inside a layout group, and where text sits in its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Alignment {
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

impl NamedVariant for Alignment {
    const VARIANTS: &'static [Self] = &[
        Alignment::UpperLeft,
        Alignment::UpperCenter,
        Alignment::UpperRight,
        Alignment::MiddleLeft,
        Alignment::MiddleCenter,
        Alignment::MiddleRight,
        Alignment::LowerLeft,
        Alignment::LowerCenter,
        Alignment::LowerRight,
    ];

    fn name(self) -> &'static str {
        match self {
            Alignment::UpperLeft => "UpperLeft",
            Alignment::UpperCenter => "UpperCenter",
            Alignment::UpperRight => "UpperRight",
            Alignment::MiddleLeft => "MiddleLeft",
            Alignment::MiddleCenter => "MiddleCenter",
            Alignment::MiddleRight => "MiddleRight",
            Alignment::LowerLeft => "LowerLeft",
            Alignment::LowerCenter => "LowerCenter",
            Alignment::LowerRight => "LowerRight",
        }
    }
}

impl Alignment {
    /// Parse `value`, returning `fallback` when it is absent, empty, or unknown.
    pub fn parse_or(value: Option<&str>, fallback: Alignment) -> Alignment {
        value.and_then(lookup).unwrap_or(fallback)
    }
}

/// Same matching as documents use. Outside a document there is no fallback
/// to degrade to, so an unknown name is an error.
impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        lookup(&value).ok_or_else(|| D::Error::custom(format!("unknown alignment '{}'", value)))
    }
}
