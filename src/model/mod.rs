//! # Document Model
//!
//! The input representation for the importer. A document is a single root
//! node; each node has a kind string, optional text, optional layout / style /
//! size hints, and ordered children.
//!
//! Parsing is permissive. Every field has a default, unknown keys are
//! ignored, and JSON `null` is read as "absent". Kind-like strings are kept
//! verbatim here and resolved to enums lazily (see [`kind`]), so a bad value
//! degrades to a fallback instead of failing the whole document.

pub(crate) mod de;
pub mod kind;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ImportError;
use crate::layout::Layout;
use crate::style::Style;

pub use kind::{Alignment, LayoutKind, NodeKind};

/// Display name used when a node has neither a name nor a kind.
pub const FALLBACK_NAME: &str = "Node";

/// A parsed document with a guaranteed root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub root: Node,
}

/// The document as it appears on the wire, before the root check.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    root: Option<Node>,
}

impl Document {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Document, ImportError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Build a document from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Document, ImportError> {
        let raw: RawDocument = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDocument) -> Result<Document, ImportError> {
        match raw.root {
            Some(root) => Ok(Document { root }),
            None => Err(ImportError::MissingRoot),
        }
    }

    /// Look up the node a [`NodePath`] points at.
    ///
    /// Returns `None` if the path leaves the tree or lands on a `null` child.
    pub fn node_at(&self, path: &NodePath) -> Option<&Node> {
        let mut node = &self.root;
        for &index in path.indices() {
            node = node.children.get(index)?.as_ref()?;
        }
        Some(node)
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Kind string, resolved through [`NodeKind::parse`].
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Content for Text nodes and the label of Button nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Image reference. Resolving it to an asset is up to the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// How this node arranges its children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,

    /// This node's own appearance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,

    /// Sizing hints for this node inside its parent's layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    /// Children in render order. A `null` entry is a missing child.
    #[serde(
        default,
        deserialize_with = "de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Option<Node>>,
}

impl Node {
    /// A bare node of the given kind.
    pub fn of_kind(kind: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            ..Default::default()
        }
    }

    /// A Text node.
    pub fn text(content: &str) -> Self {
        Self {
            text: Some(content.to_string()),
            ..Self::of_kind("Text")
        }
    }

    /// A Button node with a label.
    pub fn button(label: &str) -> Self {
        Self {
            text: Some(label.to_string()),
            ..Self::of_kind("Button")
        }
    }

    /// Append a child, builder style.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(Some(child));
        self
    }

    pub fn node_kind(&self) -> NodeKind {
        NodeKind::parse(self.kind.as_deref())
    }

    /// Human-readable identifier: the name, else the kind string, else
    /// [`FALLBACK_NAME`].
    pub fn safe_name(&self) -> &str {
        match (self.name.as_deref(), self.kind.as_deref()) {
            (Some(name), _) if !name.is_empty() => name,
            (_, Some(kind)) if !kind.is_empty() => kind,
            _ => FALLBACK_NAME,
        }
    }

    /// Text content, empty when absent.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// Sizing hints. Zero means "no hint"; only positive values are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub preferred_width: f64,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub preferred_height: f64,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub min_width: f64,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub min_height: f64,
}

/// Edge offsets (left, right, top, bottom) used for padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offsets {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub left: f64,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub right: f64,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub top: f64,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub bottom: f64,
}

impl Offsets {
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }
}

/// A 2D vector, used for cell sizes and reference resolutions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub x: f64,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };
    pub const HALF: Vec2 = Vec2 { x: 0.5, y: 0.5 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }
}

/// Child indices leading from the root to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// The path of this node's `index`-th child.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl Serialize for NodePath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
