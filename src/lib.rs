//! # domcanvas
//!
//! Turns a declarative JSON description of a UI layout into a tree of
//! widget-construction records that a host UI toolkit realizes into its own
//! widgets.
//!
//! The importer never renders and never holds a live scene. It decides, for
//! every node, which widget to ask for, how it is anchored, which background,
//! text, interaction, sizing and layout-group instructions apply, and in what
//! order its children come. The host does the rest.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON text / serde_json::Value)
//!       ↓
//!   [model]   Document tree; permissive parse, enum fallbacks
//!       ↓
//!   [build]   Depth-first tree builder → WidgetRecord tree
//!       ↓
//!   [host]    Host capabilities in, widget factory out
//! ```
//!
//! ```
//! use domcanvas::{import_json, build::BuildDefaults, host::StaticHost};
//!
//! let import = import_json(
//!     r#"{"root": {"type": "panel", "children": [
//!         {"type": "text", "text": "Hello", "style": {"fontSize": 24}}
//!     ]}}"#,
//!     &StaticHost::default(),
//!     &BuildDefaults::default(),
//! )
//! .unwrap();
//!
//! let root = import.root.unwrap();
//! assert_eq!(root.children[0].text().unwrap().content, "Hello");
//! ```

pub mod build;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod layout;
pub mod logging;
pub mod model;
pub mod style;

use serde::Serialize;

use build::{BuildDefaults, CanvasDescriptor, TreeBuilder, WidgetRecord};
use diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use host::Host;
use model::Document;

pub use error::ImportError;

/// The result of importing one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Import {
    /// The surface the tree is placed under.
    pub canvas: CanvasDescriptor,
    /// `None` only when the root node itself had an unknown kind.
    pub root: Option<WidgetRecord>,
    /// Non-fatal problems, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl Import {
    /// Number of records in the tree.
    pub fn record_count(&self) -> usize {
        self.root.as_ref().map_or(0, WidgetRecord::count)
    }
}

/// Build the record tree for a parsed document.
///
/// The host's text capability is read once for the whole document. Every
/// diagnostic is logged at warn level and also returned in the result.
pub fn import(document: &Document, host: &dyn Host, defaults: &BuildDefaults) -> Import {
    let builder = TreeBuilder::new(defaults, host);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let root = builder.build_document(document, &mut diagnostics);

    let mut log_sink = LogSink;
    for diagnostic in &diagnostics {
        log_sink.report(diagnostic.clone());
    }

    let import = Import {
        canvas: CanvasDescriptor::from_defaults(&defaults.canvas),
        root,
        diagnostics,
    };
    log::info!(
        "imported {} records ({} diagnostics)",
        import.record_count(),
        import.diagnostics.len()
    );
    import
}

/// Parse a JSON document and build its record tree.
///
/// Fails only when the document cannot be understood at all; nothing is
/// built in that case.
pub fn import_json(
    json: &str,
    host: &dyn Host,
    defaults: &BuildDefaults,
) -> Result<Import, ImportError> {
    let document = Document::from_json(json)?;
    Ok(import(&document, host, defaults))
}
