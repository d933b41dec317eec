//! # Tree Builder
//!
//! Walks a parsed [`Document`] depth-first and produces one
//! [`WidgetRecord`] per node, parent before children. Per kind:
//!
//! - **Container**: nothing beyond placement.
//! - **Panel**: background fill, translucent white unless styled.
//! - **Text**: text instruction, if the host can render text.
//! - **Button**: background fill plus an interactive instruction, and a
//!   synthesized `Label` child when the node has text.
//! - **Image**: background fill only when styled.
//!
//! Then sizing hints and layout group, then children in document order.
//!
//! Building never fails. Bad values fall back to defaults; an unknown kind
//! drops the node together with its whole subtree and reports a
//! [`Diagnostic`]. Dropping the subtree means a typo in one kind string
//! loses every descendant; that is the observed contract of the format and
//! is kept as is.

pub mod defaults;
pub mod record;
pub mod text;

pub use defaults::{BuildDefaults, CanvasDefaults};
pub use record::{
    BackgroundFill, CanvasDescriptor, Instruction, Interactive, RectDescriptor, SizingHint,
    WidgetKind, WidgetRecord,
};
pub use text::{TextBackend, TextRender, TextWidgetHandle};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::host::Host;
use crate::layout::layout_group;
use crate::model::{Document, Node, NodeKind, NodePath};
use crate::style::Color;

impl WidgetKind {
    /// The widget a node kind maps to. `Unknown` maps to nothing.
    pub fn for_node(kind: NodeKind) -> Option<WidgetKind> {
        match kind {
            NodeKind::Container => Some(WidgetKind::Container),
            NodeKind::Panel => Some(WidgetKind::Panel),
            NodeKind::Text => Some(WidgetKind::Text),
            NodeKind::Button => Some(WidgetKind::Button),
            NodeKind::Image => Some(WidgetKind::Image),
            NodeKind::Unknown => None,
        }
    }
}

/// Builds record trees for one session.
///
/// The host's text capability is captured at construction and used for
/// every node, so sibling text nodes in one document always agree.
#[derive(Debug, Clone)]
pub struct TreeBuilder<'a> {
    defaults: &'a BuildDefaults,
    text_backend: Option<TextBackend>,
}

impl<'a> TreeBuilder<'a> {
    /// Start a session, querying the host's text capability once.
    pub fn new(defaults: &'a BuildDefaults, host: &dyn Host) -> Self {
        Self::with_text_backend(defaults, host.text_backend())
    }

    pub fn with_text_backend(defaults: &'a BuildDefaults, text_backend: Option<TextBackend>) -> Self {
        Self {
            defaults,
            text_backend,
        }
    }

    pub fn text_backend(&self) -> Option<TextBackend> {
        self.text_backend
    }

    pub fn build_document(
        &self,
        document: &Document,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<WidgetRecord> {
        self.build(Some(&document.root), &NodePath::root(), sink)
    }

    /// Build the record for `node` and its subtree.
    ///
    /// Returns `None` for an absent node and for an unknown kind.
    pub fn build(
        &self,
        node: Option<&Node>,
        path: &NodePath,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<WidgetRecord> {
        let node = node?;
        let kind = node.node_kind();
        let Some(widget_kind) = WidgetKind::for_node(kind) else {
            sink.report(Diagnostic::UnsupportedNodeKind {
                kind: node.kind.clone().unwrap_or_default(),
                path: path.clone(),
            });
            return None;
        };

        let mut record = WidgetRecord::new(node.safe_name(), widget_kind, path.clone());

        match kind {
            NodeKind::Panel => self.setup_panel(node, &mut record),
            NodeKind::Text => self.setup_text(node, &mut record, sink),
            NodeKind::Button => self.setup_button(node, &mut record, sink),
            NodeKind::Image => self.setup_image(node, &mut record),
            NodeKind::Container | NodeKind::Unknown => {}
        }

        if let Some(size) = &node.size {
            record.push(Instruction::Sizing(SizingHint::from(size)));
        }
        if let Some(group) = node.layout.as_ref().and_then(|l| layout_group(l, self.defaults)) {
            record.push(Instruction::Layout(group));
        }

        for (index, child) in node.children.iter().enumerate() {
            if let Some(built) = self.build(child.as_ref(), &path.child(index), sink) {
                record.children.push(built);
            }
        }

        log::debug!(
            "built {:?} '{}' at {} ({} instructions, {} children)",
            record.kind,
            record.name,
            path,
            record.instructions.len(),
            record.children.len()
        );
        Some(record)
    }

    fn setup_panel(&self, node: &Node, record: &mut WidgetRecord) {
        let color = background_color(node)
            .map(|c| c.resolve(self.defaults.panel_color_fallback))
            .unwrap_or(self.defaults.panel_background);
        record.push(Instruction::Background(BackgroundFill { color }));
    }

    fn setup_text(&self, node: &Node, record: &mut WidgetRecord, sink: &mut dyn DiagnosticSink) {
        let text = self.text_instruction(node, &record.name, &record.source, sink);
        if let Some(text) = text {
            record.push(Instruction::Text(text));
        }
    }

    fn setup_button(&self, node: &Node, record: &mut WidgetRecord, sink: &mut dyn DiagnosticSink) {
        let fallback = self.defaults.button_background;
        let color = background_color(node)
            .map(|c| c.resolve(fallback))
            .unwrap_or(fallback);
        record.push(Instruction::Background(BackgroundFill { color }));
        record.push(Instruction::Interactive(Interactive::default()));

        if node.text_or_empty().is_empty() {
            return;
        }
        let mut label = WidgetRecord::new(
            self.defaults.label_name.as_str(),
            WidgetKind::Label,
            record.source.clone(),
        );
        let text = self.text_instruction(node, &label.name, &label.source, sink);
        if let Some(text) = text {
            label.push(Instruction::Text(text));
        }
        record.children.push(label);
    }

    fn setup_image(&self, node: &Node, record: &mut WidgetRecord) {
        if let Some(color) = background_color(node) {
            record.push(Instruction::Background(BackgroundFill {
                color: color.resolve(self.defaults.image_color_fallback),
            }));
        }
    }

    fn text_instruction(
        &self,
        node: &Node,
        name: &str,
        path: &NodePath,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<TextRender> {
        let Some(backend) = self.text_backend else {
            sink.report(Diagnostic::MissingTextCapability {
                name: name.to_string(),
                path: path.clone(),
            });
            return None;
        };
        Some(text::render_text(
            backend,
            node,
            self.defaults.text_alignment,
            self.defaults.text_color_fallback,
        ))
    }
}

fn background_color(node: &Node) -> Option<&Color> {
    node.style.as_ref()?.background_color.as_ref()
}
