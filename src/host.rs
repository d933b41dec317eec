//! # Host Seam
//!
//! The importer never creates real widgets. A host supplies two things:
//! a capability answer ([`Host`]) read once before building, and a factory
//! ([`WidgetFactory`]) that [`realize`] drives over the finished records.

use crate::build::{CanvasDescriptor, TextBackend, WidgetRecord};
use crate::Import;

/// Capabilities of the host toolkit.
pub trait Host {
    /// The text widget implementation the host will use. `None` means it
    /// cannot render text at all.
    fn text_backend(&self) -> Option<TextBackend>;
}

/// A host whose answers are fixed up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticHost {
    pub text: Option<TextBackend>,
}

impl Default for StaticHost {
    fn default() -> Self {
        Self {
            text: Some(TextBackend::Rich),
        }
    }
}

impl Host for StaticHost {
    fn text_backend(&self) -> Option<TextBackend> {
        self.text
    }
}

/// Creates concrete widgets from records.
pub trait WidgetFactory {
    type Widget;

    fn create_canvas(&mut self, canvas: &CanvasDescriptor) -> Self::Widget;

    /// Create the widget for `record` under `parent`. The record's children
    /// are created afterwards, in order, by further calls.
    fn create_widget(&mut self, parent: &Self::Widget, record: &WidgetRecord) -> Self::Widget;
}

/// Realize an import: canvas first, then every record depth-first, each
/// parent before its children.
pub fn realize<F: WidgetFactory>(import: &Import, factory: &mut F) -> F::Widget {
    let canvas = factory.create_canvas(&import.canvas);
    if let Some(root) = &import.root {
        realize_record(root, &canvas, factory);
    }
    canvas
}

fn realize_record<F: WidgetFactory>(record: &WidgetRecord, parent: &F::Widget, factory: &mut F) {
    let widget = factory.create_widget(parent, record);
    for child in &record.children {
        realize_record(child, &widget, factory);
    }
}
