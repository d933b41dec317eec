//! Non-fatal problems found while building.
//!
//! A diagnostic affects one node (or one subtree) and never stops the build.
//! The builder hands each one to a [`DiagnosticSink`]; collecting them into a
//! `Vec` and logging them are both provided.

use std::fmt;

use serde::Serialize;

use crate::model::NodePath;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Diagnostic {
    /// The node's kind string is not a known kind. The node and everything
    /// beneath it were left out.
    UnsupportedNodeKind { kind: String, path: NodePath },
    /// The host has no text widget, so a text instruction was left out. The
    /// node itself was still built.
    MissingTextCapability { name: String, path: NodePath },
}

impl Diagnostic {
    pub fn path(&self) -> &NodePath {
        match self {
            Diagnostic::UnsupportedNodeKind { path, .. }
            | Diagnostic::MissingTextCapability { path, .. } => path,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedNodeKind { kind, path } => {
                write!(f, "Unsupported node type '{}' at {}; subtree skipped", kind, path)
            }
            Diagnostic::MissingTextCapability { name, path } => write!(
                f,
                "No text widget available for '{}' at {}; text skipped",
                name, path
            ),
        }
    }
}

/// Receiver for diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that writes each diagnostic to the log at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}
