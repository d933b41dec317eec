//! Text instructions and the handle interface that fills them.
//!
//! A host renders text with one of two widget implementations: a rich one
//! (outline fonts, float point sizes) or a basic bitmap-font fallback. Which
//! one exists is a host capability, read once per build session. Both sit
//! behind [`TextWidgetHandle`] so the builder fills them the same way, with
//! the concrete type chosen by a plain `match` and dispatched statically.

use serde::{Deserialize, Serialize};

use crate::model::{Alignment, Node};
use crate::style::Color;

/// Which text widget implementation the host has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextBackend {
    Rich,
    Basic,
}

/// Instruction: render text in this record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRender {
    pub backend: TextBackend,
    pub content: String,
    pub alignment: Alignment,
    /// `None` keeps the host's default color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Point size. `None` keeps the host's default size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

/// The settable surface of a text widget.
pub trait TextWidgetHandle {
    fn set_content(&mut self, content: &str);
    fn set_color(&mut self, color: Color);
    fn set_font_size(&mut self, size: i32);

    fn finish(self) -> TextRender
    where
        Self: Sized;
}

/// Handle for the rich text implementation.
#[derive(Debug)]
pub struct RichText(TextRender);

impl RichText {
    pub fn new(alignment: Alignment) -> Self {
        Self(TextRender {
            backend: TextBackend::Rich,
            content: String::new(),
            alignment,
            color: None,
            font_size: None,
        })
    }
}

impl TextWidgetHandle for RichText {
    fn set_content(&mut self, content: &str) {
        self.0.content = content.to_string();
    }

    fn set_color(&mut self, color: Color) {
        self.0.color = Some(color);
    }

    fn set_font_size(&mut self, size: i32) {
        self.0.font_size = Some(f64::from(size));
    }

    fn finish(self) -> TextRender {
        self.0
    }
}

/// Handle for the basic fallback implementation.
#[derive(Debug)]
pub struct BasicText(TextRender);

impl BasicText {
    pub fn new(alignment: Alignment) -> Self {
        Self(TextRender {
            backend: TextBackend::Basic,
            content: String::new(),
            alignment,
            color: None,
            font_size: None,
        })
    }
}

impl TextWidgetHandle for BasicText {
    fn set_content(&mut self, content: &str) {
        self.0.content = content.to_string();
    }

    fn set_color(&mut self, color: Color) {
        self.0.color = Some(color);
    }

    fn set_font_size(&mut self, size: i32) {
        self.0.font_size = Some(f64::from(size));
    }

    fn finish(self) -> TextRender {
        self.0
    }
}

/// Fill a handle from a node's text and style. Sizes of 0 or less never
/// reach the handle.
pub fn apply_text<H: TextWidgetHandle>(mut handle: H, node: &Node, color_fallback: Color) -> TextRender {
    handle.set_content(node.text_or_empty());
    if let Some(style) = &node.style {
        if let Some(color) = &style.text_color {
            handle.set_color(color.resolve(color_fallback));
        }
        if style.font_size > 0 {
            handle.set_font_size(style.font_size);
        }
    }
    handle.finish()
}

/// Build the text instruction for `node` with the given backend.
pub fn render_text(
    backend: TextBackend,
    node: &Node,
    alignment: Alignment,
    color_fallback: Color,
) -> TextRender {
    match backend {
        TextBackend::Rich => apply_text(RichText::new(alignment), node, color_fallback),
        TextBackend::Basic => apply_text(BasicText::new(alignment), node, color_fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn styled_text(content: &str, style: Style) -> Node {
        Node {
            style: Some(style),
            ..Node::text(content)
        }
    }

    #[test]
    fn test_content_and_alignment() {
        let r = render_text(
            TextBackend::Rich,
            &Node::text("Hello"),
            Alignment::MiddleCenter,
            Color::BLACK,
        );
        assert_eq!(r.content, "Hello");
        assert_eq!(r.alignment, Alignment::MiddleCenter);
        assert_eq!(r.backend, TextBackend::Rich);
        assert!(r.color.is_none());
        assert!(r.font_size.is_none());
    }

    #[test]
    fn test_missing_text_is_empty() {
        let r = render_text(
            TextBackend::Basic,
            &Node::of_kind("Text"),
            Alignment::MiddleCenter,
            Color::BLACK,
        );
        assert_eq!(r.content, "");
        assert_eq!(r.backend, TextBackend::Basic);
    }

    #[test]
    fn test_color_resolves_against_fallback() {
        let node = styled_text(
            "x",
            Style {
                text_color: Some(Color::rgba(1.0, 0.0, 0.0, 0.0)),
                ..Default::default()
            },
        );
        let r = render_text(TextBackend::Rich, &node, Alignment::MiddleCenter, Color::BLACK);
        assert_eq!(r.color, Some(Color::rgba(1.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_font_size_only_when_positive() {
        let node = styled_text(
            "x",
            Style {
                font_size: 24,
                ..Default::default()
            },
        );
        let r = render_text(TextBackend::Basic, &node, Alignment::MiddleCenter, Color::BLACK);
        assert_eq!(r.font_size, Some(24.0));

        let node = styled_text(
            "x",
            Style {
                font_size: -3,
                ..Default::default()
            },
        );
        let r = render_text(TextBackend::Rich, &node, Alignment::MiddleCenter, Color::BLACK);
        assert!(r.font_size.is_none());
    }

    #[test]
    fn test_backends_apply_same_rules() {
        for font_size in [0, -3, 18] {
            let node = styled_text(
                "x",
                Style {
                    font_size,
                    text_color: Some(Color::WHITE),
                    ..Default::default()
                },
            );
            let rich = render_text(TextBackend::Rich, &node, Alignment::UpperLeft, Color::BLACK);
            let basic = render_text(TextBackend::Basic, &node, Alignment::UpperLeft, Color::BLACK);
            assert_eq!(basic.backend, TextBackend::Basic);
            assert_eq!(
                TextRender {
                    backend: TextBackend::Rich,
                    ..basic
                },
                rich
            );
        }
    }
}
