//! Integration tests for the import pipeline.
//!
//! These exercise the full path from JSON input to widget records. They
//! verify:
//! - Malformed documents fail up front with nothing built
//! - The record tree mirrors the document tree (minus unknown subtrees,
//!   plus button labels)
//! - Per-kind construction rules and their defaults
//! - Diagnostics for unknown kinds and missing text capability
//! - Building is deterministic for a fixed host

use pretty_assertions::assert_eq;

use domcanvas::build::{
    BuildDefaults, Instruction, RectDescriptor, TextBackend, TreeBuilder, WidgetKind,
    WidgetRecord,
};
use domcanvas::diagnostics::Diagnostic;
use domcanvas::host::StaticHost;
use domcanvas::layout::{GridConstraint, LayoutGroup, Padding};
use domcanvas::model::{Alignment, Document, Node, NodeKind, NodePath, Vec2};
use domcanvas::style::Color;
use domcanvas::{import, import_json, Import, ImportError};

// ─── Helpers ────────────────────────────────────────────────────

fn rich_host() -> StaticHost {
    StaticHost {
        text: Some(TextBackend::Rich),
    }
}

fn textless_host() -> StaticHost {
    StaticHost { text: None }
}

fn import_with(json: &str, host: &StaticHost) -> Import {
    import_json(json, host, &BuildDefaults::default()).expect("document should parse")
}

fn root_of(json: &str) -> WidgetRecord {
    import_with(json, &rich_host())
        .root
        .expect("root should build")
}

/// Expected record count: every non-null node whose kind is known and whose
/// ancestors are all known, plus one label per button with text.
fn expected_count(node: &Node) -> usize {
    if node.node_kind() == NodeKind::Unknown {
        return 0;
    }
    let label = usize::from(node.node_kind() == NodeKind::Button && !node.text_or_empty().is_empty());
    1 + label
        + node
            .children
            .iter()
            .flatten()
            .map(expected_count)
            .sum::<usize>()
}

fn names(record: &WidgetRecord) -> Vec<String> {
    let mut out = Vec::new();
    record.walk(&mut |r, depth| out.push(format!("{}{}", "-".repeat(depth), r.name)));
    out
}

const LAYOUT: &str = r#"{
  "root": {
    "type": "Panel",
    "name": "Screen",
    "layout": { "type": "vertical", "padding": { "left": 16.7, "top": 8 }, "spacing": 4 },
    "children": [
      { "type": "text", "name": "Title", "text": "Inventory", "style": { "fontSize": 28 } },
      {
        "type": "container",
        "name": "Grid",
        "layout": { "type": "grid", "columns": 3 },
        "children": [
          { "type": "image", "name": "Slot1", "image": "slot.png" },
          { "type": "image", "name": "Slot2", "image": "slot.png" },
          { "type": "gizmo", "name": "Broken", "children": [
            { "type": "text", "text": "lost" },
            { "type": "button", "text": "lost too" }
          ] },
          null
        ]
      },
      { "type": "button", "name": "Close", "text": "Close", "size": { "preferredWidth": 120 } },
      { "type": "button", "name": "Blank" }
    ]
  }
}"#;

// ─── Parsing ────────────────────────────────────────────────────

#[test]
fn test_document_without_root_is_malformed() {
    let err = import_json("{}", &rich_host(), &BuildDefaults::default()).unwrap_err();
    assert!(matches!(err, ImportError::MissingRoot));
    assert!(err.is_malformed_document());
}

#[test]
fn test_undecodable_document_is_malformed() {
    for input in ["", "[1, 2", r#"{"root": "panel"}"#, r#"{"root": {"children": 7}}"#] {
        let err = import_json(input, &rich_host(), &BuildDefaults::default()).unwrap_err();
        assert!(
            matches!(err, ImportError::Parse { .. }),
            "expected parse error for {:?}, got {:?}",
            input,
            err
        );
    }
}

#[test]
fn test_bad_hints_degrade_instead_of_failing() {
    let root = root_of(
        r#"{"root": {"type": "panel",
            "layout": {"type": "spiral", "alignment": "nowhere"},
            "style": {"fontSize": null, "backgroundColor": null}}}"#,
    );
    assert!(root.layout().is_none());
    assert_eq!(
        root.background().unwrap().color,
        Color::rgba(1.0, 1.0, 1.0, 0.05)
    );
}

// ─── Tree shape ─────────────────────────────────────────────────

#[test]
fn test_tree_shape_matches_document() {
    let document = Document::from_json(LAYOUT).unwrap();
    let result = import(&document, &rich_host(), &BuildDefaults::default());
    let root = result.root.as_ref().unwrap();

    assert_eq!(result.record_count(), expected_count(&document.root));
    assert_eq!(
        names(root),
        vec![
            "Screen",
            "-Title",
            "-Grid",
            "--Slot1",
            "--Slot2",
            "-Close",
            "--Label",
            "-Blank",
        ]
    );
}

#[test]
fn test_records_point_back_at_their_nodes() {
    let document = Document::from_json(LAYOUT).unwrap();
    let result = import(&document, &rich_host(), &BuildDefaults::default());
    let mut checked = 0;
    result.root.as_ref().unwrap().walk(&mut |record, _| {
        let node = document.node_at(&record.source).expect("source path resolves");
        if record.kind != WidgetKind::Label {
            assert_eq!(node.safe_name(), record.name);
        }
        checked += 1;
    });
    assert_eq!(checked, result.record_count());
}

#[test]
fn test_unknown_subtree_reported_once() {
    let result = import_with(LAYOUT, &rich_host());
    assert_eq!(
        result.diagnostics,
        vec![Diagnostic::UnsupportedNodeKind {
            kind: "gizmo".to_string(),
            path: NodePath::from(vec![1, 2]),
        }]
    );
}

#[test]
fn test_unknown_node_with_two_children_yields_nothing() {
    let result = import_with(
        r#"{"root": {"children": [
            {"type": "dropdown", "children": [{"type": "text"}, {"type": "panel"}]}
        ]}}"#,
        &rich_host(),
    );
    assert_eq!(result.record_count(), 1);
    assert!(result.root.unwrap().children.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
}

// ─── Construction rules ─────────────────────────────────────────

#[test]
fn test_every_record_starts_centered() {
    let root = root_of(LAYOUT);
    root.walk(&mut |record, _| assert_eq!(record.rect, RectDescriptor::centered()));
}

#[test]
fn test_vertical_layout_instruction() {
    let root = root_of(LAYOUT);
    let Some(LayoutGroup::Vertical(group)) = root.layout() else {
        panic!("expected vertical layout, got {:?}", root.layout());
    };
    assert_eq!(
        group.padding,
        Padding {
            left: 16,
            right: 0,
            top: 8,
            bottom: 0
        }
    );
    assert_eq!(group.spacing, 4.0);
    assert_eq!(group.child_alignment, Alignment::UpperLeft);
    assert!(group.child_control_width && group.child_control_height);
    assert!(!group.child_force_expand_width && !group.child_force_expand_height);
}

#[test]
fn test_grid_without_cell_size() {
    let root = root_of(LAYOUT);
    let grid = &root.children[1];
    let Some(LayoutGroup::Grid(group)) = grid.layout() else {
        panic!("expected grid layout");
    };
    assert_eq!(group.constraint, GridConstraint::FixedColumnCount(3));
    assert_eq!(group.cell_size, Vec2::new(100.0, 100.0));
    assert_eq!(group.spacing, Vec2::ZERO);
}

#[test]
fn test_grid_columns_clamp_to_one() {
    for columns in ["0", "-3"] {
        let root = root_of(&format!(
            r#"{{"root": {{"layout": {{"type": "grid", "columns": {}}}}}}}"#,
            columns
        ));
        let Some(LayoutGroup::Grid(group)) = root.layout() else {
            panic!("expected grid layout");
        };
        assert_eq!(group.constraint, GridConstraint::FixedColumnCount(1));
    }
}

#[test]
fn test_button_label_counts() {
    let root = root_of(LAYOUT);
    let close = &root.children[2];
    assert_eq!(close.kind, WidgetKind::Button);
    assert_eq!(close.children.len(), 1);
    assert_eq!(close.children[0].text().unwrap().content, "Close");
    assert_eq!(close.sizing().unwrap().preferred_width, Some(120.0));

    let blank = &root.children[3];
    assert!(blank.children.is_empty());
    assert!(blank.interactive().is_some());
    assert_eq!(
        blank.background().unwrap().color,
        Color::rgba(0.9, 0.9, 0.9, 1.0)
    );
}

#[test]
fn test_text_instruction_fields() {
    let root = root_of(LAYOUT);
    let title = root.children[0].text().unwrap();
    assert_eq!(title.content, "Inventory");
    assert_eq!(title.alignment, Alignment::MiddleCenter);
    assert_eq!(title.font_size, Some(28.0));
    assert_eq!(title.color, None);
    assert_eq!(title.backend, TextBackend::Rich);
}

#[test]
fn test_images_without_style_have_no_instructions() {
    let root = root_of(LAYOUT);
    for slot in &root.children[1].children {
        assert_eq!(slot.kind, WidgetKind::Image);
        assert!(slot.instructions.is_empty());
    }
}

// ─── Host capability ────────────────────────────────────────────

#[test]
fn test_text_without_capability_still_builds_node() {
    let result = import_with(
        r#"{"root": {"type": "text", "name": "Greeting", "text": "Hi"}}"#,
        &textless_host(),
    );
    let root = result.root.unwrap();
    assert_eq!(root.kind, WidgetKind::Text);
    assert!(root.text().is_none());
    assert_eq!(
        result.diagnostics,
        vec![Diagnostic::MissingTextCapability {
            name: "Greeting".to_string(),
            path: NodePath::root(),
        }]
    );
}

#[test]
fn test_textless_host_keeps_tree_shape() {
    let with_text = import_with(LAYOUT, &rich_host());
    let without_text = import_with(LAYOUT, &textless_host());
    assert_eq!(with_text.record_count(), without_text.record_count());
    // Title and the Close label both lose their text.
    let missing = without_text
        .diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::MissingTextCapability { .. }))
        .count();
    assert_eq!(missing, 2);
}

#[test]
fn test_basic_backend_selected_once() {
    let result = import_with(
        r#"{"root": {"children": [
            {"type": "text", "text": "a"},
            {"type": "button", "text": "b"}
        ]}}"#,
        &StaticHost {
            text: Some(TextBackend::Basic),
        },
    );
    let mut backends = Vec::new();
    result.root.unwrap().walk(&mut |r, _| {
        if let Some(t) = r.text() {
            backends.push(t.backend);
        }
    });
    assert_eq!(backends, vec![TextBackend::Basic, TextBackend::Basic]);
}

// ─── Determinism & output ───────────────────────────────────────

#[test]
fn test_building_twice_gives_equal_trees() {
    let document = Document::from_json(LAYOUT).unwrap();
    let defaults = BuildDefaults::default();
    let first = import(&document, &rich_host(), &defaults);
    let second = import(&document, &rich_host(), &defaults);
    assert_eq!(first, second);
}

#[test]
fn test_builder_used_directly_matches_import() {
    let document = Document::from_json(LAYOUT).unwrap();
    let defaults = BuildDefaults::default();
    let builder = TreeBuilder::new(&defaults, &rich_host());
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let root = builder.build_document(&document, &mut diagnostics);
    let result = import(&document, &rich_host(), &defaults);
    assert_eq!(root, result.root);
    assert_eq!(diagnostics, result.diagnostics);
}

#[test]
fn test_import_serializes_to_json() {
    let result = import_with(
        r#"{"root": {"type": "button", "text": "Go", "size": {"minWidth": 40}}}"#,
        &rich_host(),
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["canvas"]["name"], "ImportedCanvas");
    assert_eq!(json["root"]["kind"], "Button");
    assert_eq!(json["root"]["source"], "root");
    assert_eq!(json["root"]["instructions"][2]["sizing"]["minWidth"], 40.0);
    assert!(json["root"]["instructions"][2]["sizing"]
        .get("preferredWidth")
        .is_none());
    assert_eq!(json["root"]["children"][0]["kind"], "Label");
    assert_eq!(
        json["root"]["children"][0]["instructions"][0]["text"]["content"],
        "Go"
    );
}

#[test]
fn test_instruction_kinds_per_widget() {
    let root = root_of(
        r#"{"root": {"type": "button", "text": "x",
            "layout": {"type": "horizontal"}, "size": {}}}"#,
    );
    let kinds: Vec<&str> = root
        .instructions
        .iter()
        .map(|i| match i {
            Instruction::Background(_) => "background",
            Instruction::Text(_) => "text",
            Instruction::Interactive(_) => "interactive",
            Instruction::Sizing(_) => "sizing",
            Instruction::Layout(_) => "layout",
        })
        .collect();
    assert_eq!(kinds, vec!["background", "interactive", "sizing", "layout"]);
}

#[test]
fn test_defaults_file_overrides() {
    let defaults = BuildDefaults::from_json(
        r#"{"buttonBackground": {"r": 0.2, "g": 0.2, "b": 0.2}, "alignmentFallback": "MiddleCenter"}"#,
    )
    .unwrap();
    let result = import_json(
        r#"{"root": {"type": "button", "layout": {"type": "vertical"}}}"#,
        &rich_host(),
        &defaults,
    )
    .unwrap();
    let root = result.root.unwrap();
    assert_eq!(
        root.background().unwrap().color,
        Color::rgba(0.2, 0.2, 0.2, 1.0)
    );
    let Some(LayoutGroup::Vertical(group)) = root.layout() else {
        panic!("expected vertical layout");
    };
    assert_eq!(group.child_alignment, Alignment::MiddleCenter);
}
