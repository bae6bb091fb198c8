//! Integration tests exercising the full inspection surface against a
//! fixture tree, including the search-to-resolve round-trip property.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use axquery::config::{InspectorConfig, Verbosity};
use axquery::element::ElementHandle;
use axquery::fixture::StaticTree;
use axquery::{AxError, Inspector, find_by_role, find_by_text, resolve};
use serde_json::json;

/// A two-window-ish layout with repeated roles at several depths.
fn build_tree() -> Result<StaticTree> {
    StaticTree::from_value(json!({
        "role": "AXApplication",
        "children": [
            {
                "role": "AXWindow",
                "attributes": {
                    "AXTitle": { "type": "text", "value": "Untitled" },
                    "AXFrame": { "type": "rect", "value": { "x": 0.0, "y": 0.0, "w": 800.0, "h": 600.0 } },
                },
                "actions": ["AXRaise"],
                "children": [
                    {
                        "role": "AXToolbar",
                        "children": [
                            { "role": "AXButton", "attributes": {
                                "AXDescription": { "type": "text", "value": "Back" },
                            }, "actions": ["AXPress"] },
                            { "role": "AXButton", "attributes": {
                                "AXDescription": { "type": "text", "value": "Forward" },
                            }, "actions": ["AXPress"] },
                        ],
                    },
                    {
                        "role": "AXGroup",
                        "children": [
                            { "role": "AXTextField", "attributes": {
                                "AXValue": { "type": "text", "value": "hello" },
                                "AXTitle": { "type": "text", "value": "Search" },
                            } },
                            { "role": "AXButton", "attributes": {
                                "AXTitle": { "type": "text", "value": "Submit" },
                            }, "actions": ["AXPress"] },
                            { "role": "AXStaticText", "attributes": {
                                "AXValue": { "type": "list", "value": [
                                    { "type": "number", "value": 1 },
                                    { "type": "text", "value": "a" },
                                ] },
                            } },
                        ],
                    },
                ],
            },
            {
                "role": "AXWindow",
                "attributes": {
                    "AXTitle": { "type": "text", "value": "Preferences" },
                },
                "children": [
                    { "role": "AXButton", "attributes": {
                        "AXTitle": { "type": "text", "value": "Submit" },
                    }, "actions": ["AXPress"] },
                ],
            },
        ],
    }))
    .context("building fixture tree")
}

#[test]
fn resolves_deep_queries() -> Result<()> {
    let tree = build_tree()?;

    let submit = resolve(&tree, tree.root(), "AXWindow[0].AXGroup[0].AXButton[0]")?;
    let element = ElementHandle::new(&tree, submit);
    assert_eq!(element.role(), "AXButton");
    assert_eq!(element.label().as_deref(), Some("Submit"));

    let window = resolve(&tree, tree.root(), "AXWindow[0]")?;
    assert_eq!(
        ElementHandle::new(&tree, window).frame(),
        Some((0.0, 0.0, 800.0, 600.0))
    );

    let err = resolve(&tree, tree.root(), "AXWindow[2]").unwrap_err();
    assert_eq!(
        err,
        AxError::IndexOutOfBounds {
            role: "AXWindow".to_string(),
            index: 2,
        }
    );
    Ok(())
}

#[test]
fn search_paths_round_trip_through_resolve() -> Result<()> {
    let tree = build_tree()?;

    let by_role = find_by_role(&tree, tree.root(), "AXButton");
    assert_eq!(by_role.len(), 4);
    for result in &by_role {
        let resolved = resolve(&tree, tree.root(), &result.path)?;
        assert_eq!(resolved, result.node, "path {}", result.path);
    }

    let by_text = find_by_text(&tree, tree.root(), "SUBMIT");
    assert_eq!(by_text.len(), 2);
    assert_eq!(by_text[0].path, "AXWindow[0].AXGroup[0].AXButton[0]");
    assert_eq!(by_text[1].path, "AXWindow[1].AXButton[0]");
    for result in &by_text {
        let resolved = resolve(&tree, tree.root(), &result.path)?;
        assert_eq!(resolved, result.node);
    }
    Ok(())
}

#[test]
fn sibling_indices_restart_per_parent() -> Result<()> {
    let tree = build_tree()?;

    let buttons = find_by_role(&tree, tree.root(), "AXButton");
    let paths: Vec<&str> = buttons.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "AXWindow[0].AXToolbar[0].AXButton[0]",
            "AXWindow[0].AXToolbar[0].AXButton[1]",
            "AXWindow[0].AXGroup[0].AXButton[0]",
            "AXWindow[1].AXButton[0]",
        ]
    );
    Ok(())
}

#[test]
fn inspector_facade_renders_plain_text() -> Result<()> {
    let tree = build_tree()?;
    let mut config = InspectorConfig::default();
    config.verbose = Verbosity::Minimal;
    let inspector = Inspector::with_config(&tree, config);

    let dump = inspector.describe(tree.root(), "AXWindow[0].AXToolbar[0]", Some(1));
    assert_eq!(
        dump,
        "AXToolbar\n\
         -- AXButton (label: \"Back\")\n\
         -- AXButton (label: \"Forward\")\n"
    );

    // List value formats through the same canonical formatter.
    let listing = inspector.elements_with_text(tree.root(), "1, a");
    assert_eq!(
        listing,
        "AXWindow[0].AXGroup[0].AXStaticText[0] (value: \"1, a\")"
    );

    let pressed = inspector.press(tree.root(), "AXWindow[0].AXGroup[0].AXButton[0]");
    assert_eq!(pressed, "Successfully clicked element: AXButton");
    assert_eq!(tree.performed_actions().len(), 1);

    let refused = inspector.press(tree.root(), "AXWindow[0].AXGroup[0].AXTextField[0]");
    assert_eq!(refused, "Element is not clickable");
    Ok(())
}

#[test]
fn depth_zero_dump_is_a_single_line() -> Result<()> {
    let tree = build_tree()?;
    let inspector = Inspector::new(&tree);
    let dump = inspector.dump(tree.root(), Some(0));
    assert_eq!(dump, "AXApplication\n");
    Ok(())
}

#[test]
fn fixtures_load_from_disk() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new().context("creating temp fixture")?;
    write!(
        file,
        r#"{{
            "role": "AXWindow",
            "children": [
                {{ "role": "AXButton", "attributes": {{
                    "AXTitle": {{ "type": "text", "value": "OK" }}
                }} }}
            ]
        }}"#
    )?;

    let text = fs::read_to_string(file.path())?;
    let tree = StaticTree::from_json(&text)?;
    let inspector = Inspector::new(&tree);
    assert_eq!(
        inspector.elements_of_role(tree.root(), "AXButton"),
        "AXButton[0] (label: \"OK\")"
    );
    Ok(())
}
