//! Typed access to single nodes of an external accessibility graph.
//!
//! The graph itself is live and externally owned: nodes are represented as
//! opaque [`NodeId`] handles queried on demand through the [`UiTree`] trait
//! rather than materialised into an owned tree. Every read is a one-shot,
//! point-in-time observation; nothing here caches or snapshots.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::format_value;
use crate::types::AttributeValue;

/// Well-known attribute names used by the inspection surfaces.
pub mod attr {
    pub const VALUE: &str = "AXValue";
    pub const LABEL: &str = "AXLabelValue";
    pub const DESCRIPTION: &str = "AXDescription";
    pub const TITLE: &str = "AXTitle";
    pub const IDENTIFIER: &str = "AXIdentifier";
    pub const FRAME: &str = "AXFrame";
}

/// Well-known action names.
pub mod action {
    pub const PRESS: &str = "AXPress";
    pub const RAISE: &str = "AXRaise";
}

/// Errors surfaced by query resolution and element interaction.
///
/// All variants are locally recoverable; callers render them as descriptive
/// text rather than treating them as faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AxError {
    /// A path component violated the `Role[Index]` grammar.
    #[error("Invalid query format at: {0}")]
    InvalidComponent(String),
    /// A resolution step landed on a node without a usable child list.
    #[error("No children found for: {0}")]
    NoChildren(String),
    /// The role-filtered sibling index exceeded the available count.
    #[error("Index {index} out of bounds for role {role}")]
    IndexOutOfBounds { role: String, index: usize },
    /// The platform declined to supply an attribute or action.
    #[error("Element did not provide {0}")]
    Unresolvable(String),
}

/// Opaque handle to one node of the external graph.
///
/// Handles are only meaningful to the [`UiTree`] that produced them, and only
/// for as long as the underlying element exists; the engine never stores one
/// beyond a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    pub fn new(raw: u64) -> Self {
        NodeId(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// External accessibility data source.
///
/// Implementations perform direct, synchronous reads against the live graph.
/// The graph may mutate between any two calls; the engine makes no
/// consistency assumption across reads.
pub trait UiTree {
    /// The node's role tag. Implementations report `"Unknown"` when the
    /// platform supplies none.
    fn role(&self, node: NodeId) -> String;

    /// The node's ordered children. `None` (unsupported or unavailable) is a
    /// distinct state from `Some(vec![])`.
    fn children(&self, node: NodeId) -> Option<Vec<NodeId>>;

    /// Read a named attribute. Total: a failed read and a legitimately absent
    /// attribute both yield [`AttributeValue::Absent`].
    fn attribute(&self, node: NodeId, name: &str) -> AttributeValue;

    /// The set of actions the node supports.
    fn actions(&self, node: NodeId) -> Result<Vec<String>, AxError>;

    /// Invoke a named action on the node.
    fn perform_action(&self, node: NodeId, name: &str) -> Result<(), AxError>;
}

/// Borrowed pairing of a [`UiTree`] with one of its node handles, exposing
/// typed lookups over the raw attribute surface.
pub struct ElementHandle<'a, T: ?Sized> {
    tree: &'a T,
    id: NodeId,
}

impl<'a, T: ?Sized> Clone for ElementHandle<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ?Sized> Copy for ElementHandle<'a, T> {}

impl<'a, T: UiTree + ?Sized> ElementHandle<'a, T> {
    pub fn new(tree: &'a T, id: NodeId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn role(&self) -> String {
        self.tree.role(self.id)
    }

    pub fn children(&self) -> Option<Vec<ElementHandle<'a, T>>> {
        let children = self.tree.children(self.id)?;
        Some(
            children
                .into_iter()
                .map(|child| ElementHandle::new(self.tree, child))
                .collect(),
        )
    }

    pub fn attribute(&self, name: &str) -> AttributeValue {
        self.tree.attribute(self.id, name)
    }

    /// The node's primary value attribute.
    pub fn value(&self) -> AttributeValue {
        self.attribute(attr::VALUE)
    }

    /// Read a named attribute as non-empty text.
    pub fn text_attribute(&self, name: &str) -> Option<String> {
        self.attribute(name)
            .as_non_empty_text()
            .map(|s| s.to_string())
    }

    /// Display label: first non-empty of explicit label, description, title,
    /// identifier.
    pub fn label(&self) -> Option<String> {
        [attr::LABEL, attr::DESCRIPTION, attr::TITLE, attr::IDENTIFIER]
            .iter()
            .find_map(|name| self.text_attribute(name))
    }

    /// The node's on-screen frame, when the platform reports one.
    pub fn frame(&self) -> Option<(f64, f64, f64, f64)> {
        match self.attribute(attr::FRAME) {
            AttributeValue::Rect { x, y, w, h } => Some((x, y, w, h)),
            _ => None,
        }
    }

    /// Parenthesised value/label suffix used by tree dumps and search output,
    /// e.g. ` (value: "1", label: "Submit")`. Empty when both parts are empty;
    /// value always precedes label.
    pub fn annotation(&self) -> String {
        let value = format_value(&self.value());
        let label = self.label().unwrap_or_default();

        let mut parts = Vec::new();
        if !value.is_empty() {
            parts.push(format!("value: \"{value}\""));
        }
        if !label.is_empty() {
            parts.push(format!("label: \"{label}\""));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!(" ({})", parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::StaticTree;
    use serde_json::json;

    fn tree_with_attributes(attributes: serde_json::Value) -> StaticTree {
        StaticTree::from_value(json!({
            "role": "AXButton",
            "attributes": attributes,
        }))
        .expect("fixture")
    }

    #[test]
    fn label_prefers_explicit_label_then_description_title_identifier() {
        let tree = tree_with_attributes(json!({
            "AXLabelValue": { "type": "text", "value": "label" },
            "AXDescription": { "type": "text", "value": "description" },
            "AXTitle": { "type": "text", "value": "title" },
            "AXIdentifier": { "type": "text", "value": "identifier" },
        }));
        let element = ElementHandle::new(&tree, tree.root());
        assert_eq!(element.label().as_deref(), Some("label"));

        let tree = tree_with_attributes(json!({
            "AXLabelValue": { "type": "text", "value": "" },
            "AXTitle": { "type": "text", "value": "title" },
            "AXIdentifier": { "type": "text", "value": "identifier" },
        }));
        let element = ElementHandle::new(&tree, tree.root());
        assert_eq!(element.label().as_deref(), Some("title"));

        let tree = tree_with_attributes(json!({
            "AXIdentifier": { "type": "text", "value": "identifier" },
        }));
        let element = ElementHandle::new(&tree, tree.root());
        assert_eq!(element.label().as_deref(), Some("identifier"));
    }

    #[test]
    fn label_is_none_when_no_candidate_is_text() {
        let tree = tree_with_attributes(json!({
            "AXTitle": { "type": "number", "value": 7 },
        }));
        let element = ElementHandle::new(&tree, tree.root());
        assert_eq!(element.label(), None);
    }

    #[test]
    fn frame_reads_rect_attribute() {
        let tree = tree_with_attributes(json!({
            "AXFrame": { "type": "rect", "value": { "x": 10.0, "y": 20.0, "w": 100.0, "h": 40.0 } },
        }));
        let element = ElementHandle::new(&tree, tree.root());
        assert_eq!(element.frame(), Some((10.0, 20.0, 100.0, 40.0)));

        let tree = tree_with_attributes(json!({}));
        let element = ElementHandle::new(&tree, tree.root());
        assert_eq!(element.frame(), None);
    }

    #[test]
    fn annotation_includes_only_non_empty_parts() {
        let tree = tree_with_attributes(json!({
            "AXValue": { "type": "number", "value": 1 },
            "AXTitle": { "type": "text", "value": "Submit" },
        }));
        let element = ElementHandle::new(&tree, tree.root());
        assert_eq!(element.annotation(), " (value: \"1\", label: \"Submit\")");

        let tree = tree_with_attributes(json!({
            "AXTitle": { "type": "text", "value": "Submit" },
        }));
        let element = ElementHandle::new(&tree, tree.root());
        assert_eq!(element.annotation(), " (label: \"Submit\")");

        let tree = tree_with_attributes(json!({}));
        let element = ElementHandle::new(&tree, tree.root());
        assert_eq!(element.annotation(), "");
    }
}
