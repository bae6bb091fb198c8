//! In-memory accessibility tree backed by a serde-loadable node spec.
//!
//! [`StaticTree`] stands in for the platform data source in tests and in the
//! CLI: it implements [`UiTree`] over an owned arena and records performed
//! actions so callers can assert on invocations. It is a fixture, not a cache
//! of a live graph.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::element::{AxError, NodeId, UiTree};
use crate::types::AttributeValue;

/// Serde shape for one fixture node.
///
/// `children` distinguishes "no child list" (`null`/missing) from "an empty
/// child list" (`[]`), mirroring the platform's distinction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NodeSpec {
    pub role: String,
    pub attributes: BTreeMap<String, AttributeValue>,
    pub actions: Vec<String>,
    pub children: Option<Vec<NodeSpec>>,
}

impl Default for NodeSpec {
    fn default() -> Self {
        Self {
            role: "Unknown".to_string(),
            attributes: BTreeMap::new(),
            actions: Vec::new(),
            children: None,
        }
    }
}

#[derive(Debug)]
struct StoredNode {
    role: String,
    attributes: BTreeMap<String, AttributeValue>,
    actions: Vec<String>,
    children: Option<Vec<usize>>,
}

/// Owned in-memory tree implementing [`UiTree`].
#[derive(Debug)]
pub struct StaticTree {
    nodes: Vec<StoredNode>,
    performed: Mutex<Vec<(NodeId, String)>>,
}

impl StaticTree {
    pub fn new(spec: NodeSpec) -> Self {
        let mut nodes = Vec::new();
        insert(&mut nodes, spec);
        Self {
            nodes,
            performed: Mutex::new(Vec::new()),
        }
    }

    /// Build a tree from a JSON document describing the root [`NodeSpec`].
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<NodeSpec>(text).map(Self::new)
    }

    /// Build a tree from an in-memory JSON value (convenient with `json!`).
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value::<NodeSpec>(value).map(Self::new)
    }

    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Actions performed so far, in invocation order.
    pub fn performed_actions(&self) -> Vec<(NodeId, String)> {
        self.performed
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn node(&self, id: NodeId) -> Option<&StoredNode> {
        usize::try_from(id.raw())
            .ok()
            .and_then(|index| self.nodes.get(index))
    }
}

fn insert(nodes: &mut Vec<StoredNode>, spec: NodeSpec) -> usize {
    let index = nodes.len();
    nodes.push(StoredNode {
        role: spec.role,
        attributes: spec.attributes,
        actions: spec.actions,
        children: None,
    });

    let children = spec
        .children
        .map(|specs| specs.into_iter().map(|child| insert(nodes, child)).collect());
    nodes[index].children = children;
    index
}

impl UiTree for StaticTree {
    fn role(&self, node: NodeId) -> String {
        self.node(node)
            .map(|stored| stored.role.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    fn children(&self, node: NodeId) -> Option<Vec<NodeId>> {
        self.node(node)?
            .children
            .as_ref()
            .map(|ids| ids.iter().map(|&id| NodeId::new(id as u64)).collect())
    }

    fn attribute(&self, node: NodeId, name: &str) -> AttributeValue {
        self.node(node)
            .and_then(|stored| stored.attributes.get(name).cloned())
            .unwrap_or(AttributeValue::Absent)
    }

    fn actions(&self, node: NodeId) -> Result<Vec<String>, AxError> {
        self.node(node)
            .map(|stored| stored.actions.clone())
            .ok_or_else(|| AxError::Unresolvable("actions".to_string()))
    }

    fn perform_action(&self, node: NodeId, name: &str) -> Result<(), AxError> {
        let stored = self
            .node(node)
            .ok_or_else(|| AxError::Unresolvable(name.to_string()))?;
        if !stored.actions.iter().any(|action| action == name) {
            return Err(AxError::Unresolvable(name.to_string()));
        }
        if let Ok(mut guard) = self.performed.lock() {
            guard.push((node, name.to_string()));
        }
        Ok(())
    }
}
