//! axquery — addressing and inspection engine for live accessibility trees.
//!
//! The engine resolves dot-separated, role-indexed path queries (for example
//! `AXWindow[0].AXGroup[1].AXButton[0]`) against an externally-owned UI
//! object graph, formats heterogeneous attribute payloads into canonical
//! display strings, produces depth-bounded indented tree dumps, and performs
//! role- or text-scoped recursive search with stable per-parent per-role
//! sibling indices.
//!
//! The graph is live and may mutate between any two reads: nodes are opaque
//! [`NodeId`] handles queried on demand through the [`UiTree`] trait, never
//! materialised or cached. Callers own timeout, retry, and cancellation
//! policy.
//!
//! ```
//! use axquery::fixture::StaticTree;
//! use axquery::{Inspector, resolve};
//! use serde_json::json;
//!
//! let tree = StaticTree::from_value(json!({
//!     "role": "AXWindow",
//!     "children": [
//!         { "role": "AXButton", "attributes": {
//!             "AXTitle": { "type": "text", "value": "Submit" },
//!         } },
//!     ],
//! }))
//! .unwrap();
//!
//! let button = resolve(&tree, tree.root(), "AXButton[0]").unwrap();
//! let inspector = Inspector::new(&tree);
//! assert_eq!(
//!     inspector.dump(button, Some(0)),
//!     "AXButton (label: \"Submit\")\n"
//! );
//! ```

pub mod config;
pub mod element;
pub mod fixture;
pub mod format;
pub mod inspector;
pub mod logging;
pub mod query;
pub mod search;
pub mod tree;
pub mod types;

pub use element::{AxError, ElementHandle, NodeId, UiTree};
pub use format::format_value;
pub use inspector::Inspector;
pub use query::{PathComponent, parse_component, resolve};
pub use search::{SearchResult, find_by_role, find_by_text};
pub use tree::{format_tree, format_tree_with};
pub use types::AttributeValue;
