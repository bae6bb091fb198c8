//! Role- and text-scoped recursive search over an accessibility subtree.
//!
//! Both variants perform a single pre-order traversal of the root's
//! descendants (the root itself is never matched), assigning each child a
//! 0-based sibling index among same-role siblings under its parent and a
//! full dotted path. Paths use the same `Role[Index]` filter-then-index rule
//! as [`crate::query::resolve`], so a printed path resolves back to the
//! matched node from the same root.

use std::collections::HashMap;

use crate::element::{ElementHandle, NodeId, UiTree, attr};
use crate::format::format_value;

/// One search hit: the matched node and its dotted path relative to the
/// search root. Transient output; paths are only as durable as the graph
/// shape they were observed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub node: NodeId,
    pub path: String,
}

/// Find all descendants whose role equals `role` exactly (case-sensitive).
pub fn find_by_role<T: UiTree + ?Sized>(tree: &T, root: NodeId, role: &str) -> Vec<SearchResult> {
    let mut matches = Vec::new();
    walk(tree, root, "", &mut matches, &|child| child.role() == role);
    matches
}

/// Find all descendants whose formatted value attribute or label equals
/// `text`, compared case-insensitively.
///
/// The label consulted here uses the precedence description, title, explicit
/// label attribute; the identifier is deliberately not part of the match
/// surface, unlike the display label used for dump annotations.
pub fn find_by_text<T: UiTree + ?Sized>(tree: &T, root: NodeId, text: &str) -> Vec<SearchResult> {
    let needle = text.to_lowercase();
    let mut matches = Vec::new();
    walk(tree, root, "", &mut matches, &|child| {
        if format_value(&child.value()).to_lowercase() == needle {
            return true;
        }
        search_label(child).is_some_and(|label| label.to_lowercase() == needle)
    });
    matches
}

fn search_label<T: UiTree + ?Sized>(element: ElementHandle<'_, T>) -> Option<String> {
    [attr::DESCRIPTION, attr::TITLE, attr::LABEL]
        .iter()
        .find_map(|name| element.text_attribute(name))
}

fn walk<T, F>(
    tree: &T,
    parent: NodeId,
    prefix: &str,
    matches: &mut Vec<SearchResult>,
    predicate: &F,
) where
    T: UiTree + ?Sized,
    F: Fn(ElementHandle<'_, T>) -> bool,
{
    let Some(children) = tree.children(parent) else {
        return;
    };

    // Per-role sibling counters are parent-local and discarded once this
    // child enumeration finishes.
    let mut role_counts: HashMap<String, usize> = HashMap::new();

    for child_id in children {
        let child = ElementHandle::new(tree, child_id);
        let role = child.role();
        let index = *role_counts
            .entry(role.clone())
            .and_modify(|count| *count += 1)
            .or_insert(0);

        let path = if prefix.is_empty() {
            format!("{role}[{index}]")
        } else {
            format!("{prefix}.{role}[{index}]")
        };

        if predicate(child) {
            matches.push(SearchResult {
                node: child_id,
                path: path.clone(),
            });
        }

        walk(tree, child_id, &path, matches, predicate);
    }
}
