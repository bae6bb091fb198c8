//! Depth-bounded indented dumps of an accessibility subtree.

use crate::element::{ElementHandle, NodeId, UiTree};

/// Indent marker repeated once per depth level.
pub const DEFAULT_INDENT_MARKER: &str = "-- ";

/// Pre-order, depth-bounded dump of the subtree rooted at `node`.
///
/// The given node sits at depth 0; nodes deeper than `max_depth` are not
/// visited at all. Each visited node contributes one line: the indent marker
/// repeated `depth` times, the role, and the value/label annotation when
/// either part is non-empty.
pub fn format_tree<T: UiTree + ?Sized>(tree: &T, node: NodeId, max_depth: usize) -> String {
    format_tree_with(tree, node, max_depth, DEFAULT_INDENT_MARKER)
}

/// [`format_tree`] with a caller-supplied indent marker.
pub fn format_tree_with<T: UiTree + ?Sized>(
    tree: &T,
    node: NodeId,
    max_depth: usize,
    indent_marker: &str,
) -> String {
    let mut out = String::new();
    write_node(
        ElementHandle::new(tree, node),
        0,
        max_depth,
        indent_marker,
        &mut out,
    );
    out
}

fn write_node<T: UiTree + ?Sized>(
    element: ElementHandle<'_, T>,
    depth: usize,
    max_depth: usize,
    indent_marker: &str,
    out: &mut String,
) {
    if depth > max_depth {
        return;
    }

    out.push_str(&indent_marker.repeat(depth));
    out.push_str(&element.role());
    out.push_str(&element.annotation());
    out.push('\n');

    if let Some(children) = element.children() {
        for child in children {
            write_node(child, depth + 1, max_depth, indent_marker, out);
        }
    }
}
