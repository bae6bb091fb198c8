//! Path grammar and query resolution over the external graph.
//!
//! A query addresses one descendant of a caller-supplied root through a
//! dot-separated sequence of `Role[Index]` components. Resolution is strictly
//! left-to-right: each component narrows the current node to exactly one
//! child, and a failed step aborts the whole resolution with no partial
//! result. Because the graph is live, resolving the same query twice may
//! observe different shapes; no consistency is promised across calls.

use crate::element::{AxError, NodeId, UiTree};

/// One parsed `Role[Index]` query component.
///
/// Constructed only by [`parse_component`], so a held value is known to match
/// the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathComponent {
    pub role: String,
    pub index: usize,
}

/// Parse one query component of the form `Role[Index]`.
///
/// Grammar: one or more ASCII letters, `[`, one or more decimal digits, `]`,
/// end of input. Any deviation (empty role, non-numeric index, missing
/// brackets, surrounding whitespace, trailing text) is a miss, not an error.
pub fn parse_component(component: &str) -> Option<PathComponent> {
    let role_len = component
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if role_len == 0 {
        return None;
    }

    let rest = component[role_len..].strip_prefix('[')?;
    let digit_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_len == 0 {
        return None;
    }

    let (digits, tail) = rest.split_at(digit_len);
    if tail != "]" {
        return None;
    }

    Some(PathComponent {
        role: component[..role_len].to_string(),
        index: digits.parse().ok()?,
    })
}

/// Resolve a dotted query against the graph, starting at `root`.
///
/// For each component the current node's children are read, filtered to those
/// sharing the component's role (original order preserved), and indexed by
/// the component's 0-based sibling index. Search output uses the same
/// filter-then-index rule, so any path printed by a search is resolvable here
/// as long as the graph has not mutated in between.
pub fn resolve<T: UiTree + ?Sized>(tree: &T, root: NodeId, path: &str) -> Result<NodeId, AxError> {
    let mut current = root;

    for component in path.split('.') {
        let parsed = parse_component(component)
            .ok_or_else(|| AxError::InvalidComponent(component.to_string()))?;

        let children = tree
            .children(current)
            .ok_or_else(|| AxError::NoChildren(component.to_string()))?;

        let matching: Vec<NodeId> = children
            .into_iter()
            .filter(|child| tree.role(*child) == parsed.role)
            .collect();

        current = matching
            .get(parsed.index)
            .copied()
            .ok_or_else(|| AxError::IndexOutOfBounds {
                role: parsed.role,
                index: parsed.index,
            })?;
    }

    Ok(current)
}
