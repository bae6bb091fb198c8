//! High-level inspection facade.
//!
//! [`Inspector`] bundles a borrowed [`UiTree`] with configuration and a
//! structured logger, and exposes the engine's operations with error
//! sentinels rendered as descriptive plain text. Nothing here panics on a
//! failed read; a query against a vanished element produces a message, not a
//! fault.

use std::time::Instant;

use serde_json::json;

use crate::config::InspectorConfig;
use crate::element::{AxError, ElementHandle, NodeId, UiTree, action};
use crate::logging::InspectorLogger;
use crate::search::{self, SearchResult};
use crate::{query, tree};

/// Plain-text inspection surface over one external tree.
pub struct Inspector<'t, T: UiTree + ?Sized> {
    tree: &'t T,
    config: InspectorConfig,
    logger: InspectorLogger,
}

impl<'t, T: UiTree + ?Sized> Inspector<'t, T> {
    pub fn new(tree: &'t T) -> Self {
        Self::with_config(tree, InspectorConfig::default())
    }

    pub fn with_config(tree: &'t T, config: InspectorConfig) -> Self {
        let logger = InspectorLogger::new(config.verbose);
        Self {
            tree,
            config,
            logger,
        }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub fn logger(&self) -> &InspectorLogger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut InspectorLogger {
        &mut self.logger
    }

    /// Resolve a dotted query from `root`, returning the typed result.
    pub fn resolve(&self, root: NodeId, query: &str) -> Result<NodeId, AxError> {
        query::resolve(self.tree, root, query)
    }

    /// Indented dump of the subtree at `node`, bounded by `max_depth` (the
    /// configured default when `None`).
    pub fn dump(&self, node: NodeId, max_depth: Option<usize>) -> String {
        let max_depth = max_depth.unwrap_or(self.config.default_max_depth);
        tree::format_tree_with(self.tree, node, max_depth, &self.config.indent_marker)
    }

    /// Resolve `query` and dump the target's subtree; a failed resolution
    /// renders the error text instead.
    pub fn describe(&self, root: NodeId, query: &str, max_depth: Option<usize>) -> String {
        let start = Instant::now();
        match self.resolve(root, query) {
            Ok(node) => {
                let dump = self.dump(node, max_depth);
                self.logger.debug(
                    format!(
                        "described {query} in {}ms",
                        start.elapsed().as_millis()
                    ),
                    Some("inspector"),
                    None,
                );
                dump
            }
            Err(err) => err.to_string(),
        }
    }

    /// All descendants of `root` with the given role, one per line as
    /// `path (value: "V", label: "L")`.
    pub fn elements_of_role(&self, root: NodeId, role: &str) -> String {
        let start = Instant::now();
        let results = search::find_by_role(self.tree, root, role);
        self.logger.debug(
            format!(
                "role search found {} elements in {}ms",
                results.len(),
                start.elapsed().as_millis()
            ),
            Some("search"),
            Some(json!({ "role": role })),
        );

        if results.is_empty() {
            return format!("No elements with role {role} found");
        }
        self.render_results(&results)
    }

    /// All descendants of `root` matching the given text, one per line.
    pub fn elements_with_text(&self, root: NodeId, text: &str) -> String {
        let start = Instant::now();
        let results = search::find_by_text(self.tree, root, text);
        self.logger.debug(
            format!(
                "text search found {} elements in {}ms",
                results.len(),
                start.elapsed().as_millis()
            ),
            Some("search"),
            Some(json!({ "text": text })),
        );

        if results.is_empty() {
            return format!("No elements with text {text} found");
        }
        self.render_results(&results)
    }

    /// Resolve `query` and press the target element.
    ///
    /// The element must advertise the press action; otherwise it is reported
    /// as not clickable.
    pub fn press(&self, root: NodeId, query: &str) -> String {
        let node = match self.resolve(root, query) {
            Ok(node) => node,
            Err(err) => return err.to_string(),
        };

        let actions = match self.tree.actions(node) {
            Ok(actions) => actions,
            Err(err) => return err.to_string(),
        };
        if !actions.iter().any(|name| name == action::PRESS) {
            return "Element is not clickable".to_string();
        }

        let element = ElementHandle::new(self.tree, node);
        match self.tree.perform_action(node, action::PRESS) {
            Ok(()) => format!("Successfully clicked element: {}", element.role()),
            Err(err) => format!("Failed to click element: {err}"),
        }
    }

    fn render_results(&self, results: &[SearchResult]) -> String {
        results
            .iter()
            .map(|result| {
                let element = ElementHandle::new(self.tree, result.node);
                format!("{}{}", result.path, element.annotation())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
