//! Core data structures shared across the addressing and inspection engine.
//!
//! These strongly-typed models provide a shared vocabulary for attribute
//! payloads flowing between the external accessibility graph, the formatter,
//! and the search and tree-dump surfaces.

pub mod attribute;

pub use attribute::AttributeValue;
