//! # Search Module
//!
//! Fuzzy free-text search over the catalog snapshot: weighted multi-field
//! scoring with typo tolerance, ranked results, and per-field character
//! spans for highlighting.
//!
//! ## Key Components
//!
//! - [`engine`] - The scoring engine and its reset-capable index cache
//! - [`config`] - Weights, bonuses, and limits for search behavior
//! - [`tools`] - MCP tool implementations for search operations
//! - [`outputs`] - Output types for search operations

pub mod config;
pub mod engine;
pub mod outputs;
pub mod tools;

pub use engine::{SearchEngine, SearchField, SearchMatch, StoreSearchResult};
pub use tools::SearchTools;
