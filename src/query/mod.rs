//! # Query Module
//!
//! Filtering and ranking over the catalog snapshot. Both engines are pure
//! functions: filtering returns the subset satisfying every active
//! criterion, sorting returns a new totally ordered sequence. Criteria and
//! sort options parsed from untrusted query strings fail closed (filters)
//! or fall back to the default ordering (sorts).
//!
//! ## Key Components
//!
//! - [`filter`] - Predicate-based subsetting with fail-closed parsing
//! - [`sort`] - Total, stable orderings over store cards
//! - [`tools`] - MCP tool implementations for browse and ranking
//! - [`outputs`] - Output types for query operations

pub mod filter;
pub mod outputs;
pub mod sort;
pub mod tools;

pub use filter::{RatingFloor, StoreFilters, filter_stores};
pub use sort::{SortOption, sort_cards};
