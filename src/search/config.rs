//! # Search Configuration Module
//!
//! Provides configuration constants for search scoring and querying.
//!
//! The field weights mirror the site's search behavior: the store name
//! dominates, the tagline is close behind, long-form text and company name
//! sit in the middle, and classification values contribute least.

/// Queries shorter than this (after trimming) return no results.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Relative weight of a match in the store name.
pub const WEIGHT_NAME: f32 = 2.0;

/// Relative weight of a match in the tagline.
pub const WEIGHT_TAGLINE: f32 = 1.5;

/// Relative weight of a match in the description.
pub const WEIGHT_DESCRIPTION: f32 = 1.0;

/// Relative weight of a match in the company name.
pub const WEIGHT_COMPANY: f32 = 1.0;

/// Relative weight of a match on the category value.
pub const WEIGHT_CATEGORY: f32 = 0.5;

/// Relative weight of a match on a platform value.
pub const WEIGHT_PLATFORM: f32 = 0.5;

/// Score contribution of an exact substring match at the start of a field.
pub const PREFIX_SCORE: f32 = 200.0;

/// Score contribution of an exact substring match elsewhere in a field.
pub const SUBSTRING_SCORE: f32 = 150.0;

/// Base contribution of a fuzzy (typo-tolerant) match.
pub const FUZZY_BASE_SCORE: f32 = 25.0;

/// Divisor scaling raw matcher scores into this range.
pub const FUZZY_SCORE_SCALE: f32 = 20.0;

/// Cap on the scaled fuzzy contribution. Together with
/// [`FUZZY_BASE_SCORE`] this stays below [`SUBSTRING_SCORE`], so an exact
/// substring match always outranks a purely fuzzy one within the same
/// field.
pub const FUZZY_SCORE_CAP: f32 = 50.0;

/// Default limit for search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Maximum allowed limit for search results.
pub const MAX_SEARCH_LIMIT: usize = 200;

/// Default number of search suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Maximum number of search suggestions.
pub const MAX_SUGGESTION_LIMIT: usize = 25;
