//! Output types for query tools
//!
//! These types are used as the return values from query tool methods.
//! They are serialized to JSON strings for the MCP protocol, and can be
//! deserialized in tests for type-safe validation.

use serde::{Deserialize, Serialize};

use crate::catalog::card::StoreCardData;

/// Pagination information
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaginationInfo {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

/// Output from the browse_stores operation.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BrowseStoresOutput {
    pub stores: Vec<StoreCardData>,
    pub pagination: PaginationInfo,
    /// The ordering actually applied (the default when the requested one
    /// did not parse).
    pub sort: String,
}

impl BrowseStoresOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from the top_rated_stores operation.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status")]
pub enum TopRatedStoresOutput {
    #[serde(rename = "ranked")]
    Ranked {
        dimension: String,
        stores: Vec<StoreCardData>,
    },
    #[serde(rename = "unknown_dimension")]
    UnknownDimension { dimension: String },
}

impl TopRatedStoresOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}
