//! Output types for catalog tools
//!
//! These types are used as the return values from catalog tool methods.
//! They are serialized to JSON strings for the MCP protocol, and can be
//! deserialized in tests for type-safe validation.

use serde::{Deserialize, Serialize};

use crate::catalog::card::StoreCardData;
use crate::catalog::types::{AppStore, Category};

/// Output from the get_store operation.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status")]
pub enum GetStoreOutput {
    #[serde(rename = "found")]
    Found { store: Box<AppStore> },
    #[serde(rename = "not_found")]
    NotFound { slug: String },
}

impl GetStoreOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from the list_store_slugs operation.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListSlugsOutput {
    pub slugs: Vec<String>,
    pub total: usize,
}

impl ListSlugsOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from the get_featured_stores operation.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FeaturedStoresOutput {
    pub stores: Vec<StoreCardData>,
}

impl FeaturedStoresOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from the get_related_stores operation.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status")]
pub enum RelatedStoresOutput {
    #[serde(rename = "found")]
    Found {
        slug: String,
        related: Vec<StoreCardData>,
    },
    #[serde(rename = "not_found")]
    NotFound { slug: String },
}

impl RelatedStoresOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from the compare_stores operation. Slugs that resolved are
/// returned as full records, side by side; slugs that did not are listed
/// under `missing` rather than failing the comparison.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CompareStoresOutput {
    pub stores: Vec<AppStore>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

impl CompareStoresOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Per-category entry count.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Output from the get_directory_stats operation.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DirectoryStatsOutput {
    pub store_count: usize,
    pub total_app_count: u64,
    pub featured_count: usize,
    pub categories: Vec<CategoryCount>,
}

impl DirectoryStatsOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_store_not_found_serializes_with_status_tag() {
        let output = GetStoreOutput::NotFound {
            slug: "missing".to_string(),
        };
        let json = output.to_json();
        assert!(json.contains(r#""status":"not_found""#));
        let deserialized: GetStoreOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output, deserialized);
    }

    #[test]
    fn compare_output_omits_empty_missing_list() {
        let output = CompareStoresOutput {
            stores: vec![],
            missing: vec![],
        };
        assert!(!output.to_json().contains("missing"));
    }

    #[test]
    fn stats_output_round_trips() {
        let output = DirectoryStatsOutput {
            store_count: 3,
            total_app_count: 2_500,
            featured_count: 2,
            categories: vec![CategoryCount {
                category: Category::Gaming,
                count: 2,
            }],
        };
        let deserialized: DirectoryStatsOutput =
            serde_json::from_str(&output.to_json()).unwrap();
        assert_eq!(output, deserialized);
    }
}
