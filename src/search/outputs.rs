//! Output types for search tools
//!
//! These types are used as the return values from search tool methods.
//! They are serialized to JSON strings for the MCP protocol, and can be
//! deserialized in tests for type-safe validation.

use serde::{Deserialize, Serialize};

use crate::search::engine::StoreSearchResult;

/// Output from the search_stores operation.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchStoresOutput {
    pub results: Vec<StoreSearchResult>,
    pub query: String,
    pub total_results: usize,
}

impl SearchStoresOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }

    /// Check if there are any results
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

/// Output from the search_suggestions operation.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchSuggestionsOutput {
    pub suggestions: Vec<String>,
    pub query: String,
}

impl SearchSuggestionsOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize error"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::engine::{SearchField, SearchMatch};

    #[test]
    fn search_output_round_trips_with_flattened_cards() {
        use crate::catalog::test_fixtures::store;
        use crate::catalog::types::Category;

        let card = store("alpha", "Alpha Store", Category::Gaming).to_card();
        let output = SearchStoresOutput {
            results: vec![StoreSearchResult {
                card,
                score: 400.0,
                matches: vec![SearchMatch {
                    field: SearchField::Name,
                    value: "Alpha Store".to_string(),
                    indices: vec![(0, 4)],
                }],
            }],
            query: "alpha".to_string(),
            total_results: 1,
        };

        assert!(output.has_results());
        let json = output.to_json();
        // Flattened card fields sit beside the score.
        assert!(json.contains(r#""slug":"alpha""#));
        assert!(json.contains(r#""field":"name""#));

        let deserialized: SearchStoresOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output, deserialized);
    }

    #[test]
    fn suggestions_output_round_trips() {
        let output = SearchSuggestionsOutput {
            suggestions: vec!["Alpha Store".to_string()],
            query: "alp".to_string(),
        };
        let deserialized: SearchSuggestionsOutput =
            serde_json::from_str(&output.to_json()).unwrap();
        assert_eq!(output, deserialized);
    }
}
