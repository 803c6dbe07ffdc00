//! MCP tool implementations for search operations

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::query::filter::StoreFilters;
use crate::search::config::{
    DEFAULT_SEARCH_LIMIT, DEFAULT_SUGGESTION_LIMIT, MAX_SEARCH_LIMIT, MAX_SUGGESTION_LIMIT,
};
use crate::search::engine::SearchEngine;
use crate::search::outputs::{SearchStoresOutput, SearchSuggestionsOutput};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchStoresParams {
    #[schemars(description = "Free-text search query. Queries shorter than 2 characters \
                              return no results.")]
    pub query: String,
    #[schemars(description = "Restrict results to these categories. Unknown values match \
                              nothing.")]
    pub category: Option<Vec<String>>,
    #[schemars(description = "Restrict results to stores serving at least one of these \
                              platforms. Unknown values match nothing.")]
    pub platform: Option<Vec<String>>,
    #[schemars(description = "Maximum number of results to return (default: 50)")]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchSuggestionsParams {
    #[schemars(description = "Partial query for type-ahead suggestions")]
    pub query: String,
    #[schemars(description = "Maximum number of suggestions to return (default: 5)")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct SearchTools {
    engine: Arc<SearchEngine>,
}

impl SearchTools {
    pub fn new(engine: Arc<SearchEngine>) -> Self {
        Self { engine }
    }

    /// Ranked fuzzy search, optionally intersected with browse criteria.
    pub fn search_stores(&self, params: SearchStoresParams) -> String {
        let filters = StoreFilters::from_untrusted(
            params.category.as_deref(),
            params.platform.as_deref(),
            None,
            None,
            None,
            None,
        );
        let limit = clamp(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);

        let mut results = self.engine.search_filtered(&params.query, &filters);
        let total_results = results.len();
        results.truncate(limit);
        tracing::debug!(query = %params.query, total_results, "search_stores");

        SearchStoresOutput {
            results,
            query: params.query,
            total_results,
        }
        .to_json()
    }

    /// Type-ahead: the names of the best matches.
    pub fn search_suggestions(&self, params: SearchSuggestionsParams) -> String {
        let limit = clamp(params.limit, DEFAULT_SUGGESTION_LIMIT, MAX_SUGGESTION_LIMIT);
        SearchSuggestionsOutput {
            suggestions: self.engine.suggestions(&params.query, limit),
            query: params.query,
        }
        .to_json()
    }
}

fn clamp(requested: Option<i64>, default: usize, max: usize) -> usize {
    match requested {
        Some(limit) if limit > 0 => (limit as usize).min(max),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::snapshot::StoreCatalog;
    use crate::catalog::test_fixtures::store;
    use crate::catalog::types::{Category, Platform};

    fn tools() -> SearchTools {
        let alpha = store("alpha", "Alpha Store", Category::Gaming);
        let mut beta = store("beta", "Beta Store", Category::Gaming);
        beta.platforms = vec![Platform::Ios];
        let catalog = Arc::new(StoreCatalog::new(vec![alpha, beta]));
        SearchTools::new(Arc::new(SearchEngine::new(catalog)))
    }

    #[test]
    fn search_returns_ranked_results() {
        let tools = tools();
        let response = tools.search_stores(SearchStoresParams {
            query: "alpha".to_string(),
            category: None,
            platform: None,
            limit: None,
        });
        let output: SearchStoresOutput = serde_json::from_str(&response).unwrap();
        assert!(output.has_results());
        assert_eq!(output.results[0].card.slug, "alpha");
    }

    #[test]
    fn short_queries_yield_an_empty_result_set() {
        let tools = tools();
        let response = tools.search_stores(SearchStoresParams {
            query: "a".to_string(),
            category: None,
            platform: None,
            limit: None,
        });
        let output: SearchStoresOutput = serde_json::from_str(&response).unwrap();
        assert!(!output.has_results());
        assert_eq!(output.total_results, 0);
    }

    #[test]
    fn platform_criteria_intersect_search_results() {
        let tools = tools();
        let response = tools.search_stores(SearchStoresParams {
            query: "store".to_string(),
            category: None,
            platform: Some(vec!["ios".to_string()]),
            limit: None,
        });
        let output: SearchStoresOutput = serde_json::from_str(&response).unwrap();
        assert_eq!(output.results.len(), 1);
        assert_eq!(output.results[0].card.slug, "beta");
    }

    #[test]
    fn suggestions_respect_the_limit() {
        let tools = tools();
        let response = tools.search_suggestions(SearchSuggestionsParams {
            query: "store".to_string(),
            limit: Some(1),
        });
        let output: SearchSuggestionsOutput = serde_json::from_str(&response).unwrap();
        assert_eq!(output.suggestions.len(), 1);
    }
}
