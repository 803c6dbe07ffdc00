//! MCP tool implementations for catalog operations

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::outputs::{
    CategoryCount, CompareStoresOutput, DirectoryStatsOutput, FeaturedStoresOutput,
    GetStoreOutput, ListSlugsOutput, RelatedStoresOutput,
};
use crate::catalog::snapshot::StoreCatalog;
use crate::catalog::types::Category;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetStoreParams {
    #[schemars(description = "The store's URL-safe slug, e.g. 'google-play'")]
    pub slug: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RelatedStoresParams {
    #[schemars(description = "The store's URL-safe slug, e.g. 'google-play'")]
    pub slug: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CompareStoresParams {
    #[schemars(description = "Slugs of the stores to compare side by side (2 or more)")]
    pub slugs: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CatalogTools {
    catalog: Arc<StoreCatalog>,
}

impl CatalogTools {
    pub fn new(catalog: Arc<StoreCatalog>) -> Self {
        Self { catalog }
    }

    /// Point lookup of one full directory record. A miss is an expected
    /// outcome, not a failure.
    pub fn get_store(&self, params: GetStoreParams) -> String {
        match self.catalog.get_by_slug(&params.slug) {
            Some(store) => GetStoreOutput::Found {
                store: Box::new(store.clone()),
            },
            None => GetStoreOutput::NotFound { slug: params.slug },
        }
        .to_json()
    }

    /// Every slug in the directory, in dataset order.
    pub fn list_store_slugs(&self) -> String {
        let slugs: Vec<String> = self.catalog.slugs().map(str::to_string).collect();
        let total = slugs.len();
        ListSlugsOutput { slugs, total }.to_json()
    }

    /// The featured rail.
    pub fn get_featured_stores(&self) -> String {
        FeaturedStoresOutput {
            stores: self.catalog.featured(),
        }
        .to_json()
    }

    /// Sibling suggestions for one store.
    pub fn get_related_stores(&self, params: RelatedStoresParams) -> String {
        match self.catalog.get_by_slug(&params.slug) {
            Some(store) => RelatedStoresOutput::Found {
                slug: params.slug.clone(),
                related: self.catalog.related_to(store),
            },
            None => RelatedStoresOutput::NotFound { slug: params.slug },
        }
        .to_json()
    }

    /// Full records for a side-by-side comparison. Unknown slugs are
    /// reported, not fatal.
    pub fn compare_stores(&self, params: CompareStoresParams) -> String {
        let mut stores = Vec::new();
        let mut missing = Vec::new();
        for slug in params.slugs {
            match self.catalog.get_by_slug(&slug) {
                Some(store) => stores.push(store.clone()),
                None => missing.push(slug),
            }
        }
        CompareStoresOutput { stores, missing }.to_json()
    }

    /// Headline numbers for the directory.
    pub fn get_directory_stats(&self) -> String {
        let categories = Category::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                count: self
                    .catalog
                    .all()
                    .iter()
                    .filter(|s| s.category == category)
                    .count(),
            })
            .filter(|c| c.count > 0)
            .collect();

        DirectoryStatsOutput {
            store_count: self.catalog.len(),
            total_app_count: self.catalog.total_app_count(),
            featured_count: self
                .catalog
                .all()
                .iter()
                .filter(|s| s.metadata.featured)
                .count(),
            categories,
        }
        .to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::store;

    fn tools() -> CatalogTools {
        let mut alpha = store("alpha", "Alpha Store", Category::Gaming);
        alpha.metadata.featured = true;
        let beta = store("beta", "Beta Store", Category::Official);
        CatalogTools::new(Arc::new(StoreCatalog::new(vec![alpha, beta])))
    }

    #[test]
    fn get_store_reports_misses_as_not_found() {
        let tools = tools();
        let response = tools.get_store(GetStoreParams {
            slug: "nope".to_string(),
        });
        let output: GetStoreOutput = serde_json::from_str(&response).unwrap();
        assert_eq!(
            output,
            GetStoreOutput::NotFound {
                slug: "nope".to_string()
            }
        );
    }

    #[test]
    fn compare_splits_found_and_missing() {
        let tools = tools();
        let response = tools.compare_stores(CompareStoresParams {
            slugs: vec!["alpha".to_string(), "nope".to_string()],
        });
        let output: CompareStoresOutput = serde_json::from_str(&response).unwrap();
        assert_eq!(output.stores.len(), 1);
        assert_eq!(output.missing, vec!["nope".to_string()]);
    }

    #[test]
    fn stats_count_only_populated_categories() {
        let tools = tools();
        let response = tools.get_directory_stats();
        let output: DirectoryStatsOutput = serde_json::from_str(&response).unwrap();
        assert_eq!(output.store_count, 2);
        assert_eq!(output.featured_count, 1);
        assert_eq!(output.categories.len(), 2);
    }
}
