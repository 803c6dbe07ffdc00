use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::catalog::StoreCatalog;
use crate::catalog::tools::{
    CatalogTools, CompareStoresParams, GetStoreParams, RelatedStoresParams,
};
use crate::query::tools::{BrowseStoresParams, QueryTools, TopRatedStoresParams};
use crate::reference::{
    CATEGORIES, ListCategoriesOutput, ListPlatformsOutput, ListRatingDimensionsOutput, PLATFORMS,
    RATING_DIMENSIONS,
};
use crate::search::SearchEngine;
use crate::search::tools::{SearchStoresParams, SearchSuggestionsParams, SearchTools};

/// The directory service: one immutable catalog snapshot behind the full
/// set of browse, compare, ranking, and search tools.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    catalog_tools: CatalogTools,
    query_tools: QueryTools,
    search_tools: SearchTools,
    tool_router: ToolRouter<Self>,
}

impl DirectoryService {
    /// Load the dataset and wire up the tools. The snapshot is read once;
    /// a new dataset is picked up by restarting the process.
    pub fn new(data_file: &Path) -> Result<Self> {
        let catalog = Arc::new(StoreCatalog::load(data_file)?);
        Ok(Self::from_catalog(catalog))
    }

    /// Wire up the tools over an already-loaded snapshot.
    pub fn from_catalog(catalog: Arc<StoreCatalog>) -> Self {
        let engine = Arc::new(SearchEngine::new(catalog.clone()));
        Self {
            catalog_tools: CatalogTools::new(catalog.clone()),
            query_tools: QueryTools::new(catalog),
            search_tools: SearchTools::new(engine),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl DirectoryService {
    // Catalog tools
    #[tool(
        description = "Get the full directory record for one app store by its slug. Includes fees, commission tiers, technical capabilities, submission process, ratings, pros/cons, and editorial content. Use list_store_slugs or search_stores to find slugs."
    )]
    pub async fn get_store(&self, params: Parameters<GetStoreParams>) -> String {
        self.catalog_tools.get_store(params.0)
    }

    #[tool(
        description = "List every store slug in the directory, in dataset order. Slugs are the stable keys for get_store, compare_stores, and get_related_stores."
    )]
    pub async fn list_store_slugs(&self) -> String {
        self.catalog_tools.list_store_slugs()
    }

    #[tool(
        description = "Get the featured stores rail: editorially featured stores in their curated order, capped at six."
    )]
    pub async fn get_featured_stores(&self) -> String {
        self.catalog_tools.get_featured_stores()
    }

    #[tool(
        description = "Get sibling suggestions for one store: its curated related list when present, otherwise stores sharing its category or a platform."
    )]
    pub async fn get_related_stores(&self, params: Parameters<RelatedStoresParams>) -> String {
        self.catalog_tools.get_related_stores(params.0)
    }

    #[tool(
        description = "Fetch full records for several stores at once for a side-by-side comparison of fees, capabilities, and ratings. Unknown slugs are reported under 'missing' rather than failing the comparison."
    )]
    pub async fn compare_stores(&self, params: Parameters<CompareStoresParams>) -> String {
        self.catalog_tools.compare_stores(params.0)
    }

    #[tool(
        description = "Headline numbers for the directory: store count, total listed apps, featured count, and per-category counts."
    )]
    pub async fn get_directory_stats(&self) -> String {
        self.catalog_tools.get_directory_stats()
    }

    // Query tools
    #[tool(
        description = "Browse the directory with filters and ordering. Filters combine with AND (category and platform lists OR within themselves); unknown filter values match nothing. Sort options: name-asc, name-desc, app-count-desc, commission-asc, featured (default), rating-overall-desc, rating-<dimension>-desc. Returns card-sized records with pagination."
    )]
    pub async fn browse_stores(&self, params: Parameters<BrowseStoresParams>) -> String {
        self.query_tools.browse_stores(params.0)
    }

    #[tool(
        description = "The 'best of' ranking for one rating dimension (e.g. commission, stability, developerSupport): every store rated on it, best first. Use list_rating_dimensions for the valid dimensions."
    )]
    pub async fn top_rated_stores(&self, params: Parameters<TopRatedStoresParams>) -> String {
        self.query_tools.top_rated_stores(params.0)
    }

    // Search tools
    #[tool(
        description = "Fuzzy search across store names, taglines, descriptions, company names, categories, and platforms. Tolerates small typos; exact matches rank first. Results carry per-field match spans for highlighting and can be narrowed by category or platform."
    )]
    pub async fn search_stores(&self, params: Parameters<SearchStoresParams>) -> String {
        self.search_tools.search_stores(params.0)
    }

    #[tool(description = "Type-ahead store name suggestions for a partial query.")]
    pub async fn search_suggestions(&self, params: Parameters<SearchSuggestionsParams>) -> String {
        self.search_tools.search_suggestions(params.0)
    }

    // Reference data
    #[tool(
        description = "List the fixed store categories with their display names and descriptions."
    )]
    pub async fn list_categories(&self) -> String {
        ListCategoriesOutput {
            categories: &CATEGORIES,
        }
        .to_json()
    }

    #[tool(description = "List the fixed platforms with their display names.")]
    pub async fn list_platforms(&self) -> String {
        ListPlatformsOutput {
            platforms: &PLATFORMS,
        }
        .to_json()
    }

    #[tool(
        description = "List the nine rating dimensions (1-5 scale) with their display names and descriptions."
    )]
    pub async fn list_rating_dimensions(&self) -> String {
        ListRatingDimensionsOutput {
            dimensions: &RATING_DIMENSIONS,
        }
        .to_json()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for DirectoryService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "appstores-mcp".to_string(),
                version: "0.1.0".to_string(),
            },
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            instructions: Some(
                "MCP server for the appstores.dev directory of app distribution marketplaces. Use browse_stores to filter by category, platform, capabilities, fees, or minimum rating and to order the results; use search_stores for free-text lookup when you only know part of a name. get_store returns the full record for one slug, compare_stores puts several records side by side, and top_rated_stores ranks stores on one rating dimension. list_categories, list_platforms, and list_rating_dimensions enumerate the valid filter values.".to_string(),
            ),
            ..Default::default()
        }
    }
}
