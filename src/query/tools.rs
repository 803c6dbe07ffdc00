//! MCP tool implementations for browse and ranking operations

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::snapshot::{DEFAULT_MIN_RATING, DEFAULT_TOP_RATED_LIMIT, StoreCatalog};
use crate::query::filter::{StoreFilters, filter_stores};
use crate::query::outputs::{BrowseStoresOutput, PaginationInfo, TopRatedStoresOutput};
use crate::query::sort::{SortOption, sort_cards};

/// Default page size for browse results.
const DEFAULT_BROWSE_LIMIT: usize = 100;

/// Upper bound on a requested page size.
const MAX_BROWSE_LIMIT: usize = 500;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BrowseStoresParams {
    #[schemars(description = "Restrict to these categories (e.g. 'gaming', 'open-source'). \
                              Unknown values match nothing.")]
    pub category: Option<Vec<String>>,
    #[schemars(description = "Restrict to stores serving at least one of these platforms \
                              (e.g. 'android', 'web'). Unknown values match nothing.")]
    pub platform: Option<Vec<String>>,
    #[schemars(description = "Require (or exclude) a developer API")]
    pub has_api: Option<bool>,
    #[schemars(description = "Require (or exclude) an SDK")]
    pub has_sdk: Option<bool>,
    #[schemars(description = "true: only stores free to publish on; false: only stores with \
                              a registration fee")]
    pub free_to_publish: Option<bool>,
    #[schemars(description = "Rating dimension for the minimum-rating criterion \
                              (e.g. 'stability', 'developerSupport')")]
    pub min_rating_dimension: Option<String>,
    #[schemars(description = "Minimum score (1-5) on the chosen dimension (default: 4)")]
    pub min_rating: Option<u8>,
    #[schemars(description = "Sort option: 'name-asc', 'name-desc', 'app-count-desc', \
                              'commission-asc', 'featured', 'rating-overall-desc', or \
                              'rating-<dimension>-desc'. Defaults to 'featured'.")]
    pub sort: Option<String>,
    #[schemars(description = "Maximum number of stores to return (default: 100)")]
    pub limit: Option<i64>,
    #[schemars(description = "Starting position for pagination (default: 0)")]
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TopRatedStoresParams {
    #[schemars(description = "Rating dimension to rank by (e.g. 'commission', 'stability')")]
    pub dimension: String,
    #[schemars(description = "Maximum number of stores to return (default: 20)")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct QueryTools {
    catalog: Arc<StoreCatalog>,
}

impl QueryTools {
    pub fn new(catalog: Arc<StoreCatalog>) -> Self {
        Self { catalog }
    }

    /// The browse path: filter, order, project, paginate.
    pub fn browse_stores(&self, params: BrowseStoresParams) -> String {
        let filters = StoreFilters::from_untrusted(
            params.category.as_deref(),
            params.platform.as_deref(),
            params.has_api,
            params.has_sdk,
            params.free_to_publish,
            params
                .min_rating_dimension
                .as_deref()
                .map(|dimension| (dimension, params.min_rating.unwrap_or(DEFAULT_MIN_RATING))),
        );
        let sort = params
            .sort
            .as_deref()
            .map_or(SortOption::DEFAULT, SortOption::parse_or_default);

        let matched: Vec<_> = filter_stores(self.catalog.all(), &filters)
            .into_iter()
            .map(|s| s.to_card())
            .collect();
        let ordered = sort_cards(&matched, sort);

        let limit = clamp_limit(params.limit, DEFAULT_BROWSE_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0) as usize;
        let total = ordered.len();
        let stores: Vec<_> = ordered.into_iter().skip(offset).take(limit).collect();
        tracing::debug!(total, returned = stores.len(), %sort, "browse_stores");

        BrowseStoresOutput {
            stores,
            pagination: PaginationInfo {
                total,
                limit,
                offset,
                has_more: offset + limit < total,
            },
            sort: sort.to_string(),
        }
        .to_json()
    }

    /// The "best of" ranking for one dimension. An unknown dimension is an
    /// empty, explicit outcome, not an error.
    pub fn top_rated_stores(&self, params: TopRatedStoresParams) -> String {
        let limit = clamp_limit(params.limit, DEFAULT_TOP_RATED_LIMIT);
        match params.dimension.parse() {
            Ok(dimension) => TopRatedStoresOutput::Ranked {
                dimension: params.dimension,
                stores: self.catalog.top_rated(dimension, limit),
            },
            Err(_) => TopRatedStoresOutput::UnknownDimension {
                dimension: params.dimension,
            },
        }
        .to_json()
    }
}

fn clamp_limit(requested: Option<i64>, default: usize) -> usize {
    match requested {
        Some(limit) if limit > 0 => (limit as usize).min(MAX_BROWSE_LIMIT),
        Some(_) => default,
        None => default,
    }
}
