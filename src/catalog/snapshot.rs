//! The content record store: an immutable, in-memory snapshot of every
//! published directory entry, loaded once per process.
//!
//! All operations are synchronous reads over the snapshot; nothing here
//! mutates state after construction. A fresh snapshot is picked up only by
//! constructing a new catalog (in practice, restarting the process).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;

use crate::catalog::card::StoreCardData;
use crate::catalog::dataset::load_dataset;
use crate::catalog::types::{AppStore, Category, Platform, RatingDimension};

/// How many entries the featured rail shows.
pub const FEATURED_LIMIT: usize = 6;

/// How many sibling entries a detail page suggests.
pub const RELATED_LIMIT: usize = 4;

/// Floor applied when a minimum-rating listing does not specify one.
pub const DEFAULT_MIN_RATING: u8 = 4;

/// Default cap for top-rated listings.
pub const DEFAULT_TOP_RATED_LIMIT: usize = 20;

/// Featured entries without an explicit order sort after ordered ones.
const UNORDERED_FEATURED: u32 = 99;

/// The categories grouped under the AI landing view.
const AI_CATEGORIES: [Category; 4] = [
    Category::AiAssistants,
    Category::AiCopilots,
    Category::AiAgents,
    Category::AiDeveloper,
];

/// Boolean capabilities a listing can be narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Api,
    Sdk,
    InAppPurchases,
    Subscriptions,
    BetaTesting,
    AnalyticsDashboard,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Api => "api",
            Capability::Sdk => "sdk",
            Capability::InAppPurchases => "in-app-purchases",
            Capability::Subscriptions => "subscriptions",
            Capability::BetaTesting => "beta-testing",
            Capability::AnalyticsDashboard => "analytics-dashboard",
        }
    }

    fn matches(&self, store: &AppStore) -> bool {
        match self {
            Capability::Api => store.technical.has_api,
            Capability::Sdk => store.technical.has_sdk,
            Capability::InAppPurchases => store.technical.supports_in_app_purchases,
            Capability::Subscriptions => store.technical.supports_subscriptions,
            Capability::BetaTesting => store.features.has_beta_testing,
            Capability::AnalyticsDashboard => store.features.has_analytics_dashboard,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        [
            Capability::Api,
            Capability::Sdk,
            Capability::InAppPurchases,
            Capability::Subscriptions,
            Capability::BetaTesting,
            Capability::AnalyticsDashboard,
        ]
        .into_iter()
        .find(|c| c.as_str() == s)
        .ok_or_else(|| anyhow::anyhow!("unknown capability '{s}'"))
    }
}

/// Immutable snapshot of the published directory.
#[derive(Debug)]
pub struct StoreCatalog {
    stores: Vec<AppStore>,
}

impl StoreCatalog {
    /// Wrap an already-validated record set, preserving its order.
    pub fn new(stores: Vec<AppStore>) -> Self {
        Self { stores }
    }

    /// Load the snapshot from a dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(load_dataset(path)?))
    }

    /// The full snapshot, in dataset order.
    pub fn all(&self) -> &[AppStore] {
        &self.stores
    }

    /// Exact, case-sensitive lookup by slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&AppStore> {
        self.stores.iter().find(|s| s.slug == slug)
    }

    /// Every slug, in dataset order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.stores.iter().map(|s| s.slug.as_str())
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Sum of the known app counts across the directory.
    pub fn total_app_count(&self) -> u64 {
        self.stores
            .iter()
            .filter_map(|s| s.metrics.app_count)
            .sum()
    }

    /// The featured rail: featured entries by their explicit order
    /// (unordered ones last), capped at [`FEATURED_LIMIT`].
    pub fn featured(&self) -> Vec<StoreCardData> {
        let mut featured: Vec<&AppStore> = self
            .stores
            .iter()
            .filter(|s| s.metadata.featured)
            .collect();
        featured.sort_by_key(|s| s.metadata.featured_order.unwrap_or(UNORDERED_FEATURED));
        featured
            .into_iter()
            .take(FEATURED_LIMIT)
            .map(AppStore::to_card)
            .collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<StoreCardData> {
        self.cards(|s| s.category == category)
    }

    pub fn by_platform(&self, platform: Platform) -> Vec<StoreCardData> {
        self.cards(|s| s.platforms.contains(&platform))
    }

    pub fn by_category_and_platform(
        &self,
        category: Category,
        platform: Platform,
    ) -> Vec<StoreCardData> {
        self.cards(|s| s.category == category && s.platforms.contains(&platform))
    }

    /// Entries in any of the AI categories, featured-order first.
    pub fn ai_stores(&self) -> Vec<StoreCardData> {
        let mut stores: Vec<&AppStore> = self
            .stores
            .iter()
            .filter(|s| AI_CATEGORIES.contains(&s.category))
            .collect();
        stores.sort_by_key(|s| s.metadata.featured_order.unwrap_or(UNORDERED_FEATURED));
        stores.into_iter().map(AppStore::to_card).collect()
    }

    /// Sibling suggestions for a detail page: the entry's explicit
    /// `relatedStores` list when present, otherwise entries sharing its
    /// category or a platform, capped at [`RELATED_LIMIT`].
    pub fn related_to(&self, store: &AppStore) -> Vec<StoreCardData> {
        if let Some(related) = store
            .related_stores
            .as_ref()
            .filter(|slugs| !slugs.is_empty())
        {
            return self.cards(|s| related.iter().any(|slug| *slug == s.slug));
        }

        self.stores
            .iter()
            .filter(|s| s.slug != store.slug)
            .filter(|s| {
                s.category == store.category
                    || s.platforms.iter().any(|p| store.platforms.contains(p))
            })
            .take(RELATED_LIMIT)
            .map(AppStore::to_card)
            .collect()
    }

    /// Entries with no registration fee (a missing fee counts as free).
    pub fn free_to_publish(&self) -> Vec<StoreCardData> {
        self.cards(|s| s.fees.is_free_to_publish())
    }

    /// Entries whose headline commission is at or below `max_percentage`.
    /// Entries without pricing data are excluded, not assumed cheap.
    pub fn low_commission(&self, max_percentage: f64) -> Vec<StoreCardData> {
        self.cards(|s| {
            s.fees
                .first_commission()
                .is_some_and(|rate| rate <= max_percentage)
        })
    }

    /// Entries whose headline commission is exactly zero.
    pub fn no_commission(&self) -> Vec<StoreCardData> {
        self.cards(|s| s.fees.first_commission() == Some(0.0))
    }

    pub fn with_capability(&self, capability: Capability) -> Vec<StoreCardData> {
        self.cards(|s| capability.matches(s))
    }

    /// Entries rated at least `floor` on `dimension`, best first (ties by
    /// name). Unrated entries never qualify.
    pub fn by_min_rating(&self, dimension: RatingDimension, floor: u8) -> Vec<StoreCardData> {
        let mut stores: Vec<&AppStore> = self
            .stores
            .iter()
            .filter(|s| s.rating(dimension).is_some_and(|v| v >= floor))
            .collect();
        stores.sort_by(|a, b| {
            b.rating(dimension)
                .cmp(&a.rating(dimension))
                .then_with(|| a.name.cmp(&b.name))
        });
        stores.into_iter().map(AppStore::to_card).collect()
    }

    /// The "best of" ranking for one dimension: every rated entry, best
    /// first (ties by name), capped at `limit`.
    pub fn top_rated(&self, dimension: RatingDimension, limit: usize) -> Vec<StoreCardData> {
        let mut stores: Vec<&AppStore> = self
            .stores
            .iter()
            .filter(|s| s.rating(dimension).is_some())
            .collect();
        stores.sort_by(|a, b| {
            b.rating(dimension)
                .cmp(&a.rating(dimension))
                .then_with(|| a.name.cmp(&b.name))
        });
        stores
            .into_iter()
            .take(limit)
            .map(AppStore::to_card)
            .collect()
    }

    fn cards<F>(&self, predicate: F) -> Vec<StoreCardData>
    where
        F: Fn(&AppStore) -> bool,
    {
        self.stores
            .iter()
            .filter(|s| predicate(s))
            .map(AppStore::to_card)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::store;

    fn catalog() -> StoreCatalog {
        let mut alpha = store("alpha", "Alpha Store", Category::Gaming);
        alpha.metadata.featured = true;
        alpha.metadata.featured_order = Some(2);
        alpha.ratings.as_mut().unwrap().commission = Some(4);

        let mut beta = store("beta", "Beta Store", Category::Gaming);
        beta.platforms = vec![Platform::Ios];
        beta.metadata.featured = true;
        beta.metadata.featured_order = Some(1);
        beta.ratings.as_mut().unwrap().stability = Some(3);

        let mut gamma = store("gamma", "Gamma Market", Category::Official);
        gamma.platforms = vec![Platform::Web];
        gamma.technical.has_api = true;
        gamma.metrics.app_count = Some(500);
        gamma.ratings = None;

        StoreCatalog::new(vec![alpha, beta, gamma])
    }

    #[test]
    fn every_slug_resolves_to_its_entry() {
        let catalog = catalog();
        for slug in catalog.slugs().map(str::to_string).collect::<Vec<_>>() {
            assert_eq!(catalog.get_by_slug(&slug).unwrap().slug, slug);
        }
        assert!(catalog.get_by_slug("missing").is_none());
    }

    #[test]
    fn slug_lookup_is_case_sensitive() {
        let catalog = catalog();
        assert!(catalog.get_by_slug("Alpha").is_none());
    }

    #[test]
    fn slugs_preserve_dataset_order() {
        let catalog = catalog();
        let slugs: Vec<&str> = catalog.slugs().collect();
        assert_eq!(slugs, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn featured_respects_explicit_order() {
        let catalog = catalog();
        let featured = catalog.featured();
        let slugs: Vec<&str> = featured.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["beta", "alpha"]);
    }

    #[test]
    fn category_and_platform_views_intersect() {
        let catalog = catalog();
        assert_eq!(catalog.by_category(Category::Gaming).len(), 2);
        assert_eq!(catalog.by_platform(Platform::Android).len(), 1);
        let both = catalog.by_category_and_platform(Category::Gaming, Platform::Android);
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].slug, "alpha");
    }

    #[test]
    fn related_falls_back_to_category_and_platform_overlap() {
        let catalog = catalog();
        let alpha = catalog.get_by_slug("alpha").unwrap();
        let related = catalog.related_to(alpha);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug, "beta");
    }

    #[test]
    fn related_prefers_explicit_list() {
        let mut alpha = store("alpha", "Alpha Store", Category::Gaming);
        alpha.related_stores = Some(vec!["gamma".to_string()]);
        let gamma = store("gamma", "Gamma Market", Category::Official);
        let catalog = StoreCatalog::new(vec![alpha, gamma]);

        let alpha = catalog.get_by_slug("alpha").unwrap();
        let related = catalog.related_to(alpha);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug, "gamma");
    }

    #[test]
    fn min_rating_skips_unrated_entries() {
        let catalog = catalog();
        let rated = catalog.by_min_rating(RatingDimension::Stability, 3);
        let slugs: Vec<&str> = rated.iter().map(|c| c.slug.as_str()).collect();
        // alpha carries the fixture's stability 5, beta was set to 3,
        // gamma has no ratings at all.
        assert_eq!(slugs, ["alpha", "beta"]);
    }

    #[test]
    fn total_app_count_ignores_missing_metrics() {
        let catalog = catalog();
        assert_eq!(catalog.total_app_count(), 2_500);
    }

    #[test]
    fn commission_views_need_pricing_data() {
        let mut cheap = store("cheap", "Cheap Market", Category::ThirdParty);
        cheap.fees.commission_tiers[0].percentage = 12.0;
        let mut free = store("free", "Free Market", Category::OpenSource);
        free.fees.commission_tiers[0].percentage = 0.0;
        let mut unpriced = store("unpriced", "Unpriced Market", Category::ThirdParty);
        unpriced.fees.commission_tiers.clear();
        let catalog = StoreCatalog::new(vec![cheap, free, unpriced]);

        let low: Vec<String> = catalog
            .low_commission(15.0)
            .into_iter()
            .map(|c| c.slug)
            .collect();
        assert_eq!(low, ["cheap", "free"]);

        // The unpriced entry appears in neither commission view.
        let zero: Vec<String> = catalog.no_commission().into_iter().map(|c| c.slug).collect();
        assert_eq!(zero, ["free"]);

        // Registration-fee status is independent of commission tiers.
        assert_eq!(catalog.free_to_publish().len(), 3);
    }

    #[test]
    fn ai_view_spans_the_ai_categories() {
        let mut assistants = store("assist", "Assist Hub", Category::AiAssistants);
        assistants.metadata.featured_order = Some(2);
        let mut agents = store("agents", "Agent Market", Category::AiAgents);
        agents.metadata.featured_order = Some(1);
        let gaming = store("gaming", "Game Hub", Category::Gaming);
        let catalog = StoreCatalog::new(vec![assistants, agents, gaming]);

        let ai: Vec<String> = catalog.ai_stores().into_iter().map(|c| c.slug).collect();
        assert_eq!(ai, ["agents", "assist"]);
    }

    #[test]
    fn capability_views_check_the_right_flag() {
        let catalog = catalog();
        let with_api = catalog.with_capability(Capability::Api);
        assert_eq!(with_api.len(), 1);
        assert_eq!(with_api[0].slug, "gamma");
    }

    #[test]
    fn capability_identifiers_parse_and_fail_closed() {
        assert_eq!(
            "beta-testing".parse::<Capability>().unwrap(),
            Capability::BetaTesting
        );
        assert!("telemetry".parse::<Capability>().is_err());
    }
}
