//! Card projection of a directory entry
//!
//! List views render a reduced "card" shape rather than the full record.
//! The projection is total and pure: it copies exactly the fields below and
//! nothing else, and missing optional source fields stay absent.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::types::{AppStore, Category, CommissionTier, Platform, StoreRatings};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardFees {
    #[serde(default)]
    pub commission_tiers: Vec<CommissionTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardMetadata {
    pub featured: bool,
    pub verified: bool,
}

/// The reduced view of an [`AppStore`] used by listing and search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreCardData {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub logo: String,
    pub category: Category,
    pub platforms: Vec<Platform>,
    pub metrics: CardMetrics,
    pub fees: CardFees,
    pub metadata: CardMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<StoreRatings>,
}

impl StoreCardData {
    /// Headline commission percentage; entries without pricing data are
    /// treated as worst case (100%) so they rank last.
    pub fn first_commission_or_worst(&self) -> f64 {
        self.fees
            .commission_tiers
            .first()
            .map_or(100.0, |t| t.percentage)
    }

    /// Overall rating: mean of the dimensions present, 0.0 if unrated.
    pub fn overall_rating(&self) -> f64 {
        self.ratings.as_ref().map_or(0.0, StoreRatings::overall)
    }
}

impl AppStore {
    /// Project this record to its card shape.
    pub fn to_card(&self) -> StoreCardData {
        StoreCardData {
            id: self.id.clone(),
            name: self.name.clone(),
            slug: self.slug.clone(),
            tagline: self.tagline.clone(),
            logo: self.logo.clone(),
            category: self.category,
            platforms: self.platforms.clone(),
            metrics: CardMetrics {
                app_count: self.metrics.app_count,
            },
            fees: CardFees {
                commission_tiers: self.fees.commission_tiers.clone(),
            },
            metadata: CardMetadata {
                featured: self.metadata.featured,
                verified: self.metadata.verified,
            },
            ratings: self.ratings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::store;

    #[test]
    fn projection_is_deterministic() {
        let entry = store("alpha-store", "Alpha Store", Category::Gaming);
        assert_eq!(entry.to_card(), entry.to_card());
    }

    #[test]
    fn projection_copies_only_card_fields() {
        let entry = store("alpha-store", "Alpha Store", Category::Gaming);
        let card = entry.to_card();
        let value = serde_json::to_value(&card).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "category", "fees", "id", "logo", "metadata", "metrics", "name", "platforms",
                "ratings", "slug", "tagline",
            ]
        );
    }

    #[test]
    fn absent_optionals_stay_absent() {
        let mut entry = store("beta-store", "Beta Store", Category::Official);
        entry.metrics.app_count = None;
        entry.ratings = None;
        let card = entry.to_card();
        assert_eq!(card.metrics.app_count, None);
        assert_eq!(card.ratings, None);

        let value = serde_json::to_value(&card).unwrap();
        assert!(value.get("ratings").is_none());
    }

    #[test]
    fn missing_commission_tiers_rank_as_worst_case() {
        let mut entry = store("gamma", "Gamma", Category::ThirdParty);
        entry.fees.commission_tiers.clear();
        assert_eq!(entry.to_card().first_commission_or_worst(), 100.0);
    }
}
