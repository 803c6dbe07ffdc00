//! Type definitions for the store directory data model
//!
//! Every record in the published dataset deserializes into [`AppStore`].
//! Optional source fields stay `Option` throughout so that "absent" and
//! "present but zero" remain distinguishable.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::{bool_from_anything, percent_from_anything};

/// The fixed set of store categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Official,
    Manufacturer,
    ThirdParty,
    Gaming,
    Enterprise,
    OpenSource,
    Regional,
    Specialty,
    AiAssistants,
    AiCopilots,
    AiAgents,
    AiDeveloper,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 12] = [
        Category::Official,
        Category::Manufacturer,
        Category::ThirdParty,
        Category::Gaming,
        Category::Enterprise,
        Category::OpenSource,
        Category::Regional,
        Category::Specialty,
        Category::AiAssistants,
        Category::AiCopilots,
        Category::AiAgents,
        Category::AiDeveloper,
    ];

    /// The URL-safe identifier, as it appears in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Official => "official",
            Category::Manufacturer => "manufacturer",
            Category::ThirdParty => "third-party",
            Category::Gaming => "gaming",
            Category::Enterprise => "enterprise",
            Category::OpenSource => "open-source",
            Category::Regional => "regional",
            Category::Specialty => "specialty",
            Category::AiAssistants => "ai-assistants",
            Category::AiCopilots => "ai-copilots",
            Category::AiAgents => "ai-agents",
            Category::AiDeveloper => "ai-developer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown category '{s}'"))
    }
}

/// The fixed set of platforms a store can distribute apps for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Ios,
    Android,
    Windows,
    Macos,
    Linux,
    Web,
    CrossPlatform,
}

impl Platform {
    /// All platforms, in display order.
    pub const ALL: [Platform; 7] = [
        Platform::Ios,
        Platform::Android,
        Platform::Windows,
        Platform::Macos,
        Platform::Linux,
        Platform::Web,
        Platform::CrossPlatform,
    ];

    /// The URL-safe identifier, as it appears in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Windows => "windows",
            Platform::Macos => "macos",
            Platform::Linux => "linux",
            Platform::Web => "web",
            Platform::CrossPlatform => "cross-platform",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown platform '{s}'"))
    }
}

/// Pricing models an app can use on a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PricingModel {
    Free,
    Paid,
    Freemium,
    Subscription,
    OneTime,
}

/// The nine editorial rating axes, each scored 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingDimension {
    Commission,
    ReviewProcess,
    Stability,
    DeveloperSupport,
    Discoverability,
    Competitiveness,
    EntryBarriers,
    TechnicalFreedom,
    Analytics,
}

impl RatingDimension {
    /// All dimensions, in display order.
    pub const ALL: [RatingDimension; 9] = [
        RatingDimension::Commission,
        RatingDimension::ReviewProcess,
        RatingDimension::Stability,
        RatingDimension::DeveloperSupport,
        RatingDimension::Discoverability,
        RatingDimension::Competitiveness,
        RatingDimension::EntryBarriers,
        RatingDimension::TechnicalFreedom,
        RatingDimension::Analytics,
    ];

    /// The camelCase identifier, as it appears in the dataset and in sort
    /// option strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingDimension::Commission => "commission",
            RatingDimension::ReviewProcess => "reviewProcess",
            RatingDimension::Stability => "stability",
            RatingDimension::DeveloperSupport => "developerSupport",
            RatingDimension::Discoverability => "discoverability",
            RatingDimension::Competitiveness => "competitiveness",
            RatingDimension::EntryBarriers => "entryBarriers",
            RatingDimension::TechnicalFreedom => "technicalFreedom",
            RatingDimension::Analytics => "analytics",
        }
    }
}

impl fmt::Display for RatingDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingDimension {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        RatingDimension::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown rating dimension '{s}'"))
    }
}

/// Publication status of a directory entry. Only `Active` entries are
/// eligible for the published dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Active,
    Deprecated,
    Beta,
}

/// Sparse editorial ratings, one optional 1-5 score per dimension.
///
/// `deny_unknown_fields` enforces that the dataset maps only onto the nine
/// defined dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoreRatings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_process: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_support: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discoverability: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitiveness: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_barriers: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_freedom: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<u8>,
}

impl StoreRatings {
    /// Score for one dimension, if rated.
    pub fn get(&self, dimension: RatingDimension) -> Option<u8> {
        match dimension {
            RatingDimension::Commission => self.commission,
            RatingDimension::ReviewProcess => self.review_process,
            RatingDimension::Stability => self.stability,
            RatingDimension::DeveloperSupport => self.developer_support,
            RatingDimension::Discoverability => self.discoverability,
            RatingDimension::Competitiveness => self.competitiveness,
            RatingDimension::EntryBarriers => self.entry_barriers,
            RatingDimension::TechnicalFreedom => self.technical_freedom,
            RatingDimension::Analytics => self.analytics,
        }
    }

    /// Iterate over the dimensions that carry a score.
    pub fn iter(&self) -> impl Iterator<Item = (RatingDimension, u8)> + '_ {
        RatingDimension::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|v| (d, v)))
    }

    /// Arithmetic mean over the dimensions present. Dimensions absent from
    /// the map are excluded from numerator and denominator; no score at all
    /// yields 0.0.
    pub fn overall(&self) -> f64 {
        let mut sum = 0u32;
        let mut count = 0u32;
        for (_, value) in self.iter() {
            sum += u32::from(value);
            count += 1;
        }
        if count == 0 {
            0.0
        } else {
            f64::from(sum) / f64::from(count)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// One commission rate and the conditions under which it applies. Tiers are
/// ordered; the first tier is the store's headline rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommissionTier {
    #[serde(deserialize_with = "percent_from_anything")]
    pub percentage: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FeeType {
    OneTime,
    Annual,
}

/// Developer registration fee. Absence means registration is free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFee {
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub fee_type: FeeType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreFees {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_fee: Option<RegistrationFee>,
    #[serde(default)]
    pub commission_tiers: Vec<CommissionTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_reduced_commission: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_commission_details: Option<String>,
}

impl StoreFees {
    /// Headline commission percentage: the first tier's rate.
    pub fn first_commission(&self) -> Option<f64> {
        self.commission_tiers.first().map(|t| t.percentage)
    }

    /// Whether publishing requires no registration fee. A missing fee is
    /// treated as free.
    pub fn is_free_to_publish(&self) -> bool {
        self.registration_fee
            .as_ref()
            .is_none_or(|fee| fee.amount == 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_count_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_count_last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_active_users: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_downloads: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_count: Option<u64>,
}

/// Technical capability flags. The boolean fields tolerate the loose
/// scalar forms the front-matter conversion emits ("yes", 1, "true").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalInfo {
    #[serde(deserialize_with = "bool_from_anything")]
    pub has_api: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_documentation_url: Option<String>,
    #[serde(deserialize_with = "bool_from_anything")]
    pub has_sdk: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_platforms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_documentation_url: Option<String>,
    #[serde(deserialize_with = "bool_from_anything")]
    pub supports_in_app_purchases: bool,
    #[serde(deserialize_with = "bool_from_anything")]
    pub supports_subscriptions: bool,
    #[serde(deserialize_with = "bool_from_anything")]
    pub supports_ads: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_ad_networks: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonetizationInfo {
    #[serde(default)]
    pub models: Vec<PricingModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_methods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_payout: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_frequency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidelines_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidelines_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_review_time: Option<String>,
    #[serde(deserialize_with = "bool_from_anything")]
    pub has_automated_review: bool,
    #[serde(deserialize_with = "bool_from_anything")]
    pub has_human_review: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_rejection_reasons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appeals_process: Option<String>,
    #[serde(deserialize_with = "bool_from_anything")]
    pub requires_approval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeographicInfo {
    #[serde(default)]
    pub available_regions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_regions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_stores: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreFeatures {
    #[serde(deserialize_with = "bool_from_anything")]
    pub has_editorial_content: bool,
    #[serde(deserialize_with = "bool_from_anything")]
    pub has_app_bundles: bool,
    #[serde(deserialize_with = "bool_from_anything")]
    pub has_pre_registration: bool,
    #[serde(deserialize_with = "bool_from_anything")]
    pub has_beta_testing: bool,
    #[serde(deserialize_with = "bool_from_anything")]
    pub has_analytics_dashboard: bool,
    #[serde(deserialize_with = "bool_from_anything", rename = "hasABTesting")]
    pub has_ab_testing: bool,
    #[serde(deserialize_with = "bool_from_anything")]
    pub has_user_reviews: bool,
    #[serde(deserialize_with = "bool_from_anything")]
    pub has_ratings: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreMetadata {
    #[serde(deserialize_with = "bool_from_anything")]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_order: Option<u32>,
    #[serde(deserialize_with = "bool_from_anything")]
    pub verified: bool,
    pub last_updated: NaiveDate,
    pub date_added: NaiveDate,
    pub status: StoreStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreSeo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// One app distribution marketplace: the full directory record.
///
/// Records are produced by the offline build step, pre-filtered to
/// `metadata.status == "active"` and sorted by name. `slug` is the only
/// externally addressable key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppStore {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub url: String,
    pub logo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<String>>,
    pub category: Category,
    pub platforms: Vec<Platform>,
    pub company: CompanyInfo,
    #[serde(default)]
    pub metrics: StoreMetrics,
    #[serde(default)]
    pub fees: StoreFees,
    pub technical: TechnicalInfo,
    #[serde(default)]
    pub monetization: MonetizationInfo,
    pub submission: SubmissionInfo,
    #[serde(default)]
    pub geographic: GeographicInfo,
    pub features: StoreFeatures,
    pub metadata: StoreMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<StoreSeo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<StoreRatings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_stores: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pros: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl AppStore {
    /// Score for one rating dimension, if the store is rated on it.
    pub fn rating(&self, dimension: RatingDimension) -> Option<u8> {
        self.ratings.as_ref().and_then(|r| r.get(dimension))
    }

    /// Overall rating: mean of the dimensions present, 0.0 if unrated.
    pub fn overall_rating(&self) -> f64 {
        self.ratings.as_ref().map_or(0.0, StoreRatings::overall)
    }
}

/// Validate a slug for use as an addressable key: non-empty, URL-safe,
/// no path separators or traversal sequences.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        bail!("empty slug");
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        bail!(
            "invalid slug '{}': only alphanumeric, dash, and underscore are allowed",
            slug
        );
    }
    Ok(())
}
