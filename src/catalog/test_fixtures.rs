//! Shared builders for unit tests.

use chrono::NaiveDate;

use crate::catalog::types::{
    AppStore, Category, CommissionTier, CompanyInfo, GeographicInfo, MonetizationInfo, Platform,
    PricingModel, StoreFeatures, StoreFees, StoreMetadata, StoreMetrics, StoreRatings, StoreStatus,
    SubmissionInfo, TechnicalInfo,
};

/// A fully populated active entry with one 30% commission tier, an Android
/// platform listing, and a single stability rating. Tests override fields
/// as needed.
pub(crate) fn store(slug: &str, name: &str, category: Category) -> AppStore {
    AppStore {
        id: slug.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        tagline: format!("{name} tagline"),
        description: format!("{name} distributes apps to millions of users."),
        url: format!("https://example.com/{slug}"),
        logo: format!("/logos/{slug}.png"),
        screenshots: None,
        category,
        platforms: vec![Platform::Android],
        company: CompanyInfo {
            name: format!("{name} Inc."),
            headquarters: None,
            founded_year: Some(2008),
            website: None,
        },
        metrics: StoreMetrics {
            app_count: Some(1_000),
            ..Default::default()
        },
        fees: StoreFees {
            registration_fee: None,
            commission_tiers: vec![CommissionTier {
                percentage: 30.0,
                description: "Standard rate".to_string(),
                conditions: None,
            }],
            has_reduced_commission: None,
            reduced_commission_details: None,
        },
        technical: TechnicalInfo {
            has_api: false,
            api_documentation_url: None,
            has_sdk: false,
            sdk_platforms: None,
            sdk_documentation_url: None,
            supports_in_app_purchases: true,
            supports_subscriptions: false,
            supports_ads: false,
            supported_ad_networks: None,
        },
        monetization: MonetizationInfo {
            models: vec![PricingModel::Free, PricingModel::Freemium],
            ..Default::default()
        },
        submission: SubmissionInfo {
            guidelines_url: None,
            guidelines_summary: None,
            typical_review_time: None,
            has_automated_review: true,
            has_human_review: false,
            common_rejection_reasons: None,
            appeals_process: None,
            requires_approval: true,
        },
        geographic: GeographicInfo {
            available_regions: vec!["global".to_string()],
            ..Default::default()
        },
        features: StoreFeatures {
            has_editorial_content: false,
            has_app_bundles: false,
            has_pre_registration: false,
            has_beta_testing: false,
            has_analytics_dashboard: false,
            has_ab_testing: false,
            has_user_reviews: true,
            has_ratings: true,
        },
        metadata: StoreMetadata {
            featured: false,
            featured_order: None,
            verified: true,
            last_updated: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            date_added: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            status: StoreStatus::Active,
        },
        seo: None,
        ratings: Some(StoreRatings {
            stability: Some(5),
            ..Default::default()
        }),
        related_stores: None,
        pros: None,
        cons: None,
        content: None,
    }
}
