//! Static reference data for the fixed enumerations
//!
//! Display metadata for categories, platforms, and rating dimensions.
//! This is configuration data consumed by list views and landing pages;
//! the query core only depends on the enumerations themselves.

use serde::Serialize;

use crate::catalog::types::{Category, Platform, RatingDimension};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlatformInfo {
    pub id: Platform,
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RatingDimensionInfo {
    pub id: RatingDimension,
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: [CategoryInfo; 12] = [
    CategoryInfo {
        id: Category::Official,
        name: "Official Stores",
        description: "Platform-native app stores from OS makers like Apple and Google",
    },
    CategoryInfo {
        id: Category::Manufacturer,
        name: "Manufacturer Stores",
        description: "Device manufacturer app marketplaces like Samsung and Huawei",
    },
    CategoryInfo {
        id: Category::ThirdParty,
        name: "Third-Party Stores",
        description: "Independent app distribution platforms",
    },
    CategoryInfo {
        id: Category::Gaming,
        name: "Gaming Stores",
        description: "Platforms focused on game distribution",
    },
    CategoryInfo {
        id: Category::Enterprise,
        name: "Enterprise Stores",
        description: "Business-focused app distribution solutions",
    },
    CategoryInfo {
        id: Category::OpenSource,
        name: "Open Source Stores",
        description: "Platforms for free and open-source software",
    },
    CategoryInfo {
        id: Category::Regional,
        name: "Regional Stores",
        description: "Region-specific app marketplaces",
    },
    CategoryInfo {
        id: Category::Specialty,
        name: "Specialty Stores",
        description: "Niche or vertical-specific app platforms",
    },
    CategoryInfo {
        id: Category::AiAssistants,
        name: "AI Assistant Stores",
        description: "Marketplaces for custom GPTs, AI bots, and conversational AI characters",
    },
    CategoryInfo {
        id: Category::AiCopilots,
        name: "AI Copilot Stores",
        description: "Plugin and extension marketplaces for productivity AI copilots",
    },
    CategoryInfo {
        id: Category::AiAgents,
        name: "AI Agent Stores",
        description: "Marketplaces for autonomous AI agents that execute workflows",
    },
    CategoryInfo {
        id: Category::AiDeveloper,
        name: "AI Developer Stores",
        description: "Developer-focused platforms for AI tools, MCP servers, and model hosting",
    },
];

pub const PLATFORMS: [PlatformInfo; 7] = [
    PlatformInfo {
        id: Platform::Ios,
        name: "iOS",
    },
    PlatformInfo {
        id: Platform::Android,
        name: "Android",
    },
    PlatformInfo {
        id: Platform::Windows,
        name: "Windows",
    },
    PlatformInfo {
        id: Platform::Macos,
        name: "macOS",
    },
    PlatformInfo {
        id: Platform::Linux,
        name: "Linux",
    },
    PlatformInfo {
        id: Platform::Web,
        name: "Web",
    },
    PlatformInfo {
        id: Platform::CrossPlatform,
        name: "Cross-Platform",
    },
];

pub const RATING_DIMENSIONS: [RatingDimensionInfo; 9] = [
    RatingDimensionInfo {
        id: RatingDimension::Commission,
        name: "Commission",
        short_name: "Commission",
        description: "Revenue share and fee structure favorability",
    },
    RatingDimensionInfo {
        id: RatingDimension::ReviewProcess,
        name: "Review Process Clarity & Efficiency",
        short_name: "Review",
        description: "Transparency and speed of the app review process",
    },
    RatingDimensionInfo {
        id: RatingDimension::Stability,
        name: "Stability & Reliability",
        short_name: "Stability",
        description: "Technical and political stability of the platform",
    },
    RatingDimensionInfo {
        id: RatingDimension::DeveloperSupport,
        name: "Developer Support & Account Management",
        short_name: "Support",
        description: "Quality of developer relations and support",
    },
    RatingDimensionInfo {
        id: RatingDimension::Discoverability,
        name: "Discoverability & Anti-Scam Protection",
        short_name: "Discovery",
        description: "App visibility and protection against spam/scams",
    },
    RatingDimensionInfo {
        id: RatingDimension::Competitiveness,
        name: "Competitiveness",
        short_name: "Compete",
        description: "Market reach and audience size potential",
    },
    RatingDimensionInfo {
        id: RatingDimension::EntryBarriers,
        name: "Entry Barriers & Costs",
        short_name: "Entry",
        description: "Ease of getting started and ongoing costs",
    },
    RatingDimensionInfo {
        id: RatingDimension::TechnicalFreedom,
        name: "Technical Freedom",
        short_name: "Freedom",
        description: "Flexibility in implementation and monetization",
    },
    RatingDimensionInfo {
        id: RatingDimension::Analytics,
        name: "Data & Analytics",
        short_name: "Analytics",
        description: "Quality of insights and reporting tools",
    },
];

pub fn category_info(id: Category) -> &'static CategoryInfo {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .expect("every category has a table entry")
}

pub fn platform_info(id: Platform) -> &'static PlatformInfo {
    PLATFORMS
        .iter()
        .find(|p| p.id == id)
        .expect("every platform has a table entry")
}

pub fn rating_dimension_info(id: RatingDimension) -> &'static RatingDimensionInfo {
    RATING_DIMENSIONS
        .iter()
        .find(|d| d.id == id)
        .expect("every rating dimension has a table entry")
}

/// Output from the list_categories operation.
#[derive(Debug, Serialize)]
pub struct ListCategoriesOutput {
    pub categories: &'static [CategoryInfo],
}

impl ListCategoriesOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from the list_platforms operation.
#[derive(Debug, Serialize)]
pub struct ListPlatformsOutput {
    pub platforms: &'static [PlatformInfo],
}

impl ListPlatformsOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from the list_rating_dimensions operation.
#[derive(Debug, Serialize)]
pub struct ListRatingDimensionsOutput {
    pub dimensions: &'static [RatingDimensionInfo],
}

impl ListRatingDimensionsOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_enumeration_value_has_metadata() {
        for category in Category::ALL {
            assert_eq!(category_info(category).id, category);
        }
        for platform in Platform::ALL {
            assert_eq!(platform_info(platform).id, platform);
        }
        for dimension in RatingDimension::ALL {
            assert_eq!(rating_dimension_info(dimension).id, dimension);
        }
    }

    #[test]
    fn tables_match_enumeration_sizes() {
        assert_eq!(CATEGORIES.len(), Category::ALL.len());
        assert_eq!(PLATFORMS.len(), Platform::ALL.len());
        assert_eq!(RATING_DIMENSIONS.len(), RatingDimension::ALL.len());
    }

    #[test]
    fn list_outputs_serialize_ids_in_wire_form() {
        let json = ListCategoriesOutput {
            categories: &CATEGORIES,
        }
        .to_json();
        assert!(json.contains(r#""id":"third-party""#));

        let json = ListRatingDimensionsOutput {
            dimensions: &RATING_DIMENSIONS,
        }
        .to_json();
        assert!(json.contains(r#""id":"reviewProcess""#));
    }
}
