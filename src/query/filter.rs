//! Filter engine: conjunction of independent predicates over the snapshot
//!
//! Criteria combine with logical AND; multi-value criteria (category,
//! platform) match with OR among their values. Absent criteria impose no
//! constraint, so predicates commute and can be applied in any order.
//!
//! Filter values usually arrive as untrusted query strings. Parsing fails
//! closed: an unknown category or platform token is dropped (leaving a
//! criterion whose value set may be empty, which matches nothing), and an
//! unknown rating dimension yields a floor no entry satisfies.

use crate::catalog::types::{AppStore, Category, Platform, RatingDimension};

/// Minimum-rating criterion after fail-closed parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingFloor {
    /// At least `floor` on `dimension`. Entries without ratings never
    /// qualify.
    Dimension {
        dimension: RatingDimension,
        floor: u8,
    },
    /// The requested dimension is not one of the nine defined axes; no
    /// entry satisfies this.
    UnknownDimension,
}

impl RatingFloor {
    /// Parse an untrusted dimension name.
    pub fn parse(dimension: &str, floor: u8) -> Self {
        match dimension.parse() {
            Ok(dimension) => RatingFloor::Dimension { dimension, floor },
            Err(_) => RatingFloor::UnknownDimension,
        }
    }

    fn matches(&self, store: &AppStore) -> bool {
        match self {
            RatingFloor::Dimension { dimension, floor } => store
                .rating(*dimension)
                .is_some_and(|value| value >= *floor),
            RatingFloor::UnknownDimension => false,
        }
    }
}

/// Active filter criteria. `None` means "no constraint"; an empty value
/// set means "matches nothing" (the fail-closed result of parsing only
/// unknown tokens).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreFilters {
    pub category: Option<Vec<Category>>,
    pub platform: Option<Vec<Platform>>,
    pub has_api: Option<bool>,
    pub has_sdk: Option<bool>,
    pub free_to_publish: Option<bool>,
    pub min_rating: Option<RatingFloor>,
}

impl StoreFilters {
    /// Build filters from untrusted string criteria. Unknown category and
    /// platform tokens are dropped; see [`RatingFloor::parse`] for the
    /// dimension handling.
    pub fn from_untrusted(
        category: Option<&[String]>,
        platform: Option<&[String]>,
        has_api: Option<bool>,
        has_sdk: Option<bool>,
        free_to_publish: Option<bool>,
        min_rating: Option<(&str, u8)>,
    ) -> Self {
        Self {
            category: category.map(parse_known),
            platform: platform.map(parse_known),
            has_api,
            has_sdk,
            free_to_publish,
            min_rating: min_rating.map(|(dimension, floor)| RatingFloor::parse(dimension, floor)),
        }
    }

    /// Whether no criterion is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether one entry satisfies every active criterion.
    pub fn matches(&self, store: &AppStore) -> bool {
        if let Some(categories) = &self.category {
            if !categories.contains(&store.category) {
                return false;
            }
        }
        if let Some(platforms) = &self.platform {
            if !store.platforms.iter().any(|p| platforms.contains(p)) {
                return false;
            }
        }
        if let Some(has_api) = self.has_api {
            if store.technical.has_api != has_api {
                return false;
            }
        }
        if let Some(has_sdk) = self.has_sdk {
            if store.technical.has_sdk != has_sdk {
                return false;
            }
        }
        if let Some(free_to_publish) = self.free_to_publish {
            if store.fees.is_free_to_publish() != free_to_publish {
                return false;
            }
        }
        if let Some(min_rating) = &self.min_rating {
            if !min_rating.matches(store) {
                return false;
            }
        }
        true
    }
}

/// The subset of `stores` matching all active criteria, in input order.
/// Non-mutating; filtering an empty criteria set returns everything.
pub fn filter_stores<'a>(stores: &'a [AppStore], filters: &StoreFilters) -> Vec<&'a AppStore> {
    stores.iter().filter(|s| filters.matches(s)).collect()
}

fn parse_known<T: std::str::FromStr>(values: &[String]) -> Vec<T> {
    values.iter().filter_map(|v| v.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::store;
    use crate::catalog::types::{FeeType, RegistrationFee};

    fn dataset() -> Vec<AppStore> {
        let mut alpha = store("alpha", "Alpha Store", Category::Gaming);
        alpha.ratings.as_mut().unwrap().stability = Some(5);

        let mut beta = store("beta", "Beta Store", Category::Gaming);
        beta.platforms = vec![Platform::Ios];
        beta.ratings.as_mut().unwrap().stability = Some(3);

        let mut gamma = store("gamma", "Gamma Market", Category::Official);
        gamma.technical.has_api = true;
        gamma.fees.registration_fee = Some(RegistrationFee {
            amount: 99.0,
            currency: "USD".to_string(),
            fee_type: FeeType::Annual,
        });
        gamma.ratings = None;

        vec![alpha, beta, gamma]
    }

    fn slugs<'a>(stores: &[&'a AppStore]) -> Vec<&'a str> {
        stores.iter().map(|s| s.slug.as_str()).collect()
    }

    #[test]
    fn empty_criteria_impose_no_constraint() {
        let stores = dataset();
        let all = filter_stores(&stores, &StoreFilters::default());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn criteria_are_anded_and_values_are_ored() {
        let stores = dataset();
        let filters = StoreFilters {
            category: Some(vec![Category::Gaming, Category::Official]),
            platform: Some(vec![Platform::Android]),
            ..Default::default()
        };
        assert_eq!(slugs(&filter_stores(&stores, &filters)), ["alpha", "gamma"]);
    }

    #[test]
    fn predicates_commute() {
        let stores = dataset();
        let by_category = StoreFilters {
            category: Some(vec![Category::Gaming]),
            ..Default::default()
        };
        let by_platform = StoreFilters {
            platform: Some(vec![Platform::Ios]),
            ..Default::default()
        };
        let both = StoreFilters {
            category: Some(vec![Category::Gaming]),
            platform: Some(vec![Platform::Ios]),
            ..Default::default()
        };

        let category_then_platform: Vec<&AppStore> = filter_stores(&stores, &by_category)
            .into_iter()
            .filter(|s| by_platform.matches(s))
            .collect();
        let platform_then_category: Vec<&AppStore> = filter_stores(&stores, &by_platform)
            .into_iter()
            .filter(|s| by_category.matches(s))
            .collect();

        assert_eq!(
            slugs(&category_then_platform),
            slugs(&platform_then_category)
        );
        assert_eq!(
            slugs(&category_then_platform),
            slugs(&filter_stores(&stores, &both))
        );
    }

    #[test]
    fn unknown_tokens_fail_closed() {
        let stores = dataset();
        let filters = StoreFilters::from_untrusted(
            Some(&["marketplace".to_string()]),
            None,
            None,
            None,
            None,
            None,
        );
        assert!(filter_stores(&stores, &filters).is_empty());

        let filters =
            StoreFilters::from_untrusted(None, None, None, None, None, Some(("vibes", 4)));
        assert!(filter_stores(&stores, &filters).is_empty());
    }

    #[test]
    fn mixed_tokens_keep_the_known_ones() {
        let stores = dataset();
        let filters = StoreFilters::from_untrusted(
            Some(&["gaming".to_string(), "marketplace".to_string()]),
            None,
            None,
            None,
            None,
            None,
        );
        assert_eq!(slugs(&filter_stores(&stores, &filters)), ["alpha", "beta"]);
    }

    #[test]
    fn unrated_entries_never_satisfy_a_floor() {
        let stores = dataset();
        let filters = StoreFilters {
            min_rating: Some(RatingFloor::Dimension {
                dimension: RatingDimension::Stability,
                floor: 1,
            }),
            ..Default::default()
        };
        // gamma has no ratings map at all.
        assert_eq!(slugs(&filter_stores(&stores, &filters)), ["alpha", "beta"]);
    }

    #[test]
    fn fee_status_treats_missing_fee_as_free() {
        let stores = dataset();
        let free = StoreFilters {
            free_to_publish: Some(true),
            ..Default::default()
        };
        assert_eq!(slugs(&filter_stores(&stores, &free)), ["alpha", "beta"]);

        let paid = StoreFilters {
            free_to_publish: Some(false),
            ..Default::default()
        };
        assert_eq!(slugs(&filter_stores(&stores, &paid)), ["gamma"]);
    }

    #[test]
    fn capability_criteria_compare_exactly() {
        let stores = dataset();
        let filters = StoreFilters {
            has_api: Some(true),
            ..Default::default()
        };
        assert_eq!(slugs(&filter_stores(&stores, &filters)), ["gamma"]);

        let filters = StoreFilters {
            has_api: Some(false),
            ..Default::default()
        };
        assert_eq!(slugs(&filter_stores(&stores, &filters)), ["alpha", "beta"]);
    }
}
