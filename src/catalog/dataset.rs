//! Dataset loading
//!
//! The published dataset is one JSON array of [`AppStore`] records, produced
//! by the offline content build: front-matter documents parsed, filtered to
//! `status == "active"`, and sorted by name. This module is the trust
//! boundary to that producer: records are deserialized and the integrity
//! invariants re-checked once, at startup. Query paths never re-validate.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::catalog::types::{AppStore, StoreStatus, validate_slug};

/// Load and validate the dataset from a JSON file.
pub fn load_dataset(path: &Path) -> Result<Vec<AppStore>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file: {}", path.display()))?;
    let stores = parse_dataset(&raw)
        .with_context(|| format!("invalid dataset file: {}", path.display()))?;
    tracing::info!(count = stores.len(), "loaded store dataset");
    Ok(stores)
}

/// Parse and validate a dataset from its JSON text.
pub fn parse_dataset(raw: &str) -> Result<Vec<AppStore>> {
    let stores: Vec<AppStore> =
        serde_json::from_str(raw).context("failed to deserialize store records")?;
    validate_dataset(&stores)?;
    Ok(stores)
}

/// Check the invariants the offline producer is responsible for. A clear
/// startup error beats a silently wrong snapshot.
pub fn validate_dataset(stores: &[AppStore]) -> Result<()> {
    let mut seen = HashSet::new();
    for store in stores {
        validate_slug(&store.slug)
            .with_context(|| format!("store '{}' has an invalid slug", store.name))?;
        if !seen.insert(store.slug.as_str()) {
            bail!("duplicate slug '{}'", store.slug);
        }
        if store.platforms.is_empty() {
            bail!("store '{}' lists no platforms", store.slug);
        }
        if store.metadata.status != StoreStatus::Active {
            bail!(
                "store '{}' is not active; the published dataset must be pre-filtered",
                store.slug
            );
        }
        for tier in &store.fees.commission_tiers {
            if !(0.0..=100.0).contains(&tier.percentage) {
                bail!(
                    "store '{}' has commission percentage {} outside [0, 100]",
                    store.slug,
                    tier.percentage
                );
            }
        }
        if let Some(ratings) = &store.ratings {
            for (dimension, value) in ratings.iter() {
                if !(1..=5).contains(&value) {
                    bail!(
                        "store '{}' has rating {}={} outside [1, 5]",
                        store.slug,
                        dimension,
                        value
                    );
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::store;
    use crate::catalog::types::Category;

    #[test]
    fn accepts_a_valid_dataset() {
        let stores = vec![
            store("alpha", "Alpha Store", Category::Gaming),
            store("beta", "Beta Store", Category::Gaming),
        ];
        assert!(validate_dataset(&stores).is_ok());
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let stores = vec![
            store("alpha", "Alpha Store", Category::Gaming),
            store("alpha", "Alpha Again", Category::Official),
        ];
        let err = validate_dataset(&stores).unwrap_err();
        assert!(err.to_string().contains("duplicate slug"));
    }

    #[test]
    fn rejects_empty_platform_lists() {
        let mut entry = store("alpha", "Alpha Store", Category::Gaming);
        entry.platforms.clear();
        assert!(validate_dataset(&[entry]).is_err());
    }

    #[test]
    fn rejects_out_of_range_commission() {
        let mut entry = store("alpha", "Alpha Store", Category::Gaming);
        entry.fees.commission_tiers[0].percentage = 130.0;
        assert!(validate_dataset(&[entry]).is_err());
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        let mut entry = store("alpha", "Alpha Store", Category::Gaming);
        entry.ratings.as_mut().unwrap().stability = Some(9);
        assert!(validate_dataset(&[entry]).is_err());
    }

    #[test]
    fn parses_loose_booleans_and_percent_strings() {
        let entry = store("alpha", "Alpha Store", Category::Gaming);
        let mut value = serde_json::to_value(vec![entry]).unwrap();
        let first = &mut value.as_array_mut().unwrap()[0];
        first["technical"]["hasApi"] = serde_json::json!("yes");
        first["fees"]["commissionTiers"][0]["percentage"] = serde_json::json!("30%");

        let parsed = parse_dataset(&value.to_string()).unwrap();
        assert!(parsed[0].technical.has_api);
        assert_eq!(parsed[0].fees.commission_tiers[0].percentage, 30.0);
    }
}
