//! Sort/rank engine: total, stable orderings over cards
//!
//! Every option yields a total order; where the primary key is not the
//! name, ascending name breaks ties so equal keys order reproducibly.
//! Sorting never mutates its input.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::card::StoreCardData;
use crate::catalog::types::RatingDimension;

/// A named ordering over store cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    NameAsc,
    NameDesc,
    AppCountDesc,
    CommissionAsc,
    Featured,
    RatingDesc(RatingDimension),
    RatingOverallDesc,
}

impl SortOption {
    /// The default ordering when a caller supplies nothing usable.
    pub const DEFAULT: SortOption = SortOption::Featured;

    /// Parse an untrusted sort option string, falling back to the default.
    /// A public listing should render in some reasonable order rather than
    /// reject the request.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or(Self::DEFAULT)
    }

}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOption::NameAsc => f.write_str("name-asc"),
            SortOption::NameDesc => f.write_str("name-desc"),
            SortOption::AppCountDesc => f.write_str("app-count-desc"),
            SortOption::CommissionAsc => f.write_str("commission-asc"),
            SortOption::Featured => f.write_str("featured"),
            SortOption::RatingDesc(dimension) => write!(f, "rating-{dimension}-desc"),
            SortOption::RatingOverallDesc => f.write_str("rating-overall-desc"),
        }
    }
}

impl FromStr for SortOption {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "name-asc" => return Ok(SortOption::NameAsc),
            "name-desc" => return Ok(SortOption::NameDesc),
            "app-count-desc" => return Ok(SortOption::AppCountDesc),
            "commission-asc" => return Ok(SortOption::CommissionAsc),
            "featured" => return Ok(SortOption::Featured),
            "rating-overall-desc" => return Ok(SortOption::RatingOverallDesc),
            _ => {}
        }
        if let Some(dimension) = s
            .strip_prefix("rating-")
            .and_then(|rest| rest.strip_suffix("-desc"))
        {
            if let Ok(dimension) = dimension.parse() {
                return Ok(SortOption::RatingDesc(dimension));
            }
        }
        anyhow::bail!("unknown sort option '{s}'")
    }
}

/// Return a new sequence ordered by `option`. The input is untouched.
pub fn sort_cards(cards: &[StoreCardData], option: SortOption) -> Vec<StoreCardData> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| compare(a, b, option));
    sorted
}

fn compare(a: &StoreCardData, b: &StoreCardData, option: SortOption) -> Ordering {
    match option {
        SortOption::NameAsc => a.name.cmp(&b.name),
        SortOption::NameDesc => b.name.cmp(&a.name),
        SortOption::AppCountDesc => {
            // Missing counts rank as zero.
            let a_count = a.metrics.app_count.unwrap_or(0);
            let b_count = b.metrics.app_count.unwrap_or(0);
            b_count.cmp(&a_count).then_with(|| a.name.cmp(&b.name))
        }
        SortOption::CommissionAsc => a
            .first_commission_or_worst()
            .total_cmp(&b.first_commission_or_worst())
            .then_with(|| a.name.cmp(&b.name)),
        SortOption::Featured => b
            .metadata
            .featured
            .cmp(&a.metadata.featured)
            .then_with(|| a.name.cmp(&b.name)),
        SortOption::RatingDesc(dimension) => {
            // Missing scores rank as zero.
            let a_rating = a.ratings.as_ref().and_then(|r| r.get(dimension)).unwrap_or(0);
            let b_rating = b.ratings.as_ref().and_then(|r| r.get(dimension)).unwrap_or(0);
            b_rating.cmp(&a_rating).then_with(|| a.name.cmp(&b.name))
        }
        SortOption::RatingOverallDesc => b
            .overall_rating()
            .total_cmp(&a.overall_rating())
            .then_with(|| a.name.cmp(&b.name)),
    }
}
