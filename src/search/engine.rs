//! Fuzzy search engine over the catalog snapshot
//!
//! Free-text queries are scored against weighted fields of every entry:
//! exact substring matches score highest (with a bonus at the start of a
//! field), typo-tolerant matches score through a capped fuzzy component so
//! they can never outrank an exact match within the same field. Each result
//! carries the per-field matches with character spans for highlighting.
//!
//! The index is a pure function of the immutable snapshot, built lazily on
//! first query and cached behind an explicit, reset-capable handle. Readers
//! share the built index; [`SearchEngine::reset`] discards it and forces a
//! rebuild on the next query.

use std::sync::{Arc, Mutex};

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

use crate::catalog::card::StoreCardData;
use crate::catalog::snapshot::StoreCatalog;
use crate::query::filter::StoreFilters;
use crate::search::config::{
    FUZZY_BASE_SCORE, FUZZY_SCORE_CAP, FUZZY_SCORE_SCALE, MIN_QUERY_LENGTH, PREFIX_SCORE,
    SUBSTRING_SCORE, WEIGHT_CATEGORY, WEIGHT_COMPANY, WEIGHT_DESCRIPTION, WEIGHT_NAME,
    WEIGHT_PLATFORM, WEIGHT_TAGLINE,
};

/// The fields a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Name,
    Tagline,
    Description,
    CompanyName,
    Category,
    Platform,
}

/// One field match justifying a result's inclusion: the matched value and
/// the inclusive character spans to highlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub field: SearchField,
    pub value: String,
    pub indices: Vec<(usize, usize)>,
}

/// One search hit: the card projection, its relevance score (higher is
/// better; results are ordered best first), and the matches behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSearchResult {
    #[serde(flatten)]
    pub card: StoreCardData,
    pub score: f32,
    pub matches: Vec<SearchMatch>,
}

/// One searchable field of one entry, with its text pre-lowered for
/// case-insensitive scanning.
#[derive(Debug)]
struct IndexedField {
    field: SearchField,
    weight: f32,
    text: String,
    chars_lower: Vec<char>,
}

#[derive(Debug)]
struct IndexedStore {
    store_idx: usize,
    fields: Vec<IndexedField>,
}

/// The prepared search index: every entry's searchable fields, in snapshot
/// order.
#[derive(Debug)]
pub struct SearchIndex {
    entries: Vec<IndexedStore>,
}

impl SearchIndex {
    fn build(catalog: &StoreCatalog) -> Self {
        let entries = catalog
            .all()
            .iter()
            .enumerate()
            .map(|(store_idx, store)| {
                let mut fields = vec![
                    IndexedField::new(SearchField::Name, WEIGHT_NAME, store.name.clone()),
                    IndexedField::new(SearchField::Tagline, WEIGHT_TAGLINE, store.tagline.clone()),
                    IndexedField::new(
                        SearchField::Description,
                        WEIGHT_DESCRIPTION,
                        store.description.clone(),
                    ),
                    IndexedField::new(
                        SearchField::CompanyName,
                        WEIGHT_COMPANY,
                        store.company.name.clone(),
                    ),
                    IndexedField::new(
                        SearchField::Category,
                        WEIGHT_CATEGORY,
                        store.category.as_str().to_string(),
                    ),
                ];
                for platform in &store.platforms {
                    fields.push(IndexedField::new(
                        SearchField::Platform,
                        WEIGHT_PLATFORM,
                        platform.as_str().to_string(),
                    ));
                }
                IndexedStore { store_idx, fields }
            })
            .collect();
        Self { entries }
    }
}

impl IndexedField {
    fn new(field: SearchField, weight: f32, text: String) -> Self {
        let chars_lower = text.chars().map(|c| c.to_ascii_lowercase()).collect();
        Self {
            field,
            weight,
            text,
            chars_lower,
        }
    }
}

/// Reusable matcher state for one query, shared across all haystacks.
struct QueryContext {
    pattern: Pattern,
    matcher: Matcher,
    buf: Vec<char>,
}

impl QueryContext {
    fn new(query: &str) -> Self {
        Self {
            pattern: Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart),
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::with_capacity(64),
        }
    }

    fn score(&mut self, haystack: &str) -> Option<u32> {
        self.buf.clear();
        let utf32 = Utf32Str::new(haystack, &mut self.buf);
        self.pattern.score(utf32, &mut self.matcher)
    }
}

/// The fuzzy search engine: snapshot plus the cached index.
#[derive(Debug)]
pub struct SearchEngine {
    catalog: Arc<StoreCatalog>,
    index: Mutex<Option<Arc<SearchIndex>>>,
}

impl SearchEngine {
    pub fn new(catalog: Arc<StoreCatalog>) -> Self {
        Self {
            catalog,
            index: Mutex::new(None),
        }
    }

    /// Discard the cached index. The next query rebuilds it from the
    /// snapshot.
    pub fn reset(&self) {
        *self.index.lock().expect("search index lock poisoned") = None;
    }

    /// The cached index, built on first use. Redundant rebuilds under
    /// contention would converge to equal indices, so a plain lock
    /// serializing construction is all this needs.
    fn index(&self) -> Arc<SearchIndex> {
        let mut guard = self.index.lock().expect("search index lock poisoned");
        if guard.is_none() {
            tracing::debug!(stores = self.catalog.len(), "building search index");
            *guard = Some(Arc::new(SearchIndex::build(&self.catalog)));
        }
        guard.as_ref().expect("index built above").clone()
    }

    /// Rank entries matching `query`, best first (ties by name). Queries
    /// shorter than the minimum length yield no results; no well-formed
    /// input is an error.
    pub fn search(&self, query: &str) -> Vec<StoreSearchResult> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_LENGTH {
            return Vec::new();
        }

        let query_chars: Vec<char> = trimmed.chars().map(|c| c.to_ascii_lowercase()).collect();
        let mut ctx = QueryContext::new(trimmed);
        let index = self.index();
        let stores = self.catalog.all();

        let mut results = Vec::new();
        for entry in &index.entries {
            let mut score = 0.0f32;
            let mut matches = Vec::new();

            for field in &entry.fields {
                let mut field_score = 0.0f32;
                let mut indices: Option<Vec<(usize, usize)>> = None;

                if let Some(pos) = find_subslice(&field.chars_lower, &query_chars) {
                    field_score += if pos == 0 { PREFIX_SCORE } else { SUBSTRING_SCORE };
                    indices = Some(vec![(pos, pos + query_chars.len() - 1)]);
                }

                if let Some(raw) = ctx.score(&field.text) {
                    field_score +=
                        FUZZY_BASE_SCORE + (raw as f32 / FUZZY_SCORE_SCALE).min(FUZZY_SCORE_CAP);
                    if indices.is_none() {
                        indices = subsequence_spans(&field.chars_lower, &query_chars);
                    }
                }

                if field_score > 0.0 {
                    score += field.weight * field_score;
                    matches.push(SearchMatch {
                        field: field.field,
                        value: field.text.clone(),
                        indices: indices.unwrap_or_default(),
                    });
                }
            }

            if score > 0.0 {
                results.push(StoreSearchResult {
                    card: stores[entry.store_idx].to_card(),
                    score,
                    matches,
                });
            }
        }

        results.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.card.name.cmp(&b.card.name))
        });
        results
    }

    /// Search, then intersect with filter criteria: the search path and the
    /// browse path compose.
    pub fn search_filtered(&self, query: &str, filters: &StoreFilters) -> Vec<StoreSearchResult> {
        let mut results = self.search(query);
        if !filters.is_empty() {
            let stores = self.catalog.all();
            results.retain(|r| {
                stores
                    .iter()
                    .find(|s| s.slug == r.card.slug)
                    .is_some_and(|s| filters.matches(s))
            });
        }
        results
    }

    /// Names of the best matches, for type-ahead suggestions.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<String> {
        self.search(query)
            .into_iter()
            .take(limit)
            .map(|r| r.card.name)
            .collect()
    }
}

/// Position of `needle` inside `haystack` (both pre-lowered), as a char
/// index.
fn find_subslice(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Inclusive spans of an in-order character match, for highlight rendering
/// when there is no contiguous substring. Returns `None` when not every
/// query character appears in order.
fn subsequence_spans(haystack: &[char], needle: &[char]) -> Option<Vec<(usize, usize)>> {
    let mut positions = Vec::with_capacity(needle.len());
    let mut needle_iter = needle.iter().peekable();
    for (idx, ch) in haystack.iter().enumerate() {
        if let Some(&&next) = needle_iter.peek() {
            if *ch == next {
                positions.push(idx);
                needle_iter.next();
            }
        }
    }
    if needle_iter.peek().is_some() {
        return None;
    }

    let mut spans: Vec<(usize, usize)> = Vec::new();
    for pos in positions {
        match spans.last_mut() {
            Some((_, end)) if *end + 1 == pos => *end = pos,
            _ => spans.push((pos, pos)),
        }
    }
    Some(spans)
}
