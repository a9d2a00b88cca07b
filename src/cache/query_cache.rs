use std::collections::HashMap;

use crate::models::PokemonCard;

/// Two-level in-memory cache for card searches.
///
/// The query index maps a canonical query string to the ids that query
/// returned, in API order; the card store maps ids to cards and is shared
/// across queries. Entries are only ever added, never evicted: the cache
/// lives and dies with one client instance. [`QueryCache::reset`] is the one
/// mutation that removes anything, and it drops the query index wholesale.
#[derive(Debug, Default)]
pub struct QueryCache {
    /// Canonical query string -> ids returned for that query, in API order
    query_index: HashMap<String, Vec<String>>,
    /// Card id -> card
    card_by_id: HashMap<String, PokemonCard>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously indexed query.
    ///
    /// Returns the cards in the order the API originally returned them, or
    /// `None` on a miss. Every indexed id should have a backing card; a gap
    /// is treated as a miss rather than returning a shortened result.
    pub fn lookup(&self, query_string: &str) -> Option<Vec<PokemonCard>> {
        let ids = self.query_index.get(query_string)?;
        ids.iter()
            .map(|id| self.card_by_id.get(id).cloned())
            .collect()
    }

    /// Store a card, keyed by its API id. A later card with the same id
    /// replaces the earlier one.
    pub fn store_card(&mut self, card: PokemonCard) {
        self.card_by_id.insert(card.api_id.clone(), card);
    }

    /// Record the ids a query returned, in order
    pub fn index_query(&mut self, query_string: impl Into<String>, ids: Vec<String>) {
        self.query_index.insert(query_string.into(), ids);
    }

    /// Get a stored card by API id
    pub fn card(&self, api_id: &str) -> Option<&PokemonCard> {
        self.card_by_id.get(api_id)
    }

    /// The ids recorded for a query string, if any
    pub fn indexed_ids(&self, query_string: &str) -> Option<&[String]> {
        self.query_index.get(query_string).map(Vec::as_slice)
    }

    /// Forget all indexed queries. Stored cards are kept; they are reused
    /// when a future search returns the same ids.
    pub fn reset(&mut self) {
        self.query_index.clear();
    }

    /// Number of indexed queries
    pub fn len(&self) -> usize {
        self.query_index.len()
    }

    /// Check if no queries are indexed
    pub fn is_empty(&self) -> bool {
        self.query_index.is_empty()
    }
}

#[cfg(test)]
#[path = "query_cache_tests.rs"]
mod tests;
