//! Card lookup client: search with a two-level result cache.

use crate::api::pokemon_tcg::{self, DEFAULT_API_BASE_URL};
use crate::cache::QueryCache;
use crate::error::ApiResult;
use crate::models::{PokemonCard, SearchQuery};

/// Construction-time configuration; immutable once the client exists
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the Pokémon TCG API
    pub base_url: String,
    /// When false, every search goes to the network
    pub cache_enabled: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_enabled: true,
        }
    }
}

/// Client for searching Pokémon TCG cards.
///
/// Owns its configuration and a [`QueryCache`] keyed by the canonical query
/// string, so an identical search is answered without touching the network.
/// One instance is meant for one caller: there is no locking and no
/// de-duplication of in-flight requests.
pub struct PokemonTcgClient {
    base_url: String,
    cache_enabled: bool,
    cache: QueryCache,
}

impl Default for PokemonTcgClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PokemonTcgClient {
    /// Client with default configuration: canonical API host, caching on
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(options: ClientOptions) -> Self {
        log::debug!(
            "Creating card lookup client for {} (cache {})",
            options.base_url,
            if options.cache_enabled { "on" } else { "off" }
        );
        Self {
            base_url: options.base_url,
            cache_enabled: options.cache_enabled,
            cache: QueryCache::new(),
        }
    }

    /// Search for cards matching `query`.
    ///
    /// On a cache hit the stored results are returned without any network
    /// access. On a miss the API is queried, the results are mapped into
    /// [`PokemonCard`]s and, when caching is enabled, recorded under the
    /// query string for subsequent identical searches. Network and decode
    /// failures propagate unchanged; an empty result is a success.
    pub async fn search(&mut self, query: &SearchQuery) -> ApiResult<Vec<PokemonCard>> {
        let key = query.to_query_string();

        if self.cache_enabled {
            if let Some(cards) = self.cache.lookup(&key) {
                log::info!("Cache hit for '{}'", key);
                return Ok(cards);
            }
        }

        log::info!("Cache miss for '{}', querying API", key);
        let raw = pokemon_tcg::search_cards_from(&self.base_url, &key).await?;

        let cards: Vec<PokemonCard> = raw.into_iter().map(PokemonCard::from_api).collect();

        // Cards are stored unconditionally so later hits on other queries can
        // reuse them; the query index itself is only written when caching is
        // enabled.
        for card in &cards {
            self.cache.store_card(card.clone());
        }
        if self.cache_enabled {
            let ids = cards.iter().map(|card| card.api_id.clone()).collect();
            self.cache.index_query(key, ids);
        }

        Ok(cards)
    }

    /// Drop all recorded query results. The next search for any query will
    /// hit the network again, even one that was cached before.
    pub fn reset_cache(&mut self) {
        log::debug!("Resetting query cache ({} entries)", self.cache.len());
        self.cache.reset();
    }

    /// Read access to the underlying cache
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }
}
