use crate::api::pokemon_tcg::ApiCard;

/// Page size used when a search does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Supertype filter applied to every search; this client only deals in
/// Pokémon cards, never trainers or energy
pub const SUPERTYPE: &str = "Pokémon";

/// A card in the shape callers work with, decoupled from the raw API records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonCard {
    /// Stable identifier assigned by the API, unique across its corpus
    pub api_id: String,
    pub pokedex_num: u32,
    pub name: String,
    pub types: Vec<String>,
    /// Hit points. `None` when the API value is missing or not numeric.
    pub hp: Option<u32>,
    pub image_url: String,
    /// Each weakness formatted as "{type}{value}", e.g. "Lightning×2"
    pub weaknesses: Vec<String>,
}

impl PokemonCard {
    /// Map a raw API record into the domain shape.
    ///
    /// Pure: a fixed input always produces the same card.
    pub fn from_api(card: ApiCard) -> Self {
        Self {
            api_id: card.id,
            pokedex_num: card.national_pokedex_number,
            name: card.name,
            types: card.types.unwrap_or_default(),
            hp: card.hp.as_deref().and_then(|hp| hp.trim().parse().ok()),
            image_url: card.image_url,
            weaknesses: card
                .weaknesses
                .unwrap_or_default()
                .into_iter()
                .map(|weakness| format!("{}{}", weakness.kind, weakness.value))
                .collect(),
        }
    }
}

/// Parameters of a card search. Only `name` is required.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub name: String,
    /// Restrict results to cards of these types; empty means no restriction
    pub types: Vec<String>,
    /// Maximum number of results, defaults to [`DEFAULT_PAGE_SIZE`]
    pub limit: Option<u32>,
}

impl SearchQuery {
    /// Query for `name` with default page size and no type filter
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Canonical query-string encoding of this search.
    ///
    /// Parameter order is fixed: name, pageSize, supertype, then (only when
    /// non-empty) the pipe-joined types. The string doubles as the cache key,
    /// so identical queries must encode byte-identically.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![
            format!("name={}", self.name),
            format!("pageSize={}", self.limit.unwrap_or(DEFAULT_PAGE_SIZE)),
            format!("supertype={}", SUPERTYPE),
        ];

        if !self.types.is_empty() {
            parts.push(format!("types={}", self.types.join("|")));
        }

        parts.join("&")
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
