//! Thin transport layer for the Pokémon TCG API.
//!
//! Builds URLs, performs the GET requests and decodes the JSON envelopes.
//! Caching and domain mapping live elsewhere; these functions always hit the
//! network.

use serde::{Deserialize, Deserializer};

use crate::error::ApiResult;

pub const DEFAULT_API_BASE_URL: &str = "https://api.pokemontcg.io/v1";
pub const SEARCH_PATH: &str = "/cards";
pub const TYPES_PATH: &str = "/types";

const USER_AGENT: &str = "CardLookup/1.0";

/// Raw card record as returned by the /cards endpoint
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApiCard {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "number_or_string")]
    pub national_pokedex_number: u32,
    pub image_url: String,
    #[serde(default)]
    pub image_url_hi_res: Option<String>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    /// The API ships hit points as a string, and not always a numeric one
    #[serde(default)]
    pub hp: Option<String>,
    #[serde(default)]
    pub weaknesses: Option<Vec<ApiWeakness>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiWeakness {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Envelope of the /types endpoint
#[derive(Debug, Deserialize)]
struct TypesResponse {
    types: Vec<String>,
}

/// Envelope of the /cards endpoint
#[derive(Debug, Deserialize)]
struct SearchResponse {
    cards: Vec<ApiCard>,
}

/// The API is inconsistent about `nationalPokedexNumber`: some records carry
/// a JSON number, others a numeric string. Accept both.
fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Fetch the list of card types from the default API host
pub async fn fetch_types() -> ApiResult<Vec<String>> {
    fetch_types_from(DEFAULT_API_BASE_URL).await
}

/// Fetch the list of card types from a specific API host
pub async fn fetch_types_from(base_url: &str) -> ApiResult<Vec<String>> {
    let url = format!("{}{}", base_url, TYPES_PATH);

    log::debug!("Fetching card types: {}", url);

    let response = reqwest::Client::new()
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    let body = response.text().await?;
    let parsed: TypesResponse = serde_json::from_str(&body)?;

    Ok(parsed.types)
}

/// Run a card search against a specific API host.
///
/// `query_string` is the canonical encoding produced by
/// [`SearchQuery::to_query_string`](crate::models::SearchQuery::to_query_string);
/// it is appended to the URL verbatim.
pub async fn search_cards_from(base_url: &str, query_string: &str) -> ApiResult<Vec<ApiCard>> {
    let url = format!("{}{}?{}", base_url, SEARCH_PATH, query_string);

    log::debug!("Searching cards: {}", url);

    let response = reqwest::Client::new()
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    let body = response.text().await?;
    let parsed: SearchResponse = serde_json::from_str(&body)?;

    Ok(parsed.cards)
}

#[cfg(test)]
#[path = "pokemon_tcg_tests.rs"]
mod tests;
