//! Raw HTTP client for the remote Pokémon TCG API

pub mod pokemon_tcg;

// Re-exports for public API convenience
pub use pokemon_tcg::{
    fetch_types, fetch_types_from, search_cards_from, ApiCard, DEFAULT_API_BASE_URL,
};
