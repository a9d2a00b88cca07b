//! Pokémon TCG card search with in-memory result caching.
//!
//! [`PokemonTcgClient`] turns a [`SearchQuery`] into a canonical query
//! string, runs it against the remote API and maps the raw records into
//! [`PokemonCard`] values. Results are cached per query string, so an
//! identical search never touches the network twice.

pub mod api;
pub mod cache;
pub mod client;
pub mod error;
pub mod models;

// Re-export commonly used items
pub use api::{fetch_types, fetch_types_from, DEFAULT_API_BASE_URL};
pub use cache::QueryCache;
pub use client::{ClientOptions, PokemonTcgClient};
pub use error::{ApiError, ApiResult};
pub use models::{PokemonCard, SearchQuery, DEFAULT_PAGE_SIZE};
