//! Tests for the two-level query cache.

use super::QueryCache;
use crate::models::PokemonCard;

fn card(id: &str) -> PokemonCard {
    PokemonCard {
        api_id: id.to_string(),
        pokedex_num: 1,
        name: format!("Card {id}"),
        types: vec!["Grass".to_string()],
        hp: Some(60),
        image_url: format!("https://example.com/{id}.png"),
        weaknesses: vec![],
    }
}

#[test]
fn empty_cache_misses() {
    let cache = QueryCache::new();

    assert!(cache.lookup("name=x&pageSize=10&supertype=Pokémon").is_none());
    assert!(cache.is_empty());
}

#[test]
fn lookup_returns_cards_in_indexed_order() {
    let mut cache = QueryCache::new();
    cache.store_card(card("a"));
    cache.store_card(card("b"));
    // Index order differs from insertion order on purpose
    cache.index_query("key", vec!["b".to_string(), "a".to_string()]);

    let cards = cache.lookup("key").expect("indexed query should hit");
    assert_eq!(cards, vec![card("b"), card("a")]);
}

#[test]
fn reset_clears_index_but_keeps_cards() {
    let mut cache = QueryCache::new();
    cache.store_card(card("a"));
    cache.index_query("key", vec!["a".to_string()]);

    cache.reset();

    assert!(cache.lookup("key").is_none());
    assert!(cache.is_empty());
    // The card store survives; re-indexing makes the query hit again
    assert_eq!(cache.card("a"), Some(&card("a")));
    cache.index_query("key", vec!["a".to_string()]);
    assert_eq!(cache.lookup("key"), Some(vec![card("a")]));
}

#[test]
fn store_card_overwrites_same_id() {
    let mut cache = QueryCache::new();
    cache.store_card(card("a"));

    let mut renamed = card("a");
    renamed.name = "Renamed".to_string();
    cache.store_card(renamed.clone());

    assert_eq!(cache.card("a"), Some(&renamed));
}

#[test]
fn missing_card_turns_lookup_into_miss() {
    let mut cache = QueryCache::new();
    cache.store_card(card("a"));
    cache.index_query("key", vec!["a".to_string(), "ghost".to_string()]);

    assert!(cache.lookup("key").is_none());
}

#[test]
fn len_counts_indexed_queries() {
    let mut cache = QueryCache::new();
    assert_eq!(cache.len(), 0);

    cache.index_query("first", vec![]);
    cache.index_query("second", vec![]);
    assert_eq!(cache.len(), 2);

    cache.reset();
    assert_eq!(cache.len(), 0);
}

#[test]
fn indexed_ids_reports_stored_order() {
    let mut cache = QueryCache::new();
    cache.index_query("key", vec!["x".to_string(), "y".to_string()]);

    assert_eq!(
        cache.indexed_ids("key"),
        Some(&["x".to_string(), "y".to_string()][..])
    );
    assert!(cache.indexed_ids("other").is_none());
}
