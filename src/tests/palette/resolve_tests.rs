use super::*;

use crate::palette::{Category, Handler};

fn entry(id: &str, title: &str, category: Category, keywords: &[&str]) -> CommandEntry {
    CommandEntry::new(id, title, category, keywords, Handler::new(|| Ok(())))
}

fn sample_registry() -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    reg.register(entry(
        "toggle-theme",
        "Toggle Theme",
        Category::Theme,
        &["theme", "dark", "light", "toggle"],
    ))
    .unwrap();
    reg.register(entry(
        "market-refresh",
        "Refresh Market Data",
        Category::Market,
        &["market", "refresh", "data", "price"],
    ))
    .unwrap();
    reg.register(entry(
        "blockchain-connect",
        "Connect to Blockchain",
        Category::Blockchain,
        &["blockchain", "connect", "wallet"],
    ))
    .unwrap();
    reg
}

#[test]
fn empty_query_returns_everything_in_registration_order() {
    let reg = sample_registry();
    let cfg = FuzzyConfig::default();
    for query in ["", "   "] {
        let out = resolve(query, &reg, &cfg);
        let ids: Vec<&str> = out.iter().map(|c| c.entry.id.as_str()).collect();
        assert_eq!(ids, ["toggle-theme", "market-refresh", "blockchain-connect"]);
        assert!(out.iter().all(|c| c.score == 0.0));
    }
}

#[test]
fn resolver_is_deterministic() {
    let reg = sample_registry();
    let cfg = FuzzyConfig::default();
    for query in ["theme", "refr", "conect", "xyz"] {
        let a: Vec<(String, f64)> = resolve(query, &reg, &cfg)
            .iter()
            .map(|c| (c.entry.id.clone(), c.score))
            .collect();
        let b: Vec<(String, f64)> = resolve(query, &reg, &cfg)
            .iter()
            .map(|c| (c.entry.id.clone(), c.score))
            .collect();
        assert_eq!(a, b);
    }
}

#[test]
fn theme_query_matches_toggle_theme_under_threshold() {
    let reg = sample_registry();
    let cfg = FuzzyConfig::default();
    let out = resolve("theme", &reg, &cfg);
    let hit = out
        .iter()
        .find(|c| c.entry.id == "toggle-theme")
        .expect("toggle-theme in results");
    assert!(hit.score <= cfg.threshold);
    assert_eq!(out[0].entry.id, "toggle-theme");
}

#[test]
fn exact_keyword_match_scores_zero() {
    let reg = sample_registry();
    let out = resolve("wallet", &reg, &FuzzyConfig::default());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].entry.id, "blockchain-connect");
    assert_eq!(out[0].score, 0.0);
}

#[test]
fn unrelated_query_is_filtered_by_threshold() {
    let reg = sample_registry();
    let out = resolve("zzzzzz", &reg, &FuzzyConfig::default());
    assert!(out.is_empty());
}

#[test]
fn transposition_typos_survive_the_threshold() {
    let reg = sample_registry();
    // No prefix left after the swap, but Damerau counts it as a single edit.
    let out = resolve("tehme", &reg, &FuzzyConfig::default());
    assert!(out.iter().any(|c| c.entry.id == "toggle-theme"));
}

#[test]
fn ties_keep_registration_order() {
    let mut reg = CommandRegistry::new();
    reg.register(entry("b-first", "Same Title", Category::General, &["alpha"]))
        .unwrap();
    reg.register(entry("a-second", "Same Title", Category::General, &["alpha"]))
        .unwrap();
    let out = resolve("alpha", &reg, &FuzzyConfig::default());
    let ids: Vec<&str> = out.iter().map(|c| c.entry.id.as_str()).collect();
    assert_eq!(ids, ["b-first", "a-second"]);
}

#[test]
fn prefix_of_a_token_ranks_ahead_of_a_loose_match() {
    let reg = sample_registry();
    let out = resolve("refr", &reg, &FuzzyConfig::default());
    assert_eq!(out[0].entry.id, "market-refresh");
}

#[test]
fn category_name_matches_pull_in_the_whole_bucket() {
    let mut reg = CommandRegistry::new();
    reg.register(entry("a", "Gas Price", Category::Blockchain, &["gas"]))
        .unwrap();
    reg.register(entry("b", "Something Else", Category::Blockchain, &["other"]))
        .unwrap();
    let out = resolve("blockchain", &reg, &FuzzyConfig::default());
    let ids: Vec<&str> = out.iter().map(|c| c.entry.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn near_miss_on_a_category_is_penalized_by_its_weight() {
    let mut reg = CommandRegistry::new();
    reg.register(entry("a", "Gas Price", Category::Blockchain, &["gas"]))
        .unwrap();
    let cfg = FuzzyConfig::default();
    let exact = resolve("blockchain", &reg, &cfg);
    let fuzzy = resolve("blockhain", &reg, &cfg);
    assert_eq!(exact[0].score, 0.0);
    if let Some(hit) = fuzzy.first() {
        assert!(hit.score > exact[0].score);
    }
}
