use super::*;

use crate::palette::{CommandEntry, CommandRegistry, FuzzyConfig, Handler, resolve};

fn registry() -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    for (id, cat) in [
        ("t1", Category::Theme),
        ("b1", Category::Blockchain),
        ("t2", Category::Theme),
        ("a1", Category::Analytics),
        ("b2", Category::Blockchain),
    ] {
        reg.register(CommandEntry::new(
            id,
            id.to_uppercase(),
            cat,
            &[],
            Handler::new(|| Ok(())),
        ))
        .unwrap();
    }
    reg
}

#[test]
fn categories_come_back_lexicographically_sorted() {
    let reg = registry();
    let cands = resolve("", &reg, &FuzzyConfig::default());
    let groups = group_by_category(&cands, None);
    let names: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(names, ["analytics", "blockchain", "theme"]);
}

#[test]
fn within_a_category_input_ranking_is_preserved() {
    let reg = registry();
    let cands = resolve("", &reg, &FuzzyConfig::default());
    let groups = group_by_category(&cands, None);
    let blockchain = &groups[1].1;
    let ids: Vec<&str> = blockchain.iter().map(|c| c.entry.id.as_str()).collect();
    assert_eq!(ids, ["b1", "b2"]);
}

#[test]
fn active_filter_returns_only_that_category() {
    let reg = registry();
    let cands = resolve("", &reg, &FuzzyConfig::default());
    let groups = group_by_category(&cands, Some(Category::Theme));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].0, Category::Theme);
    assert_eq!(groups[0].1.len(), 2);
}

#[test]
fn filter_with_no_matches_yields_nothing() {
    let reg = registry();
    let cands = resolve("", &reg, &FuzzyConfig::default());
    let groups = group_by_category(&cands, Some(Category::Market));
    assert!(groups.is_empty());
}

#[test]
fn categories_present_is_sorted_and_deduplicated() {
    let reg = registry();
    let cands = resolve("", &reg, &FuzzyConfig::default());
    assert_eq!(
        categories_present(&cands),
        vec![Category::Analytics, Category::Blockchain, Category::Theme]
    );
}

#[test]
fn flatten_walks_buckets_in_display_order() {
    let reg = registry();
    let cands = resolve("", &reg, &FuzzyConfig::default());
    let groups = group_by_category(&cands, None);
    let ids: Vec<&str> = flatten(&groups).iter().map(|c| c.entry.id.as_str()).collect();
    assert_eq!(ids, ["a1", "b1", "b2", "t1", "t2"]);
}
