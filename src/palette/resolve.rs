use serde::{Deserialize, Serialize};

use super::registry::{CommandEntry, CommandRegistry};

/// Scoring knobs for the fuzzy resolver. Scores live in [0, 1] with 0 as an
/// exact match; entries whose best field score exceeds `threshold` are
/// dropped. Field weights multiply the raw score, so a weight above 1.0
/// makes matches in that field rank (and filter) worse.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    pub threshold: f64,
    pub title_weight: f64,
    pub keyword_weight: f64,
    pub category_weight: f64,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            title_weight: 1.0,
            keyword_weight: 1.0,
            category_weight: 1.25,
        }
    }
}

/// One ranked hit. Produced fresh per query, never stored.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'a> {
    pub entry: &'a CommandEntry,
    pub score: f64,
}

/// Rank registry entries against a free-text query.
///
/// Pure in (query, registry, config): the output order is fully determined
/// by scores with registration order as the tie-break (stable sort), so the
/// same inputs always produce the same sequence.
pub fn resolve<'a>(
    query: &str,
    registry: &'a CommandRegistry,
    cfg: &FuzzyConfig,
) -> Vec<Candidate<'a>> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return registry
            .all()
            .iter()
            .map(|entry| Candidate { entry, score: 0.0 })
            .collect();
    }

    let mut out: Vec<Candidate<'a>> = registry
        .all()
        .iter()
        .filter_map(|entry| {
            let score = entry_score(&q, entry, cfg);
            (score <= cfg.threshold).then_some(Candidate { entry, score })
        })
        .collect();

    out.sort_by(|a, b| a.score.total_cmp(&b.score));
    out
}

fn entry_score(q: &str, entry: &CommandEntry, cfg: &FuzzyConfig) -> f64 {
    let mut best = weighted(text_score(q, &entry.title), cfg.title_weight);
    for kw in &entry.keywords {
        best = best.min(weighted(text_score(q, kw), cfg.keyword_weight));
    }
    best.min(weighted(
        text_score(q, entry.category.as_str()),
        cfg.category_weight,
    ))
}

fn weighted(score: f64, weight: f64) -> f64 {
    (score * weight).min(1.0)
}

/// Distance of a lowercased query against one field, in [0, 1].
///
/// Exact token matches are free, token prefixes are nearly free (scaled by
/// how much of the token is still untyped), everything else falls back to
/// normalized Damerau-Levenshtein over the whole field and its tokens.
fn text_score(q: &str, field: &str) -> f64 {
    let f = field.to_lowercase();
    if f == q {
        return 0.0;
    }

    let mut best = 1.0 - strsim::normalized_damerau_levenshtein(q, &f);
    for token in f.split_whitespace() {
        let s = if token == q {
            0.0
        } else if token.starts_with(q) {
            0.3 * (1.0 - q.chars().count() as f64 / token.chars().count() as f64)
        } else {
            1.0 - strsim::normalized_damerau_levenshtein(q, token)
        };
        if s < best {
            best = s;
        }
    }
    best
}

#[cfg(test)]
#[path = "../tests/palette/resolve_tests.rs"]
mod tests;
