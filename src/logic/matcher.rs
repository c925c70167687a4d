//! Fuzzy name matching for the autocomplete box.
//!
//! Ranking:
//! 1. Substring of the folded full or display name: 100 at a word start, 90 mid-word.
//! 2. Otherwise the best Jaro-Winkler similarity (x100) against the full name and
//!    each of its words, kept when >= [`MIN_SIMILARITY`] and scaled by
//!    [`FUZZY_WEIGHT`] so it always ranks below any substring hit.
//!
//! Sorting is stable, so equal scores keep dataset order.

use crate::logic::dataset::PlayerDataset;
use crate::logic::lookup::fold_name;
use crate::models::{PlayerId, PlayerRecord};
use rapidfuzz::distance::jaro_winkler;
use serde::Serialize;

/// Queries shorter than this (after folding) return nothing.
pub const MIN_QUERY_CHARS: usize = 2;

/// Similarity cut-off for non-substring matches (0-100).
pub const MIN_SIMILARITY: f64 = 80.0;

/// Scale applied to similarity scores; keeps them under the substring scores.
pub const FUZZY_WEIGHT: f64 = 0.8;

const WORD_START_SCORE: f64 = 100.0;
const SUBSTRING_SCORE: f64 = 90.0;

/// Autocomplete candidate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Suggestion {
    pub player_id: PlayerId,
    pub short_name: String,
    pub long_name: String,
    pub club_name: String,
    pub player_face_url: String,
    pub score: f64,
}

impl Suggestion {
    fn new(p: &PlayerRecord, score: f64) -> Self {
        Self {
            player_id: p.id,
            short_name: p.short_name.clone(),
            long_name: p.name.clone(),
            club_name: p.club.clone(),
            player_face_url: p.face_url.clone(),
            score,
        }
    }
}

/// Up to `limit` players matching `partial`, best first.
pub fn suggest(dataset: &PlayerDataset, partial: &str, limit: usize) -> Vec<Suggestion> {
    let query = fold_name(partial);
    if limit == 0 || query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut scored: Vec<(&PlayerRecord, f64)> = dataset
        .players()
        .iter()
        .filter_map(|p| score(&query, p).map(|s| (&**p, s)))
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(limit)
        .map(|(p, s)| Suggestion::new(p, s))
        .collect()
}

/// Names only, same ranking as [`suggest`].
pub fn suggest_names(dataset: &PlayerDataset, partial: &str, limit: usize) -> Vec<String> {
    suggest(dataset, partial, limit)
        .into_iter()
        .map(|s| s.long_name)
        .collect()
}

fn score(query: &str, p: &PlayerRecord) -> Option<f64> {
    let short = fold_name(&p.short_name);
    let names = [p.search_name.as_str(), short.as_str()];

    let substring = names
        .iter()
        .filter_map(|n| substring_score(query, n))
        .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))));
    if substring.is_some() {
        return substring;
    }

    let best = std::iter::once(p.search_name.as_str())
        .chain(p.search_name.split(' '))
        .map(|candidate| similarity(query, candidate))
        .fold(0.0_f64, f64::max);
    (best >= MIN_SIMILARITY).then_some(best * FUZZY_WEIGHT)
}

fn substring_score(query: &str, name: &str) -> Option<f64> {
    let mut best = None;
    for (idx, _) in name.match_indices(query) {
        let at_word_start = name[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        if at_word_start {
            return Some(WORD_START_SCORE);
        }
        best = Some(SUBSTRING_SCORE);
    }
    best
}

fn similarity(query: &str, candidate: &str) -> f64 {
    jaro_winkler::normalized_similarity(query.chars(), candidate.chars()) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> PlayerDataset {
        PlayerDataset::from_records(vec![
            PlayerRecord::new(1, "Kylian Mbappé Lottin", "France", "ST", 25, 91, "Real Madrid", "La Liga")
                .with_short_name("K. Mbappé"),
            PlayerRecord::new(2, "Bukayo Saka", "England", "RW", 22, 88, "Arsenal", "Premier League"),
            PlayerRecord::new(3, "Harry Kane", "England", "ST", 30, 90, "FC Bayern München", "Bundesliga"),
            PlayerRecord::new(4, "Kai Havertz", "Germany", "ST", 24, 84, "Arsenal", "Premier League"),
            PlayerRecord::new(5, "Alessandro Bastoni", "Italy", "CB", 25, 86, "Inter", "Serie A"),
        ])
        .unwrap()
    }

    #[test]
    fn test_short_query_returns_nothing() {
        let ds = dataset();
        assert!(suggest(&ds, "", 8).is_empty());
        assert!(suggest(&ds, "  k ", 8).is_empty());
    }

    #[test]
    fn test_zero_limit_returns_nothing() {
        assert!(suggest(&dataset(), "kane", 0).is_empty());
    }

    #[test]
    fn test_substring_is_case_and_accent_insensitive() {
        let ds = dataset();
        assert_eq!(suggest_names(&ds, "MBAPPÉ", 8), vec!["Kylian Mbappé Lottin"]);
        assert_eq!(suggest_names(&ds, "mbappe", 8), vec!["Kylian Mbappé Lottin"]);
    }

    #[test]
    fn test_word_start_beats_mid_word_then_dataset_order() {
        let ds = dataset();
        // Kane and Kai match at a word start, Saka only mid-word.
        let names = suggest_names(&ds, "ka", 8);
        assert_eq!(names[0], "Harry Kane");
        assert_eq!(names[1], "Kai Havertz");
        assert!(names.contains(&"Bukayo Saka".to_string()));
    }

    #[test]
    fn test_typo_matches_by_similarity() {
        let ds = dataset();
        let hits = suggest(&ds, "bastonni", 8);
        assert_eq!(hits[0].long_name, "Alessandro Bastoni");
        assert!(hits[0].score < SUBSTRING_SCORE);
    }

    #[test]
    fn test_substring_ranks_above_similarity() {
        let ds = dataset();
        for hit in suggest(&ds, "saka", 8).iter().skip(1) {
            assert!(hit.score < WORD_START_SCORE);
        }
        assert_eq!(suggest_names(&ds, "saka", 8)[0], "Bukayo Saka");
    }

    #[test]
    fn test_limit_and_garbage_input() {
        let ds = dataset();
        assert!(suggest(&ds, "a", 8).is_empty());
        assert_eq!(suggest(&ds, "an", 2).len(), 2);
        assert!(suggest(&ds, "\u{1F600}\u{0000}??", 8).is_empty());
        assert!(suggest(&ds, "qqqqxxxx", 8).is_empty());
    }
}
