//! Whole-text lexical diagnostics.
//!
//! Token counts, type-token ratio, polarity, and the frequency ranking that
//! feeds synonym lookup.

use std::collections::{HashMap, HashSet};

use crate::sentiment;
use crate::text;

use super::reports::{DiagnosticsReport, FrequencyEntry};

/// Tokens shorter than this never count toward frequency ranking.
const MIN_CONTENT_LENGTH: usize = 3;

/// Analyze text: polarity, word totals, lexical diversity, top frequent words.
///
/// `stop_words` is injected so callers (and tests) control the exclusion
/// set. `total_words` and `distinct_ratio` use the unfiltered token list;
/// only the frequency ranking applies stop-word and length filtering.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn analyze_diagnostics(
    input: &str,
    stop_words: &HashSet<&str>,
    top_n: usize,
) -> DiagnosticsReport {
    let tokens = text::extract_words(input);
    let total_words = tokens.len();

    if total_words == 0 {
        return DiagnosticsReport {
            polarity: 0.0,
            total_words: 0,
            distinct_ratio: 0.0,
            top_frequent: Vec::new(),
        };
    }

    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let distinct_ratio = distinct.len() as f64 / total_words as f64;

    DiagnosticsReport {
        polarity: sentiment::polarity(input),
        total_words,
        distinct_ratio,
        top_frequent: rank_frequent(&tokens, stop_words, top_n),
    }
}

/// Rank content words by count, descending; ties keep first-occurrence order.
fn rank_frequent(tokens: &[String], stop_words: &HashSet<&str>, top_n: usize) -> Vec<FrequencyEntry> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for token in tokens {
        let word = token.as_str();
        if stop_words.contains(word) || word.len() < MIN_CONTENT_LENGTH {
            continue;
        }
        let entry = counts.entry(word).or_insert(0);
        if *entry == 0 {
            first_seen.push(word);
        }
        *entry += 1;
    }

    // Stable sort keeps first-seen order within equal counts.
    let mut ranked: Vec<FrequencyEntry> = first_seen
        .into_iter()
        .map(|word| FrequencyEntry {
            word: word.to_string(),
            count: counts[word],
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);
    ranked
}
