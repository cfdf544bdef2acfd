//! Document polarity scoring.
//!
//! Lexicon-based: each scored word carries a valence in [-1.0, 1.0], and the
//! document score is the mean over matched words, with negation inverting a
//! word's valence when a negator appears within the preceding three tokens.
//! Unmatched documents score 0.0 (neutral).

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::text;

static VALENCE: LazyLock<HashMap<String, f64>> = LazyLock::new(|| {
    let raw = include_str!("../data/sentiment.json");
    serde_json::from_str::<HashMap<String, f64>>(raw).expect("valid sentiment lexicon")
});

/// Score document polarity in [-1.0, 1.0].
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn polarity(input: &str) -> f64 {
    let tokens = text::extract_words(input);
    let mut sum = 0.0;
    let mut matched = 0usize;

    for i in 0..tokens.len() {
        let Some(&valence) = VALENCE.get(tokens[i].as_str()) else {
            continue;
        };

        // Negator within the preceding 1..=3 tokens flips the valence.
        let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
        sum += if negated { -valence } else { valence };
        matched += 1;
    }

    if matched == 0 {
        return 0.0;
    }
    (sum / matched as f64).clamp(-1.0, 1.0)
}

fn is_negator(token: &str) -> bool {
    // Contractions tokenize as two runs, so "couldn't" arrives as "couldn".
    matches!(
        token,
        "not" | "no" | "never" | "isn" | "wasn" | "aren" | "weren" | "won" | "couldn" | "didn"
            | "doesn" | "don" | "shouldn" | "wouldn" | "cannot" | "without"
    )
}
