//! Curated word lists for essay analysis.
//!
//! Stop words excluded from vocabulary-frequency ranking, and the
//! conjunctions that anchor long-sentence split points.

use std::collections::HashSet;
use std::sync::LazyLock;

/// High-frequency function words excluded from frequency ranking.
///
/// Read-only process-wide constant. Diagnostics take the set as a parameter
/// so tests can swap it out (e.g., an empty set).
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "up", "about", "into", "over", "after", "is", "are", "was", "were", "be", "been",
        "being", "have", "has", "had", "do", "does", "did", "it", "this", "that", "these", "those",
        "i", "you", "he", "she", "we", "they", "my", "your", "his", "her", "our", "their", "me",
        "him", "us", "them", "so", "very", "really",
    ]
    .into_iter()
    .collect()
});

/// Conjunctions recognized as split anchors when preceded by a comma.
///
/// Covers the coordinating and subordinating conjunctions that mark a
/// logical break point in a learner's run-on sentence.
pub static SPLIT_CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["and", "but", "so", "because", "although", "since", "while"]
        .into_iter()
        .collect()
});
