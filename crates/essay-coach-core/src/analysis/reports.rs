//! Report structs for essay review.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full essay review combining diagnostics, vocabulary upgrades, and
/// long-sentence split plans.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EssayReport {
    /// Whole-text lexical diagnostics.
    pub diagnostics: DiagnosticsReport,
    /// Upgrade suggestions for the most frequent content words.
    pub vocabulary: Vec<VocabularySuggestion>,
    /// Word-count cutoff used to classify sentences as long.
    pub long_sentence_threshold: usize,
    /// Review of every sentence over the threshold, in document order.
    pub long_sentences: Vec<LongSentenceReview>,
}

/// Whole-text lexical diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticsReport {
    /// Document polarity in [-1.0, 1.0].
    pub polarity: f64,
    /// Total word tokens, before stop-word filtering.
    pub total_words: usize,
    /// Distinct words divided by total words (0 for empty input).
    pub distinct_ratio: f64,
    /// Highest-count content words, descending; ties in first-seen order.
    pub top_frequent: Vec<FrequencyEntry>,
}

/// A word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyEntry {
    /// The word.
    pub word: String,
    /// Occurrence count.
    pub count: usize,
}

/// A frequent word with candidate replacements.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VocabularySuggestion {
    /// The overused word.
    pub word: String,
    /// Occurrence count.
    pub count: usize,
    /// Candidate replacements. Empty means no recommendation available.
    pub synonyms: Vec<String>,
}

/// A long sentence with its split plan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LongSentenceReview {
    /// Sentence number (1-indexed, whole document).
    pub sentence_num: usize,
    /// Word count.
    pub word_count: usize,
    /// The original sentence text.
    pub original: String,
    /// Reconstructed shorter sentences, or `None` when no conjunction
    /// boundary exists and the sentence needs manual revision.
    pub split: Option<Vec<String>>,
}
