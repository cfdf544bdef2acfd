//! Essay review analysis.
//!
//! Three independent components — lexical diagnostics, synonym resolution,
//! and long-sentence splitting — composed by [`run_essay_review`]. The
//! components never call each other; the orchestrator owns the sequencing
//! and the stop-word set.

pub mod diagnostics;
pub mod reports;
pub mod splitter;
pub mod synonyms;

pub use reports::EssayReport;

use crate::error::{AnalysisError, AnalysisResult};
use crate::lexicon::SynonymSource;
use crate::markdown;
use crate::text;
use crate::word_lists::STOP_WORDS;

use reports::{LongSentenceReview, VocabularySuggestion};

/// Default word-count cutoff above which a sentence is "long".
pub const DEFAULT_LONG_SENTENCE_THRESHOLD: usize = 20;

/// Default number of frequent words promoted to synonym lookup.
pub const DEFAULT_TOP_WORDS: usize = 5;

/// Default cap on synonym candidates per word.
pub const DEFAULT_MAX_SYNONYMS: usize = 5;

/// Tunable knobs for a review run.
#[derive(Debug, Clone)]
pub struct ReviewOptions {
    /// Word-count cutoff for classifying a sentence as long.
    pub long_sentence_threshold: usize,
    /// How many top frequent words get synonym lookups.
    pub top_words: usize,
    /// Cap on synonym candidates per word.
    pub max_synonyms: usize,
}

impl Default for ReviewOptions {
    fn default() -> Self {
        Self {
            long_sentence_threshold: DEFAULT_LONG_SENTENCE_THRESHOLD,
            top_words: DEFAULT_TOP_WORDS,
            max_synonyms: DEFAULT_MAX_SYNONYMS,
        }
    }
}

/// Run a full essay review.
///
/// # Arguments
///
/// * `input` — The essay text.
/// * `strip_md` — If `true`, strip markdown formatting before analysis.
/// * `source` — The synonym database handle; the caller must have loaded it.
/// * `options` — Thresholds and caps.
///
/// Diagnostics run over the whole text, synonym lookup over the top
/// frequent content words, and the splitter over every sentence whose word
/// count exceeds the threshold. A whitespace-only submission is rejected as
/// [`AnalysisError::EmptyInput`] before any component runs.
#[tracing::instrument(skip(input, source), fields(text_len = input.len(), strip_md))]
pub fn run_essay_review(
    input: &str,
    strip_md: bool,
    source: &dyn SynonymSource,
    options: &ReviewOptions,
) -> AnalysisResult<EssayReport> {
    let prose = if strip_md {
        markdown::strip_to_prose(input)
    } else {
        input.to_string()
    };

    if prose.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let diagnostics = diagnostics::analyze_diagnostics(&prose, &STOP_WORDS, options.top_words);

    let vocabulary: Vec<VocabularySuggestion> = diagnostics
        .top_frequent
        .iter()
        .map(|entry| VocabularySuggestion {
            word: entry.word.clone(),
            count: entry.count,
            synonyms: synonyms::synonyms_for(source, &entry.word, options.max_synonyms),
        })
        .collect();

    let long_sentences: Vec<LongSentenceReview> = text::split_sentences(&prose)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, sentence)| {
            let word_count = text::word_count(&sentence);
            (word_count > options.long_sentence_threshold).then(|| LongSentenceReview {
                sentence_num: idx + 1,
                word_count,
                split: splitter::split_long_sentence(&sentence),
                original: sentence,
            })
        })
        .collect();

    Ok(EssayReport {
        diagnostics,
        vocabulary,
        long_sentence_threshold: options.long_sentence_threshold,
        long_sentences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Thesaurus;

    const DEMO_ESSAY: &str = "The rain was so big that our clothes were all wet, and we \
        couldn't find the bus stop because it was too dark, but finally we walked home \
        tiredly. It was a good day and we had a good time.";

    #[test]
    fn review_runs_on_demo_essay() {
        let thesaurus = Thesaurus::embedded();
        let report =
            run_essay_review(DEMO_ESSAY, false, &thesaurus, &ReviewOptions::default()).unwrap();

        assert!(report.diagnostics.total_words > 20);
        assert!(!report.vocabulary.is_empty());

        // The first sentence is over the threshold and splittable
        assert_eq!(report.long_sentences.len(), 1);
        let long = &report.long_sentences[0];
        assert_eq!(long.sentence_num, 1);
        let clauses = long.split.as_ref().unwrap();
        assert!(clauses.len() >= 3);
        assert!(clauses[1].starts_with("And"));
    }

    #[test]
    fn short_sentences_are_not_reviewed() {
        let thesaurus = Thesaurus::embedded();
        let report = run_essay_review(
            "I am happy. It was fun.",
            false,
            &thesaurus,
            &ReviewOptions::default(),
        )
        .unwrap();
        assert!(report.long_sentences.is_empty());
    }

    #[test]
    fn unsplittable_long_sentence_reports_none() {
        let thesaurus = Thesaurus::embedded();
        // 21+ words, no comma-conjunction boundary anywhere
        let text = "Yesterday morning all of the students in our small school walked \
                    together down the long road toward the old library building near the park.";
        let report =
            run_essay_review(text, false, &thesaurus, &ReviewOptions::default()).unwrap();
        assert_eq!(report.long_sentences.len(), 1);
        assert!(report.long_sentences[0].split.is_none());
    }

    #[test]
    fn empty_input_errors() {
        let thesaurus = Thesaurus::embedded();
        let result = run_essay_review("   ", false, &thesaurus, &ReviewOptions::default());
        assert!(matches!(result, Err(AnalysisError::EmptyInput)));
    }

    #[test]
    fn threshold_is_configurable() {
        let thesaurus = Thesaurus::embedded();
        let options = ReviewOptions {
            long_sentence_threshold: 3,
            ..ReviewOptions::default()
        };
        let report =
            run_essay_review("We walked home together slowly.", false, &thesaurus, &options)
                .unwrap();
        assert_eq!(report.long_sentences.len(), 1);
    }

    #[test]
    fn markdown_stripping_works() {
        let thesaurus = Thesaurus::embedded();
        let md = "# My Essay\n\nIt was a good day and we had fun.\n\n```text\nnot prose\n```";
        let report =
            run_essay_review(md, true, &thesaurus, &ReviewOptions::default()).unwrap();
        assert!(report.diagnostics.total_words > 0);
        assert!(!report
            .diagnostics
            .top_frequent
            .iter()
            .any(|e| e.word == "prose"));
    }

    #[test]
    fn vocabulary_entries_never_contain_their_own_word() {
        let thesaurus = Thesaurus::embedded();
        let report =
            run_essay_review(DEMO_ESSAY, false, &thesaurus, &ReviewOptions::default()).unwrap();
        for suggestion in &report.vocabulary {
            assert!(suggestion.synonyms.len() <= DEFAULT_MAX_SYNONYMS);
            assert!(suggestion
                .synonyms
                .iter()
                .all(|s| !s.eq_ignore_ascii_case(&suggestion.word)));
        }
    }
}
