//! Synonym candidate resolution.

use std::collections::HashSet;

use crate::lexicon::SynonymSource;

/// Collect replacement candidates for `word` from the synonym database.
///
/// Lemmas are normalized (underscore separators become spaces), the query
/// word itself is excluded case-insensitively, and duplicates collapse to
/// their first occurrence. Ordering is deterministic: synsets in database
/// order, lemmas in synset order. At most `cap` candidates are returned;
/// an empty result means "no recommendation", not a failure.
#[tracing::instrument(skip(source))]
pub fn synonyms_for(source: &dyn SynonymSource, word: &str, cap: usize) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates: Vec<String> = Vec::new();

    for synset in source.synsets(word) {
        for lemma in &synset.lemmas {
            let normalized = lemma.replace('_', " ");
            if normalized.eq_ignore_ascii_case(word) {
                continue;
            }
            if seen.insert(normalized.to_lowercase()) {
                candidates.push(normalized);
            }
            if candidates.len() == cap {
                return candidates;
            }
        }
    }

    candidates
}
