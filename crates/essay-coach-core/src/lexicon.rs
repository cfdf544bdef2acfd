//! Synonym database access.
//!
//! The analysis engine never talks to a concrete thesaurus directly; it goes
//! through [`SynonymSource`], the capability handle the caller constructs
//! once and passes in. [`Thesaurus`] is the bundled implementation: a synset
//! table loaded either from the embedded starter data or from a user-supplied
//! JSON file. Loading happens once per process, queries are read-only, and a
//! load failure is fatal rather than degraded.

use std::collections::HashMap;
use std::sync::LazyLock;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, LexiconResult};

/// One sense of a word: the lemmas that share it, in database order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Synset {
    /// Lemma strings for this sense. Multiword lemmas use `_` separators.
    pub lemmas: Vec<String>,
}

/// Read-only synonym lookup by word.
pub trait SynonymSource {
    /// All synsets for `word` (case-insensitive). Empty when unknown.
    fn synsets(&self, word: &str) -> &[Synset];
}

static EMBEDDED: LazyLock<HashMap<String, Vec<Synset>>> = LazyLock::new(|| {
    let raw = include_str!("../data/thesaurus.json");
    serde_json::from_str(raw).expect("valid embedded thesaurus")
});

/// Synset table keyed by lowercase headword.
#[derive(Debug, Clone)]
pub struct Thesaurus {
    entries: HashMap<String, Vec<Synset>>,
}

impl Thesaurus {
    /// The embedded starter thesaurus, tuned for common learner vocabulary.
    pub fn embedded() -> Self {
        Self {
            entries: EMBEDDED.clone(),
        }
    }

    /// Load a thesaurus from a JSON synset table on disk.
    ///
    /// The file must map headwords to arrays of synsets, each synset an
    /// array of lemma strings. Any read or parse failure is returned as-is;
    /// there is no fallback to the embedded data.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn from_path(path: &Utf8Path) -> LexiconResult<Self> {
        let raw =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| LexiconError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let entries: HashMap<String, Vec<Synset>> = serde_json::from_str(&raw)?;
        tracing::info!(words = entries.len(), "thesaurus loaded");
        Ok(Self { entries })
    }

    /// Number of headwords in the table.
    pub fn word_count(&self) -> usize {
        self.entries.len()
    }
}

impl SynonymSource for Thesaurus {
    fn synsets(&self, word: &str) -> &[Synset] {
        self.entries
            .get(&word.to_lowercase())
            .map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_thesaurus_loads() {
        let thesaurus = Thesaurus::embedded();
        assert!(thesaurus.word_count() > 0);
        assert!(!thesaurus.synsets("happy").is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let thesaurus = Thesaurus::embedded();
        assert_eq!(
            thesaurus.synsets("Happy").len(),
            thesaurus.synsets("happy").len()
        );
    }

    #[test]
    fn unknown_word_yields_empty() {
        let thesaurus = Thesaurus::embedded();
        assert!(thesaurus.synsets("zyzzyva").is_empty());
    }

    #[test]
    fn from_path_reads_a_synset_table() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("thesaurus.json");
        std::fs::write(&path, r#"{"big": [["big", "large", "sizable"]]}"#).unwrap();

        let path = camino::Utf8PathBuf::try_from(path).unwrap();
        let thesaurus = Thesaurus::from_path(&path).unwrap();
        assert_eq!(thesaurus.word_count(), 1);
        assert_eq!(thesaurus.synsets("big")[0].lemmas.len(), 3);
    }

    #[test]
    fn missing_file_is_fatal() {
        let result = Thesaurus::from_path(Utf8Path::new("/nonexistent/thesaurus.json"));
        assert!(matches!(result, Err(LexiconError::Read { .. })));
    }

    #[test]
    fn malformed_json_is_fatal() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let path = camino::Utf8PathBuf::try_from(path).unwrap();
        assert!(matches!(
            Thesaurus::from_path(&path),
            Err(LexiconError::Parse(_))
        ));
    }
}
