//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use essay_coach_core::analysis::ReviewOptions;
use essay_coach_core::config::Config;
use essay_coach_core::lexicon::Thesaurus;

pub mod info;
pub mod review;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod split;
pub mod synonyms;

/// Read a file and validate its size against the configured limit.
///
/// Combines the file-read and size-validation steps that every analysis
/// command needs.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Load the synonym database the configuration points at.
///
/// Unreadable user-supplied tables fail fast rather than silently falling
/// back to the embedded data, so "no synonyms" always means the database
/// had none.
pub fn load_thesaurus(config: &Config) -> anyhow::Result<Thesaurus> {
    match config.thesaurus_path {
        Some(ref path) => Thesaurus::from_path(path)
            .with_context(|| format!("failed to load thesaurus from {path}")),
        None => Ok(Thesaurus::embedded()),
    }
}

/// Build review options from config, with an optional threshold override.
pub fn review_options(config: &Config, threshold_override: Option<usize>) -> ReviewOptions {
    let defaults = ReviewOptions::default();
    ReviewOptions {
        long_sentence_threshold: threshold_override
            .or(config.long_sentence_threshold)
            .unwrap_or(defaults.long_sentence_threshold),
        top_words: config.top_words.unwrap_or(defaults.top_words),
        max_synonyms: config.max_synonyms.unwrap_or(defaults.max_synonyms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_options_prefer_override_then_config() {
        let config = Config {
            long_sentence_threshold: Some(15),
            top_words: Some(3),
            ..Config::default()
        };
        let options = review_options(&config, Some(10));
        assert_eq!(options.long_sentence_threshold, 10);
        assert_eq!(options.top_words, 3);
        assert_eq!(options.max_synonyms, 5);

        let options = review_options(&config, None);
        assert_eq!(options.long_sentence_threshold, 15);
    }

    #[test]
    fn load_thesaurus_defaults_to_embedded() {
        let thesaurus = load_thesaurus(&Config::default()).unwrap();
        assert!(thesaurus.word_count() > 0);
    }

    #[test]
    fn load_thesaurus_fails_fast_on_bad_path() {
        let config = Config {
            thesaurus_path: Some("/nonexistent/thesaurus.json".into()),
            ..Config::default()
        };
        assert!(load_thesaurus(&config).is_err());
    }
}
