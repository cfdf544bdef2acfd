//! Error types for essay-coach-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the synonym database.
///
/// Database unavailability is fatal by contract: returning an empty synonym
/// set here would be indistinguishable from the legitimate "no synonyms
/// found" outcome.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The thesaurus file could not be read.
    #[error("failed to read thesaurus at {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: camino::Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The thesaurus content is not a valid synset table.
    #[error("invalid thesaurus data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Errors that can occur during essay analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text is empty or has no scorable content.
    #[error("no scorable text in input")]
    EmptyInput,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
