//! Core library for essay-coach.
//!
//! Analyzes learner-written English prose and produces actionable feedback:
//! overused vocabulary paired with higher-register synonym candidates, and
//! long sentences decomposed into shorter standalone sentences at
//! conjunction boundaries.
//!
//! # Modules
//!
//! - [`analysis`] - Diagnostics, synonym resolution, sentence splitting
//! - [`config`] - Configuration loading and management
//! - [`lexicon`] - Synonym database access
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use essay_coach_core::analysis::{run_essay_review, ReviewOptions};
//! use essay_coach_core::lexicon::Thesaurus;
//!
//! let thesaurus = Thesaurus::embedded();
//! let report = run_essay_review(
//!     "It was a good day and we had a good time.",
//!     false,
//!     &thesaurus,
//!     &ReviewOptions::default(),
//! )
//! .expect("non-empty input");
//!
//! println!("{} words", report.diagnostics.total_words);
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod config;

pub mod dictionaries;

pub mod error;

pub mod lexicon;

pub mod markdown;

pub mod sentiment;

pub mod text;

pub mod word_lists;

pub use analysis::{EssayReport, ReviewOptions, run_essay_review};

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult, LexiconError};

pub use lexicon::{SynonymSource, Thesaurus};

/// Default cap on input size (5 MiB) shared by the CLI and MCP server.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
