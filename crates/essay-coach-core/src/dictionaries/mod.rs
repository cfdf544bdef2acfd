//! Dictionaries for text analysis.
//!
//! Curated word sets backing sentence segmentation.

pub mod abbreviations;
