//! Long-sentence splitting.
//!
//! Detects conjunction-anchored break points and rewrites one long sentence
//! into a sequence of shorter standalone sentences. The boundary pattern is
//! a comma, at most one whitespace character, and one of the recognized
//! conjunctions ending at a word boundary (so ", android" never anchors an
//! "and" split). The sentence is first scanned into a tagged sequence of
//! content and boundary segments; "no boundary found" is the explicit
//! `None` branch rather than a length check on a regex split.

use regex::Regex;
use std::sync::LazyLock;

/// Boundary pattern: comma, optional single whitespace, conjunction.
///
/// The alternation must stay in sync with [`crate::word_lists::SPLIT_CONJUNCTIONS`].
static BOUNDARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i),\s?(and|but|so|because|although|since|while)\b").expect("valid regex")
});

/// One segment of a scanned sentence.
#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    /// Text between boundaries (may be empty).
    Content(&'a str),
    /// The bare conjunction word of a matched boundary.
    Boundary(&'a str),
}

/// Scan a sentence into alternating content and boundary segments.
///
/// Always returns an odd-length sequence starting and ending with
/// `Content`; a sentence without boundaries is a single content segment.
fn scan_segments(sentence: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for captures in BOUNDARY_PATTERN.captures_iter(sentence) {
        let whole = captures.get(0).expect("match exists");
        let conjunction = captures.get(1).expect("conjunction group");
        segments.push(Segment::Content(&sentence[last..whole.start()]));
        segments.push(Segment::Boundary(conjunction.as_str()));
        last = whole.end();
    }

    segments.push(Segment::Content(&sentence[last..]));
    segments
}

/// Split a long sentence at conjunction boundaries.
///
/// Returns the reconstructed shorter sentences in order, each boundary's
/// conjunction promoted to clause-initial position and capitalized. Returns
/// `None` when the sentence has no boundary; callers surface that as
/// "cannot automatically split".
#[tracing::instrument(skip_all, fields(len = sentence.len()))]
pub fn split_long_sentence(sentence: &str) -> Option<Vec<String>> {
    let segments = scan_segments(sentence);
    if segments.len() == 1 {
        return None;
    }

    let mut clauses = Vec::new();
    let mut current = match segments[0] {
        Segment::Content(first) => first.trim().to_string(),
        Segment::Boundary(_) => String::new(),
    };

    let mut i = 1;
    while i + 1 < segments.len() {
        let (Segment::Boundary(conjunction), Segment::Content(next)) =
            (&segments[i], &segments[i + 1])
        else {
            break;
        };

        clauses.push(close_clause(&current));
        current = join_clause(conjunction, next.trim());
        i += 2;
    }

    clauses.push(current.trim().to_string());
    Some(clauses)
}

/// Terminate a completed clause, avoiding doubled terminal punctuation.
fn close_clause(clause: &str) -> String {
    let trimmed = clause.trim();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}

/// Start a new clause with the capitalized conjunction.
fn join_clause(conjunction: &str, rest: &str) -> String {
    let lead = capitalize(conjunction);
    if rest.is_empty() {
        lead
    } else {
        format!("{lead} {rest}")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
    })
}
