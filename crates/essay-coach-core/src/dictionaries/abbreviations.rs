//! Abbreviation dictionary for sentence boundary detection.
//!
//! Abbreviations that should not trigger sentence breaks when followed by a
//! period. Skewed toward what shows up in student essays: titles, dates,
//! places, and the Latin shorthand teachers love to circle.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations that should not trigger sentence breaks.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "miss", "dr", "prof", "rev", "sr", "jr", "capt", "col", "gen", "lt",
        "sgt", "pres", "gov",
    ]);

    // Latin shorthand
    set.extend(["etc", "vs", "e.g", "i.e", "et al", "cf", "n.b", "p.s"]);

    // Time and dates
    set.extend([
        "a.m", "p.m", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
        "dec", "mon", "tue", "tues", "wed", "thu", "thurs", "fri", "sat", "sun",
    ]);

    // Places
    set.extend([
        "st", "ave", "blvd", "rd", "apt", "dept", "u.s", "u.k", "u.s.a", "e.u",
    ]);

    // Measurements and counting
    set.extend([
        "oz", "lb", "lbs", "kg", "cm", "mm", "km", "ft", "mi", "no", "nos", "p", "pp", "approx",
        "min", "max",
    ]);

    set
});

/// Check if a word is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    let trimmed = word_lower.trim_matches('.');
    ABBREVIATIONS.contains(trimmed)
}
