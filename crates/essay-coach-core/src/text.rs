//! Text processing utilities.
//!
//! Provides sentence segmentation and word tokenization for the analysis
//! modules. Segmentation is a character-by-character scan with context-based
//! boundary detection, which holds up better on learner prose than naive
//! punctuation splitting.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;

/// Regex for word tokens: maximal runs of word characters, matched anywhere.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Regex for decimal numbers (3.14, 2.5, etc.).
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("valid regex"));

/// Split text into sentences with abbreviation, initial, and decimal awareness.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let min_length = 3;
    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();

    for i in 0..chars.len() {
        current.push(chars[i]);

        if !is_sentence_terminator(chars[i]) {
            continue;
        }

        let context = extract_context(&chars, i);
        if is_sentence_boundary(&context, &current) {
            let sentence = current.trim().to_string();
            if sentence.len() >= min_length {
                sentences.push(sentence);
            }
            current.clear();
        }
    }

    // Remaining text
    let sentence = current.trim().to_string();
    if sentence.len() >= min_length {
        sentences.push(sentence);
    }

    sentences
}

/// Extract lowercase word tokens: maximal `\w+` runs, punctuation discarded.
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Word count of a sentence, using the same tokenization as [`extract_words`].
pub fn word_count(sentence: &str) -> usize {
    WORD_PATTERN.find_iter(sentence).count()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    word_before: String,
    char_after: Option<char>,
    is_end_of_text: bool,
}

fn extract_context(chars: &[char], pos: usize) -> SentenceContext {
    let before = get_word_before(chars, pos);

    let mut after_start = pos + 1;
    while after_start < chars.len() && chars[after_start].is_whitespace() {
        after_start += 1;
    }

    SentenceContext {
        punctuation: chars[pos],
        word_before: before,
        char_after: chars.get(after_start).copied(),
        is_end_of_text: pos == chars.len() - 1,
    }
}

fn get_word_before(chars: &[char], pos: usize) -> String {
    let mut i = pos;

    // Skip back past punctuation and whitespace
    while i > 0 {
        i -= 1;
        if !chars[i].is_whitespace() && chars[i] != '.' {
            break;
        }
    }

    // Collect the word
    let mut word_chars = Vec::new();
    loop {
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    word_chars.reverse();
    word_chars.iter().collect()
}

fn is_sentence_boundary(context: &SentenceContext, current_sentence: &str) -> bool {
    if context.is_end_of_text {
        return true;
    }

    // ! and ? are almost always boundaries
    if context.punctuation == '!' || context.punctuation == '?' {
        return true;
    }

    // For periods, apply heuristics
    if is_likely_abbreviation(&context.word_before) || is_likely_initial(&context.word_before) {
        return false;
    }

    if ends_in_decimal(current_sentence) || current_sentence.ends_with("...") {
        return false;
    }

    // Digit after period following a digit = decimal number (e.g., "3.14")
    if let Some(next_char) = context.char_after
        && next_char.is_ascii_digit()
        && context
            .word_before
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }

    // Uppercase next char = strong boundary signal
    if let Some(next_char) = context.char_after {
        if next_char.is_uppercase() {
            return true;
        }
        if next_char.is_lowercase() {
            return false;
        }
    }

    true
}

fn is_likely_abbreviation(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let word_clean = word.trim_end_matches('.');
    if is_abbreviation(word_clean) {
        return true;
    }
    // Single uppercase letter = likely initial/abbreviation
    word_clean.len() == 1 && word_clean.chars().next().is_some_and(|c| c.is_uppercase())
}

fn is_likely_initial(word: &str) -> bool {
    word.len() == 2
        && word.chars().next().is_some_and(|c| c.is_uppercase())
        && word.ends_with('.')
}

fn ends_in_decimal(sentence: &str) -> bool {
    let last_part: String = sentence
        .chars()
        .rev()
        .take(10)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    DECIMAL_PATTERN.is_match(&last_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("It was raining. We walked home.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "It was raining.");
        assert_eq!(sentences[1], "We walked home.");
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = split_sentences("Dr. Smith went to the store. He bought milk.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn decimal_numbers_not_split() {
        let sentences = split_sentences("The price is 3.14 dollars. That was cheap.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14"));
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Was it raining? It was! We got wet.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn extract_words_lowercases_and_strips_punctuation() {
        let words = extract_words("The rain was Big, and we were WET!");
        assert_eq!(words, vec!["the", "rain", "was", "big", "and", "we", "were", "wet"]);
    }

    #[test]
    fn extract_words_splits_contractions_on_apostrophe() {
        // "couldn't" tokenizes as two word runs, matching \w+ semantics
        let words = extract_words("We couldn't find it.");
        assert_eq!(words, vec!["we", "couldn", "t", "find", "it"]);
    }

    #[test]
    fn word_count_matches_extraction() {
        let s = "We couldn't find the bus stop.";
        assert_eq!(word_count(s), extract_words(s).len());
    }
}
