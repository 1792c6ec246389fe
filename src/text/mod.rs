//! Text normalization and similarity scoring.
//!
//! All functions here are pure; the keyword sets are fixed configuration
//! data loaded once at process start.

pub mod sequence;

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common low-information words excluded before token comparison
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "that", "the", "to", "was", "will", "with", "am", "been", "being",
        "have", "had", "having", "do", "does", "did", "doing", "would", "should", "could", "ought",
        "i", "you", "we", "they", "what", "which", "who", "when", "where", "why", "how", "this",
        "these", "those", "but", "or", "can", "may", "might", "must", "shall",
    ])
});

/// Similarity weight given to token overlap (Jaccard index)
const JACCARD_WEIGHT: f64 = 0.7;

/// Similarity weight given to character-sequence matching
const SEQUENCE_WEIGHT: f64 = 0.3;

/// Normalize free text into comparison tokens.
///
/// Lowercases, strips everything that is not an ASCII letter, digit, or
/// whitespace, splits on whitespace, and drops stop words. Token order is
/// preserved. Any input is valid; empty or pure-punctuation input yields
/// an empty sequence.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Extract the most frequent meaningful keywords from text.
///
/// Only tokens longer than 2 characters are counted; ties are broken by
/// first-seen order. Diagnostic aid, not used by the classifier or the
/// duplicate detector.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    let tokens = normalize(text);

    // First-seen order matters for tie-breaking, so counts live in a Vec
    let mut frequencies: Vec<(String, usize)> = Vec::new();
    for token in tokens {
        if token.len() <= 2 {
            continue;
        }
        match frequencies.iter().position(|(word, _)| *word == token) {
            Some(index) => frequencies[index].1 += 1,
            None => frequencies.push((token, 1)),
        }
    }

    // Stable sort keeps first-seen order among equal counts
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies
        .into_iter()
        .take(top_n)
        .map(|(word, _)| word)
        .collect()
}

/// Score textual similarity between two raw texts.
///
/// Weighted blend of the Jaccard index over normalized token sets (70%)
/// and a Ratcliff/Obershelp sequence ratio over the lowercased raw texts
/// (30%). Returns 0.0 when either text normalizes to an empty token set,
/// and exactly 1.0 for identical non-empty inputs.
pub fn calculate_similarity(text1: &str, text2: &str) -> f64 {
    let tokens1: HashSet<String> = normalize(text1).into_iter().collect();
    let tokens2: HashSet<String> = normalize(text2).into_iter().collect();

    if tokens1.is_empty() || tokens2.is_empty() {
        return 0.0;
    }

    let intersection = tokens1.intersection(&tokens2).count();
    let union = tokens1.union(&tokens2).count();
    let jaccard = intersection as f64 / union as f64;

    let sequence = sequence::ratio(&text1.to_lowercase(), &text2.to_lowercase());

    JACCARD_WEIGHT * jaccard + SEQUENCE_WEIGHT * sequence
}

/// Threshold predicate over [`calculate_similarity`]
pub fn is_duplicate(new_text: &str, existing_text: &str, threshold: f64) -> bool {
    calculate_similarity(new_text, existing_text) >= threshold
}
