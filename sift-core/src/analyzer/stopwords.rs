//! English stop-word filtering.
//!
//! High-frequency function words carry no ranking signal and would
//! dominate every postings list, so the tokenizers drop them before
//! they reach the index. The set is fixed at process start and never
//! mutated; changing it invalidates previously built indexes, so treat
//! it as part of the on-disk format.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// The stop-word list, case-folded.
///
/// Membership is checked against already-cleaned tokens, which are
/// lowercase by construction.
static STOP_WORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "i",
        "me",
        "my",
        "myself",
        "we",
        "our",
        "ours",
        "ourselves",
        "you",
        "your",
        "yours",
        "yourself",
        "yourselves",
        "he",
        "him",
        "his",
        "himself",
        "she",
        "her",
        "hers",
        "herself",
        "it",
        "its",
        "itself",
        "they",
        "them",
        "their",
        "theirs",
        "themselves",
        "what",
        "which",
        "who",
        "whom",
        "this",
        "that",
        "these",
        "those",
        "am",
        "is",
        "are",
        "was",
        "were",
        "be",
        "been",
        "being",
        "have",
        "has",
        "had",
        "having",
        "do",
        "does",
        "did",
        "doing",
        "a",
        "an",
        "the",
        "and",
        "but",
        "if",
        "or",
        "because",
        "as",
        "until",
        "while",
        "of",
        "at",
        "by",
        "for",
        "with",
        "about",
        "against",
        "between",
        "into",
        "through",
        "during",
        "before",
        "after",
        "above",
        "below",
        "to",
        "from",
        "up",
        "down",
        "in",
        "out",
        "on",
        "off",
        "over",
        "under",
        "again",
        "further",
        "then",
        "once",
        "here",
        "there",
        "when",
        "where",
        "why",
        "how",
        "all",
        "any",
        "both",
        "each",
        "few",
        "more",
        "most",
        "other",
        "some",
        "such",
        "no",
        "nor",
        "not",
        "only",
        "own",
        "same",
        "so",
        "than",
        "too",
        "very",
        "s",
        "t",
        "can",
        "will",
        "just",
        "don",
        "should",
        "now",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `term` is a stop word.
///
/// O(1). Expects the already-cleaned (lowercase) form of the term.
#[inline]
#[must_use]
pub fn is_stop_word(term: &str) -> bool {
    STOP_WORDS.contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_function_words_are_stopped() {
        for word in ["the", "a", "an", "of", "is", "not", "very", "just"] {
            assert!(is_stop_word(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn content_words_pass() {
        for word in ["search", "index", "token", "hello", "rust"] {
            assert!(!is_stop_word(word), "{word} should not be a stop word");
        }
    }

    #[test]
    fn membership_is_case_sensitive_on_cleaned_input() {
        // Callers clean (and thereby lowercase) before the check.
        assert!(!is_stop_word("The"));
        assert!(is_stop_word("the"));
    }

    #[test]
    fn contraction_fragments_are_stopped() {
        // "don't" cleans around the apostrophe in some pipelines,
        // leaving the bare fragments behind.
        assert!(is_stop_word("s"));
        assert!(is_stop_word("t"));
        assert!(is_stop_word("don"));
    }
}
