//! Unicode normalization for the indexing pipeline.
//!
//! Every token that enters the index, and every atomic query term, goes
//! through the same deterministic pipeline so that lookups hit the same
//! dictionary keys that ingestion produced.
//!
//! # Pipeline
//!
//! 1. Canonical decomposition (NFD) — splits precomposed characters
//!    into base letter + combining marks.
//! 2. Mark stripping — combining marks are removed, folding accents to
//!    their base letters (`é` → `e`, `ü` → `u`).
//! 3. Compatibility decomposition (NFKD) — collapses compatibility
//!    variants such as ligatures (`ﬁ` → `fi`) and wide forms.
//!
//! Lowercasing and punctuation trimming are word-level concerns and
//! live in [`clean_word`], not in [`normalize`].

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Runs the canonical-decompose / strip-marks / compatibility-decompose
/// pipeline over `input`.
///
/// Rust strings are well-formed Unicode by construction, so this cannot
/// fail; malformed byte input is rejected at the tokenizer boundary
/// before it ever reaches this function.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .nfkd()
        .collect()
}

/// Canonicalizes a single word for indexing or lookup.
///
/// Returns the cleaned word, or an empty string when the input does not
/// survive cleaning (it normalized to nothing, or it contained an
/// internal space and is therefore not a single word).
///
/// After [`normalize`], the word is lowercased with typographic
/// right quotes mapped to their ASCII forms, trailing sentence
/// punctuation is stripped, and a leading `(` is dropped.
#[must_use]
pub fn clean_word(word: &str) -> String {
    let normalized = normalize(word);
    if normalized.is_empty() {
        return String::new();
    }

    let mut out: Vec<char> = Vec::with_capacity(normalized.len());
    for c in normalized.chars() {
        match c {
            ' ' => return String::new(),
            '\u{201D}' => out.push('"'),  // right double quotation mark
            '\u{2019}' => out.push('\''), // right single quotation mark
            _ => out.extend(c.to_lowercase()),
        }
    }

    while let Some(&last) = out.last() {
        match last {
            '.' | ',' | '!' | '?' | ':' | ';' | ')' => {
                out.pop();
            }
            _ => break,
        }
    }

    if out.len() > 1 && out[0] == '(' {
        out.remove(0);
    }

    out.into_iter().collect()
}
