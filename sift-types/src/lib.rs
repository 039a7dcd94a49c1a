//! Core types for the sift text-search engine.
//!
//! This crate provides the fundamental types that are shared across
//! the sift ecosystem. Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: the engine and any future
//!   persistence or frontend layer share the same records
//! - **Clean boundaries**: no circular dependencies between crates
//! - **Plain data**: no behavior beyond ordering and display

#![warn(missing_docs)]

use core::fmt;

/// Unique document identifier.
///
/// Documents are identified by a 64-bit unsigned integer, densely and
/// monotonically assigned from 0 in insertion order. Identifiers are
/// never reused within one index instance.
pub type DocId = u64;

/// One entry of a postings list: the occurrences of a single term
/// within a single document.
///
/// `positions` holds the positions at which the term occurred, in the
/// order they were recorded during ingestion. A posting is never empty:
/// it is only created when the term is first seen in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Posting {
    /// Identifier of the document this posting belongs to.
    pub id: DocId,
    /// Term positions within the document, in insertion order.
    pub positions: Vec<u64>,
}

impl Posting {
    /// Creates a posting for `id` with the given positions.
    #[inline]
    pub fn new(id: DocId, positions: Vec<u64>) -> Self {
        Self { id, positions }
    }
}

impl fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc={} occurrences={}", self.id, self.positions.len())
    }
}

/// A dictionary entry: one token together with its postings list.
///
/// `freq` counts every occurrence of the token across all documents,
/// so `freq == sum of |p.positions|` over the postings list. The
/// postings list is kept sorted by ascending document id and contains
/// at most one posting per document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The normalized, lowercased token this entry indexes.
    pub token: String,
    /// Total occurrences of the token across all documents.
    pub freq: u64,
    /// Postings sorted by ascending document id.
    pub postings: Vec<Posting>,
}

impl Term {
    /// Creates a term entry for `token` with no recorded occurrences.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            freq: 0,
            postings: Vec::new(),
        }
    }

    /// Number of documents the token occurs in.
    #[inline]
    #[must_use]
    pub fn doc_count(&self) -> usize {
        self.postings.len()
    }
}

/// A single ranked search hit.
///
/// Results are ordered by rank, with document id breaking ties so the
/// sort itself is deterministic. Callers must not depend on the order
/// of equal-rank results.
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// TF-IDF rank of the document for the query (higher is better).
    pub rank: f64,
    /// Number of query-term occurrences that matched in the document.
    pub token_count: usize,
    /// Human-readable name supplied when the document was added.
    pub document_name: String,
    /// Identifier of the matched document.
    pub document_id: DocId,
}

impl PartialEq for QueryResult {
    fn eq(&self, other: &Self) -> bool {
        self.document_id == other.document_id && self.rank == other.rank
    }
}

impl Eq for QueryResult {}

impl PartialOrd for QueryResult {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueryResult {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Primary: rank. Secondary: document id, so equal-rank results
        // compare deterministically.
        match self.rank.total_cmp(&other.rank) {
            core::cmp::Ordering::Equal => self.document_id.cmp(&other.document_id),
            ord => ord,
        }
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (doc={} rank={:.3} hits={})",
            self.document_name, self.document_id, self.rank, self.token_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: DocId, rank: f64) -> QueryResult {
        QueryResult {
            rank,
            token_count: 1,
            document_name: format!("doc{id}"),
            document_id: id,
        }
    }

    #[test]
    fn result_ordering() {
        let r1 = result(1, 0.9);
        let r2 = result(2, 0.5);
        let r3 = result(3, 0.9); // same rank as r1

        assert!(r1 > r2); // higher rank is "greater"
        assert_ne!(r1, r3); // different document = not equal

        // When ranks are equal, document id breaks the tie.
        assert_eq!(r1.cmp(&r3), core::cmp::Ordering::Less);
    }

    #[test]
    fn descending_sort_puts_best_first() {
        let mut results = vec![result(0, 0.2), result(1, 1.4), result(2, 0.7)];
        results.sort_unstable_by(|a, b| b.cmp(a));
        let ids: Vec<DocId> = results.iter().map(|r| r.document_id).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }

    #[test]
    fn term_counts_documents_not_occurrences() {
        let mut term = Term::new("hello");
        term.postings.push(Posting::new(0, vec![1, 4, 9]));
        term.postings.push(Posting::new(3, vec![2]));
        term.freq = 4;

        assert_eq!(term.doc_count(), 2);
        assert_eq!(term.token, "hello");
    }

    #[test]
    fn posting_equality_is_field_wise() {
        let a = Posting::new(7, vec![1, 2, 3]);
        let b = Posting::new(7, vec![1, 2, 3]);
        let c = Posting::new(7, vec![3, 2, 1]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
