//! Index type and bookkeeping accessors.

use rustc_hash::FxHashMap;
use sift_types::{DocId, Term};

/// In-memory inverted index.
///
/// Owns the term dictionary, every postings list, and the per-document
/// statistics used for scoring. Mutation (`add`, `add_doc`) takes
/// `&mut self` and searches take `&self`, so exclusive-writer /
/// shared-reader discipline is enforced by the borrow checker; there
/// are no internal locks.
pub struct Index {
    /// Term dictionary keyed by normalized token.
    pub(crate) terms: FxHashMap<String, Term>,
    /// Document names in insertion order; a document's id is its slot.
    pub(crate) doc_names: Vec<String>,
    /// Per-document maximum raw term frequency, always >= 1.0.
    pub(crate) document_max_freq: Vec<f64>,
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}

impl Index {
    /// Creates a new, empty index.
    pub fn new() -> Self {
        Self {
            terms: FxHashMap::default(),
            doc_names: Vec::new(),
            document_max_freq: Vec::new(),
        }
    }

    /// Number of documents that have been added.
    #[inline]
    #[must_use]
    pub fn doc_count(&self) -> u64 {
        self.doc_names.len() as u64
    }

    /// Number of documents in the index.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.doc_names.len()
    }

    /// Returns `true` if the index contains no documents.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doc_names.is_empty()
    }

    /// Name supplied when document `id` was added, if it exists.
    #[inline]
    #[must_use]
    pub fn doc_name(&self, id: DocId) -> Option<&str> {
        self.doc_names.get(id as usize).map(String::as_str)
    }

    /// Returns `true` if `token` is present in the dictionary.
    ///
    /// `token` must be in cleaned form; raw query text goes through
    /// [`crate::Query`] instead.
    #[inline]
    #[must_use]
    pub fn contains_term(&self, token: &str) -> bool {
        self.terms.contains_key(token)
    }

    /// Total occurrences of `token` across all documents, 0 if absent.
    #[inline]
    #[must_use]
    pub fn term_freq(&self, token: &str) -> u64 {
        self.terms.get(token).map_or(0, |t| t.freq)
    }

    /// Number of distinct tokens in the dictionary.
    #[inline]
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}
