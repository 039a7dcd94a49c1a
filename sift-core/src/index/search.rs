//! Query evaluation.

use smallvec::SmallVec;
use tracing::debug;

use sift_types::{Posting, QueryResult};

use crate::index::types::Index;
use crate::query::Query;

impl Index {
    /// Evaluates `query` and returns results sorted by descending rank.
    ///
    /// Unknown terms contribute empty postings lists; a query whose
    /// terms are all absent, or a query over an empty index, returns an
    /// empty vector rather than an error. Equal-rank results come back
    /// in an unspecified (but deterministic) order.
    pub fn search(&self, query: &Query) -> Vec<QueryResult> {
        let keys = query.keys();
        if keys.is_empty() {
            return Vec::new();
        }

        // One postings list per key, in key order. Absent terms keep
        // their slot so each query node receives exactly the lists its
        // own keys produced.
        let mut lists: SmallVec<[&[Posting]; 8]> = SmallVec::with_capacity(keys.len());
        let mut any_present = false;
        for key in &keys {
            match self.terms.get(key.as_str()) {
                Some(term) => {
                    lists.push(term.postings.as_slice());
                    any_present = true;
                }
                None => lists.push(&[]),
            }
        }
        if !any_present {
            return Vec::new();
        }

        let matched = query.join(&lists);
        if matched.is_empty() {
            return Vec::new();
        }

        let mut results = self.tf_idf(&matched);
        results.sort_unstable_by(|a, b| b.cmp(a));

        debug!(
            keys = keys.len(),
            matched = results.len(),
            "query evaluated"
        );
        results
    }
}
