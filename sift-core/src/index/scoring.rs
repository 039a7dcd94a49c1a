//! TF-IDF scoring.

use sift_types::{Posting, QueryResult};

use crate::index::types::Index;

impl Index {
    /// Scores matched postings against the whole index.
    ///
    /// `idf = log2(documents / matched)`. Per posting, `tf` is its
    /// occurrence count normalized by the document's maximum raw term
    /// frequency, which is at least 1 by construction. A term present
    /// in every document scores 0.
    ///
    /// Callers must not pass an empty slice; [`Index::search`] returns
    /// early in that case.
    pub(crate) fn tf_idf(&self, postings: &[Posting]) -> Vec<QueryResult> {
        let idf = (self.doc_count() as f64 / postings.len() as f64).log2();
        postings
            .iter()
            .map(|p| {
                let token_count = p.positions.len();
                let tf = token_count as f64 / self.document_max_freq[p.id as usize];
                QueryResult {
                    rank: tf * idf,
                    token_count,
                    document_name: self.doc_names[p.id as usize].clone(),
                    document_id: p.id,
                }
            })
            .collect()
    }
}
