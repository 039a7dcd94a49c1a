//! Document ingestion.

use std::io::Read;

use tracing::debug;

use sift_types::{DocId, Posting, Term};

use crate::analyzer::{StreamTokenizer, Token, TokenStream};
use crate::error::Result;
use crate::index::types::Index;

impl Index {
    /// Streams `reader` through the standard tokenizer and indexes the
    /// result under `name`.
    ///
    /// The reader is drained to EOF. Spaces, newlines, tabs and
    /// carriage returns all separate tokens.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures and invalid UTF-8 from the stream. On
    /// error the index is left exactly as it was before the call.
    pub fn add_doc<R: Read>(&mut self, name: &str, reader: R) -> Result<DocId> {
        self.add(name, StreamTokenizer::new(reader))
    }

    /// Consumes `tokens` and indexes them as one document named `name`.
    ///
    /// Assigns the next dense [`DocId`] and records, per token, its
    /// positions and frequencies. A stream that yields no tokens still
    /// produces a valid document with a maximum term frequency of 1.
    ///
    /// # Errors
    ///
    /// Any tokenizer error aborts the call; the whole stream is
    /// buffered before the first index mutation, so a failed `add`
    /// leaves the index untouched.
    pub fn add<T: TokenStream>(&mut self, name: &str, mut tokens: T) -> Result<DocId> {
        let mut buffered: Vec<Token> = Vec::new();
        while let Some(token) = tokens.next_token()? {
            buffered.push(token);
        }

        let doc_id = self.doc_names.len() as DocId;
        let token_count = buffered.len();
        let mut max_freq = 0u64;
        for token in buffered {
            let in_doc = self.add_token(&token.text, token.pos, doc_id);
            max_freq = max_freq.max(in_doc);
        }

        self.doc_names.push(name.to_owned());
        self.document_max_freq.push(max_freq.max(1) as f64);

        debug!(doc_id, name, tokens = token_count, "indexed document");
        Ok(doc_id)
    }

    /// Records one occurrence of `token` at `position` within `doc_id`.
    ///
    /// Creates the term on first sight, otherwise bumps its global
    /// frequency; then appends the position to the document's posting,
    /// creating the posting if this is the token's first occurrence in
    /// the document. Returns the token's occurrence count within the
    /// document so far.
    pub(crate) fn add_token(&mut self, token: &str, position: u64, doc_id: DocId) -> u64 {
        let term = self
            .terms
            .entry(token.to_owned())
            .and_modify(|t| t.freq += 1)
            .or_insert_with(|| Term {
                token: token.to_owned(),
                freq: 1,
                postings: Vec::new(),
            });

        match term.postings.binary_search_by_key(&doc_id, |p| p.id) {
            Ok(i) => {
                term.postings[i].positions.push(position);
                term.postings[i].positions.len() as u64
            }
            Err(_) => {
                // Documents arrive in ascending id order, so appending
                // keeps the postings list sorted.
                debug_assert!(term.postings.last().is_none_or(|p| p.id < doc_id));
                term.postings.push(Posting::new(doc_id, vec![position]));
                1
            }
        }
    }
}
