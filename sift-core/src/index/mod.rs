//! The in-memory inverted index.
//!
//! Terms map to id-sorted postings lists with per-document positions;
//! per-document statistics feed TF-IDF scoring at query time.
//!
//! Threading:
//! - [`Index`] has no internal locks. Mutation takes `&mut self` and
//!   search takes `&self`, so the borrow checker enforces the
//!   single-writer model; wrap the index in a lock to share it.

mod builder;
mod scoring;
mod search;
mod types;

pub use types::Index;
