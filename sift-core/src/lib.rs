//! sift-core: an in-memory inverted-index text search engine.
//!
//! Documents stream in through a normalizing tokenizer, land in a
//! term-to-postings index with per-document positions, and are queried
//! with a small Boolean algebra ranked by TF-IDF.
//!
//! ```
//! use sift_core::{Index, Query};
//!
//! let mut index = Index::new();
//! index.add_doc("greeting", "hello world".as_bytes())?;
//! index.add_doc("farewell", "goodbye cruel world".as_bytes())?;
//!
//! let results = index.search(&Query::term("world"));
//! assert_eq!(results.len(), 2);
//! # Ok::<(), sift_core::Error>(())
//! ```
//!
//! The index is single-threaded by design: no internal locks, mutation
//! through `&mut Index`, searches through `&Index`. Wrap it in a lock
//! to share it across threads.
//!
//! Persistence is not built in. The [`store`] module defines the
//! binary posting frame and the traits a disk-backed layer implements;
//! [`distance`] provides the edit-distance routine for fuzzy matching
//! layers.

pub mod analyzer;
pub mod distance;
mod error;
pub mod index;
pub mod query;
pub mod store;

pub use error::{Error, Result};
pub use index::Index;
pub use query::Query;
pub use sift_types::{DocId, Posting, QueryResult, Term};
