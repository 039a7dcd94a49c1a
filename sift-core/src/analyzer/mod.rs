//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: folds raw text to its canonical indexed form
//! - **Tokenizer**: splits document bytes into position-tagged tokens
//! - **Stop words**: the fixed function-word filter

pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::{clean_word, normalize};
pub use stopwords::is_stop_word;
pub use tokenizer::{AnalyzerConfig, StreamTokenizer, Token, TokenList, TokenStream};
