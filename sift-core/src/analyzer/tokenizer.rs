//! Token producers for document ingestion.
//!
//! Two interchangeable producers feed the index, both yielding
//! `(text, position)` pairs in document order through the
//! [`TokenStream`] trait:
//!
//! - [`StreamTokenizer`] reads raw bytes from any [`Read`] source and
//!   runs the full cleaning pipeline. This is the ingestion path used
//!   by [`crate::Index::add_doc`].
//! - [`TokenList`] wraps text that an external segmenter has already
//!   split into words, and only filters out punctuation tokens and
//!   stop words.
//!
//! ## Separators
//!
//! Spaces, newlines, tabs and carriage returns all end a token. The
//! streaming tokenizer reads up to each space and then splits the
//! buffered segment on the remaining separator bytes, so a `next_token`
//! call may serve several cached tokens before touching the reader
//! again.
//!
//! ## Positions
//!
//! The streaming tokenizer numbers emitted tokens with a 1-based
//! monotonic counter; filtered tokens do not advance it. The list
//! tokenizer reports each token's index within the original list, so
//! skipped entries leave holes in the sequence.
//!
//! ## End of stream
//!
//! Exhaustion is `Ok(None)`, not an error. The reader is drained to
//! EOF: a final segment without a trailing space is still tokenized.

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read};

use memchr::memchr3_iter;

use crate::analyzer::normalizer::clean_word;
use crate::analyzer::stopwords::is_stop_word;
use crate::error::Result;

/// A single token together with its position in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Cleaned token text.
    pub text: String,
    /// Position of the token within the document.
    pub pos: u64,
}

/// A producer of tokens in document order.
///
/// `Ok(None)` signals end of stream; any error aborts ingestion of the
/// current document.
pub trait TokenStream {
    /// Returns the next token, or `None` when the source is exhausted.
    fn next_token(&mut self) -> Result<Option<Token>>;
}

/// Configuration for the list-backed tokenizer.
///
/// The streaming tokenizer always drops stop words; pre-segmented
/// input historically kept them, and `filter_stop_words = false`
/// restores that behavior for indexes that must stay compatible
/// with it.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    /// Drop stop words from the token stream.
    pub filter_stop_words: bool,
}

impl Default for AnalyzerConfig {
    #[inline]
    fn default() -> Self {
        Self {
            filter_stop_words: true,
        }
    }
}

/// Streaming tokenizer over a byte reader.
///
/// Reads one space-delimited segment at a time, splits it on the other
/// separator bytes, and pushes cleaned tokens through [`clean_word`]
/// and the stop-word filter into a FIFO cache.
pub struct StreamTokenizer<R: Read> {
    reader: BufReader<R>,
    cache: VecDeque<Token>,
    pos: u64,
    done: bool,
}

impl<R: Read> StreamTokenizer<R> {
    /// Creates a tokenizer over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            cache: VecDeque::new(),
            pos: 0,
            done: false,
        }
    }

    fn push_piece(&mut self, piece: &str) {
        let piece = piece.trim_matches(|c| matches!(c, ' ' | '\n' | '\t' | '\r'));
        if piece.is_empty() {
            return;
        }
        let cleaned = clean_word(piece);
        if cleaned.is_empty() || is_stop_word(&cleaned) {
            return;
        }
        self.pos += 1;
        self.cache.push_back(Token {
            text: cleaned,
            pos: self.pos,
        });
    }
}

impl<R: Read> TokenStream for StreamTokenizer<R> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            if let Some(token) = self.cache.pop_front() {
                return Ok(Some(token));
            }
            if self.done {
                return Ok(None);
            }

            let mut segment = Vec::new();
            let n = self.reader.read_until(b' ', &mut segment)?;
            if n == 0 {
                self.done = true;
                continue;
            }
            if segment.last() != Some(&b' ') {
                // No delimiter means the reader ran dry; this segment
                // is the last one.
                self.done = true;
            }

            let text = std::str::from_utf8(&segment)?;
            // Splitting at ASCII separator bytes always lands on char
            // boundaries, so slicing `text` directly is safe.
            let mut start = 0usize;
            for i in memchr3_iter(b'\n', b'\t', b'\r', text.as_bytes()) {
                self.push_piece(&text[start..i]);
                start = i + 1;
            }
            self.push_piece(&text[start..]);
        }
    }
}

/// Tokens the list tokenizer silently skips.
const SKIPPED_TOKENS: [&str; 6] = [".", ",", "(", ")", ":", ";"];

/// Tokenizer over pre-segmented text.
///
/// The caller is responsible for normalization; tokens are emitted
/// as-is, with their index in the list as their position.
pub struct TokenList {
    tokens: Vec<String>,
    cursor: usize,
    config: AnalyzerConfig,
}

impl TokenList {
    /// Creates a tokenizer over `tokens` with the default configuration.
    pub fn new(tokens: Vec<String>) -> Self {
        Self::with_config(tokens, AnalyzerConfig::default())
    }

    /// Creates a tokenizer over `tokens` with an explicit configuration.
    pub fn with_config(tokens: Vec<String>, config: AnalyzerConfig) -> Self {
        Self {
            tokens,
            cursor: 0,
            config,
        }
    }
}

impl TokenStream for TokenList {
    fn next_token(&mut self) -> Result<Option<Token>> {
        while self.cursor < self.tokens.len() {
            let text = &self.tokens[self.cursor];
            let skip = SKIPPED_TOKENS.contains(&text.as_str())
                || (self.config.filter_stop_words && is_stop_word(text));
            if skip {
                self.cursor += 1;
                continue;
            }
            let token = Token {
                text: text.clone(),
                pos: self.cursor as u64,
            };
            self.cursor += 1;
            return Ok(Some(token));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect_stream(input: &[u8]) -> Vec<(String, u64)> {
        let mut tokenizer = StreamTokenizer::new(Cursor::new(input.to_vec()));
        let mut out = Vec::new();
        while let Some(token) = tokenizer.next_token().expect("tokenize") {
            out.push((token.text, token.pos));
        }
        out
    }

    #[test]
    fn stream_basic_words() {
        let out = collect_stream(b"hello world foo");
        assert_eq!(
            out,
            vec![
                ("hello".to_owned(), 1),
                ("world".to_owned(), 2),
                ("foo".to_owned(), 3)
            ]
        );
    }

    #[test]
    fn stream_final_token_without_trailing_space_is_kept() {
        let out = collect_stream(b"alpha beta");
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].0, "beta");
    }

    #[test]
    fn stream_filters_stop_words() {
        let out = collect_stream(b"the quick brown fox is here");
        let words: Vec<&str> = out.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(words, vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn stream_positions_skip_filtered_tokens() {
        // Stop words do not consume positions.
        let out = collect_stream(b"the quick fox");
        assert_eq!(out[0], ("quick".to_owned(), 1));
        assert_eq!(out[1], ("fox".to_owned(), 2));
    }

    #[test]
    fn stream_splits_on_all_separators() {
        let out = collect_stream(b"one\ntwo\tthree\rfour five");
        let words: Vec<&str> = out.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(words, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn stream_drops_punctuation_only_pieces() {
        let out = collect_stream(b"... hello !!! world ---");
        let words: Vec<&str> = out.iter().map(|(t, _)| t.as_str()).collect();
        // "---" survives: dashes are not trailing sentence punctuation.
        assert_eq!(words, vec!["hello", "world", "---"]);
    }

    #[test]
    fn stream_cleans_words() {
        let out = collect_stream("Caf\u{e9}, (verdict) HELLO!".as_bytes());
        let words: Vec<&str> = out.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(words, vec!["cafe", "verdict", "hello"]);
    }

    #[test]
    fn stream_empty_reader() {
        assert!(collect_stream(b"").is_empty());
    }

    #[test]
    fn stream_whitespace_only_reader() {
        assert!(collect_stream(b"  \n\t \r ").is_empty());
    }

    #[test]
    fn stream_rejects_invalid_utf8() {
        let mut tokenizer = StreamTokenizer::new(Cursor::new(vec![0xFF, 0xFE, b' ', b'h', b'i']));
        assert!(tokenizer.next_token().is_err());
    }

    #[test]
    fn stream_is_fifo_within_a_segment() {
        // All three words arrive in one space-delimited segment; they
        // must come back out in document order.
        let out = collect_stream(b"one\ntwo\nthree ");
        let words: Vec<&str> = out.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(words, vec!["one", "two", "three"]);
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn list_skips_punctuation_tokens() {
        let mut list = TokenList::new(strings(&["hello", ".", "world", ";"]));
        let mut out = Vec::new();
        while let Some(token) = list.next_token().expect("tokenize") {
            out.push((token.text, token.pos));
        }
        assert_eq!(out, vec![("hello".to_owned(), 0), ("world".to_owned(), 2)]);
    }

    #[test]
    fn list_positions_are_list_indices() {
        let mut list = TokenList::new(strings(&[".", ",", "token"]));
        let token = list.next_token().expect("tokenize").expect("some");
        assert_eq!(token.pos, 2);
        assert!(list.next_token().expect("tokenize").is_none());
    }

    #[test]
    fn list_filters_stop_words_by_default() {
        let mut list = TokenList::new(strings(&["this", "is", "a", "test"]));
        let mut out = Vec::new();
        while let Some(token) = list.next_token().expect("tokenize") {
            out.push(token.text);
        }
        assert_eq!(out, vec!["test"]);
    }

    #[test]
    fn list_can_keep_stop_words() {
        let config = AnalyzerConfig {
            filter_stop_words: false,
        };
        let mut list = TokenList::with_config(strings(&["this", "is", "a", "test"]), config);
        let mut out = Vec::new();
        while let Some(token) = list.next_token().expect("tokenize") {
            out.push(token.text);
        }
        assert_eq!(out, vec!["this", "is", "a", "test"]);
    }

    #[test]
    fn list_exhaustion_is_not_an_error() {
        let mut list = TokenList::new(Vec::new());
        assert!(list.next_token().expect("tokenize").is_none());
        assert!(list.next_token().expect("tokenize").is_none());
    }
}
