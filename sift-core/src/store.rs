//! Posting persistence: the binary frame codec and store traits.
//!
//! # Frame layout
//!
//! ```text
//! | id | positions array     |
//! |    | length | values...  |
//! | 8  | 8      | length * 8 |
//! ```
//!
//! Every word is exactly 8 bytes, little-endian, regardless of the
//! host's native word size — frames written on one platform read back
//! on any other. The frame is not self-delimiting: callers that
//! persist several postings must track the count themselves and read
//! back the same number sequentially.
//!
//! The [`Store`] and [`TermStore`] traits are the seam a disk-backed
//! engine plugs into; only the in-memory [`MemStore`] ships here.

use std::io::{Read, Write};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use rustc_hash::FxHashMap;

use sift_types::{Posting, Term};

use crate::error::{Error, Result};

/// Fixed width of every value in a posting frame, in bytes.
pub const WORD_SIZE: usize = 8;

/// Writes `posting` to `sink` as one binary frame.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Propagates I/O failures from the sink; a partial frame may have
/// been written at that point.
pub fn write_posting<W: Write>(sink: &mut W, posting: &Posting) -> Result<usize> {
    sink.write_u64::<LittleEndian>(posting.id)?;
    sink.write_u64::<LittleEndian>(posting.positions.len() as u64)?;
    for &position in &posting.positions {
        sink.write_u64::<LittleEndian>(position)?;
    }
    Ok(WORD_SIZE * (2 + posting.positions.len()))
}

/// Reads one binary frame from `source` into `posting`.
///
/// Reads the id, then the length, then exactly `length` position
/// words; `posting.positions` is resized to fit.
///
/// # Errors
///
/// Propagates I/O failures, including `UnexpectedEof` when the source
/// ends mid-frame.
pub fn read_posting<R: Read>(source: &mut R, posting: &mut Posting) -> Result<()> {
    posting.id = source.read_u64::<LittleEndian>()?;
    let length = source.read_u64::<LittleEndian>()? as usize;
    posting.positions.clear();
    posting.positions.reserve(length);
    for _ in 0..length {
        posting.positions.push(source.read_u64::<LittleEndian>()?);
    }
    Ok(())
}

/// Serializes `posting` into a freshly allocated frame buffer.
#[must_use]
pub fn serialize_posting(posting: &Posting) -> Vec<u8> {
    let mut buf = vec![0u8; WORD_SIZE * (2 + posting.positions.len())];
    LittleEndian::write_u64(&mut buf[..WORD_SIZE], posting.id);
    LittleEndian::write_u64(
        &mut buf[WORD_SIZE..2 * WORD_SIZE],
        posting.positions.len() as u64,
    );
    let mut at = 2 * WORD_SIZE;
    for &position in &posting.positions {
        LittleEndian::write_u64(&mut buf[at..at + WORD_SIZE], position);
        at += WORD_SIZE;
    }
    buf
}

/// Deserializes one frame from `buf` starting at `offset` into `posting`.
///
/// Returns the offset of the first byte past the frame, so sequential
/// frames can be decoded by feeding the returned offset back in.
///
/// # Errors
///
/// Returns [`Error::TruncatedFrame`] when the buffer ends before the
/// frame does.
pub fn deserialize_posting(buf: &[u8], posting: &mut Posting, offset: usize) -> Result<usize> {
    let mut at = offset;
    posting.id = read_word(buf, &mut at)?;
    let length = read_word(buf, &mut at)? as usize;

    if buf.len().saturating_sub(at) < length.saturating_mul(WORD_SIZE) {
        return Err(Error::TruncatedFrame);
    }
    posting.positions.clear();
    posting.positions.reserve(length);
    for _ in 0..length {
        posting.positions.push(read_word(buf, &mut at)?);
    }
    Ok(at)
}

fn read_word(buf: &[u8], at: &mut usize) -> Result<u64> {
    let end = *at + WORD_SIZE;
    let Some(chunk) = buf.get(*at..end) else {
        return Err(Error::TruncatedFrame);
    };
    *at = end;
    Ok(LittleEndian::read_u64(chunk))
}

/// Generic key-value surface a persistence layer implements.
///
/// Values are opaque bytes; the posting codec above defines the only
/// wire format the engine itself produces.
pub trait Store {
    /// Reads the value for `key` into `dest`.
    fn get(&self, key: &str, dest: &mut Vec<u8>) -> Result<()>;
    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<()>;
    /// Removes `key` and its value.
    fn delete(&mut self, key: &str) -> Result<()>;
}

/// Narrow lookup surface over a term dictionary.
pub trait TermStore {
    /// Returns the term stored under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::TermNotFound`] when the key is absent.
    fn term(&self, key: &str) -> Result<&Term>;
}

/// In-memory term store: a plain token-to-term map.
#[derive(Debug, Default)]
pub struct MemStore {
    terms: FxHashMap<String, Term>,
}

impl MemStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `term` under its own token, replacing any previous
    /// entry.
    pub fn insert(&mut self, term: Term) {
        self.terms.insert(term.token.clone(), term);
    }
}

impl TermStore for MemStore {
    fn term(&self, key: &str) -> Result<&Term> {
        self.terms.get(key).ok_or(Error::TermNotFound)
    }
}
