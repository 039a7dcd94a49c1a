//! Boolean query algebra.
//!
//! A query is a tree of four node kinds: an atomic term, a conjunction
//! over sub-queries, a disjunction over raw term strings, and a pair
//! combinator that concatenates two sub-results. The tree is owned
//! top-down with no cycles, so a plain sum type models it; evaluation
//! needs no dynamic dispatch.
//!
//! Every node answers two questions: which dictionary keys it needs
//! ([`Query::keys`]), and how to combine the postings lists fetched
//! for those keys (`join`). [`crate::Index::search`] fetches one list
//! per key, in key order, and hands each node exactly the lists its
//! own keys produced, so intersection always runs over id-sorted
//! per-term lists.

use sift_types::Posting;

use crate::analyzer::clean_word;

/// A query plan over the inverted index.
///
/// Build plans with [`Query::term`], [`Query::and`], [`Query::or`] and
/// [`Query::tree`], then evaluate with [`crate::Index::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// A single term lookup. The text is cleaned at key-extraction
    /// time, so raw user input is fine here.
    Term(String),
    /// Documents matching every sub-query.
    And(Vec<Query>),
    /// Bag union of the postings of several terms (no deduplication).
    Or(Vec<String>),
    /// Concatenation of two sub-results.
    Tree(Box<Query>, Box<Query>),
}

impl Query {
    /// Atomic term query over `text`.
    pub fn term(text: impl Into<String>) -> Self {
        Query::Term(text.into())
    }

    /// Conjunction of `queries`.
    pub fn and(queries: impl IntoIterator<Item = Query>) -> Self {
        Query::And(queries.into_iter().collect())
    }

    /// Disjunction of raw `terms`; each is cleaned eagerly.
    pub fn or<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Query::Or(terms.into_iter().map(|t| clean_word(t.as_ref())).collect())
    }

    /// Combination of two sub-queries.
    pub fn tree(left: Query, right: Query) -> Self {
        Query::Tree(Box::new(left), Box::new(right))
    }

    /// The normalized dictionary keys this query needs, in evaluation
    /// order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        match self {
            Query::Term(text) => vec![clean_word(text)],
            Query::And(children) => children.iter().flat_map(Query::keys).collect(),
            Query::Or(terms) => terms.clone(),
            Query::Tree(left, right) => {
                let mut keys = left.keys();
                keys.extend(right.keys());
                keys
            }
        }
    }

    /// Number of keys this node contributes, without materializing
    /// them. Used to route fetched lists back to their nodes.
    fn key_count(&self) -> usize {
        match self {
            Query::Term(_) => 1,
            Query::And(children) => children.iter().map(Query::key_count).sum(),
            Query::Or(terms) => terms.len(),
            Query::Tree(left, right) => left.key_count() + right.key_count(),
        }
    }

    /// Combines the postings lists fetched for this node's keys.
    ///
    /// `lists` holds one id-sorted list per key of this node, in
    /// [`Query::keys`] order (empty slices for absent terms).
    pub(crate) fn join(&self, lists: &[&[Posting]]) -> Vec<Posting> {
        match self {
            // A term has one list; a disjunction is the bag union of
            // its terms' lists. Both flatten everything they received.
            Query::Term(_) | Query::Or(_) => {
                lists.iter().flat_map(|l| l.iter().cloned()).collect()
            }
            Query::And(children) => {
                let mut joined = Vec::with_capacity(children.len());
                let mut offset = 0usize;
                for child in children {
                    let take = child.key_count();
                    joined.push(child.join(&lists[offset..offset + take]));
                    offset += take;
                }
                k_intersect(&joined)
            }
            Query::Tree(left, right) => {
                let split = left.key_count();
                let mut out = left.join(&lists[..split]);
                out.extend(right.join(&lists[split..]));
                out
            }
        }
    }
}

/// Intersects `k` id-sorted postings lists.
///
/// A document appears in the output iff it appears in every input
/// list; its output positions are the concatenation of the matching
/// input positions, in list order. Runs in O(k·N) for N total
/// postings: all cursors advance on a match, otherwise only the
/// cursor at the globally smallest id moves.
pub fn k_intersect(lists: &[Vec<Posting>]) -> Vec<Posting> {
    if lists.is_empty() {
        return Vec::new();
    }

    let mut cursors = vec![0usize; lists.len()];
    let mut result = Vec::new();

    loop {
        if cursors
            .iter()
            .zip(lists)
            .any(|(&c, list)| c >= list.len())
        {
            return result;
        }

        let head = lists[0][cursors[0]].id;
        let mut all_equal = true;
        let mut smallest = 0usize;
        let mut smallest_id = head;
        for (i, list) in lists.iter().enumerate() {
            let id = list[cursors[i]].id;
            if id != head {
                all_equal = false;
            }
            if id < smallest_id {
                smallest_id = id;
                smallest = i;
            }
        }

        if all_equal {
            let mut positions = Vec::new();
            for (i, list) in lists.iter().enumerate() {
                positions.extend_from_slice(&list[cursors[i]].positions);
                cursors[i] += 1;
            }
            result.push(Posting::new(head, positions));
        } else {
            cursors[smallest] += 1;
        }
    }
}

/// Merge-style intersection of two id-sorted postings lists.
///
/// On an id match the output posting carries the left positions
/// followed by the right positions; callers must not assume the
/// combined positions are sorted.
pub fn intersect(left: &[Posting], right: &[Posting]) -> Vec<Posting> {
    let mut l = 0usize;
    let mut r = 0usize;
    let mut out = Vec::new();

    while l < left.len() && r < right.len() {
        if left[l].id < right[r].id {
            l += 1;
        } else if right[r].id < left[l].id {
            r += 1;
        } else {
            let mut positions = left[l].positions.clone();
            positions.extend_from_slice(&right[r].positions);
            out.push(Posting::new(left[l].id, positions));
            l += 1;
            r += 1;
        }
    }
    out
}
