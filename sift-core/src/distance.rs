//! Levenshtein edit distance.
//!
//! Independent of the index; intended for approximate term matching
//! layered on top of exact dictionary lookups.

/// Edit distance between two byte sequences.
///
/// Classical full-table dynamic programming: insertion, deletion and
/// substitution each cost 1, a match costs 0. O(m·n) time and space.
/// Distances are measured over bytes, so multi-byte characters count
/// per byte.
#[must_use]
pub fn levenshtein(s: &str, t: &str) -> usize {
    let s = s.as_bytes();
    let t = t.as_bytes();
    let (m, n) = (s.len(), t.len());

    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in d[0].iter_mut().enumerate() {
        *cell = j;
    }

    for j in 1..=n {
        for i in 1..=m {
            d[i][j] = if s[i - 1] == t[j - 1] {
                d[i - 1][j - 1]
            } else {
                let deletion = d[i - 1][j];
                let insertion = d[i][j - 1];
                let substitution = d[i - 1][j - 1];
                deletion.min(insertion).min(substitution) + 1
            };
        }
    }

    d[m][n]
}
