//! Levenshtein distance and similarity scoring.

/// Minimum number of single-character insertions, deletions and
/// substitutions that turn `source` into `target`.
///
/// Comparison is case-sensitive and counts `char`s, not bytes.
pub fn levenshtein_distance(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    // table[i][j] holds the distance between the first i chars of `source`
    // and the first j chars of `target`.
    let mut table = vec![vec![0usize; target.len() + 1]; source.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for (i, &sc) in source.iter().enumerate() {
        for (j, &tc) in target.iter().enumerate() {
            let substitution = table[i][j] + usize::from(sc != tc);
            let deletion = table[i][j + 1] + 1;
            let insertion = table[i + 1][j] + 1;
            table[i + 1][j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    table[source.len()][target.len()]
}

/// Turn a distance into a percentage of the longer length.
fn score(distance: usize, longest: usize) -> f64 {
    if longest == 0 {
        return 100.0;
    }
    longest.saturating_sub(distance) as f64 / longest as f64 * 100.0
}

/// Similarity between two strings as a percentage in `[0, 100]`.
///
/// The comparison is case-insensitive. The distance is normalized by the
/// length of the longer string, so scores are comparable across word pairs
/// of different lengths. Two empty strings are a perfect match.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let a = s1.to_lowercase();
    let b = s2.to_lowercase();
    let longest = a.chars().count().max(b.chars().count());

    score(levenshtein_distance(&a, &b), longest)
}

/// Scores many candidates against one query without re-normalizing the query.
#[derive(Debug, Clone)]
pub struct SimilarityMatcher {
    normalized: String,
    query_len: usize,
}

impl SimilarityMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: &str) -> Self {
        let normalized = query.to_lowercase();
        let query_len = normalized.chars().count();

        SimilarityMatcher {
            normalized,
            query_len,
        }
    }

    /// Similarity percentage to a candidate; identical to [`similarity`].
    pub fn similarity(&self, candidate: &str) -> f64 {
        let candidate = candidate.to_lowercase();
        let longest = self.query_len.max(candidate.chars().count());

        score(levenshtein_distance(&self.normalized, &candidate), longest)
    }
}
