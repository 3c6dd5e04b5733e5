//! Best-match lookup of a single token against a dictionary.

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::Dictionary;
use crate::spelling::levenshtein::SimilarityMatcher;

/// Minimum similarity a term needs to be considered a match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 60.0;

/// A dictionary term paired with its similarity to a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The matched dictionary term.
    pub term: String,
    /// Similarity percentage in `[0, 100]`.
    pub similarity: f64,
}

impl Match {
    /// Whether the token already equals the term, ignoring case.
    pub fn is_exact(&self) -> bool {
        self.similarity >= 100.0
    }
}

/// Find the dictionary term most similar to `token`.
///
/// Only terms scoring at least `threshold` qualify. Ties go to the term that
/// comes first in dictionary order; a later term must score strictly higher
/// to replace the current best.
///
/// This is a linear scan costing O(D · L²) for D terms of average length L,
/// which suits vocabularies of up to a few hundred terms.
pub fn find_best_match(token: &str, dictionary: &Dictionary, threshold: f64) -> Option<Match> {
    let matcher = SimilarityMatcher::new(token);
    let mut best: Option<Match> = None;

    for term in dictionary.iter() {
        let score = matcher.similarity(term);
        if score < threshold {
            continue;
        }

        let better = match &best {
            Some(current) => score > current.similarity,
            None => true,
        };
        if better {
            best = Some(Match {
                term: term.to_string(),
                similarity: score,
            });
        }
    }

    log::trace!("best match for {token:?}: {best:?}");
    best
}
