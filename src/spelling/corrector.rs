//! Message-level spelling corrector.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VerdantError};
use crate::spelling::dictionary::{BuiltinDictionary, Dictionary};
use crate::spelling::matcher::find_best_match;
use crate::spelling::tokenizer::{self, Segment};

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Minimum similarity (0 to 100) a dictionary term needs to replace a token.
    pub correction_threshold: f64,
    /// Tokens whose core is shorter than this many characters are left alone.
    pub min_token_chars: usize,
    /// Static domain vocabulary, consulted after the caller's known terms.
    pub domain_terms: Vec<String>,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            correction_threshold: 65.0,
            min_token_chars: 3,
            domain_terms: BuiltinDictionary::agriculture_terms(),
        }
    }
}

impl CorrectorConfig {
    /// Use a different static vocabulary.
    pub fn with_domain_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Check that thresholds are in range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.correction_threshold) {
            return Err(VerdantError::config(format!(
                "correction_threshold must be within 0..=100, got {}",
                self.correction_threshold
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CorrectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// One replaced token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionRecord {
    /// The token as it appeared in the message, without surrounding punctuation.
    pub original: String,
    /// The dictionary term it was replaced with.
    pub replacement: String,
    /// Similarity between the two, in `[0, 100)`.
    pub similarity: f64,
}

/// Result of checking a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// The message as given.
    pub original_message: String,
    /// The message with every correction applied.
    pub corrected_message: String,
    /// Mean similarity of the corrections, or 100 when nothing was corrected.
    pub confidence: f64,
    /// Whether any token was replaced. Separates "nothing to fix" from a
    /// confidence of 100 reached by corrections.
    pub had_corrections: bool,
    /// One record per corrected token occurrence, in message order.
    pub corrections: Vec<CorrectionRecord>,
}

impl CorrectionResult {
    fn new(original: &str, corrected: String, corrections: Vec<CorrectionRecord>) -> Self {
        let confidence = if corrections.is_empty() {
            100.0
        } else {
            corrections.iter().map(|c| c.similarity).sum::<f64>() / corrections.len() as f64
        };

        CorrectionResult {
            original_message: original.to_string(),
            corrected_message: corrected,
            confidence,
            had_corrections: !corrections.is_empty(),
            corrections,
        }
    }
}

/// Corrects misspelled domain terms in chat messages.
///
/// The corrector holds only its configuration and is safe to share between
/// threads; every call to [`Corrector::check`] is independent.
#[derive(Debug, Clone, Default)]
pub struct Corrector {
    config: CorrectorConfig,
}

impl Corrector {
    /// Create a corrector with the built-in agriculture vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a corrector with custom configuration.
    pub fn with_config(config: CorrectorConfig) -> Self {
        Corrector { config }
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Working dictionary for one check: `known_terms` first, then the
    /// configured domain terms.
    pub fn dictionary<S: AsRef<str>>(&self, known_terms: &[S]) -> Dictionary {
        Dictionary::layered(known_terms, &self.config.domain_terms)
    }

    /// Check `message` against `known_terms` plus the domain vocabulary.
    ///
    /// Tokens are visited left to right. A token is replaced when its core is
    /// long enough, is not already a dictionary term, and some term reaches
    /// the correction threshold. Each visited occurrence adds its own record;
    /// all occurrences of a corrected token are replaced, ignoring case.
    pub fn check<S: AsRef<str>>(&self, message: &str, known_terms: &[S]) -> CorrectionResult {
        let dictionary = self.dictionary(known_terms);
        let segments = tokenizer::tokenize(message);
        let mut replacements: HashMap<String, String> = HashMap::new();
        let mut corrections = Vec::new();

        for segment in segments.iter().filter(|s| s.is_word()) {
            let core = segment.core();
            if core.chars().count() < self.config.min_token_chars {
                continue;
            }

            let normalized = core.to_lowercase();
            if dictionary.contains(&normalized) {
                continue;
            }

            match find_best_match(core, &dictionary, self.config.correction_threshold) {
                Some(found) if !found.is_exact() => {
                    debug!(
                        "correcting {core:?} to {:?} ({:.1}%)",
                        found.term, found.similarity
                    );
                    replacements.insert(normalized, found.term.clone());
                    corrections.push(CorrectionRecord {
                        original: core.to_string(),
                        replacement: found.term,
                        similarity: found.similarity,
                    });
                }
                _ => debug!("no correction for {core:?}"),
            }
        }

        let corrected = if replacements.is_empty() {
            message.to_string()
        } else {
            rebuild(&segments, &replacements)
        };

        CorrectionResult::new(message, corrected, corrections)
    }
}

/// Reassemble the message, swapping the core of every word whose lower-cased
/// core has a replacement.
fn rebuild(segments: &[Segment<'_>], replacements: &HashMap<String, String>) -> String {
    let mut output = String::new();

    for segment in segments {
        let (prefix, core, suffix) = segment.parts();
        match replacements.get(&core.to_lowercase()) {
            Some(term) if segment.is_word() && !core.is_empty() => {
                output.push_str(prefix);
                output.push_str(term);
                output.push_str(suffix);
            }
            _ => output.push_str(segment.text),
        }
    }

    output
}

/// Check `message` with the default configuration.
pub fn check<S: AsRef<str>>(message: &str, known_terms: &[S]) -> CorrectionResult {
    Corrector::new().check(message, known_terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_TERMS: &[&str] = &[];

    fn farm_corrector() -> Corrector {
        Corrector::with_config(CorrectorConfig::default().with_domain_terms([
            "planting",
            "harvesting",
            "irrigation",
            "fertilizer",
        ]))
    }

    #[test]
    fn test_corrects_misspelled_term() {
        let result = farm_corrector().check("I need ferlizer for my crops", NO_TERMS);

        assert_eq!(result.corrected_message, "I need fertilizer for my crops");
        assert_eq!(result.corrections.len(), 1);
        assert_eq!(result.corrections[0].original, "ferlizer");
        assert_eq!(result.corrections[0].replacement, "fertilizer");
        assert!(result.corrections[0].similarity >= 65.0);
        assert!(result.had_corrections);
        assert!((result.confidence - result.corrections[0].similarity).abs() < 1e-9);
    }

    #[test]
    fn test_known_terms_skip_exact_matches() {
        let result = check("tomato plant needs watering", &["tomato"]);

        assert!(result.corrections.is_empty());
        assert!(!result.had_corrections);
        assert_eq!(result.confidence, 100.0);
        assert_eq!(result.corrected_message, result.original_message);
    }

    #[test]
    fn test_short_tokens_untouched() {
        let corrector = Corrector::with_config(
            CorrectorConfig::default().with_domain_terms(["ph", "pa", "potassium"]),
        );
        let result = corrector.check("pH is low", NO_TERMS);
        assert!(result.corrections.is_empty());
        assert_eq!(result.corrected_message, "pH is low");

        // Two-letter tokens are exempt even against a two-letter near miss
        let result = corrector.check("pX is low", NO_TERMS);
        assert!(result.corrections.is_empty());
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let result = check("FERTILIZER and Compost", NO_TERMS);
        assert!(result.corrections.is_empty());
        assert_eq!(result.corrected_message, "FERTILIZER and Compost");
    }

    #[test]
    fn test_every_occurrence_replaced_and_recorded() {
        let result = farm_corrector().check("Ferlizer or ferlizer? FERLIZER!", NO_TERMS);

        assert_eq!(result.corrected_message, "fertilizer or fertilizer? fertilizer!");
        let originals: Vec<&str> = result.corrections.iter().map(|c| c.original.as_str()).collect();
        assert_eq!(originals, vec!["Ferlizer", "ferlizer", "FERLIZER"]);
        assert!(result.corrections.iter().all(|c| c.replacement == "fertilizer"));
    }

    #[test]
    fn test_repeated_misspelling_weighs_into_confidence() {
        let result = farm_corrector().check("ferlizer ferlizer irigation", NO_TERMS);

        assert_eq!(result.corrected_message, "fertilizer fertilizer irrigation");
        assert_eq!(result.corrections.len(), 3);
        assert!((result.confidence - (80.0 + 80.0 + 90.0) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_punctuation_and_spacing_preserved() {
        let result = farm_corrector().check("  (ferlizer),\tthen  irigation...\n", NO_TERMS);

        assert_eq!(result.corrected_message, "  (fertilizer),\tthen  irrigation...\n");
        let pairs: Vec<(&str, &str)> = result
            .corrections
            .iter()
            .map(|c| (c.original.as_str(), c.replacement.as_str()))
            .collect();
        assert_eq!(pairs, vec![("ferlizer", "fertilizer"), ("irigation", "irrigation")]);
    }

    #[test]
    fn test_whole_word_only() {
        // "ferlizer-mix" has its own core and is too far from any term
        let result = farm_corrector().check("ferlizer ferlizer-mix", NO_TERMS);
        assert_eq!(result.corrections.len(), 1);
        assert_eq!(result.corrected_message, "fertilizer ferlizer-mix");
    }

    #[test]
    fn test_confidence_is_mean_similarity() {
        let result = farm_corrector().check("ferlizer and irigation", NO_TERMS);
        assert_eq!(result.corrections.len(), 2);

        let mean = (80.0 + 90.0) / 2.0;
        assert!((result.confidence - mean).abs() < 1e-9);
    }

    #[test]
    fn test_known_terms_take_priority_in_ties() {
        // "bat" is equally close to both; the caller's term comes first
        let corrector = Corrector::with_config(CorrectorConfig::default().with_domain_terms(["cat"]));
        let result = corrector.check("bat", &["hat"]);
        assert_eq!(result.corrected_message, "hat");
    }

    #[test]
    fn test_known_terms_are_lowercased() {
        let result = check("my monstra is droopy", &["Monstera"]);
        assert_eq!(result.corrected_message, "my monstera is droopy");
    }

    #[test]
    fn test_multi_word_known_terms_are_replacements() {
        let result = check("my snakeplant is droopy", &["Snake Plant"]);
        assert_eq!(result.corrected_message, "my snake plant is droopy");
        assert_eq!(result.corrections.len(), 1);
        assert!((result.corrections[0].similarity - 1000.0 / 11.0).abs() < 1e-9);

        let result = check("(peacelily)?", &["peace lily"]);
        assert_eq!(result.corrected_message, "(peace lily)?");

        // The split words are far from the full name, so a second pass is quiet
        let second = check("my snake plant is droopy", &["Snake Plant"]);
        assert!(second.corrections.is_empty());
    }

    #[test]
    fn test_below_threshold_left_alone() {
        let result = farm_corrector().check("banana", NO_TERMS);
        assert!(result.corrections.is_empty());
        assert_eq!(result.corrected_message, "banana");
    }

    #[test]
    fn test_empty_inputs() {
        let result = check("", NO_TERMS);
        assert!(result.corrections.is_empty());
        assert_eq!(result.corrected_message, "");
        assert_eq!(result.confidence, 100.0);

        let corrector = Corrector::with_config(CorrectorConfig::default().with_domain_terms(Vec::<String>::new()));
        let result = corrector.check("ferlizer", NO_TERMS);
        assert!(result.corrections.is_empty());
    }

    #[test]
    fn test_second_pass_is_stable() {
        let corrector = Corrector::new();
        let first = corrector.check("My tomatoe leafs are yelowing, and wiltting.", &["tomato"]);
        assert_eq!(
            first.corrected_message,
            "My tomato leaf are yellowing, and wilting."
        );

        let second = corrector.check(&first.corrected_message, &["tomato"]);
        assert!(second.corrections.is_empty());
    }

    #[test]
    fn test_config_validation() {
        let config = CorrectorConfig {
            correction_threshold: 120.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(VerdantError::Config(_))));
        assert!(CorrectorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrector.json");

        let config = CorrectorConfig::default().with_domain_terms(["aphids", "mildew"]);
        config.to_json_file(&path).unwrap();

        let loaded = CorrectorConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrector.json");
        std::fs::write(&path, r#"{ "correction_threshold": 80 }"#).unwrap();

        let loaded = CorrectorConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded.correction_threshold, 80.0);
        assert_eq!(loaded.min_token_chars, 3);
        assert_eq!(loaded.domain_terms, BuiltinDictionary::agriculture_terms());
    }
}
