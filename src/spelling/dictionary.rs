//! Dictionary management for spelling correction.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, VerdantError};

/// An ordered set of correctly spelled terms.
///
/// Terms are lower-cased on insertion and kept in insertion order. Order is
/// significant: when two terms score equally against a token, the one that
/// was inserted first wins. [`Dictionary::layered`] therefore places dynamic
/// terms (known catalog names) ahead of the static domain vocabulary.
///
/// Inserting a term that is already present is a no-op, so the first
/// position of a term is the one that counts.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Terms in match priority order
    terms: Vec<String>,
    /// Set of all terms for fast exact lookup
    index: HashSet<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            terms: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// Create a dictionary from terms, keeping their order.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        dictionary.extend(terms);
        dictionary
    }

    /// Build the working dictionary for a check: dynamic terms first, then
    /// the static domain terms.
    pub fn layered<D, S, T, U>(dynamic: D, domain: T) -> Self
    where
        D: IntoIterator<Item = S>,
        S: AsRef<str>,
        T: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        let mut dictionary = Dictionary::from_terms(dynamic);
        dictionary.extend(domain);
        dictionary
    }

    /// Add a term. Returns `false` if it was blank or already present.
    pub fn insert(&mut self, term: &str) -> bool {
        let normalized = term.trim().to_lowercase();
        if normalized.is_empty() || self.index.contains(&normalized) {
            return false;
        }

        self.index.insert(normalized.clone());
        self.terms.push(normalized);
        true
    }

    /// Append terms in order.
    pub fn extend<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self.insert(term.as_ref());
        }
    }

    /// Check if a term exists in the dictionary (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    /// Terms in priority order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Iterate terms in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the dictionary holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Load a dictionary from a text file with one term per line.
    ///
    /// Blank lines and lines starting with `#` are ignored. A line without
    /// any letter or digit can never match a word and is rejected with
    /// [`VerdantError::Dictionary`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let term = line.trim();
            if term.is_empty() || term.starts_with('#') {
                continue;
            }
            if !term.chars().any(char::is_alphanumeric) {
                return Err(VerdantError::dictionary(format!(
                    "line {} has no letters or digits: {term:?}",
                    number + 1
                )));
            }
            dictionary.insert(term);
        }

        Ok(dictionary)
    }

    /// Save the dictionary to a file, one term per line, in priority order.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);

        for term in &self.terms {
            writeln!(writer, "{term}")?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::from_terms(iter)
    }
}

/// Built-in domain vocabularies.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    const AGRICULTURE: &'static [&'static str] = &[
        "planting",
        "harvesting",
        "irrigation",
        "fertilizer",
        "compost",
        "mulch",
        "pruning",
        "watering",
        "overwatering",
        "underwatering",
        "repotting",
        "soil",
        "plant",
        "plants",
        "leaf",
        "leaves",
        "root",
        "roots",
        "stem",
        "stems",
        "flower",
        "flowers",
        "fruit",
        "crops",
        "pest",
        "pests",
        "fungus",
        "fungal",
        "mildew",
        "blight",
        "aphids",
        "nitrogen",
        "phosphorus",
        "potassium",
        "germination",
        "seedling",
        "seedlings",
        "drainage",
        "humidity",
        "sunlight",
        "disease",
        "yellowing",
        "wilting",
        "chlorosis",
        "pesticide",
        "herbicide",
        "greenhouse",
        "transplant",
        "photosynthesis",
        "nutrient",
        "nutrients",
    ];

    /// Plant-care and agriculture terms, as owned strings for configuration.
    pub fn agriculture_terms() -> Vec<String> {
        Self::AGRICULTURE.iter().map(|term| term.to_string()).collect()
    }

    /// Plant-care and agriculture terms as a dictionary.
    pub fn agriculture() -> Dictionary {
        Dictionary::from_terms(Self::AGRICULTURE)
    }
}
