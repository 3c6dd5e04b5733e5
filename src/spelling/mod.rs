//! Fuzzy dictionary correction for chat input.
//!
//! This module finds probable misspellings of domain terms in a message,
//! replaces each with the closest dictionary term, and explains the change
//! in a short notice that can be shown next to the corrected message.

pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod matcher;
pub mod notice;
pub mod tokenizer;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use matcher::*;
pub use notice::*;
