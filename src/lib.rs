//! # Verdant
//!
//! Fuzzy dictionary correction for plant-care chat input.
//!
//! ## Features
//!
//! - Levenshtein distance and length-normalized similarity
//! - Ordered dictionaries with caller terms ahead of a domain vocabulary
//! - Whole-word correction that preserves spacing and punctuation
//! - Short user-facing notices describing each correction
//!
//! ```
//! use verdant::spelling::{check, format_correction_notice};
//!
//! let result = check("I need ferlizer for my crops", &["tomato"]);
//! assert_eq!(result.corrected_message, "I need fertilizer for my crops");
//! assert_eq!(
//!     format_correction_notice(&result).as_deref(),
//!     Some("I corrected \"ferlizer\" to \"fertilizer\".")
//! );
//! ```

pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{Result, VerdantError};
    pub use crate::spelling::{
        BuiltinDictionary, CorrectionRecord, CorrectionResult, Corrector, CorrectorConfig,
        Dictionary, Match, check, find_best_match, format_correction_notice,
        levenshtein_distance, similarity,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
