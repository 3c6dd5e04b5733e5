//! User-facing notice describing what the corrector changed.

use crate::spelling::corrector::CorrectionResult;

/// Describe the corrections in `result`, or `None` if there were none.
///
/// A single correction reads `I corrected "ferlizer" to "fertilizer".`;
/// several are listed as `original → replacement` pairs.
pub fn format_correction_notice(result: &CorrectionResult) -> Option<String> {
    match result.corrections.as_slice() {
        [] => None,
        [only] => Some(format!(
            "I corrected \"{}\" to \"{}\".",
            only.original, only.replacement
        )),
        many => {
            let pairs = many
                .iter()
                .map(|c| format!("\"{}\" → \"{}\"", c.original, c.replacement))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("I corrected {} words: {}.", many.len(), pairs))
        }
    }
}
