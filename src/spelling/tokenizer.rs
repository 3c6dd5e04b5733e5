//! Whitespace tokenizer that keeps enough information to rebuild its input.
//!
//! A message is split into alternating runs of whitespace and words.
//! Concatenating the `text` of every segment yields the original message
//! byte for byte, so a corrector can swap individual words without touching
//! spacing, line breaks, or punctuation anywhere else.
//!
//! Each word also exposes its *core*: the word without leading and trailing
//! non-alphanumeric characters. `"(ferlizer),"` has the core `"ferlizer"`,
//! prefix `"("` and suffix `"),"`.

/// Classification of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A run of whitespace characters
    Whitespace,
    /// A run of non-whitespace characters
    Word,
}

/// A contiguous slice of the tokenized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The segment text.
    pub text: &'a str,
    /// Whitespace or word.
    pub kind: SegmentKind,
}

impl<'a> Segment<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == SegmentKind::Word
    }

    /// Split into `(prefix, core, suffix)`.
    ///
    /// Whitespace segments have an empty core.
    pub fn parts(&self) -> (&'a str, &'a str, &'a str) {
        if !self.is_word() {
            return (self.text, "", "");
        }

        let text = self.text;
        let rest = text.trim_start_matches(|c: char| !c.is_alphanumeric());
        let core = rest.trim_end_matches(|c: char| !c.is_alphanumeric());
        let prefix = &text[..text.len() - rest.len()];
        let suffix = &rest[core.len()..];

        (prefix, core, suffix)
    }

    /// The word without surrounding punctuation.
    pub fn core(&self) -> &'a str {
        self.parts().1
    }
}

/// Split `text` into whitespace and word segments.
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut current: Option<(SegmentKind, usize)> = None;

    for (idx, ch) in text.char_indices() {
        let kind = if ch.is_whitespace() {
            SegmentKind::Whitespace
        } else {
            SegmentKind::Word
        };

        match current {
            Some((current_kind, _)) if current_kind == kind => {}
            Some((current_kind, start)) => {
                segments.push(Segment {
                    text: &text[start..idx],
                    kind: current_kind,
                });
                current = Some((kind, idx));
            }
            None => current = Some((kind, idx)),
        }
    }

    if let Some((kind, start)) = current {
        segments.push(Segment {
            text: &text[start..],
            kind,
        });
    }

    segments
}
