//! Caret-position analysis.
//!
//! The split/merge transitions are gated on whether the caret sits at the
//! absolute start, absolute end, or interior of a paragraph. The analysis is
//! pure and works on any [`TextCursor`], so the state machine can be tested
//! with plain data instead of a live text input.
//!
//! Offsets are measured in chars, not bytes, so a caret can never land inside
//! a multi-byte character.

/// Anything that exposes its current text and selection offset.
///
/// In the browser this is backed by a textarea handle whose selection must be
/// read synchronously inside the key-event handler; in tests and the CLI it
/// is a [`PlainCursor`].
pub trait TextCursor {
    /// The full text of the input.
    fn text(&self) -> &str;

    /// The selection start offset, in chars.
    fn selection_start(&self) -> usize;
}

/// Where the caret sits within a paragraph's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretPosition {
    /// Raw caret offset in chars, clamped to the text length.
    pub offset: usize,
    /// True iff the caret sits before the first char.
    pub is_at_start: bool,
    /// True iff the caret sits after the last char.
    pub is_at_end: bool,
}

impl CaretPosition {
    /// Analyzes a caret offset against a text. Offsets past the end are
    /// clamped to the char count.
    pub fn analyze(text: &str, selection_start: usize) -> Self {
        let length = text.chars().count();
        let offset = selection_start.min(length);
        Self {
            offset,
            is_at_start: offset == 0,
            is_at_end: offset == length,
        }
    }

    /// Analyzes the current position of a cursor.
    pub fn from_cursor<C: TextCursor + ?Sized>(cursor: &C) -> Self {
        Self::analyze(cursor.text(), cursor.selection_start())
    }
}

/// Converts a UTF-16 code-unit offset (the unit of DOM `selectionStart`) to
/// a char offset into `text`.
///
/// Supplementary-plane characters take two UTF-16 units but one char, so the
/// two scales diverge as soon as an emoji appears. An offset landing inside a
/// surrogate pair, or past the end, resolves to the next char boundary.
pub fn char_offset_from_utf16(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0usize;
    for (chars, c) in text.chars().enumerate() {
        if units >= utf16_offset {
            return chars;
        }
        units += c.len_utf16();
    }
    text.chars().count()
}

/// Owned cursor over plain data. Used by tests, the CLI and the WASM layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainCursor {
    text: String,
    selection: usize,
}

impl PlainCursor {
    /// Creates a cursor at the given char offset.
    pub fn new(text: impl Into<String>, selection: usize) -> Self {
        Self {
            text: text.into(),
            selection,
        }
    }

    /// Creates a cursor at the very start of the text.
    pub fn at_start(text: impl Into<String>) -> Self {
        Self::new(text, 0)
    }

    /// Creates a cursor at the very end of the text.
    pub fn at_end(text: impl Into<String>) -> Self {
        let text = text.into();
        let selection = text.chars().count();
        Self { text, selection }
    }
}

impl TextCursor for PlainCursor {
    fn text(&self) -> &str {
        &self.text
    }

    fn selection_start(&self) -> usize {
        self.selection
    }
}

// =============================================================================
// TESTS
// =============================================================================
