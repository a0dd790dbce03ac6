use serde::{Deserialize, Serialize};

/// Cursor position within a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Text selection range within a text buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}

/// Everything needed to rebuild a text area between key presses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextAreaState {
    pub content: String,
    pub cursor_position: CursorPosition,
    pub selection: Option<TextSelection>,
}

impl TextAreaState {
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    /// Snapshot holding `content` with the cursor after its last character.
    pub fn at_end(content: impl Into<String>) -> Self {
        let content = content.into();
        let line = content.lines().count().saturating_sub(1) + usize::from(content.ends_with('\n'));
        let column = if content.ends_with('\n') {
            0
        } else {
            content.lines().last().map_or(0, |l| l.chars().count())
        };
        Self::new(content, CursorPosition { line, column }, None)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}
