use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::{
    state::editor::{CursorPosition, TextAreaState, TextSelection},
    textarea_engine::TextAreaEngine,
};

/// Production engine based on tui-textarea. It builds a throwaway TextArea from
/// the snapshot, feeds it the keys, then reads the new snapshot back out.
pub struct TuiTextAreaEngine;

/// A TextArea holding the snapshot's text, cursor and selection.
pub fn textarea_from_snapshot(snapshot: &TextAreaState) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    if !snapshot.content.is_empty() {
        textarea.insert_str(&snapshot.content);
    }
    textarea.move_cursor(CursorMove::Jump(
        clamp(snapshot.cursor_position.line),
        clamp(snapshot.cursor_position.column),
    ));
    if let Some(sel) = &snapshot.selection {
        textarea.move_cursor(CursorMove::Jump(
            clamp(sel.start.line),
            clamp(sel.start.column),
        ));
        textarea.start_selection();
        textarea.move_cursor(CursorMove::Jump(clamp(sel.end.line), clamp(sel.end.column)));
    }
    textarea
}

fn clamp(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn snapshot_of(textarea: &TextArea<'_>) -> TextAreaState {
    let (line, column) = textarea.cursor();
    let selection = textarea
        .selection_range()
        .map(|((sr, sc), (er, ec))| TextSelection {
            start: CursorPosition {
                line: sr,
                column: sc,
            },
            end: CursorPosition {
                line: er,
                column: ec,
            },
        });
    TextAreaState::new(
        textarea.lines().join("\n"),
        CursorPosition { line, column },
        selection,
    )
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = textarea_from_snapshot(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        snapshot_of(&textarea)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn applies_insert_in_the_middle() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::at_end("ab");

        let out = engine.apply_keys(&snap, &[key(KeyCode::Left), key(KeyCode::Char('X'))]);

        assert_eq!(out.content, "aXb");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 2 });
        assert_eq!(snap.content, "ab");
    }

    #[test]
    fn applies_backspace_and_newline() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::at_end("todo");

        let out = engine.apply_keys(
            &snap,
            &[
                key(KeyCode::Backspace),
                key(KeyCode::Enter),
                key(KeyCode::Char('-')),
            ],
        );

        assert_eq!(out.content, "tod\n-");
        assert_eq!(out.cursor_position, CursorPosition { line: 1, column: 1 });
    }

    #[test]
    fn deletes_selection() {
        let engine = TuiTextAreaEngine;
        let with_sel = TextAreaState::new(
            "hello".into(),
            CursorPosition { line: 0, column: 5 },
            Some(TextSelection {
                start: CursorPosition { line: 0, column: 1 },
                end: CursorPosition { line: 0, column: 4 },
            }),
        );

        let out = engine.apply_keys(&with_sel, &[key(KeyCode::Backspace)]);

        assert_eq!(out.content, "ho");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 1 });
    }

    #[test]
    fn rebuilds_multiline_snapshot() {
        let textarea = textarea_from_snapshot(&TextAreaState::at_end("one\ntwo"));
        assert_eq!(textarea.lines(), ["one", "two"]);
        assert_eq!(textarea.cursor(), (1, 3));
    }
}
