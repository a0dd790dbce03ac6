use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    core::state::{ui::UiMode, AppState},
    infrastructure::tui::textarea_engine::textarea_from_snapshot,
};

const EMPTY_NOTES: &str = "Press n to write notes.";

/// Free-form notes pad.
#[derive(Debug, Clone, Default)]
pub struct NotesComponent;

impl NotesComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if state.ui.mode == UiMode::EditingNotes {
            let mut textarea = textarea_from_snapshot(&state.ui.editor);
            textarea.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Notes: Esc to finish "),
            );
            frame.render_widget(&textarea, area);
            return;
        }

        let block = Block::default().borders(Borders::ALL).title(" Notes ");
        let paragraph = if state.notepad.notes.is_empty() {
            Paragraph::new(Span::styled(
                EMPTY_NOTES,
                Style::default().fg(Color::DarkGray).italic(),
            ))
        } else {
            Paragraph::new(state.notepad.notes.as_str())
        };
        frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
    }
}
