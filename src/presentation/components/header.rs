//! Header component
//!
//! Dashboard title on the left, clock on the right. While the title is being
//! edited the whole header becomes a single-line text field.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    core::state::{ui::UiMode, AppState},
    infrastructure::tui::textarea_engine::textarea_from_snapshot,
};

const CLOCK_PLACEHOLDER: &str = "--:--:--";

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if state.ui.mode == UiMode::EditingTitle {
            let mut textarea = textarea_from_snapshot(&state.ui.editor);
            textarea.set_cursor_line_style(Style::default());
            textarea.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Title: Enter or Esc to finish "),
            );
            frame.render_widget(&textarea, area);
            return;
        }

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (time, date) = state
            .clock
            .display()
            .unwrap_or((CLOCK_PLACEHOLDER, ""));
        let clock = Line::from(vec![
            Span::styled(time.to_string(), Style::default().bold()),
            Span::raw("  "),
            Span::styled(date.to_string(), Style::default().fg(Color::Gray)),
        ]);
        let clock_width = u16::try_from(clock.width()).unwrap_or(u16::MAX);

        let [title_area, clock_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(clock_width.min(inner.width)),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                state.notepad.title.as_str(),
                Style::default().fg(Color::Cyan).bold(),
            )),
            title_area,
        );
        frame.render_widget(Paragraph::new(clock).alignment(Alignment::Right), clock_area);
    }
}
