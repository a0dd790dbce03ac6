//! Status bar component
//!
//! Displays the latest status message and the key hints for the current mode.
//! This is a pure, stateless component that renders status data from AppState.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::{ui::UiMode, AppState};

/// Status bar component
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    /// Create a new status bar component
    pub fn new() -> Self {
        Self
    }

    /// Render the status bar: message on the left, key hints on the right.
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let hints = Self::hints(state);
        let hints_width = u16::try_from(hints.chars().count()).unwrap_or(u16::MAX);
        let [message_area, hints_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(hints_width.min(area.width)),
        ])
        .areas(area);

        frame.render_widget(Clear, area);
        let message = state.system.status_message().cloned().unwrap_or_default();
        frame.render_widget(Paragraph::new(message), message_area);
        frame.render_widget(
            Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right),
            hints_area,
        );
    }

    /// Key hints for the current mode
    pub fn hints(state: &AppState) -> &'static str {
        match state.ui.mode {
            UiMode::Normal => "q quit  t title  n notes  a add  d delete  enter open  r refresh",
            UiMode::EditingTitle => "enter/esc finish",
            UiMode::EditingNotes => "esc finish",
            UiMode::AddingLink => "tab switch  enter save  esc cancel",
        }
    }
}
