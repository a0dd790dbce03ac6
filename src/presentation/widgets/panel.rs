use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::core::state::widgets::WidgetStatus;

pub const LOADING: &str = "Loading...";

/// Bordered box for one HTTP-backed panel.
pub struct Panel<'a> {
    title: &'a str,
    body: Vec<Line<'a>>,
}

impl<'a> Panel<'a> {
    /// Maps a widget status to panel text; `ready` renders the loaded view.
    pub fn from_status<T>(
        title: &'a str,
        status: &'a WidgetStatus<T>,
        hint: &'a str,
        ready: impl FnOnce(&'a T) -> Vec<Line<'a>>,
    ) -> Self {
        let body = match status {
            WidgetStatus::Idle => vec![Line::styled(hint, Style::default().fg(Color::DarkGray))],
            WidgetStatus::Fetching => vec![Line::styled(LOADING, Style::default().italic())],
            WidgetStatus::Ready(view) => ready(view),
            WidgetStatus::Failed(message) => {
                vec![Line::styled(message.as_str(), Style::default().fg(Color::Red))]
            }
        };
        Self { title, body }
    }
}

impl<'a> Widget for Panel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title));
        Paragraph::new(self.body)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
