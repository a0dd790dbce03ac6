use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{core::state::AppState, presentation::widgets::popup::centered_rect};

/// Blocking message box; the next key press dismisses it.
#[derive(Debug, Clone, Default)]
pub struct AlertComponent;

impl AlertComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(message) = &state.ui.alert else {
            return;
        };

        let popup = centered_rect(44, 5, area);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Alert ")
            .title_bottom(Line::from(" Press any key ").right_aligned());
        frame.render_widget(
            Paragraph::new(message.as_str())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            popup,
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::infrastructure::tui::test::buffer_rows;

    #[test]
    fn test_alert_overlay() {
        let mut state = AppState::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 9)).expect("terminal");

        terminal
            .draw(|f| AlertComponent::new().view(&state, f, f.area()))
            .expect("draw");
        assert!(!buffer_rows(terminal.backend().buffer()).join("").contains("Alert"));

        state.ui.alert = Some("Enter a title and a URL!".into());
        terminal
            .draw(|f| AlertComponent::new().view(&state, f, f.area()))
            .expect("draw");
        let screen = buffer_rows(terminal.backend().buffer()).join("\n");
        assert!(screen.contains(" Alert "));
        assert!(screen.contains("Enter a title and a URL!"));
    }
}
