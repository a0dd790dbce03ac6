use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::widgets::panel::Panel};

const HINT: &str = "Press r to refresh.";

#[derive(Debug, Clone, Default)]
pub struct WeatherComponent;

impl WeatherComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let panel = Panel::from_status("Weather", &state.widgets.weather.status, HINT, |report| {
            vec![
                Line::styled(report.headline(), Style::default().bold()),
                Line::raw(report.summary()),
                Line::styled(
                    report.description.as_str(),
                    Style::default().fg(Color::Gray).italic(),
                ),
                Line::styled(report.icon_url(), Style::default().fg(Color::DarkGray)),
            ]
        });
        frame.render_widget(panel, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{
        core::state::widgets::WidgetStatus, domain::weather::WeatherReport,
        infrastructure::tui::test::buffer_rows,
    };

    #[test]
    fn test_ready_report() {
        let mut state = AppState::default();
        state.widgets.weather.status = WidgetStatus::Ready(WeatherReport {
            city: "Oslo".into(),
            country: "NO".into(),
            temperature: 21,
            feels_like: 20,
            description: "clear sky".into(),
            icon: "01d".into(),
        });

        let mut terminal = Terminal::new(TestBackend::new(40, 7)).expect("terminal");
        terminal
            .draw(|f| WeatherComponent::new().view(&state, f, f.area()))
            .expect("draw");
        let screen = buffer_rows(terminal.backend().buffer()).join("\n");

        assert!(screen.contains("Oslo, NO"));
        assert!(screen.contains("21°C, Feels like: 20°C"));
        assert!(screen.contains("clear sky"));
    }
}
