//! Component collection and layout
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod alert;
pub mod header;
pub mod image;
pub mod links;
pub mod notes;
pub mod status_bar;
pub mod stock;
pub mod weather;

pub use alert::AlertComponent;
pub use header::HeaderComponent;
pub use image::ImageComponent;
pub use links::{LinkFormComponent, LinksComponent};
pub use notes::NotesComponent;
pub use status_bar::StatusBarComponent;
pub use stock::StockComponent;
pub use weather::WeatherComponent;

/// Every panel of the dashboard plus the overlays.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    header: HeaderComponent,
    notes: NotesComponent,
    links: LinksComponent,
    link_form: LinkFormComponent,
    weather: WeatherComponent,
    image: ImageComponent,
    stock: StockComponent,
    alert: AlertComponent,
    status_bar: StatusBarComponent,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main rendering entry point; delegates to the individual components.
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        // [header, notes | links, weather | image | stock, status]
        let [header, body, widgets, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .areas(area);
        let [notes, links] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body);
        let [weather, image, stock] = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(widgets);

        self.header.view(state, frame, header);
        self.notes.view(state, frame, notes);
        self.links.view(state, frame, links);
        self.weather.view(state, frame, weather);
        self.image.view(state, frame, image);
        self.stock.view(state, frame, stock);
        self.status_bar.view(state, frame, status);

        // Overlays last so they sit on top
        self.link_form.view(state, frame, area);
        self.alert.view(state, frame, area);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{domain::Link, infrastructure::tui::test::buffer_rows};

    fn render(state: &AppState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        terminal
            .draw(|f| Dashboard::new().render(f, f.area(), state))
            .expect("draw");
        buffer_rows(terminal.backend().buffer())
    }

    #[test]
    fn test_all_panels_present() {
        let mut state = AppState::default();
        state.notepad.title = "My Dashboard".into();
        state.links.replace(vec![Link::new("Mail", "https://mail.example")]);

        let screen = render(&state).join("\n");
        for needle in ["My Dashboard", " Notes ", " Links (1) ", " Weather ", " Image ", " Stock "] {
            assert!(screen.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut state = AppState::default();
        state.notepad.notes = "first\nsecond".into();
        assert_eq!(render(&state), render(&state));
    }
}
