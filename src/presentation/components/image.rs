use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::image::{ImageSize, ImageView},
    presentation::widgets::panel::Panel,
};

const HINT: &str = "Press i for an image, I for full size.";

#[derive(Debug, Clone, Default)]
pub struct ImageComponent;

impl ImageComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let panel = Panel::from_status("Image", &state.widgets.image.status, HINT, image_lines);
        frame.render_widget(panel, area);
    }
}

fn image_lines(view: &ImageView) -> Vec<Line<'_>> {
    let mut lines = vec![Line::styled(
        view.description.as_deref().unwrap_or("Untitled"),
        Style::default().bold(),
    )];
    if let Some(name) = &view.photographer {
        lines.push(Line::raw(format!("by {name}")));
    }
    let size = match view.size {
        ImageSize::Small => "small",
        ImageSize::Full => "full size",
    };
    lines.push(Line::styled(
        format!("{size}, v to open"),
        Style::default().fg(Color::Gray),
    ));
    lines.push(Line::styled(
        view.url.as_str(),
        Style::default().fg(Color::Blue).underlined(),
    ));
    lines
}
