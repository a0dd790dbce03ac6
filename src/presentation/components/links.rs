use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear},
};

use crate::{
    core::state::{ui::FormField, AppState},
    infrastructure::tui::textarea_engine::textarea_from_snapshot,
    presentation::widgets::{link_list::LinkList, popup::centered_rect},
};

/// Quick links panel.
#[derive(Debug, Clone, Default)]
pub struct LinksComponent;

impl LinksComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let title = format!(" Links ({}) ", state.links.len());
        let list = LinkList::new(&state.links.items, state.links.selected)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(list, area);
    }
}

/// Popup form for a new link.
#[derive(Debug, Clone, Default)]
pub struct LinkFormComponent;

impl LinkFormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.ui.is_adding_link() {
            return;
        }

        let popup = centered_rect(60, 8, area);
        frame.render_widget(Clear, popup);
        let outer = Block::default()
            .borders(Borders::ALL)
            .title(" Add link: Tab switches, Enter saves, Esc cancels ");
        let inner = outer.inner(popup);
        frame.render_widget(outer, popup);

        let [title_area, url_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(inner);
        let form = &state.ui.form;
        for (field, snapshot, label, field_area) in [
            (FormField::Title, &form.title, " Title ", title_area),
            (FormField::Url, &form.url, " URL ", url_area),
        ] {
            let focused = form.focus == field;
            let mut textarea = textarea_from_snapshot(snapshot);
            textarea.set_cursor_line_style(Style::default());
            if !focused {
                textarea.set_cursor_style(Style::default());
            }
            let border = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            textarea.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(label),
            );
            frame.render_widget(&textarea, field_area);
        }
    }
}
