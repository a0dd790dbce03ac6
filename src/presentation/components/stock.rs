use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::quote::{StockQuote, Trend},
    presentation::widgets::panel::Panel,
};

const HINT: &str = "Press r to refresh.";

#[derive(Debug, Clone, Default)]
pub struct StockComponent;

impl StockComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let panel = Panel::from_status("Stock", &state.widgets.stock.status, HINT, quote_lines);
        frame.render_widget(panel, area);
    }
}

fn quote_lines(quote: &StockQuote) -> Vec<Line<'_>> {
    let (arrow, color) = match quote.trend() {
        Trend::Up => ("▲", Color::Green),
        Trend::Down => ("▼", Color::Red),
        Trend::Flat => ("■", Color::Gray),
    };
    vec![
        Line::styled(quote.symbol.as_str(), Style::default().bold()),
        Line::raw(format!("${}", quote.display_price())),
        Line::styled(
            format!("{arrow} {}", quote.change_percent),
            Style::default().fg(color),
        ),
    ]
}
