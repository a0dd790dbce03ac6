use ratatui::{
    prelude::*,
    widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{text::truncate_width, Link};

/// Label of the per-row delete control.
pub const DELETE_CONTROL: &str = "[x]";
pub const EMPTY_PLACEHOLDER: &str = "No links yet. Press a to add one.";

/// One rendered line of the link list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow<'a> {
    pub title: &'a str,
    pub url: &'a str,
}

impl<'a> LinkRow<'a> {
    /// `title  url ... [x]`, squeezed into `width` columns.
    /// The title is kept whole before the URL is shortened.
    pub fn line(&self, width: usize) -> Line<'a> {
        let control = format!(" {DELETE_CONTROL}");
        let budget = width.saturating_sub(control.width());
        let title = truncate_width(self.title, budget);
        let url_budget = budget.saturating_sub(title.width() + 2);
        let url = truncate_width(self.url, url_budget);
        let pad = budget.saturating_sub(title.width() + 2 + url.width());

        Line::from(vec![
            Span::styled(title, Style::default().bold()),
            Span::raw("  "),
            Span::styled(url, Style::default().fg(Color::Blue).underlined()),
            Span::raw(" ".repeat(pad)),
            Span::styled(control, Style::default().fg(Color::Red)),
        ])
    }
}

pub fn link_rows(links: &[Link]) -> Vec<LinkRow<'_>> {
    links
        .iter()
        .map(|link| LinkRow {
            title: &link.title,
            url: &link.url,
        })
        .collect()
}

/// Saved links with the selected row highlighted.
pub struct LinkList<'a> {
    links: &'a [Link],
    selected: Option<usize>,
    block: Option<Block<'a>>,
}

impl<'a> LinkList<'a> {
    pub fn new(links: &'a [Link], selected: Option<usize>) -> Self {
        Self {
            links,
            selected,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<'a> Widget for LinkList<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };
        if let Some(block) = self.block {
            block.render(area, buf);
        }

        if self.links.is_empty() {
            Paragraph::new(EMPTY_PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).italic())
                .render(inner, buf);
            return;
        }

        let width = usize::from(inner.width).saturating_sub(2);
        let items: Vec<ListItem> = link_rows(self.links)
            .iter()
            .map(|row| ListItem::new(row.line(width)))
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}
