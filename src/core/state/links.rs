use crate::domain::Link;

/// Snapshot of the saved links plus the list cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinksState {
    pub items: Vec<Link>,
    pub selected: Option<usize>,
}

impl LinksState {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_link(&self) -> Option<&Link> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Swap in a fresh snapshot, keeping the cursor within bounds.
    pub fn replace(&mut self, items: Vec<Link>) {
        self.items = items;
        self.selected = match (self.selected, self.items.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => None,
        };
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn three() -> Vec<Link> {
        vec![
            Link::new("A", "https://a"),
            Link::new("B", "https://b"),
            Link::new("C", "https://c"),
        ]
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut links = LinksState::default();
        links.select_next();
        assert_eq!(links.selected, None);

        links.replace(three());
        links.select_next();
        assert_eq!(links.selected, Some(0));
        links.select_next();
        links.select_next();
        links.select_next();
        assert_eq!(links.selected, Some(2));
        links.select_previous();
        assert_eq!(links.selected_link().map(|l| l.title.as_str()), Some("B"));
    }

    #[test]
    fn test_replace_clamps_selection() {
        let mut links = LinksState::default();
        links.replace(three());
        links.selected = Some(2);

        links.replace(three()[..2].to_vec());
        assert_eq!(links.selected, Some(1));

        links.replace(vec![]);
        assert_eq!(links.selected, None);
        assert!(links.is_empty());
    }
}
