use std::sync::Arc;

use serde_json::Value;

use super::LINKS_KEY;
use crate::{
    domain::{error::Result, DashboardError, Link, StoreError},
    infrastructure::store::Store,
};

/// Ordered quick links persisted as one JSON array.
///
/// Every call reads the full collection; every mutation writes the full
/// collection back.
#[derive(Clone)]
pub struct LinkRegistry {
    store: Arc<dyn Store>,
}

impl LinkRegistry {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Saved links in insertion order.
    ///
    /// A malformed blob is recovered element by element: entries of a JSON
    /// array that are valid links are kept, everything else is dropped.
    pub fn list(&self) -> Vec<Link> {
        let Some(raw) = self.store.get(LINKS_KEY) else {
            return vec![];
        };

        if let Ok(links) = serde_json::from_str::<Vec<Link>>(&raw) {
            return links;
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => {
                let total = items.len();
                let links: Vec<Link> = items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .collect();
                log::warn!(
                    "Recovered {} of {total} saved links from a malformed blob",
                    links.len()
                );
                links
            }
            Ok(_) | Err(_) => {
                log::warn!("Saved links blob is not a JSON array; ignoring it");
                vec![]
            }
        }
    }

    /// Appends a link. Both fields are trimmed and must be non-empty.
    pub fn add(&self, title: &str, url: &str) -> Result<Link> {
        let title = title.trim();
        let url = url.trim();
        if title.is_empty() || url.is_empty() {
            return Err(DashboardError::Validation(
                "Enter a title and a URL!".to_string(),
            ));
        }

        let link = Link::new(title, url);
        let mut links = self.list();
        links.push(link.clone());
        self.save(&links)?;
        log::info!("Added link {title:?} -> {url}");
        Ok(link)
    }

    /// Removes and returns the link at `index`.
    pub fn remove_at(&self, index: usize) -> Result<Link> {
        let mut links = self.list();
        if index >= links.len() {
            return Err(DashboardError::Index {
                index,
                len: links.len(),
            });
        }

        let removed = links.remove(index);
        self.save(&links)?;
        log::info!("Removed link {:?}", removed.title);
        Ok(removed)
    }

    fn save(&self, links: &[Link]) -> Result<()> {
        let blob = serde_json::to_string(links).map_err(|e| StoreError::Io(e.to_string()))?;
        self.store.set(LINKS_KEY, &blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::infrastructure::store::MemoryStore;

    fn registry_with(raw: Option<&str>) -> LinkRegistry {
        let store = match raw {
            Some(raw) => MemoryStore::with_entries([(LINKS_KEY, raw)]),
            None => MemoryStore::new(),
        };
        LinkRegistry::new(Arc::new(store))
    }

    #[test]
    fn test_list_empty_store() {
        assert_eq!(registry_with(None).list(), vec![]);
    }

    #[test]
    fn test_add_appends_in_order() -> Result<()> {
        let registry = registry_with(None);
        registry.add("Mail", "https://mail.example")?;
        registry.add("News", "https://news.example")?;
        assert_eq!(
            registry.list(),
            vec![
                Link::new("Mail", "https://mail.example"),
                Link::new("News", "https://news.example"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_add_trims_fields() -> Result<()> {
        let registry = registry_with(None);
        let link = registry.add("  Mail ", "\thttps://mail.example\n")?;
        assert_eq!(link, Link::new("Mail", "https://mail.example"));
        assert_eq!(registry.list(), vec![link]);
        Ok(())
    }

    #[rstest]
    #[case("", "x")]
    #[case("x", "")]
    #[case("   ", "x")]
    #[case("x", " \t ")]
    fn test_add_rejects_empty_fields(#[case] title: &str, #[case] url: &str) -> Result<()> {
        let registry = registry_with(None);
        registry.add("Keep", "https://keep.example")?;
        let before = registry.list();

        let err = registry.add(title, url).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(registry.list(), before);
        Ok(())
    }

    #[test]
    fn test_remove_at_preserves_order() -> Result<()> {
        let registry = registry_with(None);
        for name in ["a", "b", "c", "d"] {
            registry.add(name, &format!("https://{name}.example"))?;
        }

        let removed = registry.remove_at(1)?;
        assert_eq!(removed.title, "b");
        let titles: Vec<String> = registry.list().into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["a", "c", "d"]);
        Ok(())
    }

    #[test]
    fn test_remove_at_out_of_range() -> Result<()> {
        let registry = registry_with(None);
        registry.add("a", "https://a.example")?;
        assert_eq!(
            registry.remove_at(1),
            Err(DashboardError::Index { index: 1, len: 1 })
        );
        assert_eq!(registry.list().len(), 1);
        Ok(())
    }

    #[test]
    fn test_malformed_blob_not_json() {
        assert_eq!(registry_with(Some("{oops")).list(), vec![]);
    }

    #[test]
    fn test_malformed_blob_not_array() {
        assert_eq!(registry_with(Some(r#"{"title":"a"}"#)).list(), vec![]);
    }

    #[test]
    fn test_malformed_blob_partial_recovery() {
        let raw = r#"[{"title":"a","url":"https://a.example"},{"title":"b"},42,{"title":"c","url":"https://c.example"}]"#;
        assert_eq!(
            registry_with(Some(raw)).list(),
            vec![
                Link::new("a", "https://a.example"),
                Link::new("c", "https://c.example"),
            ]
        );
    }

    #[test]
    fn test_null_blob_is_empty() {
        assert_eq!(registry_with(Some("null")).list(), vec![]);
    }
}
