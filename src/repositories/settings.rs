use std::sync::Arc;

use super::{NOTES_KEY, TITLE_KEY};
use crate::{domain::StoreError, infrastructure::store::Store};

/// Title and notes text, each persisted verbatim under its own key.
#[derive(Clone)]
pub struct SettingsRepository {
    store: Arc<dyn Store>,
    default_title: String,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn Store>, default_title: impl Into<String>) -> Self {
        Self {
            store,
            default_title: default_title.into(),
        }
    }

    pub fn title(&self) -> String {
        self.store
            .get(TITLE_KEY)
            .unwrap_or_else(|| self.default_title.clone())
    }

    pub fn notes(&self) -> String {
        self.store.get(NOTES_KEY).unwrap_or_default()
    }

    pub fn save_title(&self, title: &str) -> Result<(), StoreError> {
        self.store.set(TITLE_KEY, title)
    }

    pub fn save_notes(&self, notes: &str) -> Result<(), StoreError> {
        self.store.set(NOTES_KEY, notes)
    }
}
