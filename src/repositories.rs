//! Data layer over the persistent store.

pub mod links;
pub mod settings;

pub use links::LinkRegistry;
pub use settings::SettingsRepository;

/// Store key for the serialized quick-link array.
pub const LINKS_KEY: &str = "savedLinks";
/// Store key for the dashboard title.
pub const TITLE_KEY: &str = "dashboardTitle";
/// Store key for the notes pad.
pub const NOTES_KEY: &str = "dashboardNotes";
