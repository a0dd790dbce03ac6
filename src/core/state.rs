pub mod clock;
pub mod editor;
pub mod links;
pub mod notepad;
pub mod system;
pub mod ui;
pub mod widgets;

use crate::infrastructure::config::Config;

pub use clock::ClockState;
pub use links::LinksState;
pub use notepad::NotepadState;
pub use system::SystemState;
pub use ui::UiState;
pub use widgets::WidgetsState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub system: SystemState,
    pub clock: ClockState,
    pub notepad: NotepadState,
    pub links: LinksState,
    pub widgets: WidgetsState,
    pub ui: UiState,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
}
