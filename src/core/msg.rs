pub mod clock;
pub mod links;
pub mod notepad;
pub mod system;
pub mod ui;
pub mod widget;

use clock::ClockMsg;
use links::LinksMsg;
use notepad::NotepadMsg;
use system::SystemMsg;
use ui::UiMsg;
use widget::WidgetMsg;

/// Domain messages representing application intent.
/// These are processed by the update function.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Load persisted state and wire every widget; honoured once.
    Startup,

    System(SystemMsg),
    Clock(ClockMsg),
    Notepad(NotepadMsg),
    Links(LinksMsg),
    Widget(WidgetMsg),
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Clock(ClockMsg::Tick(_)))
    }
}
