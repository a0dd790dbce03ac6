use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;

use crate::domain::{RequestId, WidgetPayload};

/// Raw external events before any interpretation.
/// Produced by the TUI event stream and the background services.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMsg {
    // System events
    Startup,
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    Tick,
    Render,

    // User input
    Key(KeyEvent),
    Paste(String),

    // Service events
    ClockTick(DateTime<Local>),
    WidgetLoaded {
        request: RequestId,
        payload: WidgetPayload,
    },
    WidgetFailed {
        request: RequestId,
        message: String,
    },

    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Events arriving several times per second, excluded from debug logging.
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render | RawMsg::ClockTick(_))
    }
}
