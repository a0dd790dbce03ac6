use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockMsg {
    /// Leave `Idle` and start the ticker.
    Start,
    Tick(DateTime<Local>),
}
