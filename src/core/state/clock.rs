use chrono::{DateTime, Local};

use crate::{
    core::{cmd::Cmd, msg::clock::ClockMsg},
    domain::clock::{format_date, format_time},
    infrastructure::config::ClockConfig,
};

/// Wall clock shown in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClockState {
    #[default]
    Idle,
    Running {
        time: String,
        date: String,
    },
}

impl ClockState {
    pub fn is_running(&self) -> bool {
        matches!(self, ClockState::Running { .. })
    }

    /// Formatted time and date; empty until the first tick.
    pub fn display(&self) -> Option<(&str, &str)> {
        match self {
            ClockState::Running { time, date } => Some((time.as_str(), date.as_str())),
            ClockState::Idle => None,
        }
    }

    pub fn update(&mut self, msg: ClockMsg, config: &ClockConfig) -> Vec<Cmd> {
        match msg {
            ClockMsg::Start => {
                if self.is_running() {
                    return vec![];
                }
                *self = ClockState::Running {
                    time: String::new(),
                    date: String::new(),
                };
                vec![Cmd::StartClock]
            }
            ClockMsg::Tick(now) => {
                self.tick(&now, config);
                vec![]
            }
        }
    }

    fn tick(&mut self, now: &DateTime<Local>, config: &ClockConfig) {
        if let ClockState::Running { time, date } = self {
            *time = format_time(now, &config.time_format);
            *date = format_date(now, &config.date_format);
        }
    }
}
