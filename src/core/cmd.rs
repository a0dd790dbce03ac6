use crate::domain::{image::ImageSize, RequestId};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Side effects requested by the update step.
/// Cmd states what should happen; CmdExecutor and the services decide how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    // Services
    StartClock,
    FetchWeather { request: RequestId },
    FetchImage { request: RequestId, size: ImageSize },
    FetchQuote { request: RequestId },
    OpenUrl { url: String },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(mut commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command starts background work
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::StartClock
            | Cmd::FetchWeather { .. }
            | Cmd::FetchImage { .. }
            | Cmd::FetchQuote { .. } => true,

            Cmd::OpenUrl { .. }
            | Cmd::Tui(..)
            | Cmd::RequestRender
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Cmd::StartClock => "StartClock".to_string(),
            Cmd::FetchWeather { .. } => "FetchWeather".to_string(),
            Cmd::FetchImage { size, .. } => format!("FetchImage({size})"),
            Cmd::FetchQuote { .. } => "FetchQuote".to_string(),
            Cmd::OpenUrl { .. } => "OpenUrl".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::None => "None".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::WidgetKind;

    #[test]
    fn test_batch() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::StartClock]), Cmd::StartClock);
        assert_eq!(
            Cmd::batch(vec![Cmd::StartClock, Cmd::RequestRender]),
            Cmd::Batch(vec![Cmd::StartClock, Cmd::RequestRender])
        );
    }

    #[test]
    fn test_is_async() {
        let request = RequestId::new(WidgetKind::Stock, 1);
        assert!(Cmd::FetchQuote { request }.is_async());
        assert!(!Cmd::RequestRender.is_async());
        assert!(Cmd::Batch(vec![Cmd::None, Cmd::StartClock]).is_async());
    }

    #[test]
    fn test_name() {
        let request = RequestId::new(WidgetKind::Image, 1);
        assert_eq!(
            Cmd::FetchImage {
                request,
                size: ImageSize::Full
            }
            .name(),
            "FetchImage(full)"
        );
        assert_eq!(Cmd::Batch(vec![Cmd::None, Cmd::None]).name(), "Batch(2)");
    }
}
