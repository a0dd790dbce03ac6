use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    infrastructure::{clock_service::ClockService, opener::UrlOpener, widget_service::WidgetService},
};

/// Command executor that routes Elm commands to the background services
#[derive(Clone)]
pub struct CmdExecutor {
    opener: Arc<dyn UrlOpener>,
    widget_service: Option<Arc<WidgetService>>,
    clock_service: Option<ClockService>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
    error_sender: Option<mpsc::UnboundedSender<RawMsg>>,
}

impl CmdExecutor {
    /// Create a new command executor that can only open URLs and log
    pub fn new(opener: Arc<dyn UrlOpener>) -> Self {
        Self {
            opener,
            widget_service: None,
            clock_service: None,
            tui_sender: None,
            render_req_sender: None,
            error_sender: None,
        }
    }

    /// Inject the service that runs weather, image and stock requests.
    pub fn set_widget_service(&mut self, service: Arc<WidgetService>) {
        self.widget_service = Some(service);
    }

    pub fn set_clock_service(&mut self, service: ClockService) {
        self.clock_service = Some(service);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Failed commands are reported back through this sender as `RawMsg::Error`.
    pub fn set_error_sender(&mut self, sender: mpsc::UnboundedSender<RawMsg>) {
        self.error_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::StartClock => match &self.clock_service {
                Some(clock) => {
                    // detached; the service token stops it
                    let _ = clock.run();
                }
                None => log::warn!("StartClock ignored: ClockService not available"),
            },

            Cmd::FetchWeather { request } => match &self.widget_service {
                Some(service) => service.fetch_weather(*request),
                None => log::warn!("FetchWeather ignored: WidgetService not available"),
            },

            Cmd::FetchImage { request, size } => match &self.widget_service {
                Some(service) => service.fetch_image(*request, *size),
                None => log::warn!("FetchImage ignored: WidgetService not available"),
            },

            Cmd::FetchQuote { request } => match &self.widget_service {
                Some(service) => service.fetch_quote(*request),
                None => log::warn!("FetchQuote ignored: WidgetService not available"),
            },

            Cmd::OpenUrl { url } => {
                self.opener
                    .open(url)
                    .map_err(|e| eyre!("Could not open {url}: {e}"))?;
                log::info!("Opened {url}");
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                    return Ok(());
                }
                log::warn!(
                    "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                );
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    ///
    /// A failing command does not stop the ones after it.
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                    if let Some(tx) = &self.error_sender {
                        let _ = tx.send(RawMsg::Error(e.to_string()));
                    }
                }
            }
        }

        execution_log
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_widget_service: self.widget_service.is_some(),
            has_clock_service: self.clock_service.is_some(),
            is_render_sender_closed: self.render_req_sender.as_ref().map(|tx| tx.is_closed()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_widget_service: bool,
    pub has_clock_service: bool,
    pub is_render_sender_closed: Option<bool>,
}
