use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand, cmd_executor::CmdExecutor, raw_msg::RawMsg, state::AppState,
    },
    infrastructure::{
        clock_service::ClockService,
        config::Config,
        http::{JsonFetcher, ReqwestFetcher},
        opener::{SystemOpener, UrlOpener},
        store::SharedStore,
        tui::{real::RealTui, Event, TuiLike},
        widget_service::WidgetService,
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// What woke the loop up.
enum Wake {
    Tui(Option<Event>),
    Service(Option<RawMsg>),
}

/// Drives the Elm runtime: TUI events and service results in, frames out.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    renderer: Renderer,
    cancel_token: CancellationToken,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
}

impl AppRunner {
    /// Wire the runtime, services and executor around the given collaborators.
    pub fn new(
        config: Config,
        store: SharedStore,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        fetcher: Arc<dyn JsonFetcher>,
        opener: Arc<dyn UrlOpener>,
    ) -> Self {
        let mut runtime = Runtime::new(AppState::new(config.clone()), store);
        let raw_tx = runtime.get_raw_sender();
        let cancel_token = CancellationToken::new();

        let widget_service = WidgetService::new(
            &config,
            fetcher,
            raw_tx.clone(),
            cancel_token.child_token(),
        );
        let clock_service = ClockService::new(raw_tx.clone(), cancel_token.child_token());

        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new(opener);
        executor.set_widget_service(Arc::new(widget_service));
        executor.set_clock_service(clock_service);
        executor.set_render_request_sender(render_req_tx);
        executor.set_tui_sender(tui_cmd_tx);
        executor.set_error_sender(raw_tx);
        runtime.set_executor(executor);

        runtime.send_raw_msg(RawMsg::Startup);

        Self {
            runtime,
            tui,
            renderer: Renderer::new(),
            cancel_token,
            render_req_rx,
            tui_cmd_rx,
        }
    }

    /// Production wiring: crossterm terminal, reqwest client and the system URL opener.
    pub fn new_with_real(
        config: Config,
        store: SharedStore,
        tick_rate: f64,
        frame_rate: f64,
    ) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(config.network.timeout())?;
        let tui = RealTui::new()?
            .tick_rate(tick_rate)
            .frame_rate(frame_rate)
            .paste(true);
        Ok(Self::new(
            config,
            store,
            Arc::new(Mutex::new(tui)),
            Arc::new(fetcher),
            Arc::new(SystemOpener),
        ))
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Run until the state asks to quit.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        let mut dirty = true;
        let mut saw_render = true;
        loop {
            let before = self.runtime.get_stats().processed_messages;
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
            }
            dirty |= self.runtime.get_stats().processed_messages != before;

            let mut resizes = vec![];
            while let Ok(TuiCommand::Resize { width, height }) = self.tui_cmd_rx.try_recv() {
                resizes.push((width, height));
            }
            if let Some((w, h)) = Coalescer::decide_resize(&resizes) {
                self.tui.lock().await.resize(Rect::new(0, 0, w, h))?;
                dirty = true;
                saw_render = true;
            }

            let mut render_reqs = 0;
            while self.render_req_rx.try_recv().is_ok() {
                render_reqs += 1;
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
                dirty = true;
                continue;
            }

            if Coalescer::decide_render(dirty, render_reqs, saw_render) {
                self.renderer
                    .render(&self.tui, self.runtime.state())
                    .await?;
                dirty = false;
            }
            saw_render = false;

            match self.wait().await {
                Wake::Tui(Some(event)) => saw_render = self.handle_event(event),
                Wake::Tui(None) => {
                    // no terminal input pending; yield briefly to avoid a busy loop
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
                Wake::Service(Some(raw)) => self.runtime.send_raw_msg(raw),
                Wake::Service(None) => {}
            }
        }

        self.cancel_token.cancel();
        self.tui.lock().await.exit()?;
        log::info!("Dashboard stopped");
        Ok(())
    }

    async fn wait(&mut self) -> Wake {
        let tui = Arc::clone(&self.tui);
        let mut guard = tui.lock().await;
        // TestTui pops its event as soon as next() is called
        tokio::select! {
            biased;
            event = guard.next() => Wake::Tui(event),
            raw = self.runtime.recv_raw() => Wake::Service(raw),
        }
    }

    /// Forward a terminal event; returns true for a frame tick.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Render => return true,
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Paste(text) => self.runtime.send_raw_msg(RawMsg::Paste(text)),
            Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("terminal event stream failed".into())),
            Event::Init
            | Event::Closed
            | Event::FocusGained
            | Event::FocusLost
            | Event::Mouse(_) => {}
        }
        false
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::{
        http::StaticFetcher, opener::RecordingOpener, store::MemoryStore, tui::test::TestTui,
    };

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn runner_with(events: Vec<Event>) -> (AppRunner, Arc<Mutex<TestTui>>) {
        let test_tui = Arc::new(Mutex::new(
            TestTui::with_events(100, 30, events).expect("test tui"),
        ));
        let tui: Arc<Mutex<dyn TuiLike + Send>> = test_tui.clone();
        let runner = AppRunner::new(
            Config::bundled().expect("bundled config parses"),
            Arc::new(MemoryStore::new()),
            tui,
            Arc::new(StaticFetcher::new()),
            Arc::new(RecordingOpener::new()),
        );
        (runner, test_tui)
    }

    #[tokio::test]
    async fn test_quit_key_stops_loop() {
        let (mut runner, tui) = runner_with(vec![Event::Render, key('q')]);

        tokio::time::timeout(Duration::from_secs(5), runner.run())
            .await
            .expect("runner finished")
            .expect("runner ok");

        assert!(runner.runtime().state().system.should_quit);
        assert!(runner.runtime().state().system.started);
        assert!(tui.lock().await.draw_count() >= 1);
    }

    #[tokio::test]
    async fn test_suspend_then_resume() {
        let ctrl_z = Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        let (mut runner, tui) = runner_with(vec![ctrl_z, key('q')]);

        tokio::time::timeout(Duration::from_secs(5), runner.run())
            .await
            .expect("runner finished")
            .expect("runner ok");

        assert_eq!(tui.lock().await.suspend_count(), 1);
        assert!(!runner.runtime().state().system.should_suspend);
    }

    #[tokio::test]
    async fn test_startup_paints_widgets() {
        let (mut runner, tui) = runner_with(vec![Event::Render, key('q')]);

        tokio::time::timeout(Duration::from_secs(5), runner.run())
            .await
            .expect("runner finished")
            .expect("runner ok");

        let screen = tui.lock().await.rows().join("\n");
        assert!(screen.contains("My Dashboard"));
        assert!(screen.contains("No links yet"));
    }
}
