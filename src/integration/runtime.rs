use std::{collections::VecDeque, mem, sync::Arc};

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd,
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::{store::SharedStore, tui::textarea_engine::TuiTextAreaEngine},
    repositories::{LinkRegistry, SettingsRepository},
};

/// Owns the application state and drives translate -> update -> execute.
pub struct Runtime {
    state: AppState,
    links: LinkRegistry,
    settings: SettingsRepository,
    engine: TuiTextAreaEngine,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
    processed: usize,
}

impl Runtime {
    /// Create a new Runtime over `store`; titles fall back to the configured default.
    pub fn new(initial_state: AppState, store: SharedStore) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        let default_title = initial_state.config.notepad.default_title.clone();

        Self {
            links: LinkRegistry::new(Arc::clone(&store)),
            settings: SettingsRepository::new(store, default_title),
            engine: TuiTextAreaEngine,
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
            processed: 0,
        }
    }

    /// Set command executor
    pub fn set_executor(&mut self, executor: CmdExecutor) {
        self.cmd_executor = Some(executor);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get raw message sender for background services
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Wait for the next raw message from a background service.
    pub async fn recv_raw(&mut self) -> Option<RawMsg> {
        self.raw_msg_rx.recv().await
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = self.cmd_executor.as_ref() else {
            return Err(
                "No command executor available. Use set_executor() to configure.".to_string(),
            );
        };

        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        Ok(executor.execute_commands(&commands))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Processing {msg:?}");
        }
        let ctx = UpdateContext {
            links: &self.links,
            settings: &self.settings,
            text_area: &self.engine,
        };
        let state = mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &ctx);
        self.state = new_state;
        self.processed += 1;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages are translated against the state current at their turn
        while let Some(raw_msg) = self.next_raw() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    fn next_raw(&mut self) -> Option<RawMsg> {
        self.raw_msg_queue
            .pop_front()
            .or_else(|| self.raw_msg_rx.try_recv().ok())
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            processed_messages: self.processed,
            links_count: self.state.links.len(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub processed_messages: usize,
    pub links_count: usize,
    pub has_executor: bool,
}
