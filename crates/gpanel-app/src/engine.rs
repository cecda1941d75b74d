//! Engine - owns the model, the message channel and the action context
//!
//! The TUI runner feeds input into the engine and renders `engine.state`
//! after each drain. Everything that talks to the device goes through the
//! engine's [`ActionContext`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::actions::ActionContext;
use crate::config::{LocalStore, Settings};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::view::View;
use gpanel_gateway::Gateway;

/// Capacity of the unified message channel.
const CHANNEL_CAPACITY: usize = 256;

pub struct Engine<G> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, terminal events).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    ctx: ActionContext<G>,
}

impl<G: Gateway + Sync + 'static> Engine<G> {
    /// Create an engine. The debug flag is restored from `store`.
    pub fn new(gateway: Arc<G>, settings: Settings, store: LocalStore) -> Self {
        let state = AppState::new(settings.clone(), store.debug_mode());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        let ctx = ActionContext::new(gateway, msg_tx.clone(), settings.polling, store);

        Self {
            state,
            msg_tx,
            msg_rx,
            ctx,
        }
    }

    /// Install the signal handler and open the dashboard.
    ///
    /// Must run inside a tokio runtime.
    pub fn start(&mut self) {
        info!(
            "starting panel for {} (debug mode {})",
            self.state.settings.device.url, self.state.debug_mode
        );
        signals::spawn_signal_handler(self.msg_tx.clone());
        self.process_message(Message::Navigate(View::Dashboard));
        self.process_message(Message::CheckUpdate);
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &mut self.ctx);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message. `None` once every sender is gone.
    pub async fn recv_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn store(&self) -> &LocalStore {
        &self.ctx.store
    }

    /// Stop every poller.
    pub fn shutdown(&mut self) {
        info!("shutting down");
        self.ctx.pollers.stop_all();
    }
}
