//! Periodic pollers
//!
//! A poller only sends `Message::PollTick`; the update loop decides whether
//! the tick still matters and issues the pull. Each poller has a
//! `watch::channel(false)` shutdown signal and stops when it flips to
//! `true` or when the message channel closes.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::debug;

use crate::message::Message;
use crate::request::Poller;

struct PollerHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

/// Running pollers, at most one per kind.
#[derive(Default)]
pub struct Pollers {
    running: HashMap<Poller, PollerHandle>,
}

impl Pollers {
    /// Start `poller` with the given period. No-op if it is already running.
    pub fn start(&mut self, poller: Poller, period: Duration, msg_tx: mpsc::Sender<Message>) {
        if self.is_running(poller) {
            return;
        }
        debug!("starting {:?} poller every {:?}", poller, period);

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if msg_tx.send(Message::PollTick(poller)).await.is_err() {
                            break;
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            debug!("{:?} poller stopped", poller);
        });

        self.running.insert(poller, PollerHandle { shutdown_tx, task });
    }

    pub fn stop(&mut self, poller: Poller) {
        if let Some(handle) = self.running.remove(&poller) {
            let _ = handle.shutdown_tx.send(true);
        }
    }

    /// Whether the poller's task is alive.
    pub fn is_running(&self, poller: Poller) -> bool {
        self.running
            .get(&poller)
            .is_some_and(|handle| !handle.task.is_finished())
    }

    pub fn stop_all(&mut self) {
        for (_, handle) in self.running.drain() {
            let _ = handle.shutdown_tx.send(true);
        }
    }
}

impl Drop for Pollers {
    fn drop(&mut self) {
        for handle in self.running.values() {
            handle.task.abort();
        }
    }
}
