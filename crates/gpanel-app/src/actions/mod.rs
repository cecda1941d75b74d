//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every gateway request runs in its own task and reports back through the
//! message channel. Requests are never retried or cancelled, and there is
//! no ordering between them; whichever completion arrives last wins.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::{LocalStore, PollingSettings};
use crate::message::Message;
use crate::request::{Fetch, Poller, Pulled, Push};
use crate::UpdateAction;
use gpanel_core::Failure;
use gpanel_gateway::Gateway;

pub mod polling;
pub use polling::Pollers;

/// Everything an action needs to run.
pub struct ActionContext<G> {
    pub gateway: Arc<G>,
    pub msg_tx: mpsc::Sender<Message>,
    pub pollers: Pollers,
    pub polling: PollingSettings,
    pub store: LocalStore,
}

impl<G: Gateway + Sync + 'static> ActionContext<G> {
    pub fn new(
        gateway: Arc<G>,
        msg_tx: mpsc::Sender<Message>,
        polling: PollingSettings,
        store: LocalStore,
    ) -> Self {
        Self {
            gateway,
            msg_tx,
            pollers: Pollers::default(),
            polling,
            store,
        }
    }
}

/// Execute an action, spawning background work where needed
pub fn handle_action<G: Gateway + Sync + 'static>(action: UpdateAction, ctx: &mut ActionContext<G>) {
    match action {
        UpdateAction::Fetch(fetch) => {
            let gateway = ctx.gateway.clone();
            let msg_tx = ctx.msg_tx.clone();
            tokio::spawn(async move {
                let msg = execute_fetch(gateway.as_ref(), fetch).await;
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::Push(push) => {
            let gateway = ctx.gateway.clone();
            let msg_tx = ctx.msg_tx.clone();
            tokio::spawn(async move {
                let msg = execute_push(gateway.as_ref(), push).await;
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::StartPoller(poller) => {
            let period = match poller {
                Poller::Dashboard => ctx.polling.dashboard_period(),
                Poller::Learn => ctx.polling.learn_period(),
            };
            ctx.pollers.start(poller, period, ctx.msg_tx.clone());
        }

        UpdateAction::StopPoller(poller) => ctx.pollers.stop(poller),

        UpdateAction::PersistDebugMode(enabled) => {
            if let Err(e) = ctx.store.set_debug_mode(enabled) {
                warn!("Failed to persist debug mode: {}", e);
            }
        }
    }
}

/// Perform one pull and turn the outcome into a message.
pub async fn execute_fetch<G: Gateway>(gateway: &G, fetch: Fetch) -> Message {
    let result = match fetch {
        Fetch::Stats => gateway.system_stats().await.map(Pulled::Stats),
        Fetch::AcState => gateway.ac_state().await.map(Pulled::AcState),
        Fetch::IrKeys => gateway.ir_keys().await.map(Pulled::IrKeys),
        Fetch::Brands => gateway.brands().await.map(Pulled::Brands),
        Fetch::Logs => gateway.system_logs().await.map(Pulled::Logs),
        Fetch::LedConfig => gateway.led_config().await.map(Pulled::LedConfig),
        Fetch::SystemColors => gateway.system_colors().await.map(Pulled::SystemColors),
        Fetch::LearnStatus => gateway.learn_status().await.map(Pulled::LearnStatus),
        Fetch::WifiScan => gateway.wifi_scan().await.map(Pulled::WifiNetworks),
        Fetch::OtaCheck => gateway.ota_check().await.map(Pulled::Ota),
    };

    match result {
        Ok(pulled) => Message::Pulled(pulled),
        Err(e) => {
            warn!("{:?} pull failed: {}", fetch, e);
            Message::PullFailed {
                fetch,
                failure: Failure::from(e),
            }
        }
    }
}

/// Perform one push and turn the outcome into a message.
pub async fn execute_push<G: Gateway>(gateway: &G, push: Push) -> Message {
    debug!("push: {:?}", push);
    let result = match &push {
        Push::SetAc(command) => gateway.set_ac(command).await,
        Push::SendKey(key) => gateway.send_key(key).await,
        Push::DeleteKey(key) => gateway.delete_key(key).await,
        Push::RenameKey { old, new } => gateway.rename_key(old, new).await,
        Push::SaveLearnedKey(key) => gateway.save_learned_key(key).await,
        Push::StartLearn => gateway.start_learn().await,
        Push::StopLearn => gateway.stop_learn().await,
        Push::Led(led) => gateway.push_led(led).await,
        Push::SystemColor { id, color } => gateway.set_system_color(*id, *color).await,
        Push::SaveLedPreset => gateway.save_led_preset().await,
        Push::AddBrand(name) => gateway.add_brand(name).await,
        Push::RenameBrand { old, new } => gateway.rename_brand(old, new).await,
        Push::DeleteBrand(name) => gateway.delete_brand(name).await,
        Push::WifiConfig { ssid, password } => gateway.wifi_config(ssid, password).await,
        Push::OtaStart => gateway.ota_start().await,
        Push::ClearLogs => gateway.clear_logs().await,
    };

    let result = result.map_err(|e| {
        warn!("push failed: {}", e);
        Failure::from(e)
    });
    Message::Pushed { push, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpanel_core::Rgb;
    use gpanel_gateway::endpoints;
    use gpanel_gateway::test_utils::{FakeGateway, GatewayCall};

    #[tokio::test]
    async fn test_fetch_success_becomes_pulled() {
        let gw = FakeGateway::new().with_keys(&["power_on", "power_off"]);
        match execute_fetch(&gw, Fetch::IrKeys).await {
            Message::Pulled(Pulled::IrKeys(keys)) => assert_eq!(keys.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_fetch_kind() {
        let gw = FakeGateway::new().unreachable(endpoints::SYSTEM_LOGS);
        match execute_fetch(&gw, Fetch::Logs).await {
            Message::PullFailed { fetch, failure } => {
                assert_eq!(fetch, Fetch::Logs);
                assert!(!failure.is_rejected());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_push_rejection_carries_body() {
        let gw = FakeGateway::new().rejecting(endpoints::BRAND_ADD, 409, "Brand exists");
        match execute_push(&gw, Push::AddBrand("Gree".into())).await {
            Message::Pushed { push, result } => {
                assert_eq!(push, Push::AddBrand("Gree".into()));
                let failure = result.unwrap_err();
                assert_eq!(failure.body(), Some("Brand exists"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_push_is_one_call() {
        let gw = FakeGateway::new();
        let color = Rgb::new(1, 2, 3);
        execute_push(&gw, Push::SystemColor { id: 4, color }).await;
        assert_eq!(gw.calls(), vec![GatewayCall::SetSystemColor { id: 4, color }]);
    }

    #[tokio::test]
    async fn test_persist_debug_mode_writes_store() {
        let (msg_tx, _rx) = mpsc::channel(8);
        let mut ctx = ActionContext::new(
            Arc::new(FakeGateway::new()),
            msg_tx,
            PollingSettings::default(),
            LocalStore::in_memory(),
        );
        handle_action(UpdateAction::PersistDebugMode(true), &mut ctx);
        assert!(ctx.store.debug_mode());
    }
}
