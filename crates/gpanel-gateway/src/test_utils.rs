//! In-memory gateway for tests
//!
//! Records every call in order and answers from canned responses. Any
//! endpoint can be told to fail, either with a status/body rejection or as
//! unreachable.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use gpanel_core::prelude::*;
use gpanel_core::{
    AcCommand, AcState, LearnStatus, LedConfig, OtaInfo, Rgb, SystemColor, SystemStats,
    WifiNetwork,
};

use crate::api::Gateway;
use crate::endpoints;
use crate::request::LedPush;

/// One recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    SystemLogs,
    ClearLogs,
    SystemStats,
    AcState,
    SetAc(AcCommand),
    IrKeys,
    SendKey(String),
    DeleteKey(String),
    RenameKey { old: String, new: String },
    SaveLearnedKey(String),
    StartLearn,
    StopLearn,
    LearnStatus,
    LedConfig,
    PushLed(LedPush),
    SystemColors,
    SetSystemColor { id: u32, color: Rgb },
    SaveLedPreset,
    Brands,
    AddBrand(String),
    RenameBrand { old: String, new: String },
    DeleteBrand(String),
    WifiScan,
    WifiConfig { ssid: String, password: String },
    OtaCheck,
    OtaStart,
}

impl GatewayCall {
    pub fn endpoint(&self) -> &'static str {
        match self {
            GatewayCall::SystemLogs => endpoints::SYSTEM_LOGS,
            GatewayCall::ClearLogs => endpoints::SYSTEM_LOGS_CLEAR,
            GatewayCall::SystemStats => endpoints::SYSTEM_STATS,
            GatewayCall::AcState => endpoints::AC_STATE,
            GatewayCall::SetAc(_) => endpoints::AC_CONTROL,
            GatewayCall::IrKeys => endpoints::IR_LIST,
            GatewayCall::SendKey(_) => endpoints::IR_SEND,
            GatewayCall::DeleteKey(_) => endpoints::IR_DELETE,
            GatewayCall::RenameKey { .. } => endpoints::IR_RENAME,
            GatewayCall::SaveLearnedKey(_) => endpoints::IR_SAVE,
            GatewayCall::StartLearn => endpoints::LEARN_START,
            GatewayCall::StopLearn => endpoints::LEARN_STOP,
            GatewayCall::LearnStatus => endpoints::LEARN_STATUS,
            GatewayCall::LedConfig | GatewayCall::PushLed(_) => endpoints::LED_CONFIG,
            GatewayCall::SystemColors | GatewayCall::SetSystemColor { .. } => {
                endpoints::LED_STATE_CONFIG
            }
            GatewayCall::SaveLedPreset => endpoints::LED_SAVE_PRESET,
            GatewayCall::Brands => endpoints::BRAND_LIST,
            GatewayCall::AddBrand(_) => endpoints::BRAND_ADD,
            GatewayCall::RenameBrand { .. } => endpoints::BRAND_RENAME,
            GatewayCall::DeleteBrand(_) => endpoints::BRAND_DELETE,
            GatewayCall::WifiScan => endpoints::WIFI_SCAN,
            GatewayCall::WifiConfig { .. } => endpoints::WIFI_CONFIG,
            GatewayCall::OtaCheck => endpoints::OTA_CHECK,
            GatewayCall::OtaStart => endpoints::OTA_START,
        }
    }

    /// Whether this call changes device state.
    pub fn is_push(&self) -> bool {
        !matches!(
            self,
            GatewayCall::SystemLogs
                | GatewayCall::SystemStats
                | GatewayCall::AcState
                | GatewayCall::IrKeys
                | GatewayCall::LearnStatus
                | GatewayCall::LedConfig
                | GatewayCall::SystemColors
                | GatewayCall::Brands
                | GatewayCall::WifiScan
                | GatewayCall::OtaCheck
        )
    }
}

#[derive(Debug, Clone)]
enum FakeFailure {
    Rejected { status: u16, body: String },
    Unreachable,
}

#[derive(Debug)]
struct Responses {
    logs: String,
    stats: SystemStats,
    ac_state: AcState,
    keys: Vec<String>,
    learn_statuses: VecDeque<LearnStatus>,
    led_config: LedConfig,
    system_colors: Vec<SystemColor>,
    brands: Vec<String>,
    wifi: Vec<WifiNetwork>,
    ota: OtaInfo,
}

impl Default for Responses {
    fn default() -> Self {
        Self {
            logs: String::new(),
            stats: sample_stats(),
            ac_state: AcState::default(),
            keys: Vec::new(),
            learn_statuses: VecDeque::new(),
            led_config: LedConfig {
                effect: "static".to_string(),
                speed: 50,
                brightness: 100,
                colors: None,
            },
            system_colors: Vec::new(),
            brands: Vec::new(),
            wifi: Vec::new(),
            ota: OtaInfo {
                current: "1.0.0".to_string(),
                available: false,
                latest: None,
            },
        }
    }
}

/// A plausible stats snapshot.
pub fn sample_stats() -> SystemStats {
    SystemStats {
        temp: 42.5,
        ram: 37.0,
        uptime: 3725,
        version: Some("2.1.0".to_string()),
        led_enabled: Some(true),
        rssi: -61,
        free_heap: 153_600,
        min_free_heap: 102_912,
    }
}

#[derive(Debug, Default)]
pub struct FakeGateway {
    calls: Mutex<Vec<GatewayCall>>,
    responses: Mutex<Responses>,
    failures: Mutex<HashMap<&'static str, FakeFailure>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Canned responses ──────────────────────────────────────────

    pub fn with_logs(self, logs: impl Into<String>) -> Self {
        lock(&self.responses).logs = logs.into();
        self
    }

    pub fn with_stats(self, stats: SystemStats) -> Self {
        lock(&self.responses).stats = stats;
        self
    }

    pub fn with_ac_state(self, state: AcState) -> Self {
        lock(&self.responses).ac_state = state;
        self
    }

    pub fn with_keys(self, keys: &[&str]) -> Self {
        lock(&self.responses).keys = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    /// Statuses returned by successive `learn_status` calls. The last one
    /// repeats once the script runs out.
    pub fn with_learn_statuses(self, statuses: &[LearnStatus]) -> Self {
        lock(&self.responses).learn_statuses = statuses.iter().copied().collect();
        self
    }

    pub fn with_led_config(self, config: LedConfig) -> Self {
        lock(&self.responses).led_config = config;
        self
    }

    pub fn with_system_colors(self, colors: Vec<SystemColor>) -> Self {
        lock(&self.responses).system_colors = colors;
        self
    }

    pub fn with_brands(self, brands: &[&str]) -> Self {
        lock(&self.responses).brands = brands.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_wifi(self, networks: Vec<WifiNetwork>) -> Self {
        lock(&self.responses).wifi = networks;
        self
    }

    pub fn with_ota(self, ota: OtaInfo) -> Self {
        lock(&self.responses).ota = ota;
        self
    }

    // ── Failures ──────────────────────────────────────────────────

    /// Answer `endpoint` with a non-success status.
    pub fn rejecting(self, endpoint: &'static str, status: u16, body: &str) -> Self {
        lock(&self.failures).insert(
            endpoint,
            FakeFailure::Rejected {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Fail `endpoint` as if the device were offline.
    pub fn unreachable(self, endpoint: &'static str) -> Self {
        lock(&self.failures).insert(endpoint, FakeFailure::Unreachable);
        self
    }

    pub fn clear_failures(&self) {
        lock(&self.failures).clear();
    }

    // ── Inspection ────────────────────────────────────────────────

    pub fn calls(&self) -> Vec<GatewayCall> {
        lock(&self.calls).clone()
    }

    /// State-changing calls only, in order.
    pub fn pushes(&self) -> Vec<GatewayCall> {
        lock(&self.calls)
            .iter()
            .filter(|c| c.is_push())
            .cloned()
            .collect()
    }

    pub fn count(&self, call: &GatewayCall) -> usize {
        lock(&self.calls).iter().filter(|c| *c == call).count()
    }

    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    fn record(&self, call: GatewayCall) -> Result<()> {
        let endpoint = call.endpoint();
        lock(&self.calls).push(call);
        match lock(&self.failures).get(endpoint) {
            None => Ok(()),
            Some(FakeFailure::Rejected { status, body }) => {
                Err(Error::status(endpoint, *status, body.clone()))
            }
            Some(FakeFailure::Unreachable) => {
                Err(Error::transport(endpoint, "connection refused"))
            }
        }
    }

    fn respond<T>(&self, call: GatewayCall, pick: impl FnOnce(&mut Responses) -> T) -> Result<T> {
        self.record(call)?;
        Ok(pick(&mut lock(&self.responses)))
    }
}

impl Gateway for FakeGateway {
    async fn system_logs(&self) -> Result<String> {
        self.respond(GatewayCall::SystemLogs, |r| r.logs.clone())
    }

    async fn clear_logs(&self) -> Result<()> {
        self.record(GatewayCall::ClearLogs)?;
        lock(&self.responses).logs.clear();
        Ok(())
    }

    async fn system_stats(&self) -> Result<SystemStats> {
        self.respond(GatewayCall::SystemStats, |r| r.stats.clone())
    }

    async fn ac_state(&self) -> Result<AcState> {
        self.respond(GatewayCall::AcState, |r| r.ac_state.clone())
    }

    async fn set_ac(&self, command: &AcCommand) -> Result<()> {
        self.record(GatewayCall::SetAc(command.clone()))
    }

    async fn ir_keys(&self) -> Result<Vec<String>> {
        self.respond(GatewayCall::IrKeys, |r| r.keys.clone())
    }

    async fn send_key(&self, key: &str) -> Result<()> {
        self.record(GatewayCall::SendKey(key.to_string()))
    }

    async fn delete_key(&self, key: &str) -> Result<()> {
        self.record(GatewayCall::DeleteKey(key.to_string()))?;
        lock(&self.responses).keys.retain(|k| k != key);
        Ok(())
    }

    async fn rename_key(&self, old: &str, new: &str) -> Result<()> {
        self.record(GatewayCall::RenameKey {
            old: old.to_string(),
            new: new.to_string(),
        })?;
        for key in lock(&self.responses).keys.iter_mut().filter(|k| *k == old) {
            *key = new.to_string();
        }
        Ok(())
    }

    async fn save_learned_key(&self, key: &str) -> Result<()> {
        self.record(GatewayCall::SaveLearnedKey(key.to_string()))?;
        lock(&self.responses).keys.push(key.to_string());
        Ok(())
    }

    async fn start_learn(&self) -> Result<()> {
        self.record(GatewayCall::StartLearn)
    }

    async fn stop_learn(&self) -> Result<()> {
        self.record(GatewayCall::StopLearn)
    }

    async fn learn_status(&self) -> Result<LearnStatus> {
        self.respond(GatewayCall::LearnStatus, |r| {
            if r.learn_statuses.len() > 1 {
                r.learn_statuses.pop_front().unwrap_or_default()
            } else {
                r.learn_statuses.front().copied().unwrap_or_default()
            }
        })
    }

    async fn led_config(&self) -> Result<LedConfig> {
        self.respond(GatewayCall::LedConfig, |r| r.led_config.clone())
    }

    async fn push_led(&self, push: &LedPush) -> Result<()> {
        self.record(GatewayCall::PushLed(push.clone()))
    }

    async fn system_colors(&self) -> Result<Vec<SystemColor>> {
        self.respond(GatewayCall::SystemColors, |r| r.system_colors.clone())
    }

    async fn set_system_color(&self, id: u32, color: Rgb) -> Result<()> {
        self.record(GatewayCall::SetSystemColor { id, color })
    }

    async fn save_led_preset(&self) -> Result<()> {
        self.record(GatewayCall::SaveLedPreset)
    }

    async fn brands(&self) -> Result<Vec<String>> {
        self.respond(GatewayCall::Brands, |r| r.brands.clone())
    }

    async fn add_brand(&self, name: &str) -> Result<()> {
        self.record(GatewayCall::AddBrand(name.to_string()))?;
        lock(&self.responses).brands.push(name.to_string());
        Ok(())
    }

    async fn rename_brand(&self, old: &str, new: &str) -> Result<()> {
        self.record(GatewayCall::RenameBrand {
            old: old.to_string(),
            new: new.to_string(),
        })?;
        for brand in lock(&self.responses).brands.iter_mut().filter(|b| *b == old) {
            *brand = new.to_string();
        }
        Ok(())
    }

    async fn delete_brand(&self, name: &str) -> Result<()> {
        self.record(GatewayCall::DeleteBrand(name.to_string()))?;
        lock(&self.responses).brands.retain(|b| b != name);
        Ok(())
    }

    async fn wifi_scan(&self) -> Result<Vec<WifiNetwork>> {
        self.respond(GatewayCall::WifiScan, |r| r.wifi.clone())
    }

    async fn wifi_config(&self, ssid: &str, password: &str) -> Result<()> {
        self.record(GatewayCall::WifiConfig {
            ssid: ssid.to_string(),
            password: password.to_string(),
        })
    }

    async fn ota_check(&self) -> Result<OtaInfo> {
        self.respond(GatewayCall::OtaCheck, |r| r.ota.clone())
    }

    async fn ota_start(&self) -> Result<()> {
        self.record(GatewayCall::OtaStart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio_test::block_on;

    #[test]
    fn test_records_calls_in_order() {
        let gw = FakeGateway::new().with_keys(&["tv_power"]);
        block_on(gw.send_key("tv_power")).unwrap();
        let keys = block_on(gw.ir_keys()).unwrap();
        assert_eq!(keys, vec!["tv_power".to_string()]);
        assert_eq!(
            gw.calls(),
            vec![GatewayCall::SendKey("tv_power".into()), GatewayCall::IrKeys]
        );
        assert_eq!(gw.pushes().len(), 1);
    }

    #[test]
    fn test_rejection_carries_body() {
        let gw = FakeGateway::new().rejecting(endpoints::BRAND_ADD, 400, "Brand already exists");
        let err = block_on(gw.add_brand("Gree")).unwrap_err();
        assert_eq!(err.user_message(), "Brand already exists");
        assert!(block_on(gw.brands()).unwrap().is_empty());
    }

    #[test]
    fn test_learn_status_script_repeats_last() {
        let gw = FakeGateway::new().with_learn_statuses(&[
            LearnStatus {
                learning: true,
                captured: 0,
            },
            LearnStatus {
                learning: false,
                captured: 9,
            },
        ]);
        assert_eq!(block_on(gw.learn_status()).unwrap().captured, 0);
        assert_eq!(block_on(gw.learn_status()).unwrap().captured, 9);
        assert_eq!(block_on(gw.learn_status()).unwrap().captured, 9);
    }
}
