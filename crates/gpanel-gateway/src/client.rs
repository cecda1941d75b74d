//! `reqwest`-backed gateway

use std::time::Duration;

use gpanel_core::prelude::*;
use gpanel_core::{
    AcCommand, AcState, LearnStatus, LedConfig, OtaInfo, Rgb, SystemColor, SystemStats,
    WifiNetwork,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::Gateway;
use crate::endpoints;
use crate::request::{
    key_query, name_query, rename_query, system_color_query, wifi_query, LedPush, Query,
};

/// Talks to the device over HTTP.
///
/// Requests carry no timeout unless one is configured; a hung request just
/// never completes and the view keeps its previous content.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base: Url,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| Error::config_invalid(format!("invalid device url {base_url:?}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::config_invalid(format!(
                "device url must be http or https, got {base_url:?}"
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str, query: &Query) -> Result<Url> {
        let mut url = self
            .base
            .join(path)
            .map_err(|e| Error::protocol(format!("bad endpoint {path}: {e}")))?;
        if !query.is_empty() {
            url.set_query(Some(&query.to_string()));
        }
        Ok(url)
    }

    async fn check(path: &str, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!("{path} answered {status}: {body}");
        Err(Error::status(path, status.as_u16(), body))
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path, &Query::new())?;
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(path, e.to_string()))?;
        Self::check(path, response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let bytes = self
            .get(path)
            .await?
            .bytes()
            .await
            .map_err(|e| Error::transport(path, e.to_string()))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::protocol(format!("unexpected response from {path}: {e}")))
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        self.get(path)
            .await?
            .text()
            .await
            .map_err(|e| Error::transport(path, e.to_string()))
    }

    async fn post(&self, path: &str, query: Query) -> Result<()> {
        let url = self.url(path, &query)?;
        debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|e| Error::transport(path, e.to_string()))?;
        Self::check(path, response).await.map(|_| ())
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path, &Query::new())?;
        debug!("POST {url} (json)");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::transport(path, e.to_string()))?;
        Self::check(path, response).await.map(|_| ())
    }
}

impl Gateway for HttpGateway {
    async fn system_logs(&self) -> Result<String> {
        self.get_text(endpoints::SYSTEM_LOGS).await
    }

    async fn clear_logs(&self) -> Result<()> {
        self.post(endpoints::SYSTEM_LOGS_CLEAR, Query::new()).await
    }

    async fn system_stats(&self) -> Result<SystemStats> {
        self.get_json(endpoints::SYSTEM_STATS).await
    }

    async fn ac_state(&self) -> Result<AcState> {
        self.get_json(endpoints::AC_STATE).await
    }

    async fn set_ac(&self, command: &AcCommand) -> Result<()> {
        self.post_json(endpoints::AC_CONTROL, command).await
    }

    async fn ir_keys(&self) -> Result<Vec<String>> {
        self.get_json(endpoints::IR_LIST).await
    }

    async fn send_key(&self, key: &str) -> Result<()> {
        self.post(endpoints::IR_SEND, key_query(key)).await
    }

    async fn delete_key(&self, key: &str) -> Result<()> {
        self.post(endpoints::IR_DELETE, key_query(key)).await
    }

    async fn rename_key(&self, old: &str, new: &str) -> Result<()> {
        self.post(endpoints::IR_RENAME, rename_query(old, new)).await
    }

    async fn save_learned_key(&self, key: &str) -> Result<()> {
        self.post(endpoints::IR_SAVE, key_query(key)).await
    }

    async fn start_learn(&self) -> Result<()> {
        self.post(endpoints::LEARN_START, Query::new()).await
    }

    async fn stop_learn(&self) -> Result<()> {
        self.post(endpoints::LEARN_STOP, Query::new()).await
    }

    async fn learn_status(&self) -> Result<LearnStatus> {
        self.get_json(endpoints::LEARN_STATUS).await
    }

    async fn led_config(&self) -> Result<LedConfig> {
        self.get_json(endpoints::LED_CONFIG).await
    }

    async fn push_led(&self, push: &LedPush) -> Result<()> {
        self.post(endpoints::LED_CONFIG, push.query()).await
    }

    async fn system_colors(&self) -> Result<Vec<SystemColor>> {
        self.get_json(endpoints::LED_STATE_CONFIG).await
    }

    async fn set_system_color(&self, id: u32, color: Rgb) -> Result<()> {
        self.post(endpoints::LED_STATE_CONFIG, system_color_query(id, color))
            .await
    }

    async fn save_led_preset(&self) -> Result<()> {
        self.post(endpoints::LED_SAVE_PRESET, Query::new()).await
    }

    async fn brands(&self) -> Result<Vec<String>> {
        self.get_json(endpoints::BRAND_LIST).await
    }

    async fn add_brand(&self, name: &str) -> Result<()> {
        self.post(endpoints::BRAND_ADD, name_query(name)).await
    }

    async fn rename_brand(&self, old: &str, new: &str) -> Result<()> {
        self.post(endpoints::BRAND_RENAME, rename_query(old, new))
            .await
    }

    async fn delete_brand(&self, name: &str) -> Result<()> {
        self.post(endpoints::BRAND_DELETE, name_query(name)).await
    }

    async fn wifi_scan(&self) -> Result<Vec<WifiNetwork>> {
        self.get_json(endpoints::WIFI_SCAN).await
    }

    async fn wifi_config(&self, ssid: &str, password: &str) -> Result<()> {
        self.post(endpoints::WIFI_CONFIG, wifi_query(ssid, password))
            .await
    }

    async fn ota_check(&self) -> Result<OtaInfo> {
        self.get_json(endpoints::OTA_CHECK).await
    }

    async fn ota_start(&self) -> Result<()> {
        self.post(endpoints::OTA_START, Query::new()).await
    }
}
