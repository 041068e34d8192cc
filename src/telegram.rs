// Telegram Bot API client
//
// Resolves a backend file id to a transient direct-download URL via the
// `getFile` endpoint. Links expire on Telegram's side, so callers must
// fetch them immediately and never reuse one across requests.

use std::time::Duration;

use log::warn;
use reqwest::Client;

use crate::config::GatewayConfig;
use crate::error::LinkError;
use crate::models::GetFileResponse;

/// Client for the Telegram Bot API file endpoints
///
/// Owns a pooled `reqwest::Client`; construct once at startup and share.
/// The `getFile` call carries a bounded timeout, the streaming download
/// only a connect timeout so long relays are not cut off mid-play.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    api: Client,
    stream: Client,
    api_base: String,
    file_base: String,
    token: String,
}

impl TelegramClient {
    /// Build a client from the gateway configuration
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let api = Client::builder().timeout(config.upstream_timeout()).build()?;
        let stream = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            api,
            stream,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            file_base: config.file_base.trim_end_matches('/').to_string(),
            token: config.bot_token.clone(),
        })
    }

    /// Resolve a file id to a transient direct-download URL
    ///
    /// One `getFile` round trip, no retries: the client is expected to retry
    /// with a fresh HTTP request if this fails.
    pub async fn get_file_link(&self, file_id: &str) -> Result<String, LinkError> {
        let url = format!("{}/bot{}/getFile", self.api_base, self.token);

        let response = self
            .api
            .get(url)
            .query(&[("file_id", file_id)])
            .send()
            .await?;

        let body: GetFileResponse = response.json().await?;

        if !body.ok {
            return Err(LinkError("getFile returned ok: false".into()));
        }

        let file_path = body
            .result
            .and_then(|info| info.file_path)
            .ok_or_else(|| LinkError("getFile response missing file_path".into()))?;

        Ok(format!("{}/bot{}/{}", self.file_base, self.token, file_path))
    }

    /// Open a streaming GET against a transient link
    ///
    /// Returns the response with its body unread; the relay pulls chunks
    /// from it incrementally.
    pub async fn open_stream(&self, link: &str) -> Result<reqwest::Response, LinkError> {
        let response = self.stream.get(link).send().await?;

        if !response.status().is_success() {
            warn!("Transient link fetch returned status {}", response.status());
            return Err(LinkError(format!(
                "transient link returned status {}",
                response.status()
            )));
        }

        Ok(response)
    }
}
