// Tune Relay configuration
//
// This module contains the configuration structure and constants for the
// gateway. It centralizes all configuration parameters and provides defaults
// overridable from environment variables.

use std::env;
use std::time::Duration;

use log::warn;

/// Default values for configuration
pub mod defaults {
    // Listening host
    pub const HOST: &str = "0.0.0.0";

    // Listening port
    pub const PORT: u16 = 5000;

    // Path to the song snapshot (filename -> Telegram file id)
    pub const SONGS_DB: &str = "songs_db.json";

    // Telegram Bot API base (getFile lives under {base}/bot{token})
    pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

    // Telegram file-serving base ({base}/bot{token}/{file_path})
    pub const TELEGRAM_FILE_BASE: &str = "https://api.telegram.org/file";

    // Timeout in seconds for the getFile call
    pub const UPSTREAM_TIMEOUT_SECONDS: u64 = 30;
}

/// Configuration for the gateway
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Host to bind the HTTP server to
    pub host: String,
    /// Port to bind the HTTP server to
    pub port: u16,
    /// Path to the JSON song snapshot
    pub songs_db: String,
    /// Telegram bot token
    pub bot_token: String,
    /// Base URL of the Telegram Bot API
    pub api_base: String,
    /// Base URL of the Telegram file-serving host
    pub file_base: String,
    /// Timeout for the outbound getFile request, in seconds
    pub upstream_timeout: u64,
}

impl GatewayConfig {
    /// Build the configuration from the environment
    ///
    /// `TUNE_RELAY_PORT` takes precedence over the bare `PORT` variable that
    /// PaaS platforms inject. The bot token has no default: an empty token
    /// only means every link resolution will fail with a 500, the server
    /// still starts so the failure is observable.
    pub fn from_env() -> Self {
        Self {
            host: env::var("TUNE_RELAY_HOST").unwrap_or_else(|_| String::from(defaults::HOST)),
            port: port_from_env(),
            songs_db: env::var("TUNE_RELAY_DB").unwrap_or_else(|_| String::from(defaults::SONGS_DB)),
            bot_token: env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
            api_base: env::var("TELEGRAM_API_BASE")
                .unwrap_or_else(|_| String::from(defaults::TELEGRAM_API_BASE)),
            file_base: env::var("TELEGRAM_FILE_BASE")
                .unwrap_or_else(|_| String::from(defaults::TELEGRAM_FILE_BASE)),
            upstream_timeout: env::var("TUNE_RELAY_UPSTREAM_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::UPSTREAM_TIMEOUT_SECONDS),
        }
    }

    /// Upstream timeout as a `Duration`
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}

/// Read the listening port from the environment
///
/// A set-but-unparseable value is reported rather than silently ignored,
/// so operators can see why their setting did not take effect.
fn port_from_env() -> u16 {
    match env::var("TUNE_RELAY_PORT").or_else(|_| env::var("PORT")) {
        Ok(s) => match s.parse() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "Ignoring unparseable port setting '{}', using {}",
                    s,
                    defaults::PORT
                );
                defaults::PORT
            }
        },
        Err(_) => defaults::PORT,
    }
}
