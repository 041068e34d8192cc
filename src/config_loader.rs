// Configuration file loader for Tune Relay
//
// An optional flat TOML file can seed the gateway's environment variables,
// so deployments can ship one file instead of a dozen exports. Environment
// variables always win over file values.

use std::env;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use toml::Value;

const CONFIG_FILE_PATH: &str = "tune_relay.conf";

/// Keys the gateway understands; anything else in the file is reported.
const KNOWN_KEYS: [&str; 8] = [
    "TUNE_RELAY_HOST",
    "TUNE_RELAY_PORT",
    "TUNE_RELAY_DB",
    "TUNE_RELAY_UPSTREAM_TIMEOUT",
    "TELEGRAM_BOT_TOKEN",
    "TELEGRAM_API_BASE",
    "TELEGRAM_FILE_BASE",
    "RUST_LOG",
];

/// Seed environment variables from `tune_relay.conf` if it exists
///
/// The file is a flat TOML table of `KEY = value` pairs matching the
/// gateway's environment variables. Already-set environment variables are
/// left untouched, so the file can never override a deployment's explicit
/// settings.
///
/// # Returns
///
/// Returns true if the config file was successfully loaded, false otherwise
pub fn load_config() -> bool {
    let config_path = Path::new(CONFIG_FILE_PATH);

    if !config_path.exists() {
        debug!("Configuration file not found at: {}", CONFIG_FILE_PATH);
        return false;
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read configuration file: {}", e);
            return false;
        }
    };

    let table = match config_content.parse::<Value>() {
        Ok(Value::Table(table)) => table,
        Ok(_) => {
            warn!("Configuration file is not a TOML table, ignoring it");
            return false;
        }
        Err(e) => {
            warn!("Failed to parse configuration file: {}", e);
            return false;
        }
    };

    for (key, value) in table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn!("Unknown configuration key '{}', skipping", key);
            continue;
        }

        // Scalars only; the gateway's settings are all strings or numbers.
        let value = match value {
            Value::String(s) => s,
            Value::Integer(i) => i.to_string(),
            Value::Boolean(b) => b.to_string(),
            other => {
                warn!("Unsupported value type for key '{}': {}", key, other.type_str());
                continue;
            }
        };

        if env::var(&key).is_err() {
            debug!("Setting env var from config file: {}", key);
            env::set_var(key, value);
        } else {
            debug!("Env var already exists, skipping: {}", key);
        }
    }

    info!("Configuration loaded from {}", CONFIG_FILE_PATH);
    true
}
