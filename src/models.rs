// Tune Relay data models
//
// This module contains the data models used by the gateway.
// It includes the API response types and the deserialized shape of the
// Telegram Bot API `getFile` reply.

use serde::{Deserialize, Serialize};

/// Error response for API
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Response for the `/status` endpoint
#[derive(Serialize)]
pub struct StatusResponse {
    /// Host the server is bound to
    pub host: String,
    /// Port the server is bound to
    pub port: u16,
    /// Number of songs loaded from the snapshot
    pub songs: usize,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
}

/// Telegram Bot API `getFile` response
///
/// Only the fields the gateway consumes are modeled. `result` is absent
/// whenever `ok` is false.
#[derive(Debug, Deserialize)]
pub struct GetFileResponse {
    /// Whether the API call succeeded
    pub ok: bool,
    /// File descriptor, present on success
    pub result: Option<FileInfo>,
}

/// File descriptor inside a successful `getFile` response
#[derive(Debug, Deserialize)]
pub struct FileInfo {
    /// Relative path of the file on Telegram's file-serving host
    pub file_path: Option<String>,
}
