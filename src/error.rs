// Error handling for Tune Relay
//
// This module defines the gateway's error types and their HTTP mapping.
// Both variants are terminal for the request: the gateway never retries,
// the client retries by issuing a fresh request.

use thiserror::Error;

use actix_web::{HttpResponse, ResponseError};

use crate::models::ErrorResponse;

/// Errors that can occur while handling a playback request
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No store entry matched the requested filename, exactly or heuristically
    #[error("Song not found")]
    SongNotFound,

    /// The Telegram `getFile` call failed, timed out, or returned a non-ok response
    #[error("Failed to get Telegram link")]
    LinkFailed,
}

impl ResponseError for GatewayError {
    fn error_response(&self) -> HttpResponse {
        let error_response = ErrorResponse {
            error: self.to_string(),
        };

        match self {
            GatewayError::SongNotFound => HttpResponse::NotFound().json(error_response),
            GatewayError::LinkFailed => HttpResponse::InternalServerError().json(error_response),
        }
    }
}

/// Failure to obtain a transient download link
///
/// A single undistinguished kind: callers only need to know the link is
/// unavailable, not why. The cause is logged at the call site.
#[derive(Error, Debug)]
#[error("link resolution failed: {0}")]
pub struct LinkError(pub String);

impl From<reqwest::Error> for LinkError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest error strings include the request URL, which carries the
        // bot token. Keep only the error kind.
        LinkError(err.without_url().to_string())
    }
}
