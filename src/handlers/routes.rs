// API route handlers for Tune Relay
//
// This module contains the route handlers for the gateway. Each playback
// request is an independent traversal of match -> resolve link -> relay;
// nothing is shared across requests except the read-only store and the
// Telegram client's connection pool.

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::matcher;
use crate::models::StatusResponse;
use crate::relay::relay_stream;
use crate::store::SongStore;
use crate::telegram::TelegramClient;
use actix_web::{get, web, HttpResponse};
use log::{error, info};

/// Handler for playback requests
///
/// Resolves the requested filename against the song store (exact match,
/// then the trailing-token heuristic), asks Telegram for a fresh transient
/// link, and relays the audio bytes as they arrive. The transient link is
/// fetched immediately and never reused: Telegram expires them quickly.
///
/// The tail match keeps percent-encoded filenames with encoded slashes
/// working; actix decodes the segment before it reaches the handler.
#[get("/play/{filename:.*}")]
pub async fn play_song(
    filename: web::Path<String>,
    store: web::Data<SongStore>,
    telegram: web::Data<TelegramClient>,
) -> Result<HttpResponse, GatewayError> {
    let filename = filename.into_inner();

    let file_id = match matcher::resolve(&filename, &store) {
        Some(file_id) => file_id,
        None => {
            info!("[404] Could not find: {}", filename);
            return Err(GatewayError::SongNotFound);
        }
    };

    // Fresh link per request; resolution failure is terminal, the client
    // retries with a new request.
    let link = telegram.get_file_link(file_id).await.map_err(|e| {
        error!("Link resolution failed for '{}': {}", filename, e);
        GatewayError::LinkFailed
    })?;

    let upstream = telegram.open_stream(&link).await.map_err(|e| {
        error!("Could not open transient link for '{}': {}", filename, e);
        GatewayError::LinkFailed
    })?;

    Ok(HttpResponse::Ok()
        .content_type("audio/mpeg")
        .streaming(relay_stream(upstream)))
}

/// Gateway status endpoint
///
/// Reports the bound address, the number of songs loaded from the snapshot
/// and the upstream timeout.
#[get("/status")]
pub async fn gateway_status(
    store: web::Data<SongStore>,
    config: web::Data<GatewayConfig>,
) -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        host: config.host.clone(),
        port: config.port,
        songs: store.len(),
        upstream_timeout: config.upstream_timeout,
    })
}
