// Tune Relay HTTP handlers
//
// This module contains the HTTP handlers for the gateway. It provides the
// interface between inbound requests and the match/resolve/relay pipeline.

pub mod routes;

// Re-export handlers for easier access
pub use self::routes::{gateway_status, play_song};
