// Tune Relay Library
//
// This crate provides an HTTP gateway that resolves requested song
// filenames to Telegram file ids and relays the audio bytes from
// Telegram's file API to the client without buffering whole files.

pub mod config;
pub mod config_loader;
pub mod error;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod relay;
pub mod store;
pub mod telegram;

// Re-export common types for easier access
pub use config::GatewayConfig;
pub use error::{GatewayError, LinkError};
pub use handlers::{gateway_status, play_song};
pub use models::{ErrorResponse, StatusResponse};
pub use store::SongStore;
pub use telegram::TelegramClient;
