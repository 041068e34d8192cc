use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::path::Path;

// Import our modules
mod config;
mod config_loader;
mod error;
mod handlers;
mod matcher;
mod models;
mod relay;
mod store;
mod telegram;

// Import the types we need
use config::GatewayConfig;
use handlers::{gateway_status, play_song};
use store::SongStore;
use telegram::TelegramClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Optional config file seeds env vars before the config is read
    config_loader::load_config();
    let config = GatewayConfig::from_env();

    if config.bot_token.is_empty() {
        warn!("TELEGRAM_BOT_TOKEN is not set; every link resolution will fail");
    }

    // Load the song snapshot once; it is read-only for the process lifetime
    let store = SongStore::load(Path::new(&config.songs_db))?;
    if store.is_empty() {
        warn!("Song store is empty; all playback requests will 404");
    }

    let telegram = TelegramClient::new(&config).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("failed to build HTTP client: {}", e),
        )
    })?;

    let bind_addr = format!("{}:{}", config.host, config.port);
    info!("Starting Tune Relay on http://{}", bind_addr);
    info!("Song snapshot: {} ({} songs)", config.songs_db, store.len());

    let store = web::Data::new(store);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Browser clients play audio from other origins
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .app_data(config_data.clone())
            .app_data(web::Data::new(telegram.clone()))
            .service(play_song)
            .service(gateway_status)
    })
    .bind(bind_addr)?
    .run()
    .await
}
