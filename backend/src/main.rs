//! Service entry-point: loads settings, opens the user document and serves
//! the JSON API.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use userdesk::domain::ports::UserStore;
use userdesk::inbound::http::health::HealthState;
use userdesk::outbound::persistence::JsonFileUserStore;
use userdesk::server::{ServerConfig, create_server};
use userdesk::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let store = JsonFileUserStore::open(&settings.data_dir(), settings.data_file())
        .map_err(std::io::Error::other)?;

    // Seeds a missing document and refuses to start on a corrupt one.
    let users = store.load().await.map_err(std::io::Error::other)?;
    info!(path = %store.path(), users = users.len(), "user document ready");

    let config = ServerConfig::new(settings.bind_addr()?, store);
    info!(addr = %config.bind_addr(), "starting HTTP server");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
