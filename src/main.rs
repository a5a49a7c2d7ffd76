//! Catalog API entry point: persistence bootstrap and HTTP server.

use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use catalog::server::{self, config::ServerConfig};

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

    let config = ServerConfig::from_env();
    let state = server::bootstrap(&config)
        .await
        .map_err(|err| std::io::Error::other(format!("bootstrap failed: {err}")))?;

    info!(
        host = config.host(),
        port = config.port(),
        database = config.database_url(),
        "starting catalog server"
    );

    let bind = (config.host().to_owned(), config.port());
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(server::configure)
    })
    .bind(bind)?
    .run()
    .await
}
