//! Entry point for the `pinpad-gateway` HTTP server.

use pinpad_gateway::{config::GatewayConfig, routes::create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if config.pin.is_none() {
        tracing::warn!("PINPAD_PIN is unset; every PIN will be rejected");
    }

    let storage = match config.storage().await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialise storage");
            std::process::exit(1);
        }
    };
    let app = create_router(storage);

    let addr = &config.listen_addr;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "pinpad-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
