//! Webinar Registration Proxy - Entry point.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use webinar_registration_proxy::{
    api::{create_router, AppState},
    config::{ConfigProvider, LogConfig},
    registration::REGISTRATION_COOLDOWN,
    RegistrationAdapter,
};
use webinarjam_client::WebinarJamClient;

#[tokio::main]
async fn main() {
    // Load configuration
    let provider = ConfigProvider::detect();
    let config = match provider.load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log);

    info!(?provider, "Starting Webinar Registration Proxy");

    let client = match WebinarJamClient::new(
        config.registration.credentials(),
        &config.registration.register_url,
        config.registration.timeout,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create WebinarJam client: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        url = %client.register_url(),
        webinar_id = %config.registration.webinar_id,
        cooldown = ?REGISTRATION_COOLDOWN,
        "WebinarJam client ready"
    );

    let adapter = RegistrationAdapter::new(Arc::new(client), REGISTRATION_COOLDOWN);
    let app = create_router(AppState::new(adapter));

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Shut down");
}

fn init_logging(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let registry = tracing_subscriber::registry().with(filter);
    if log.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
