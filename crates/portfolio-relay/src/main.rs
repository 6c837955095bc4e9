//! Portfolio Mail Relay
//!
//! Accepts contact form submissions from the portfolio page and forwards
//! them through the configured outbound transport.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_types::PAGE_DEV_ORIGINS;

use portfolio_relay::config::{RelayConfig, TransportKind};
use portfolio_relay::mailer::{Mailer, OutboxMailer, SmtpMailer};
use portfolio_relay::routes::build_router;
use portfolio_relay::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = RelayConfig::from_env();

    let mailer: Arc<dyn Mailer> = match config.transport {
        TransportKind::Smtp => {
            tracing::info!(
                host = %config.smtp_host,
                port = config.smtp_port,
                authenticated = config.credentials().is_some(),
                "using SMTP transport"
            );
            Arc::new(SmtpMailer::new(&config)?)
        }
        TransportKind::Outbox => {
            tracing::info!(dir = %config.outbox_dir.display(), "using outbox transport");
            Arc::new(OutboxMailer::new(config.outbox_dir.clone()))
        }
    };

    let state = AppState::new(mailer, config.sender(), config.to_email.clone());

    // CORS: only the local dev origins the page is served from, no
    // credentials.
    let origins: Vec<HeaderValue> = PAGE_DEV_ORIGINS
        .iter()
        .map(|origin| HeaderValue::from_static(origin))
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("Contact API listening on http://{}", addr);
    tracing::info!("  POST /contact  - relay a submission");
    tracing::info!("  GET  /health   - liveness check");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", config.port);
            }
            return Err(format!("Failed to bind to {}: {}", addr, e).into());
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        return Err(format!("Server error: {}", e).into());
    }

    Ok(())
}
