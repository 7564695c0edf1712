mod config;
mod contact;
mod errors;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::notifier::SmtpNotifier;
use crate::contact::session::SessionRegistry;
use crate::render::StaticAssets;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let assets = StaticAssets::load(&config.profile_image_path, &config.resume_pdf_path)?;

    // Secrets are only checked when a send happens
    let notifier = Arc::new(SmtpNotifier::new(&config.mail));
    info!(
        "Mail relay {}:{} (timeout {}s, secrets {})",
        config.mail.smtp_host,
        config.mail.smtp_port,
        config.mail.smtp_timeout.as_secs(),
        if config.mail.email_to.is_some()
            && config.mail.email_from.is_some()
            && config.mail.app_password.is_some()
        {
            "present"
        } else {
            "incomplete"
        }
    );

    let state = AppState {
        config: config.clone(),
        sessions: SessionRegistry::new(),
        notifier,
        assets: Arc::new(assets),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
