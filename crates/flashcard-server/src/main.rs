//! Flashcard HTTP Server
//!
//! Serves the flashcard frontend and proxies generation and checkout calls
//! to the configured providers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flashcard_server::{router, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(config);

    let provider = state.generator.provider();
    if provider.is_configured() {
        tracing::info!("✓ QA provider: {}", provider.name());
    } else {
        tracing::warn!("⚠ QA provider {} has no credentials - calls will be rejected", provider.name());
        tracing::warn!("  Set HF_API_KEY in .env");
    }

    if state.checkout.is_configured() {
        tracing::info!("✓ {} checkout configured", state.checkout.name());
    } else {
        tracing::warn!("⚠ {} keys missing - checkout will be rejected", state.checkout.name());
        tracing::warn!("  Set INTASEND_PUBLISHABLE_KEY and INTASEND_SECRET_KEY in .env");
    }

    if !state.config.static_dir.exists() {
        tracing::warn!(
            "⚠ Static dir {} not found - build the frontend with trunk",
            state.config.static_dir.display()
        );
    }

    let addr = state.config.bind_addr.clone();
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 flashcard server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /                    - Flashcard UI");
    tracing::info!("  GET  /health              - Health check");
    tracing::info!("  POST /generate_flashcards - Generate flashcards");
    tracing::info!("  POST /create_checkout     - Create premium checkout");
    tracing::info!("  GET  /success, /cancel    - Checkout landing pages");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
