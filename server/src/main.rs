#![recursion_limit = "256"]

mod llm;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env file is normal in production; the environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = match std::env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(%raw, "invalid PORT, falling back to 3000");
            3000
        }),
        Err(_) => 3000,
    };

    // Initialize LLM client (non-fatal: every chat relay fails softly if config missing).
    let llm: Option<Arc<dyn llm::LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, chat replies will fall back");
            None
        }
    };

    let state = state::AppState::new(llm);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable, serving API routes only");
            routes::api_routes(state)
        }
    };

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%port, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, "aura listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
