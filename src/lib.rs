pub mod api;
pub mod assistant;
pub mod config;
pub mod gemini;
pub mod history;

use std::sync::Arc;

use axum::Router;

use assistant::Assistant;
use config::AppConfig;
use gemini::GeminiClient;
use history::HistoryLog;

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let client = GeminiClient::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
            config.timeout_ms,
        );
        let history = HistoryLog::new(config.history_capacity);
        Self {
            assistant: Arc::new(Assistant::new(client, history)),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    tracing::info!(port, "listening on http://0.0.0.0:{port}");

    axum::serve(listener, app).await.expect("server failed");
}
