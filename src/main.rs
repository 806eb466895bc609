use analysis_gateway::{build_app, config::AppConfig, run_server, AppState};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::from_env();
    let state = AppState::from_config(&config);
    let app = build_app(state);

    run_server(app, config.port).await;
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
