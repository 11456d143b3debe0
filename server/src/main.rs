#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();
    tracing::info!(
        backend = %config.school_api_url,
        role = config.role.as_str(),
        "dashboard configured"
    );

    let state = state::AppState::new(config.clone());
    let app = routes::app(state).expect("router assembly failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "classboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
