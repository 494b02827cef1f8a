mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let addr = config.bind_addr().expect("invalid listen address");

    // Reject a malformed menu before serving any page.
    let menu = coopcraft_client::pages::catalog::site_menu().expect("invalid navigation menu");
    tracing::info!(items = menu.items().len(), position = menu.position().as_str(), "navigation menu loaded");

    let state = state::AppState::new(&config.environment);
    let app = routes::app(state, menu).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, environment = %config.environment, "coopcraft listening");
    axum::serve(listener, app).await.expect("server failed");
}
