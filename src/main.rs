mod config;
mod guard;
mod i18n;
mod models;
mod routes;
mod services;
mod session;
mod state;
mod storage;
mod store;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();
    let port = config.port;

    let store = store::Store::seeded();
    tracing::info!(
        users = store.users.len(),
        providers = store.providers.len(),
        services = store.services.len(),
        bookings = store.bookings.len(),
        reports = store.reports.len(),
        notifications = store.notifications.len(),
        "fixtures loaded"
    );

    let state = state::AppState::new(config, store);
    let latency = state.latency.base();
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, ?latency, "souq listening");
    axum::serve(listener, app).await
}
