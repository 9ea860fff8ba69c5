use ponto_web::auth::{AccessPolicy, StaticSecret};
use ponto_web::{router, AppConfig, AppState, SheetsClient};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    let sheets = SheetsClient::new(config.sheets_url.clone());
    let policy: Arc<dyn AccessPolicy> = Arc::new(StaticSecret::new(&config.dashboard_secret));
    let state = AppState::new(sheets, policy);

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
