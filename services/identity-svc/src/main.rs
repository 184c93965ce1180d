use std::sync::Arc;

use identity_svc::config::IdentityConfig;
use identity_svc::{build_router, AppState, SERVICE_NAME};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = IdentityConfig::from_env();
    let addr = config.socket_addr()?;

    let state = Arc::new(AppState::new(config.signing_secret));
    let app = build_router(state);

    tracing::info!(%addr, service = SERVICE_NAME, "starting service");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
