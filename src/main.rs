use covid_dashboard::{AppState, Config, CovidApi, Dashboard, router};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let api = CovidApi::new(config.api_url.clone())?;
    info!(endpoint = api.endpoint(), country = %config.filters.country, "using reports api");

    let state = AppState::new(Dashboard::new(api, config.filters));

    // First load happens in the background so the page is served right away.
    let dashboard = state.dashboard.clone();
    tokio::spawn(async move {
        dashboard.refresh().await;
    });

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            error!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    }
}
