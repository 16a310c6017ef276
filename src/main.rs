use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use marquee_api::{
    api::{create_router, AppState},
    config::Config,
    data::CURATED_MOVIE_IDS,
    services::Aggregator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let aggregator = Arc::new(Aggregator::from_config(&config));
    let state = AppState::new(
        aggregator,
        CURATED_MOVIE_IDS.to_vec(),
        config.default_region.clone(),
    );

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Catalog service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
