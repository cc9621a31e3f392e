use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use vetrina::{app, catalog::Catalog, config::Config, views::Recorder, AppState};
use vetrina_views::{Influx, ViewStore};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,vetrina=debug"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();

    let config = Config::from_env()?;

    let store = ViewStore::new(Influx::new(config.influx.clone())?);
    let state = AppState {
        catalog: Catalog::demo(),
        views: store.clone(),
        recorder: Recorder::spawn(store, config.record_queue),
    };

    let listener = TcpListener::bind(config.listen).await?;
    info!("vetrina listening on {}", config.listen);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
