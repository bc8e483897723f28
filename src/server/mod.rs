pub mod handlers;
mod types;

pub use types::{ErrorResponse, MealPlanResponse};

use crate::{
    Result,
    auth::IamTokenClient,
    config::{Config, ServerConfig},
    llm::WatsonxClient,
    planner::MealPlanner,
    storage::CosClient,
};
use axum::{Router, routing::post};
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/generate", post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the shared clients once; they are read-only for the life of the process.
pub fn build_state(config: &Config) -> Result<handlers::AppState> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.http.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let http = builder.build()?;

    let tokens = IamTokenClient::new(http.clone(), config.watsonx.iam_url.clone());
    let generator = WatsonxClient::new(http.clone(), tokens.clone(), config.watsonx.clone());
    let dataset = CosClient::new(http, tokens, config.storage.clone());

    Ok(handlers::AppState {
        planner: MealPlanner::new(Arc::new(generator), Arc::new(dataset)),
    })
}

pub async fn run(config: Config) -> Result<()> {
    debug!(
        "Dataset location: bucket={:?}, object={:?}",
        config.storage.bucket, config.storage.object_key
    );

    let app = router(build_state(&config)?);
    let listener = bind(&config.server).await?;

    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Binds the listener; `host` may be a hostname such as `localhost` as well
/// as an IP literal.
pub async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    Ok(TcpListener::bind((server.host.as_str(), server.port)).await?)
}
