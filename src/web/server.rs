use axum::{routing::get, Router};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::balloons::{FeedClient, FeedError};
use crate::flights::{OpenSkyClient, OpenSkyError};

use super::api::balloons as balloon_handlers;
use super::api::flights as flight_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::ui::handlers as ui_handlers;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Balloon feed client error: {0}")]
    Feed(#[from] FeedError),
    #[error("Aircraft API client error: {0}")]
    OpenSky(#[from] OpenSkyError),
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub feed: Arc<FeedClient>,
    pub opensky: Arc<OpenSkyClient>,
}

pub async fn run_server(config: Config) -> Result<(), ServerError> {
    let bind_addr = config.web.bind.clone();

    let feed = FeedClient::new(config.balloons.feed_url.clone(), config.balloons.hours)?;
    let opensky = OpenSkyClient::new(
        config.opensky.api_url.clone(),
        config.opensky.credentials(),
    )?;
    if config.opensky.credentials().is_none() {
        log::info!("No aircraft API credentials configured, using anonymous access");
    }

    let state = AppState {
        config: Arc::new(config),
        feed: Arc::new(feed),
        opensky: Arc::new(opensky),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // UI routes
        .route("/", get(ui_handlers::index))
        // API endpoints
        .route(
            "/nearby-flights/{latitude}/{longitude}",
            get(flight_handlers::nearby_flights),
        )
        .route("/api/balloons", get(balloon_handlers::list_balloons))
        // Static files
        .nest_service("/static", ServeDir::new("src/web/static"))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
