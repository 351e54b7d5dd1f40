//! Router construction and the HTTP server loop

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use lexigraph_core::SynonymStore;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::docs::{self, OPENAPI_PATH};
use crate::handlers::{self, AppState};

/// Default maximum request body size (1MB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Knobs for the HTTP layer
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub max_body_bytes: usize,
    pub cors_origins: Vec<String>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            cors_origins: default_cors_origins(),
        }
    }
}

/// Localhost origins allowed when nothing else is configured
pub fn default_cors_origins() -> Vec<String> {
    [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Create the API router around `store`
pub fn create_router(store: Arc<SynonymStore>, options: &ServerOptions) -> Router {
    let state = AppState::new(store);

    let api = Router::new()
        .route("/add-synonym", post(handlers::add_synonym))
        .route("/find-synonym", post(handlers::find_synonyms))
        .route("/delete-synonym", delete(handlers::delete_synonym));

    Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health))
        .route(OPENAPI_PATH, get(docs::openapi_json))
        .with_state(state)
        .layer(cors_layer(&options.cors_origins))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(options.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

/// Serve the API on `addr` until Ctrl-C
pub async fn run_server(
    store: Arc<SynonymStore>,
    addr: &str,
    options: ServerOptions,
) -> anyhow::Result<()> {
    let router = create_router(store, &options);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Lexigraph listening on {}", addr);
    tracing::info!("  Add:    POST   http://{}/api/add-synonym", addr);
    tracing::info!("  Find:   POST   http://{}/api/find-synonym", addr);
    tracing::info!("  Delete: DELETE http://{}/api/delete-synonym", addr);
    tracing::info!("  Health: GET    http://{}/health", addr);
    tracing::info!("  Docs:   GET    http://{}{}", addr, OPENAPI_PATH);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
