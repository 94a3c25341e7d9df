use crate::adapters::{Example, Platform};
use crate::badge::{BadgeDescriptor, ERROR_COLOR};
use crate::config::ServiceConfig;
use crate::error::BadgeError;
use crate::service::{BadgeRequest, BadgeService};
use crate::text::title_case;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use strum::VariantArray;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Label used when a request cannot be tied to a platform.
const FALLBACK_LABEL: &str = "badge";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub ready: bool,
    pub port: u16,
    pub platforms: Vec<Platform>,
    pub thingiverse_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub examples: Vec<Example>,
}

pub struct ServerState {
    pub port: u16,
    pub service: BadgeService,
}

impl ServerState {
    pub fn new(port: u16, config: ServiceConfig) -> Result<Self, BadgeError> {
        Ok(Self {
            port,
            service: BadgeService::new(config)?,
        })
    }
}

async fn status_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(StatusResponse {
        status: "ok".to_string(),
        version: SERVER_VERSION.to_string(),
        ready: true,
        port: state.port,
        platforms: Platform::VARIANTS.to_vec(),
        thingiverse_configured: state.service.config().thingiverse_configured(),
    })
}

async fn examples_handler() -> impl IntoResponse {
    Json(ExamplesResponse {
        examples: BadgeService::examples(),
    })
}

async fn badge_handler(
    State(state): State<Arc<ServerState>>,
    Path((platform, format, id)): Path<(String, String, String)>,
) -> Response {
    match BadgeRequest::parse(&platform, &format, &id) {
        Ok(request) => Json(state.service.render(&request).await).into_response(),
        Err(e) => {
            debug!(%platform, %format, "rejected badge route: {}", e);
            let badge = match Platform::from_str(&platform) {
                Ok(known) => BadgeDescriptor::from_error(
                    title_case(&format),
                    known.profile().named_logo,
                    &e,
                ),
                Err(_) => BadgeDescriptor::new(FALLBACK_LABEL, e.pretty_message(), ERROR_COLOR),
            };
            (StatusCode::NOT_FOUND, Json(badge)).into_response()
        }
    }
}

async fn fallback_handler() -> impl IntoResponse {
    let err = BadgeError::InvalidParameter("unknown route".to_string());
    (
        StatusCode::NOT_FOUND,
        Json(BadgeDescriptor::new(
            FALLBACK_LABEL,
            err.pretty_message(),
            ERROR_COLOR,
        )),
    )
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/examples", get(examples_handler))
        .route("/:platform/:format/:id", get(badge_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(cors)
}

pub async fn start_server(config: ServiceConfig, port: u16) -> Result<(), std::io::Error> {
    if !config.thingiverse_configured() {
        info!("no Thingiverse token configured; Thingiverse badges will report missing credentials");
    }

    let state = ServerState::new(port, config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let app = create_router(Arc::new(state));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port, "makerbadge HTTP server listening");
    axum::serve(listener, app).await
}
