//! HTTP route handlers.

use std::path::Path as FsPath;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::cache::StoreError;
use crate::domain::{NetworkError, NetworkName};
use crate::planner::{PlanError, Planner};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/networks", get(list_networks))
        .route("/networks/:name/route", get(network_route))
        .route("/route", post(plan_route))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page listing stored networks.
async fn index_page(State(state): State<AppState>) -> Response {
    let page = match state.networks.names().await {
        Ok(names) => IndexTemplate {
            networks: names.iter().map(ToString::to_string).collect(),
        }
        .render(),
        Err(e) => {
            warn!(error = %e, "cannot list networks for index page");
            ErrorTemplate {
                title: "Networks unavailable".to_string(),
                message: e.to_string(),
            }
            .render()
        }
    };

    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => AppError::Internal {
            message: format!("Template error: {}", e),
        }
        .into_response(),
    }
}

/// List stored network names.
async fn list_networks(
    State(state): State<AppState>,
) -> Result<Json<NetworkListResponse>, AppError> {
    let names = state.networks.names().await?;
    Ok(Json(NetworkListResponse {
        networks: names.iter().map(ToString::to_string).collect(),
    }))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan the fastest route over a stored network.
async fn network_route(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let name = NetworkName::parse(&name).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let network = state.networks.get(&name).await?;
    let result = Planner::new(&state.config).plan(&network)?;
    debug!(
        network = %name,
        hops = result.itinerary.len(),
        minutes = result.distance_minutes,
        "planned route"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = RouteTemplate {
            route: RouteView::from_itinerary(&name, &result.itinerary),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(RouteResponse::from_itinerary(&result.itinerary)).into_response())
    }
}

/// Plan the fastest route over a network sent in the request body.
async fn plan_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RouteResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: RouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid route request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let network = req.into_network()?;
    let result = Planner::new(&state.config).plan(&network)?;

    Ok(Json(RouteResponse::from_itinerary(&result.itinerary)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        AppError::BadRequest {
            message: format!("Invalid network: {e}"),
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Unreachable { .. } => AppError::Unprocessable {
                message: e.to_string(),
            },
            PlanError::MissingEdge { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
