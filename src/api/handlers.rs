//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::admin::{AdminPortal, Credentials};
use crate::error::ApiError;
use crate::store::{Coaster, CoasterStore, NewCoaster};

/// Path segment that selects a random coaster instead of an id lookup.
pub const RANDOM_SEGMENT: &str = "random";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Coaster records.
    pub store: Arc<CoasterStore>,
    /// Admin page guard.
    pub admin: Arc<AdminPortal>,
}

impl AppState {
    /// Create new app state with an empty store.
    pub fn new(admin: AdminPortal) -> Self {
        Self::with_store(Arc::new(CoasterStore::new()), admin)
    }

    /// Create app state around an existing store.
    pub fn with_store(store: Arc<CoasterStore>, admin: AdminPortal) -> Self {
        Self {
            store,
            admin: Arc::new(admin),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// List every stored coaster.
pub async fn list_coasters(State(state): State<AppState>) -> Json<Vec<Coaster>> {
    let coasters = state.store.list();
    debug!(count = coasters.len(), "listing coasters");
    Json(coasters)
}

/// Create a coaster from a JSON body.
///
/// Responds 201 with the stored record and a `Location` header.
pub async fn create_coaster(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if !is_json(content_type) {
        return Err(ApiError::UnsupportedMediaType(content_type.to_string()));
    }

    let payload: NewCoaster =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let coaster = state.store.insert(payload);
    info!(id = %coaster.id, name = %coaster.name, "coaster created");

    let location = format!("/coasters/{}", coaster.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(coaster),
    ))
}

/// Fetch a coaster by id, or a random one for `/coasters/random`.
pub async fn get_coaster(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Coaster>, ApiError> {
    let coaster = if id == RANDOM_SEGMENT {
        state.store.random()?
    } else {
        state.store.get(&id)?
    };

    Ok(Json(coaster))
}

/// Fallback for unsupported methods on `/coasters`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Serve the admin page to the `admin` user.
pub async fn admin_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<&'static str>, ApiError> {
    let credentials = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(Credentials::from_basic_header);

    match state.admin.page(credentials.as_ref()) {
        Ok(page) => {
            info!("admin page served");
            Ok(Html(page))
        }
        Err(e) => {
            warn!(
                credentials_present = credentials.is_some(),
                "admin page access denied"
            );
            Err(e)
        }
    }
}

/// Whether a content-type header value names JSON, ignoring parameters.
fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
