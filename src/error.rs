//! Unified error types for the coaster catalog.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Unified error type for the catalog service.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration was loaded but is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Record store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No coaster stored under the requested id.
    #[error("coaster {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// The store holds no coasters at all.
    #[error("no coasters stored")]
    Empty,
}

/// Errors surfaced to HTTP clients.
///
/// Every variant renders as a plain-text body with the matching status code.
/// Response encoding failures are rendered by `axum::Json` itself as a 500.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body was not declared as JSON.
    #[error("need content type application/json but got {0}")]
    UnsupportedMediaType(String),

    /// Request body could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// Requested resource does not exist.
    #[error("{0}")]
    NotFound(#[from] StoreError),

    /// HTTP method is not served on this path.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Missing or wrong credentials.
    #[error("401 unauthorized")]
    Unauthorized,
}

impl ApiError {
    /// Status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, self.to_string()).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"admin\""),
            );
        }

        response
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, CatalogError>;
