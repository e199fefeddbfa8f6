//! Password-gated admin page.
//!
//! This module provides:
//! - Parsing of `Authorization: Basic ...` headers
//! - The credential check for the fixed `admin` user
//! - The static admin page body

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ApiError;

/// The only username accepted by the admin page.
pub const ADMIN_USER: &str = "admin";

/// Page served to an authenticated admin.
pub const ADMIN_PAGE: &str = "<html><h1>Super secret admin portal</h1></html>";

/// Username/password pair taken from a Basic auth header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Presented username.
    pub username: String,
    /// Presented password.
    pub password: String,
}

impl Credentials {
    /// Parse the value of an `Authorization` header.
    ///
    /// Returns `None` unless it is a well-formed `Basic` credential.
    pub fn from_basic_header(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Admin page guarded by a single shared password.
#[derive(Clone)]
pub struct AdminPortal {
    password: String,
}

impl AdminPortal {
    /// Create a portal that accepts `admin` with the given password.
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Check presented credentials.
    ///
    /// The error does not say which half of the pair was wrong.
    pub fn authorize(&self, credentials: Option<&Credentials>) -> Result<(), ApiError> {
        match credentials {
            Some(c) if c.username == ADMIN_USER && c.password == self.password => Ok(()),
            _ => Err(ApiError::Unauthorized),
        }
    }

    /// Check credentials and return the page body on success.
    pub fn page(&self, credentials: Option<&Credentials>) -> Result<&'static str, ApiError> {
        self.authorize(credentials)?;
        Ok(ADMIN_PAGE)
    }
}

impl fmt::Debug for AdminPortal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminPortal")
            .field("password", &"<redacted>")
            .finish()
    }
}
