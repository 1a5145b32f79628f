// crates/client-policy-core/src/core/rejection.rs
// ============================================================================
// Module: Rejection Signal
// Description: Terminal policy verdict carrying an OAuth/OIDC error code.
// Purpose: Provide the only error type that crosses the executor chain boundary.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`RejectionSignal`] is an expected, user-facing verdict: the request is
//! refused with a stable machine-readable code and a human description. It is
//! never retried. The endpoint layer renders it as a redirect carrying
//! `error`/`error_description` or as a JSON error body; the serialized form of
//! this type matches that body.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Error Codes
// ============================================================================

/// OAuth 2.0 / OpenID Connect error vocabulary.
///
/// # Invariants
/// - Wire forms are stable and match the protocol registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthErrorCode {
    /// Request is missing a parameter or is otherwise malformed.
    InvalidRequest,
    /// Client authentication failed.
    InvalidClient,
    /// Grant or refresh token is invalid.
    InvalidGrant,
    /// Client is not allowed to use this grant or response type.
    UnauthorizedClient,
    /// Grant type is not supported.
    UnsupportedGrantType,
    /// Response type is not supported.
    UnsupportedResponseType,
    /// Requested scope is invalid.
    InvalidScope,
    /// Resource owner or server denied the request.
    AccessDenied,
    /// Request object is invalid.
    InvalidRequestObject,
    /// Request URI is invalid.
    InvalidRequestUri,
    /// Redirect URI is invalid (registration).
    InvalidRedirectUri,
    /// Client metadata is invalid (registration).
    InvalidClientMetadata,
    /// Server encountered an unexpected condition.
    ServerError,
    /// Server is temporarily unable to handle the request.
    TemporarilyUnavailable,
}

impl OAuthErrorCode {
    /// Returns the wire form of the error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidClient => "invalid_client",
            Self::InvalidGrant => "invalid_grant",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::UnsupportedGrantType => "unsupported_grant_type",
            Self::UnsupportedResponseType => "unsupported_response_type",
            Self::InvalidScope => "invalid_scope",
            Self::AccessDenied => "access_denied",
            Self::InvalidRequestObject => "invalid_request_object",
            Self::InvalidRequestUri => "invalid_request_uri",
            Self::InvalidRedirectUri => "invalid_redirect_uri",
            Self::InvalidClientMetadata => "invalid_client_metadata",
            Self::ServerError => "server_error",
            Self::TemporarilyUnavailable => "temporarily_unavailable",
        }
    }
}

impl fmt::Display for OAuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Rejection Signal
// ============================================================================

/// Policy rejection propagated unmodified from an executor to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{error_code}: {description}")]
pub struct RejectionSignal {
    /// Protocol error code.
    #[serde(rename = "error")]
    error_code: OAuthErrorCode,
    /// Human-readable description.
    #[serde(rename = "error_description")]
    description: String,
    /// Redirect target the error should be attached to, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    redirect_uri: Option<String>,
}

impl RejectionSignal {
    /// Creates a rejection with the given code and description.
    #[must_use]
    pub fn new(error_code: OAuthErrorCode, description: impl Into<String>) -> Self {
        Self {
            error_code,
            description: description.into(),
            redirect_uri: None,
        }
    }

    /// Creates an `invalid_request` rejection.
    #[must_use]
    pub fn invalid_request(description: impl Into<String>) -> Self {
        Self::new(OAuthErrorCode::InvalidRequest, description)
    }

    /// Attaches the redirect target for the error response.
    #[must_use]
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Returns the protocol error code.
    #[must_use]
    pub const fn error_code(&self) -> OAuthErrorCode {
        self.error_code
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the redirect target, if any.
    #[must_use]
    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }
}
