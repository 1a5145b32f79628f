// crates/client-policy-core/src/core/request.rs
// ============================================================================
// Module: Authorization Request Model
// Description: Parsed authorization endpoint request and OIDC response types.
// Purpose: Give executors typed access to already-parsed request parameters.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! The request-parsing layer produces an [`AuthorizationEndpointRequest`] and
//! an [`OidcResponseType`] before any policy runs. Optional parameters follow
//! OAuth presence semantics: an empty value counts as absent.
//! Scope membership is a whitespace-delimited, case-sensitive token match.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Scope Helpers
// ============================================================================

/// Reserved scope token that marks an OpenID Connect request.
pub const OPENID_SCOPE: &str = "openid";

/// Returns true when `scope` contains `target` as a whitespace-delimited token.
#[must_use]
pub fn has_scope(scope: Option<&str>, target: &str) -> bool {
    scope.is_some_and(|scope| scope.split_whitespace().any(|token| token == target))
}

/// Returns true when the scope marks an OpenID Connect request.
#[must_use]
pub fn is_oidc_request(scope: Option<&str>) -> bool {
    has_scope(scope, OPENID_SCOPE)
}

/// Applies OAuth parameter presence semantics to an optional value.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|value| !value.is_empty())
}

// ============================================================================
// SECTION: Authorization Endpoint Request
// ============================================================================

/// Parsed authorization endpoint request.
///
/// # Invariants
/// - Fields hold raw parameter values; use the accessors for presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationEndpointRequest {
    /// Client identifier.
    pub client_id: Option<String>,
    /// Redirect URI parameter as sent by the client.
    pub redirect_uri: Option<String>,
    /// Raw `response_type` parameter.
    pub response_type: Option<String>,
    /// Requested response mode.
    pub response_mode: Option<String>,
    /// Space-delimited scope string.
    pub scope: Option<String>,
    /// Client state used for CSRF correlation.
    pub state: Option<String>,
    /// OIDC nonce bound into the ID token.
    pub nonce: Option<String>,
    /// OIDC prompt parameter.
    pub prompt: Option<String>,
    /// Raw `max_age` parameter (seconds).
    pub max_age: Option<String>,
    /// Login hint supplied by the client.
    pub login_hint: Option<String>,
    /// Requested claims (JSON string).
    pub claims: Option<String>,
    /// Requested authentication context class references.
    pub acr_values: Option<String>,
    /// PKCE code challenge.
    pub code_challenge: Option<String>,
    /// PKCE code challenge method.
    pub code_challenge_method: Option<String>,
    /// Preferred UI locales.
    pub ui_locales: Option<String>,
    /// Parameters not covered by the fields above.
    #[serde(flatten)]
    pub additional_params: BTreeMap<String, String>,
}

impl AuthorizationEndpointRequest {
    /// Returns the scope string when present.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        present(self.scope.as_ref())
    }

    /// Returns the nonce when present.
    #[must_use]
    pub fn nonce(&self) -> Option<&str> {
        present(self.nonce.as_ref())
    }

    /// Returns the state when present.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        present(self.state.as_ref())
    }

    /// Returns the client identifier when present.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        present(self.client_id.as_ref())
    }

    /// Returns `max_age` in seconds when present and numeric.
    #[must_use]
    pub fn max_age(&self) -> Option<u64> {
        present(self.max_age.as_ref()).and_then(|value| value.parse().ok())
    }

    /// Returns true when the scope contains `openid`.
    #[must_use]
    pub fn is_oidc_request(&self) -> bool {
        is_oidc_request(self.scope())
    }

    /// Sets the scope parameter.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the nonce parameter.
    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Sets the state parameter.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the client identifier.
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

// ============================================================================
// SECTION: Response Types
// ============================================================================

/// Single `response_type` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResponseTypeToken {
    /// Authorization code.
    Code,
    /// ID token.
    IdToken,
    /// Access token.
    Token,
    /// No artifact is returned.
    None,
}

impl ResponseTypeToken {
    /// Returns the wire form of the token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::IdToken => "id_token",
            Self::Token => "token",
            Self::None => "none",
        }
    }

    /// Parses a single wire token.
    fn parse(value: &str) -> Option<Self> {
        match value {
            "code" => Some(Self::Code),
            "id_token" => Some(Self::IdToken),
            "token" => Some(Self::Token),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Response type parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseTypeError {
    /// No response type was supplied.
    #[error("response_type is empty")]
    Empty,
    /// A token outside the OIDC vocabulary was supplied.
    #[error("unsupported response_type: {0}")]
    Unsupported(String),
    /// `none` was combined with another token.
    #[error("response_type none is not allowed with other response types")]
    NoneCombined,
}

/// Parsed OIDC response type (set of response type tokens).
///
/// # Invariants
/// - Contains at least one token.
/// - `none` never appears together with another token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OidcResponseType {
    /// Distinct tokens in canonical order.
    tokens: BTreeSet<ResponseTypeToken>,
}

impl OidcResponseType {
    /// Parses a space-delimited `response_type` value.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseTypeError`] when the value is empty, contains an
    /// unknown token, or combines `none` with other tokens.
    pub fn parse(value: &str) -> Result<Self, ResponseTypeError> {
        let mut tokens = BTreeSet::new();
        for raw in value.split_whitespace() {
            let token = ResponseTypeToken::parse(raw)
                .ok_or_else(|| ResponseTypeError::Unsupported(raw.to_string()))?;
            tokens.insert(token);
        }
        if tokens.is_empty() {
            return Err(ResponseTypeError::Empty);
        }
        if tokens.contains(&ResponseTypeToken::None) && tokens.len() > 1 {
            return Err(ResponseTypeError::NoneCombined);
        }
        Ok(Self {
            tokens,
        })
    }

    /// Returns the authorization code response type.
    #[must_use]
    pub fn code() -> Self {
        Self {
            tokens: BTreeSet::from([ResponseTypeToken::Code]),
        }
    }

    /// Returns true when the response type includes `token`.
    #[must_use]
    pub fn has_response_type(&self, token: ResponseTypeToken) -> bool {
        self.tokens.contains(&token)
    }

    /// Returns true when tokens are delivered from the authorization endpoint.
    #[must_use]
    pub fn is_implicit_or_hybrid_flow(&self) -> bool {
        self.has_response_type(ResponseTypeToken::Token)
            || self.has_response_type(ResponseTypeToken::IdToken)
    }

    /// Returns true for a pure implicit flow (no authorization code).
    #[must_use]
    pub fn is_implicit_flow(&self) -> bool {
        self.is_implicit_or_hybrid_flow() && !self.has_response_type(ResponseTypeToken::Code)
    }

    /// Returns the tokens in canonical order.
    pub fn tokens(&self) -> impl Iterator<Item = ResponseTypeToken> + '_ {
        self.tokens.iter().copied()
    }
}

impl fmt::Display for OidcResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(token.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl TryFrom<String> for OidcResponseType {
    type Error = ResponseTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OidcResponseType> for String {
    fn from(value: OidcResponseType) -> Self {
        value.to_string()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_scope_matches_whole_tokens_only() {
        assert!(has_scope(Some("openid profile"), "openid"));
        assert!(has_scope(Some("profile\topenid"), "openid"));
        assert!(!has_scope(Some("fakeopenid profile"), "openid"));
        assert!(!has_scope(Some("OpenID"), "openid"));
        assert!(!has_scope(None, "openid"));
    }

    #[test]
    fn empty_parameters_count_as_absent() {
        let request = AuthorizationEndpointRequest::default().with_nonce("").with_state("s");
        assert_eq!(request.nonce(), None);
        assert_eq!(request.state(), Some("s"));
    }

    #[test]
    fn response_type_is_canonicalized() {
        let parsed = OidcResponseType::parse("token  id_token code").map_err(|err| err.to_string());
        assert_eq!(parsed.map(|value| value.to_string()), Ok("code id_token token".to_string()));
    }

    #[test]
    fn response_type_rejects_none_combined() {
        assert_eq!(OidcResponseType::parse("none code"), Err(ResponseTypeError::NoneCombined));
    }

    #[test]
    fn response_type_rejects_unknown_and_empty() {
        assert_eq!(
            OidcResponseType::parse("code device"),
            Err(ResponseTypeError::Unsupported("device".to_string()))
        );
        assert_eq!(OidcResponseType::parse("  "), Err(ResponseTypeError::Empty));
    }

    #[test]
    fn flow_classification() {
        let hybrid = OidcResponseType::parse("code id_token");
        assert!(hybrid.as_ref().is_ok_and(OidcResponseType::is_implicit_or_hybrid_flow));
        assert!(hybrid.as_ref().is_ok_and(|value| !value.is_implicit_flow()));
        assert!(!OidcResponseType::code().is_implicit_or_hybrid_flow());
    }
}
