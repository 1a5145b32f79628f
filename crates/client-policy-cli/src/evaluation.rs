// crates/client-policy-cli/src/evaluation.rs
// ============================================================================
// Module: Profile Activation and Evaluation
// Description: Builds executor chains from configuration and renders verdicts.
// Purpose: Bridge config, registry, and chain for the CLI commands.
// Dependencies: client-policy-config, client-policy-core, client-policy-executors, serde
// ============================================================================

//! ## Overview
//! Profiles are activated through the executor registry, so every
//! configuration defect is reported before a request is evaluated. A verdict
//! is the JSON rendering of one chain evaluation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use client_policy_config::AuditConfig;
use client_policy_config::AuditSinkKind;
use client_policy_config::ClientPolicyConfig;
use client_policy_config::ConfigError;
use client_policy_config::ProfileConfig;
use client_policy_core::AuthorizationEndpointRequest;
use client_policy_core::ExecutorChain;
use client_policy_core::FileAuditSink;
use client_policy_core::NoopAuditSink;
use client_policy_core::OidcResponseType;
use client_policy_core::PolicyAuditSink;
use client_policy_core::PolicyContext;
use client_policy_core::PolicyOutcome;
use client_policy_core::ProfileName;
use client_policy_core::RejectionSignal;
use client_policy_core::ResponseTypeError;
use client_policy_core::StderrAuditSink;
use client_policy_executors::ExecutorRegistry;
use client_policy_executors::RegistryError;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of an authorization request JSON input.
pub const MAX_REQUEST_BYTES: usize = 64 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Activation and evaluation failures.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// Configuration could not be loaded or converted.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A profile failed to activate.
    #[error("profile {profile} failed to activate: {source}")]
    Activation {
        /// Profile name.
        profile: String,
        /// Registry failure.
        #[source]
        source: RegistryError,
    },
    /// The requested profile is not configured.
    #[error("profile not found: {0}")]
    UnknownProfile(String),
    /// The audit sink could not be opened.
    #[error("audit sink unavailable: {0}")]
    Audit(String),
    /// The request input could not be read or parsed.
    #[error("invalid request input: {0}")]
    Request(String),
    /// The response type could not be parsed.
    #[error(transparent)]
    ResponseType(#[from] ResponseTypeError),
    /// No redirect URI was supplied or present in the request.
    #[error("redirect_uri is required")]
    MissingRedirectUri,
}

// ============================================================================
// SECTION: Activation
// ============================================================================

/// Opens the audit sink selected by configuration.
///
/// # Errors
///
/// Returns [`EvaluationError::Audit`] when the file sink cannot be opened.
pub fn audit_sink(config: &AuditConfig) -> Result<Arc<dyn PolicyAuditSink>, EvaluationError> {
    match config.sink {
        AuditSinkKind::None => Ok(Arc::new(NoopAuditSink)),
        AuditSinkKind::Stderr => Ok(Arc::new(StderrAuditSink)),
        AuditSinkKind::File => {
            let path = config
                .path
                .as_deref()
                .ok_or_else(|| EvaluationError::Audit("audit.path is not set".to_string()))?;
            let sink = FileAuditSink::new(Path::new(path.trim()))
                .map_err(|err| EvaluationError::Audit(err.to_string()))?;
            Ok(Arc::new(sink))
        }
    }
}

/// Builds the executor chain for one profile.
///
/// # Errors
///
/// Returns [`EvaluationError`] when the profile's executors fail to
/// instantiate or do not form a valid chain.
pub fn activate_profile(
    registry: &ExecutorRegistry,
    profile: &ProfileConfig,
) -> Result<ExecutorChain, EvaluationError> {
    let components = profile.to_components()?;
    let chain = registry.build_chain(&components).map_err(|source| {
        EvaluationError::Activation {
            profile: profile.name.clone(),
            source,
        }
    })?;
    Ok(chain.with_profile(ProfileName::new(profile.name.as_str())))
}

/// Activates every configured profile in declaration order.
///
/// # Errors
///
/// Returns the first activation failure.
pub fn activate_profiles(
    registry: &ExecutorRegistry,
    config: &ClientPolicyConfig,
) -> Result<Vec<ExecutorChain>, EvaluationError> {
    config.profiles.iter().map(|profile| activate_profile(registry, profile)).collect()
}

/// Looks up and activates a named profile.
///
/// # Errors
///
/// Returns [`EvaluationError::UnknownProfile`] when the profile is absent, or
/// the activation failure.
pub fn activate_named_profile(
    registry: &ExecutorRegistry,
    config: &ClientPolicyConfig,
    name: &str,
) -> Result<ExecutorChain, EvaluationError> {
    let profile =
        config.profile(name).ok_or_else(|| EvaluationError::UnknownProfile(name.to_string()))?;
    activate_profile(registry, profile)
}

// ============================================================================
// SECTION: Request Input
// ============================================================================

/// Reads and parses an authorization request JSON file.
///
/// # Errors
///
/// Returns [`EvaluationError::Request`] when the file is unreadable, larger
/// than [`MAX_REQUEST_BYTES`], or not a valid request object.
pub fn read_authorization_request(
    path: &Path,
) -> Result<AuthorizationEndpointRequest, EvaluationError> {
    let file = File::open(path).map_err(|err| EvaluationError::Request(err.to_string()))?;
    let limit = u64::try_from(MAX_REQUEST_BYTES).unwrap_or(u64::MAX);
    let mut bytes = Vec::new();
    file.take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|err| EvaluationError::Request(err.to_string()))?;
    if bytes.len() > MAX_REQUEST_BYTES {
        return Err(EvaluationError::Request(format!(
            "request exceeds {MAX_REQUEST_BYTES} bytes"
        )));
    }
    serde_json::from_slice(&bytes).map_err(|err| EvaluationError::Request(err.to_string()))
}

/// Builds an authorization request context.
///
/// Overrides take precedence over the values carried in the request.
///
/// # Errors
///
/// Returns [`EvaluationError`] when the response type is invalid or no
/// redirect URI is available.
pub fn authorization_context(
    request: AuthorizationEndpointRequest,
    response_type: Option<&str>,
    redirect_uri: Option<&str>,
) -> Result<PolicyContext, EvaluationError> {
    let response_type = response_type.or(request.response_type.as_deref()).unwrap_or_default();
    let parsed = OidcResponseType::parse(response_type)?;
    let redirect_uri = redirect_uri
        .filter(|value| !value.is_empty())
        .or_else(|| request.redirect_uri.as_deref().filter(|value| !value.is_empty()))
        .ok_or(EvaluationError::MissingRedirectUri)?
        .to_string();
    Ok(PolicyContext::authorization_request(parsed, request, redirect_uri))
}

// ============================================================================
// SECTION: Verdict
// ============================================================================

/// JSON verdict printed by the `evaluate` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Profile that evaluated the request.
    pub profile: String,
    /// Evaluation outcome.
    pub outcome: PolicyOutcome,
    /// OAuth error body when rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<RejectionSignal>,
}

impl Verdict {
    /// Builds a verdict from a chain evaluation result.
    #[must_use]
    pub fn from_result(profile: impl Into<String>, result: Result<(), RejectionSignal>) -> Self {
        match result {
            Ok(()) => Self {
                profile: profile.into(),
                outcome: PolicyOutcome::Pass,
                rejection: None,
            },
            Err(rejection) => Self {
                profile: profile.into(),
                outcome: PolicyOutcome::Reject,
                rejection: Some(rejection),
            },
        }
    }

    /// Returns true when the request was admitted.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome == PolicyOutcome::Pass
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
