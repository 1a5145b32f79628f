// crates/client-policy-core/src/core/mod.rs
// ============================================================================
// Module: Client Policy Core Types
// Description: Canonical policy event, context, and verdict structures.
// Purpose: Provide stable, serializable types shared by executors and hosts.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Core types describe what an executor sees (events and typed contexts),
//! how executors are described in configuration (components), and what a
//! rejection looks like on the way out (rejection signals and audit events).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod component;
pub mod context;
pub mod event;
pub mod identifiers;
pub mod rejection;
pub mod request;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::PolicyAuditEvent;
pub use audit::PolicyAuditEventParams;
pub use audit::PolicyOutcome;
pub use component::ExecutorComponent;
pub use context::AuthorizationRequestContext;
pub use context::ClientRegistrationContext;
pub use context::EndpointRequestContext;
pub use context::PolicyContext;
pub use context::TokenRequestContext;
pub use event::PolicyEventKind;
pub use identifiers::ExecutorName;
pub use identifiers::ProfileName;
pub use identifiers::ProviderId;
pub use rejection::OAuthErrorCode;
pub use rejection::RejectionSignal;
pub use request::AuthorizationEndpointRequest;
pub use request::OPENID_SCOPE;
pub use request::OidcResponseType;
pub use request::ResponseTypeError;
pub use request::ResponseTypeToken;
pub use request::has_scope;
pub use request::is_oidc_request;
