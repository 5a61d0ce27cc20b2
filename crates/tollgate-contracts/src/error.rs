//! Error types for the TOLLGATE authorization model.
//!
//! Passive checks (`can`, `can_any`, `can_all`) never fail. Everything that
//! can fail returns `TollgateResult<T>`, and each variant carries enough
//! context for the host to show a denial message or log the problem.

use thiserror::Error;

/// The `capability` reported when an empty capability group is asserted.
///
/// Angle brackets fall outside the capability naming rules, so this can never
/// name a real capability.
pub const EMPTY_GROUP: &str = "<empty group>";

/// The unified error type for the TOLLGATE crates.
#[derive(Debug, Error)]
pub enum TollgateError {
    /// The actor attempted an action it is not entitled to perform.
    ///
    /// Always recoverable: hosts surface it as a user-visible message.
    /// `capability` is [`EMPTY_GROUP`] when the asserted group was empty.
    #[error("actor '{actor_id}' lacks capability '{capability}'")]
    PermissionDenied { capability: String, actor_id: String },

    /// A role outside `admin`/`super_admin` tried to reach the gate.
    #[error("role '{role}' is not an admin role")]
    UnsupportedRole { role: String },

    /// A host session payload is missing its id or role.
    #[error("malformed session payload: {reason}")]
    MalformedSession { reason: String },

    /// A capability name violates the vocabulary rules.
    #[error("invalid capability '{name}': {reason}")]
    InvalidCapability { name: String, reason: String },

    /// An action id that the host policy does not declare.
    #[error("action '{action}' is not declared in the policy")]
    UnknownAction { action: String },

    /// A policy file is missing, unreadable, or inconsistent.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// An audit trail implementation could not store a denial.
    ///
    /// Returned by `AuditTrail::record` only. The gate logs it and still
    /// reports `PermissionDenied`, so callers of the gate never see it.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },
}

/// Convenience alias used throughout the TOLLGATE crates.
pub type TollgateResult<T> = Result<T, TollgateError>;
