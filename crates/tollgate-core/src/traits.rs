//! Trait seams of the TOLLGATE authorization model.
//!
//! - `CapabilityResolver`: trusted decision function (role + permissions → bool)
//! - `AuditTrail`:         trusted sink for denied attempts
//!
//! The gate wires them together. Hosts normally use `RoleResolver` and the
//! in-memory trail from `tollgate-audit`; tests substitute instrumented ones.

use tollgate_contracts::{
    actor::Role,
    capability::Capability,
    denial::{DenialRecord, RecentDenials},
    error::TollgateResult,
    permission::PermissionSet,
};

/// Decides whether a role holding `permissions` is granted `capability`.
///
/// Implementations must be pure and total: no I/O, no panics, and the same
/// inputs always produce the same answer. Ambiguity resolves to `false`.
pub trait CapabilityResolver: Send + Sync {
    fn resolve(&self, role: Role, permissions: &PermissionSet, capability: &Capability) -> bool;
}

/// Append-only store of denied attempts.
///
/// Only mutating-action checks write here; passive UI checks never do.
pub trait AuditTrail: Send + Sync {
    /// Append one denial.
    ///
    /// Records are never modified or removed once written. Implementations
    /// fail only when their storage is unusable.
    fn record(&self, denial: &DenialRecord) -> TollgateResult<()>;

    /// Return up to `limit` of the most recent denials, newest first.
    fn recent(&self, limit: usize) -> RecentDenials;
}
