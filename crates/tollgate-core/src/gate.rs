//! The capability gate: the single entry point for access checks.
//!
//! Two kinds of check go through the gate:
//!
//!   passive   `can` / `can_any` / `can_all`   → bool, never fail, never audit
//!   mutating  `assert_can` / `assert_any` / `assert_all` → Result, audit denials
//!
//! Passive checks gate what is rendered. Mutating checks run immediately
//! before a side-effecting host operation (delete user, approve review) and
//! are the only path that writes to the audit trail, so merely rendering a
//! page never produces a denial record.

use std::sync::Arc;

use tracing::{debug, error, warn};

use tollgate_contracts::{
    actor::Actor,
    capability::Capability,
    denial::DenialRecord,
    error::{TollgateError, TollgateResult, EMPTY_GROUP},
};

use crate::{
    resolver::RoleResolver,
    traits::{AuditTrail, CapabilityResolver},
};

/// Answers "can this actor perform this action?".
///
/// The gate never stores or mutates an `Actor`; every call is a function of
/// the actor snapshot it is handed.
pub struct CapabilityGate {
    resolver: Box<dyn CapabilityResolver>,
    audit: Arc<dyn AuditTrail>,
}

impl CapabilityGate {
    /// Create a gate with a custom resolver.
    pub fn new(resolver: Box<dyn CapabilityResolver>, audit: Arc<dyn AuditTrail>) -> Self {
        Self { resolver, audit }
    }

    /// Create a gate using the role-first [`RoleResolver`].
    pub fn with_role_resolver(audit: Arc<dyn AuditTrail>) -> Self {
        Self::new(Box::new(RoleResolver), audit)
    }

    /// The trail this gate records denials to.
    pub fn audit(&self) -> &Arc<dyn AuditTrail> {
        &self.audit
    }

    /// Passive check for one capability. Side-effect-free.
    pub fn can(&self, actor: &Actor, capability: &Capability) -> bool {
        let granted = self
            .resolver
            .resolve(actor.role, &actor.permissions, capability);
        debug!(
            actor_id = %actor.id,
            role = %actor.role,
            capability = %capability,
            granted,
            "capability evaluated"
        );
        granted
    }

    /// True iff at least one capability is granted. Stops at the first grant.
    ///
    /// An empty slice is `false`.
    pub fn can_any(&self, actor: &Actor, capabilities: &[Capability]) -> bool {
        capabilities.iter().any(|c| self.can(actor, c))
    }

    /// True iff every capability is granted. Stops at the first denial.
    ///
    /// An empty slice is `true`.
    pub fn can_all(&self, actor: &Actor, capabilities: &[Capability]) -> bool {
        capabilities.iter().all(|c| self.can(actor, c))
    }

    /// Mutating-action check for one capability.
    ///
    /// # Errors
    ///
    /// On denial the attempt is recorded in the audit trail and
    /// `PermissionDenied` is returned. A trail that fails to store the record
    /// is logged at `error` level; the result is still `PermissionDenied`.
    pub fn assert_can(
        &self,
        actor: &Actor,
        capability: &Capability,
        context: &str,
    ) -> TollgateResult<()> {
        if self.can(actor, capability) {
            return Ok(());
        }
        self.deny(actor, capability, context)
    }

    /// Mutating-action counterpart of [`can_any`](Self::can_any).
    ///
    /// A denial is recorded against the first capability of the group. An
    /// empty group is denied without an audit record, since nothing was
    /// attempted.
    pub fn assert_any(
        &self,
        actor: &Actor,
        capabilities: &[Capability],
        context: &str,
    ) -> TollgateResult<()> {
        if self.can_any(actor, capabilities) {
            return Ok(());
        }
        match capabilities.first() {
            Some(first) => self.deny(actor, first, context),
            None => {
                warn!(actor_id = %actor.id, context, "empty capability group denied");
                Err(TollgateError::PermissionDenied {
                    capability: EMPTY_GROUP.to_string(),
                    actor_id: actor.id.to_string(),
                })
            }
        }
    }

    /// Mutating-action counterpart of [`can_all`](Self::can_all).
    ///
    /// Capabilities are asserted in order; the first missing one is recorded
    /// and returned.
    pub fn assert_all(
        &self,
        actor: &Actor,
        capabilities: &[Capability],
        context: &str,
    ) -> TollgateResult<()> {
        for capability in capabilities {
            self.assert_can(actor, capability, context)?;
        }
        Ok(())
    }

    fn deny(&self, actor: &Actor, capability: &Capability, context: &str) -> TollgateResult<()> {
        warn!(
            actor_id = %actor.id,
            role = %actor.role,
            capability = %capability,
            context,
            "action denied"
        );

        let record = DenialRecord::now(actor.id.clone(), capability.clone(), context);
        if let Err(e) = self.audit.record(&record) {
            error!(
                actor_id = %actor.id,
                capability = %capability,
                error = %e,
                "denial could not be audited"
            );
        }

        Err(TollgateError::PermissionDenied {
            capability: capability.to_string(),
            actor_id: actor.id.to_string(),
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
