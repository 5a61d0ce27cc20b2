//! The dashboard's session layer, wired to TOLLGATE.
//!
//! `AdminHost` is what the admin front-end would own once per process: one
//! audit trail, one gate, one decision cache, and the bundled action policy.
//! It hydrates actors from backend payloads and keeps the cache in step with
//! permission refreshes and logouts.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use tollgate_audit::InMemoryAuditTrail;
use tollgate_contracts::{
    actor::Actor,
    error::{TollgateError, TollgateResult},
    permission::PermissionSet,
};
use tollgate_core::{AccessDecisionCache, CapabilityGate};
use tollgate_policy::ActionPolicy;

/// The bundled dashboard policy.
pub const ADMIN_DASHBOARD_POLICY: &str = include_str!("../policies/admin_dashboard.toml");

/// The fields of a backend session payload the host reads.
#[derive(Debug, Deserialize)]
struct SessionPayload {
    id: String,
    role: String,
    #[serde(default)]
    permissions: Value,
}

/// One admin front-end process: session hydration plus every access check
/// the dashboard makes, sharing a single trail, gate, and decision cache.
pub struct AdminHost {
    trail: Arc<InMemoryAuditTrail>,
    gate: Arc<CapabilityGate>,
    cache: AccessDecisionCache,
    policy: ActionPolicy,
}

impl fmt::Debug for AdminHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminHost")
            .field("trail_id", &self.trail.trail_id())
            .field("denials", &self.trail.len())
            .field("cached_decisions", &self.cache.len())
            .field("actions", &self.policy.actions().len())
            .finish_non_exhaustive()
    }
}

impl AdminHost {
    /// Build a host around the bundled dashboard policy.
    pub fn new() -> TollgateResult<Self> {
        Ok(Self::with_policy(ActionPolicy::from_toml_str(ADMIN_DASHBOARD_POLICY)?))
    }

    pub fn with_policy(policy: ActionPolicy) -> Self {
        let trail = Arc::new(InMemoryAuditTrail::new());
        let gate = Arc::new(CapabilityGate::with_role_resolver(trail.clone()));
        let cache = AccessDecisionCache::new(Arc::clone(&gate));
        Self {
            trail,
            gate,
            cache,
            policy,
        }
    }

    pub fn gate(&self) -> &CapabilityGate {
        &self.gate
    }

    pub fn cache(&self) -> &AccessDecisionCache {
        &self.cache
    }

    pub fn trail(&self) -> &InMemoryAuditTrail {
        &self.trail
    }

    pub fn policy(&self) -> &ActionPolicy {
        &self.policy
    }

    /// Hydrate an actor from a session payload.
    ///
    /// # Errors
    ///
    /// `MalformedSession` when `id` or `role` is missing, `UnsupportedRole`
    /// for non-admin accounts. The permission object is accepted in any shape.
    pub fn login(&self, payload: &Value) -> TollgateResult<Actor> {
        let session = SessionPayload::deserialize(payload).map_err(|e| {
            TollgateError::MalformedSession {
                reason: e.to_string(),
            }
        })?;
        let actor = Actor::from_session(session.id, &session.role, &session.permissions)?;
        info!(actor_id = %actor.id, role = %actor.role, "admin session started");
        Ok(actor)
    }

    /// Swap in a freshly fetched permission object and drop stale decisions.
    pub fn refresh(&self, actor: &Actor, permissions: &Value) -> Actor {
        let next = actor.with_permissions(PermissionSet::from_value(permissions));
        self.cache.invalidate(&next.id);
        info!(
            actor_id = %next.id,
            snapshot_version = next.snapshot_version,
            "permissions refreshed"
        );
        next
    }

    /// End the session and evict its cached decisions.
    pub fn logout(&self, actor: &Actor) {
        self.cache.invalidate(&actor.id);
        info!(actor_id = %actor.id, "admin session ended");
    }

    /// Passive check for a dashboard action.
    pub fn can(&self, actor: &Actor, action: &str) -> bool {
        self.policy.permits(&self.gate, actor, action)
    }

    /// Check a dashboard action immediately before performing it.
    pub fn perform(&self, actor: &Actor, action: &str, context: &str) -> TollgateResult<()> {
        self.policy.enforce(&self.gate, actor, action, context)
    }

    /// Every dashboard flag for `actor`, served through the cache.
    pub fn flags(&self, actor: &Actor) -> BTreeMap<String, bool> {
        self.policy.ui_flags(&self.cache, actor)
    }
}
