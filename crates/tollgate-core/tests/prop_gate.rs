use std::collections::HashMap;
use std::sync::Arc;

use proptest::prelude::*;

use tollgate_contracts::{
    actor::{Actor, Role},
    capability::Capability,
    denial::{DenialRecord, RecentDenials},
    error::{TollgateError, TollgateResult},
    permission::PermissionSet,
};
use tollgate_core::{traits::AuditTrail, AccessDecisionCache, CapabilityGate};

struct NullAudit;

impl AuditTrail for NullAudit {
    fn record(&self, _denial: &DenialRecord) -> TollgateResult<()> {
        Ok(())
    }

    fn recent(&self, _limit: usize) -> RecentDenials {
        RecentDenials::default()
    }
}

fn gate() -> CapabilityGate {
    CapabilityGate::with_role_resolver(Arc::new(NullAudit))
}

fn capability_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}_(view|edit|delete|supervise|full)"
}

fn permission_map() -> impl Strategy<Value = HashMap<String, bool>> {
    prop::collection::hash_map(capability_name(), any::<bool>(), 0..12)
}

fn admin(permissions: &HashMap<String, bool>) -> Actor {
    Actor::new("u-prop", Role::Admin, PermissionSet::from(permissions.clone()))
}

proptest! {
    /// A super admin with no permission data is granted every capability.
    #[test]
    fn prop_super_admin_bypasses_empty_permissions(name in capability_name()) {
        let root = Actor::new("root", Role::SuperAdmin, PermissionSet::empty());
        prop_assert!(gate().can(&root, &Capability::new(name)));
    }

    /// An admin is granted exactly what the permission map says, absent keys denied.
    #[test]
    fn prop_admin_matches_permission_lookup(permissions in permission_map(), name in capability_name()) {
        let expected = permissions.get(&name).copied().unwrap_or(false);
        prop_assert_eq!(gate().can(&admin(&permissions), &Capability::new(name)), expected);
    }

    /// `assert_can` fails exactly when `can` is false.
    #[test]
    fn prop_assert_can_agrees_with_can(permissions in permission_map(), name in capability_name()) {
        let gate = gate();
        let actor = admin(&permissions);
        let capability = Capability::new(name);

        let granted = gate.can(&actor, &capability);
        match gate.assert_can(&actor, &capability, "prop") {
            Ok(()) => prop_assert!(granted),
            Err(TollgateError::PermissionDenied { .. }) => prop_assert!(!granted),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Composites agree with evaluating each capability on its own.
    #[test]
    fn prop_composites_match_iterated_can(
        permissions in permission_map(),
        names in prop::collection::vec(capability_name(), 0..6),
    ) {
        let gate = gate();
        let actor = admin(&permissions);
        let capabilities: Vec<Capability> = names.into_iter().map(Capability::new).collect();

        let any = capabilities.iter().any(|c| gate.can(&actor, c));
        let all = capabilities.iter().all(|c| gate.can(&actor, c));
        prop_assert_eq!(gate.can_any(&actor, &capabilities), any);
        prop_assert_eq!(gate.can_all(&actor, &capabilities), all);
    }

    /// Cached decisions always equal the uncached gate answer.
    #[test]
    fn prop_cache_agrees_with_gate(permissions in permission_map(), name in capability_name()) {
        let gate = Arc::new(gate());
        let cache = AccessDecisionCache::new(Arc::clone(&gate));
        let actor = admin(&permissions);
        let capability = Capability::new(name);

        let direct = gate.can(&actor, &capability);
        prop_assert_eq!(cache.get(&actor, &capability), direct);
        prop_assert_eq!(cache.get(&actor, &capability), direct);
    }
}
