//! Session-scoped memoization of access decisions.
//!
//! Decisions are keyed on `(actor id, snapshot version, capability)`. The
//! cache cannot observe a permission refresh on its own, so the host calls
//! [`AccessDecisionCache::invalidate`] whenever it swaps in a new permission
//! set, and again at logout to evict the session.
//!
//! Growth is bounded by the number of distinct capabilities queried per
//! session (tens, not thousands); there is no TTL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use tollgate_contracts::{
    actor::{Actor, ActorId},
    capability::Capability,
    decision::AccessDecision,
};

use crate::gate::CapabilityGate;

/// Cached decisions for one actor at one snapshot version.
#[derive(Debug, Default)]
struct ActorEntry {
    snapshot_version: u64,
    decisions: HashMap<Capability, bool>,
}

/// Memoizes [`CapabilityGate::can`] per actor snapshot.
///
/// Safe to share across threads: all state sits behind one mutex, and
/// `invalidate` has released it before returning, so any later `get` sees
/// the eviction.
pub struct AccessDecisionCache {
    gate: Arc<CapabilityGate>,
    entries: Mutex<HashMap<ActorId, ActorEntry>>,
}

impl AccessDecisionCache {
    pub fn new(gate: Arc<CapabilityGate>) -> Self {
        Self {
            gate,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the decision for `capability`, evaluating it on first use.
    ///
    /// Cached entries recorded under a different snapshot version are
    /// discarded before evaluating.
    pub fn get(&self, actor: &Actor, capability: &Capability) -> bool {
        let mut entries = self.lock();
        let entry = entries.entry(actor.id.clone()).or_default();

        if entry.snapshot_version != actor.snapshot_version {
            debug!(
                actor_id = %actor.id,
                cached_version = entry.snapshot_version,
                snapshot_version = actor.snapshot_version,
                "snapshot changed, dropping cached decisions"
            );
            entry.decisions.clear();
            entry.snapshot_version = actor.snapshot_version;
        }

        if let Some(granted) = entry.decisions.get(capability) {
            return *granted;
        }

        debug!(actor_id = %actor.id, capability = %capability, "decision cache miss");
        let granted = self.gate.can(actor, capability);
        entry.decisions.insert(capability.clone(), granted);
        granted
    }

    /// Drop every cached decision for `actor_id`.
    pub fn invalidate(&self, actor_id: &ActorId) {
        let removed = self.lock().remove(actor_id);
        info!(
            actor_id = %actor_id,
            dropped = removed.map(|e| e.decisions.len()).unwrap_or(0),
            "access decisions invalidated"
        );
    }

    /// Drop every cached decision for every actor.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// The decisions currently cached for `actor_id`, sorted by capability.
    pub fn decisions(&self, actor_id: &ActorId) -> Vec<AccessDecision> {
        let entries = self.lock();
        let Some(entry) = entries.get(actor_id) else {
            return Vec::new();
        };
        let mut decisions: Vec<AccessDecision> = entry
            .decisions
            .iter()
            .map(|(capability, granted)| AccessDecision {
                actor_id: actor_id.clone(),
                snapshot_version: entry.snapshot_version,
                capability: capability.clone(),
                granted: *granted,
            })
            .collect();
        decisions.sort_by(|a, b| a.capability.cmp(&b.capability));
        decisions
    }

    /// Total number of cached decisions across all actors.
    pub fn len(&self) -> usize {
        self.lock().values().map(|e| e.decisions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Poisoning is recovered: a lost insert is recomputed on the next get.
    fn lock(&self) -> MutexGuard<'_, HashMap<ActorId, ActorEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use serde_json::json;

    use tollgate_contracts::{
        actor::{Actor, Role},
        capability::Capability,
        denial::{DenialRecord, RecentDenials},
        error::TollgateResult,
        permission::PermissionSet,
    };

    use crate::{
        gate::CapabilityGate,
        resolver::RoleResolver,
        traits::{AuditTrail, CapabilityResolver},
    };

    use super::AccessDecisionCache;

    struct NullAudit;

    impl AuditTrail for NullAudit {
        fn record(&self, _denial: &DenialRecord) -> TollgateResult<()> {
            Ok(())
        }

        fn recent(&self, _limit: usize) -> RecentDenials {
            RecentDenials::default()
        }
    }

    struct CountingResolver {
        calls: Arc<AtomicUsize>,
    }

    impl CapabilityResolver for CountingResolver {
        fn resolve(&self, role: Role, permissions: &PermissionSet, capability: &Capability) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            RoleResolver.resolve(role, permissions, capability)
        }
    }

    fn counting_cache() -> (AccessDecisionCache, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = CapabilityGate::new(
            Box::new(CountingResolver { calls: calls.clone() }),
            Arc::new(NullAudit),
        );
        (AccessDecisionCache::new(Arc::new(gate)), calls)
    }

    fn cap(name: &str) -> Capability {
        Capability::new(name)
    }

    #[test]
    fn repeated_get_is_idempotent_and_computed_once() {
        let (cache, calls) = counting_cache();
        let admin = Actor::from_session("u-1", "admin", &json!({ "user_management_edit": true })).unwrap();

        let first = cache.get(&admin, &cap("user_management_edit"));
        let second = cache.get(&admin, &cap("user_management_edit"));

        assert!(first);
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1, "second lookup must be served from cache");
    }

    #[test]
    fn invalidate_round_trip_reflects_new_permissions() {
        let (cache, calls) = counting_cache();
        let before = Actor::from_session("u-1", "admin", &json!({ "content_management_delete": true })).unwrap();
        assert!(cache.get(&before, &cap("content_management_delete")));

        // The host swaps the permission set wholesale and invalidates.
        let after = before.with_permissions(PermissionSet::from_value(&json!({
            "content_management_delete": false
        })));
        cache.invalidate(&after.id);

        assert!(!cache.get(&after, &cap("content_management_delete")));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    /// A host that forgets to bump the version still gets fresh decisions
    /// once it invalidates.
    #[test]
    fn invalidate_drops_entries_even_without_version_bump() {
        let (cache, _) = counting_cache();
        let stale = Actor::from_session("u-1", "admin", &json!({ "a": true })).unwrap();
        assert!(cache.get(&stale, &cap("a")));

        let rebuilt = Actor::from_session("u-1", "admin", &json!({ "a": false })).unwrap();
        assert_eq!(rebuilt.snapshot_version, stale.snapshot_version);

        // Without invalidation the stale decision is served.
        assert!(cache.get(&rebuilt, &cap("a")));

        cache.invalidate(&rebuilt.id);
        assert!(!cache.get(&rebuilt, &cap("a")));
    }

    #[test]
    fn version_change_discards_previous_snapshot_entries() {
        let (cache, calls) = counting_cache();
        let v0 = Actor::from_session("u-1", "admin", &json!({ "a": true })).unwrap();
        cache.get(&v0, &cap("a"));

        let v1 = v0.with_permissions(PermissionSet::empty());
        assert!(!cache.get(&v1, &cap("a")));
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let decisions = cache.decisions(&v1.id);
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].snapshot_version, 1);
        assert!(!decisions[0].granted);
    }

    #[test]
    fn invalidate_only_touches_the_named_actor() {
        let (cache, _) = counting_cache();
        let alice = Actor::from_session("alice", "admin", &json!({ "a": true })).unwrap();
        let bob = Actor::from_session("bob", "super_admin", &json!({})).unwrap();

        cache.get(&alice, &cap("a"));
        cache.get(&alice, &cap("b"));
        cache.get(&bob, &cap("a"));
        assert_eq!(cache.len(), 3);

        cache.invalidate(&alice.id);
        assert_eq!(cache.len(), 1);
        assert!(cache.decisions(&alice.id).is_empty());
        assert_eq!(cache.decisions(&bob.id).len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_is_shareable_across_threads() {
        let (cache, calls) = counting_cache();
        let cache = Arc::new(cache);
        let admin = Arc::new(Actor::from_session("u-1", "admin", &json!({ "a": true })).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let admin = Arc::clone(&admin);
                std::thread::spawn(move || cache.get(&admin, &Capability::new("a")))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        // Evaluation happens under the lock, so only the first thread computes.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
