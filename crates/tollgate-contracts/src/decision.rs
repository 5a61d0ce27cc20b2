//! Memoized access decisions.

use serde::{Deserialize, Serialize};

use crate::{actor::ActorId, capability::Capability};

/// The cached outcome of evaluating one capability for one actor snapshot.
///
/// Valid only while the actor's `snapshot_version` is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    pub actor_id: ActorId,
    pub snapshot_version: u64,
    pub capability: Capability,
    pub granted: bool,
}
