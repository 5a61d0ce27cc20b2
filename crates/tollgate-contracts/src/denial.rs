//! Denial records and read-only views over the audit trail.
//!
//! A `DenialRecord` is written whenever an actor attempts a mutating action
//! it is not entitled to. Passive visibility checks never produce one.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{actor::ActorId, capability::Capability};

/// An immutable record of one denied attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenialRecord {
    /// The actor that attempted the action.
    pub actor_id: ActorId,
    /// The capability the actor lacked.
    pub capability: Capability,
    /// Wall-clock time the denial was recorded (UTC).
    pub timestamp: DateTime<Utc>,
    /// Host-supplied description of the attempted action,
    /// e.g. "delete user 42".
    pub context: String,
}

impl DenialRecord {
    /// Build a record stamped with the current time.
    pub fn now(actor_id: ActorId, capability: Capability, context: impl Into<String>) -> Self {
        Self {
            actor_id,
            capability,
            timestamp: Utc::now(),
            context: context.into(),
        }
    }
}

/// A snapshot of the most recent denials, newest first.
///
/// Iterating does not consume anything: the snapshot can be walked any
/// number of times and always yields the same records, regardless of what
/// the trail has appended since.
#[derive(Debug, Clone, Default)]
pub struct RecentDenials {
    // Stored oldest-first; iteration reverses.
    records: Arc<[DenialRecord]>,
}

impl RecentDenials {
    /// Wrap records given in append (oldest-first) order.
    pub fn from_chronological(records: Vec<DenialRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DenialRecord> + ExactSizeIterator {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&DenialRecord> {
        self.records.last()
    }
}

impl<'a> IntoIterator for &'a RecentDenials {
    type Item = &'a DenialRecord;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, DenialRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter().rev()
    }
}

/// Unique identifier for one audit trail instance.
///
/// Hosts usually create one trail per process or per admin session; the id
/// is folded into every hash in the trail's chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrailId(pub uuid::Uuid);

impl TrailId {
    /// Create a new, unique trail ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for TrailId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TrailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
