//! Audit event and log types.
//!
//! `AuditEvent` is a single entry in the hash chain: it wraps a
//! `DenialRecord` with sequence numbering and the SHA-256 hashes that make
//! tampering detectable. `AuditLog` is the sealed export of a trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tollgate_contracts::denial::DenialRecord;

/// A single entry in the SHA-256 hash chain of one trail.
///
/// Each event commits to the previous event via `prev_hash`. Modifying any
/// field, including those of the embedded `record`, invalidates `this_hash`
/// and every later `prev_hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Position in the chain, starting at 0.
    pub sequence: u64,

    /// The trail this event belongs to.
    pub trail_id: String,

    /// The denied attempt.
    pub record: DenialRecord,

    /// SHA-256 hash (hex) of the previous event, or `GENESIS_HASH` for the
    /// first event.
    pub prev_hash: String,

    /// SHA-256 hash (hex) over (trail_id, sequence, prev_hash, canonical
    /// JSON of record).
    pub this_hash: String,
}

impl AuditEvent {
    /// The `prev_hash` of the first event in every chain.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A sealed export of an audit trail.
///
/// `terminal_hash` is the `this_hash` of the last event and commits to the
/// whole log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub trail_id: String,

    /// All events in chain order (sequence 0 first).
    pub events: Vec<AuditEvent>,

    /// Wall-clock time (UTC) the log was exported.
    pub exported_at: DateTime<Utc>,

    /// The `this_hash` of the last event. Empty string if the log is empty.
    pub terminal_hash: String,
}
