//! In-memory implementation of `AuditTrail`.
//!
//! `InMemoryAuditTrail` keeps all events in a `Vec` behind a `Mutex`, so the
//! gate can record denials from any thread while an observability panel
//! reads `recent()`.
//!
//! Growth is unbounded: a host that keeps a trail for a long-lived process
//! is responsible for exporting and rotating it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::{debug, info};

use tollgate_contracts::{
    denial::{DenialRecord, RecentDenials, TrailId},
    error::TollgateResult,
};
use tollgate_core::traits::AuditTrail;

use crate::{
    chain::{hash_event, verify_chain},
    event::{AuditEvent, AuditLog},
};

// ── Internal mutable state ────────────────────────────────────────────────────

pub(crate) struct InMemoryState {
    /// All events written so far, in append order.
    pub(crate) events: Vec<AuditEvent>,

    /// The `this_hash` of the last written event, or `GENESIS_HASH` before
    /// any event has been written.
    pub(crate) last_hash: String,
}

// ── Public trail ──────────────────────────────────────────────────────────────

/// An in-memory, append-only denial trail backed by a SHA-256 hash chain.
///
/// Cloning shares the same underlying log.
#[derive(Clone)]
pub struct InMemoryAuditTrail {
    trail_id: String,
    pub(crate) state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryAuditTrail {
    /// Create an empty trail with a fresh random id.
    pub fn new() -> Self {
        Self::with_id(TrailId::new().to_string())
    }

    /// Create an empty trail with a host-chosen id.
    pub fn with_id(trail_id: impl Into<String>) -> Self {
        let state = InMemoryState {
            events: Vec::new(),
            last_hash: AuditEvent::GENESIS_HASH.to_string(),
        };
        Self {
            trail_id: trail_id.into(),
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn trail_id(&self) -> &str {
        &self.trail_id
    }

    /// Number of denials recorded so far.
    pub fn len(&self) -> usize {
        self.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Export a sealed `AuditLog` containing every event written so far.
    pub fn export_log(&self) -> AuditLog {
        let state = self.lock();
        let terminal_hash = state
            .events
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        info!(
            trail_id = %self.trail_id,
            event_count = state.events.len(),
            terminal_hash = %terminal_hash,
            "audit log exported"
        );

        AuditLog {
            trail_id: self.trail_id.clone(),
            events: state.events.clone(),
            exported_at: Utc::now(),
            terminal_hash,
        }
    }

    /// Verify that the in-memory chain has not been tampered with.
    pub fn verify_integrity(&self) -> bool {
        verify_chain(&self.lock().events)
    }

    // Poisoning is recovered: `record` mutates state only after hashing has
    // succeeded, so a poisoned log is still a well-formed chain.
    fn lock(&self) -> MutexGuard<'_, InMemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryAuditTrail {
    fn default() -> Self {
        Self::new()
    }
}

// ── AuditTrail impl ───────────────────────────────────────────────────────────

impl AuditTrail for InMemoryAuditTrail {
    /// Append one denial to the hash chain.
    ///
    /// Never fails: a poisoned lock is recovered like any read.
    fn record(&self, denial: &DenialRecord) -> TollgateResult<()> {
        let mut state = self.lock();

        let prev_hash = state.last_hash.clone();
        let sequence = state.events.len() as u64;
        let this_hash = hash_event(&self.trail_id, sequence, denial, &prev_hash);

        debug!(
            trail_id = %self.trail_id,
            sequence,
            actor_id = %denial.actor_id,
            capability = %denial.capability,
            "denial recorded"
        );

        state.last_hash = this_hash.clone();
        state.events.push(AuditEvent {
            sequence,
            trail_id: self.trail_id.clone(),
            record: denial.clone(),
            prev_hash,
            this_hash,
        });

        Ok(())
    }

    /// Snapshot the `limit` most recent denials, newest first.
    fn recent(&self, limit: usize) -> RecentDenials {
        let state = self.lock();
        let start = state.events.len().saturating_sub(limit);
        let records = state.events[start..]
            .iter()
            .map(|e| e.record.clone())
            .collect();
        RecentDenials::from_chronological(records)
    }
}
