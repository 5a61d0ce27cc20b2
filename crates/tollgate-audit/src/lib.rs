//! # tollgate-audit
//!
//! Append-only, SHA-256 hash-chained denial trail for TOLLGATE.
//!
//! ## Overview
//!
//! Every denied mutating action the gate sees is wrapped in an `AuditEvent`
//! that links to the previous event via its SHA-256 hash. Tampering with any
//! event breaks the chain and is detected by `verify_chain`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tollgate_audit::InMemoryAuditTrail;
//! use tollgate_core::{traits::AuditTrail, CapabilityGate};
//!
//! let trail = Arc::new(InMemoryAuditTrail::new());
//! let gate = CapabilityGate::with_role_resolver(trail.clone());
//!
//! for denial in &trail.recent(20) {
//!     println!("{} lacked {}", denial.actor_id, denial.capability);
//! }
//! ```

pub mod chain;
pub mod event;
pub mod memory;

pub use chain::{hash_event, verify_chain};
pub use event::{AuditEvent, AuditLog};
pub use memory::InMemoryAuditTrail;

// ── Tests ─────────────────────────────────────────────────────────────────────
