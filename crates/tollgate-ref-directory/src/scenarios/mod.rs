//! Supplier directory admin demo scenarios.
//!
//! Each scenario is a self-contained module that wires up real TOLLGATE
//! components (gate, decision cache, audit trail, action policy) with mock
//! session payloads and demonstrates a distinct authorization pattern.

pub mod content_moderation;
pub mod permission_refresh;
pub mod super_admin_override;
