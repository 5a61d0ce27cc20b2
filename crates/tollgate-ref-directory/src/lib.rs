//! # tollgate-ref-directory
//!
//! Supplier directory admin dashboard wired to the TOLLGATE authorization
//! model.
//!
//! Demonstrates three scenarios using mock session payloads:
//!
//! 1. **Super-Admin Override**: super admins with empty, stale, or missing
//!    permission payloads are never blocked; non-admin accounts never reach
//!    the gate.
//! 2. **Content Moderation**: `supervise` satisfies OR-grouped content
//!    actions; denied mutations are audited and read back.
//! 3. **Permission Refresh**: decision caching, wholesale permission
//!    replacement with invalidation, and logout eviction.
//!
//! All data is hardcoded and fictional. No external API calls are made.

pub mod host;
pub mod mock_data;
pub mod scenarios;
pub mod vocabulary;

pub use host::AdminHost;

// ── Tests ─────────────────────────────────────────────────────────────────────
