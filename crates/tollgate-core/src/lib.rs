//! # tollgate-core
//!
//! The capability-resolution runtime of the TOLLGATE authorization model.
//!
//! This crate provides:
//! - The two trait seams (`CapabilityResolver`, `AuditTrail`)
//! - `RoleResolver`, which applies the super-admin override before any
//!   permission lookup
//! - `CapabilityGate`, the passive and mutating access checks
//! - `AccessDecisionCache`, per-snapshot memoization of gate decisions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tollgate_core::{AccessDecisionCache, CapabilityGate};
//!
//! let gate = Arc::new(CapabilityGate::with_role_resolver(audit));
//! if gate.can(&actor, &Capability::new("user_management_edit")) { /* render */ }
//! gate.assert_can(&actor, &Capability::new("user_management_delete"), "delete user 42")?;
//! ```

pub mod cache;
pub mod gate;
pub mod resolver;
pub mod traits;

pub use cache::AccessDecisionCache;
pub use gate::CapabilityGate;
pub use resolver::RoleResolver;
