//! # tollgate-contracts
//!
//! Shared types and contracts for the TOLLGATE authorization model.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod actor;
pub mod capability;
pub mod decision;
pub mod denial;
pub mod error;
pub mod permission;
