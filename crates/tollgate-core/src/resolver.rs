//! The role-first resolution rule.
//!
//! `super_admin` is granted every capability before the permission set is
//! consulted, so an empty or stale payload can never lock a super admin out.
//! Admins get exactly what their permission set says, with absent keys
//! denied.

use tollgate_contracts::{actor::Role, capability::Capability, permission::PermissionSet};

use crate::traits::CapabilityResolver;

/// The default [`CapabilityResolver`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleResolver;

impl RoleResolver {
    /// True iff `role` bypasses capability checks.
    pub fn is_super_role(role: Role) -> bool {
        role == Role::SuperAdmin
    }
}

impl CapabilityResolver for RoleResolver {
    fn resolve(&self, role: Role, permissions: &PermissionSet, capability: &Capability) -> bool {
        // Role override must come first: a super admin's permission set may
        // legitimately be empty or out of date.
        if Self::is_super_role(role) {
            return true;
        }
        permissions.get(capability)
    }
}
