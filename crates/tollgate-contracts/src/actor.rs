//! Actor identity, roles, and permission snapshots.
//!
//! An `Actor` is one authenticated admin session as the host sees it. The
//! host owns it; the gate only reads it per call.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    error::{TollgateError, TollgateResult},
    permission::PermissionSet,
};

/// Stable identifier for an authenticated user, as issued by the host's
/// session layer. Appears in cache keys and denial records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The roles that may reach the capability gate.
///
/// Other host roles (suppliers, anonymous visitors) are rejected when parsed
/// and must never be turned into an `Actor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = TollgateError;

    fn from_str(s: &str) -> TollgateResult<Self> {
        match s {
            "admin" => Ok(Role::Admin),
            "super_admin" => Ok(Role::SuperAdmin),
            other => Err(TollgateError::UnsupportedRole {
                role: other.to_string(),
            }),
        }
    }
}

/// One authenticated session: identity, role, and the current permission
/// snapshot.
///
/// The permission set sits behind an `Arc` so that replacing it is a pointer
/// swap. Every replacement yields a new `Actor` with a higher
/// `snapshot_version`, which is what cached decisions are keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub role: Role,
    pub permissions: Arc<PermissionSet>,
    /// Monotonic counter, bumped on every permission replacement.
    #[serde(default)]
    pub snapshot_version: u64,
}

impl Actor {
    /// Create the first snapshot of a session (version 0).
    pub fn new(id: impl Into<String>, role: Role, permissions: PermissionSet) -> Self {
        Self {
            id: ActorId::new(id),
            role,
            permissions: Arc::new(permissions),
            snapshot_version: 0,
        }
    }

    /// Hydrate an actor from the role string and raw permission payload a
    /// backend returns.
    ///
    /// Fails only when the role is outside the admin roles; the payload itself
    /// is accepted in any shape (see [`PermissionSet::from_value`]).
    pub fn from_session(
        id: impl Into<String>,
        role: &str,
        permissions: &serde_json::Value,
    ) -> TollgateResult<Self> {
        let role = role.parse::<Role>()?;
        Ok(Self::new(id, role, PermissionSet::from_value(permissions)))
    }

    /// Return the next snapshot of this session with `permissions` swapped in.
    pub fn with_permissions(&self, permissions: PermissionSet) -> Self {
        Self {
            id: self.id.clone(),
            role: self.role,
            permissions: Arc::new(permissions),
            snapshot_version: self.snapshot_version.saturating_add(1),
        }
    }
}
