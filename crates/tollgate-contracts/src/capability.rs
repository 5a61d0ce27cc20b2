//! Capability names and the host vocabulary they are drawn from.
//!
//! A capability is an opaque string such as `"user_management_view"` or
//! `"content_management_delete"`. The gate treats capabilities it has never
//! seen as ungranted, so the vocabulary is only needed where a host wants to
//! validate its own declarations (policy files, reference data).

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TollgateError, TollgateResult};

/// Names that can never be used as a capability.
///
/// `role` and `id` collide with the actor fields that travel alongside the
/// permission bag in host payloads; `*` is the wildcard in policy files.
pub const RESERVED_NAMES: &[&str] = &["role", "id", "*"];

/// An opaque capability token.
///
/// Construction is unchecked so that unknown keys from a backend payload are
/// retained as-is. Use [`CapabilityVocabulary`] to enforce naming rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(pub String);

impl Capability {
    /// Construct a capability from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the naming rules a vocabulary entry must satisfy.
    ///
    /// Names are non-empty, not reserved, and use only ASCII lowercase
    /// letters, digits, `_`, `.`, `:` and `-`.
    pub fn validate(&self) -> TollgateResult<()> {
        let name = self.as_str();
        if name.is_empty() {
            return Err(TollgateError::InvalidCapability {
                name: name.to_string(),
                reason: "capability name is empty".to_string(),
            });
        }
        if RESERVED_NAMES.contains(&name) {
            return Err(TollgateError::InvalidCapability {
                name: name.to_string(),
                reason: "capability name is reserved".to_string(),
            });
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || "_.:-".contains(*c)))
        {
            return Err(TollgateError::InvalidCapability {
                name: name.to_string(),
                reason: format!("unexpected character '{}'", bad),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Capability {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Capability {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A closed, host-defined set of capability names.
///
/// Every entry has passed [`Capability::validate`] and appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapabilityVocabulary {
    inner: BTreeSet<Capability>,
}

impl CapabilityVocabulary {
    /// Build a vocabulary from a list of names, rejecting the first invalid
    /// or duplicated entry.
    pub fn from_names<I, S>(names: I) -> TollgateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::default();
        for name in names {
            vocabulary.register(Capability::new(name))?;
        }
        Ok(vocabulary)
    }

    /// Add a capability to the vocabulary.
    pub fn register(&mut self, capability: Capability) -> TollgateResult<()> {
        capability.validate()?;
        if self.inner.contains(&capability) {
            return Err(TollgateError::InvalidCapability {
                name: capability.0,
                reason: "capability is already registered".to_string(),
            });
        }
        self.inner.insert(capability);
        Ok(())
    }

    pub fn contains(&self, capability: &Capability) -> bool {
        self.inner.contains(capability)
    }

    /// Iterate the vocabulary in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
