//! The per-actor permission bag.
//!
//! Backends deliver permissions as a loose JSON object. `PermissionSet` turns
//! that object into a typed, immutable value with a total lookup: a
//! capability that is absent from the set is denied, never granted.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capability::Capability;

/// Immutable mapping from capability to granted flag for one actor snapshot.
///
/// Never mutated after construction. A permission refresh builds a new set
/// (see [`PermissionSet::merge`] for partial updates) and the host swaps it in
/// wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "BTreeMap<Capability, bool>")]
pub struct PermissionSet {
    inner: HashMap<Capability, bool>,
}

impl PermissionSet {
    /// An empty set: every lookup returns `false`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a raw host payload.
    ///
    /// Never fails. Anything other than a JSON object yields an empty set.
    /// Values are coerced by truthiness: `null` and `false` are denied,
    /// numbers are granted when non-zero, strings when non-empty, and arrays
    /// and objects are always granted. Unknown keys are kept.
    pub fn from_value(raw: &Value) -> Self {
        let Value::Object(map) = raw else {
            return Self::empty();
        };
        map.iter()
            .map(|(key, value)| (Capability::new(key.as_str()), truthy(value)))
            .collect()
    }

    /// Look up a capability. Absent keys are `false`.
    pub fn get(&self, capability: &Capability) -> bool {
        self.inner.get(capability).copied().unwrap_or(false)
    }

    /// Return a new set in which every key of `other` overrides `self`.
    pub fn merge(&self, other: &PermissionSet) -> PermissionSet {
        let mut inner = self.inner.clone();
        inner.extend(other.inner.iter().map(|(k, v)| (k.clone(), *v)));
        Self { inner }
    }

    /// Iterate the capabilities whose flag is `true`.
    pub fn granted(&self) -> impl Iterator<Item = &Capability> {
        self.inner.iter().filter(|(_, v)| **v).map(|(k, _)| k)
    }

    /// Number of keys present, granted or not.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<Value> for PermissionSet {
    fn from(raw: Value) -> Self {
        Self::from_value(&raw)
    }
}

impl From<HashMap<String, bool>> for PermissionSet {
    fn from(raw: HashMap<String, bool>) -> Self {
        raw.into_iter().map(|(k, v)| (Capability(k), v)).collect()
    }
}

impl From<PermissionSet> for BTreeMap<Capability, bool> {
    fn from(set: PermissionSet) -> Self {
        set.inner.into_iter().collect()
    }
}

impl FromIterator<(Capability, bool)> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = (Capability, bool)>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
