//! Host action policy.
//!
//! `ActionPolicy` loads a `PolicyConfig` from TOML, validates it against its
//! own vocabulary, and answers per-action questions through a
//! `CapabilityGate` (passive and mutating) or an `AccessDecisionCache` (bulk
//! UI flags).
//!
//! Validation rejects, in order:
//!
//! 1. vocabulary entries that are reserved, malformed, or duplicated
//! 2. actions with an empty or duplicate id
//! 3. actions with no capabilities
//! 4. actions naming a capability outside the vocabulary
//!
//! Unknown action ids are denied by default.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::{debug, warn};

use tollgate_contracts::{
    actor::Actor,
    capability::{Capability, CapabilityVocabulary},
    error::{TollgateError, TollgateResult},
};
use tollgate_core::{AccessDecisionCache, CapabilityGate};

use crate::rule::{ActionMode, ActionRule, PolicyConfig};

/// A validated set of named actions over a closed capability vocabulary.
///
/// ```rust,ignore
/// use tollgate_policy::ActionPolicy;
///
/// let policy = ActionPolicy::from_file(Path::new("policies/admin_dashboard.toml"))?;
/// if policy.permits(&gate, &actor, "delete_content") { /* show the button */ }
/// ```
#[derive(Debug)]
pub struct ActionPolicy {
    vocabulary: CapabilityVocabulary,
    actions: Vec<ActionRule>,
    index: HashMap<String, usize>,
}

impl ActionPolicy {
    /// Parse `s` as TOML and build a validated `ActionPolicy`.
    ///
    /// Returns `TollgateError::ConfigError` if the TOML is malformed or the
    /// declarations are inconsistent.
    pub fn from_toml_str(s: &str) -> TollgateResult<Self> {
        let config: PolicyConfig = toml::from_str(s).map_err(|e| TollgateError::ConfigError {
            reason: format!("failed to parse policy TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML action policy.
    pub fn from_file(path: &Path) -> TollgateResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TollgateError::ConfigError {
            reason: format!("failed to read policy file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validate an already-deserialized configuration.
    pub fn from_config(config: PolicyConfig) -> TollgateResult<Self> {
        let vocabulary = CapabilityVocabulary::from_names(config.vocabulary.capabilities)
            .map_err(|e| TollgateError::ConfigError {
                reason: format!("invalid vocabulary: {}", e),
            })?;

        let mut index = HashMap::with_capacity(config.actions.len());
        for (position, action) in config.actions.iter().enumerate() {
            if action.id.is_empty() {
                return Err(TollgateError::ConfigError {
                    reason: format!("action #{} has an empty id", position),
                });
            }
            if index.insert(action.id.clone(), position).is_some() {
                return Err(TollgateError::ConfigError {
                    reason: format!("action '{}' is declared more than once", action.id),
                });
            }
            if action.capabilities.is_empty() {
                return Err(TollgateError::ConfigError {
                    reason: format!("action '{}' lists no capabilities", action.id),
                });
            }
            if let Some(unknown) = action
                .capabilities
                .iter()
                .find(|c| !vocabulary.contains(&Capability::new(c.as_str())))
            {
                return Err(TollgateError::ConfigError {
                    reason: format!(
                        "action '{}' references capability '{}' which is not in the vocabulary",
                        action.id, unknown
                    ),
                });
            }
        }

        debug!(
            capabilities = vocabulary.len(),
            actions = config.actions.len(),
            "action policy loaded"
        );

        Ok(Self {
            vocabulary,
            actions: config.actions,
            index,
        })
    }

    pub fn vocabulary(&self) -> &CapabilityVocabulary {
        &self.vocabulary
    }

    /// Look up a declared action.
    pub fn action(&self, id: &str) -> Option<&ActionRule> {
        self.index.get(id).map(|&i| &self.actions[i])
    }

    /// All declared actions, in declaration order.
    pub fn actions(&self) -> &[ActionRule] {
        &self.actions
    }

    /// Passive check for a named action. Unknown ids are denied.
    pub fn permits(&self, gate: &CapabilityGate, actor: &Actor, action_id: &str) -> bool {
        let Some(action) = self.action(action_id) else {
            warn!(action = %action_id, actor_id = %actor.id, "unknown action; denying by default");
            return false;
        };
        let capabilities = action.capability_list();
        match action.mode {
            ActionMode::Any => gate.can_any(actor, &capabilities),
            ActionMode::All => gate.can_all(actor, &capabilities),
        }
    }

    /// Mutating-action check for a named action. Denials are audited by the
    /// gate.
    ///
    /// # Errors
    ///
    /// `UnknownAction` for an undeclared id, otherwise whatever
    /// `assert_any`/`assert_all` returns.
    pub fn enforce(
        &self,
        gate: &CapabilityGate,
        actor: &Actor,
        action_id: &str,
        context: &str,
    ) -> TollgateResult<()> {
        let action = self.action(action_id).ok_or_else(|| TollgateError::UnknownAction {
            action: action_id.to_string(),
        })?;
        let capabilities = action.capability_list();
        match action.mode {
            ActionMode::Any => gate.assert_any(actor, &capabilities, context),
            ActionMode::All => gate.assert_all(actor, &capabilities, context),
        }
    }

    /// Evaluate every declared action for `actor` through `cache`.
    ///
    /// Produces the UI-level booleans a dashboard renders from
    /// (`edit_users`, `delete_content`, ...). Individual capabilities are
    /// served from the cache, so repeated renders do not re-resolve them.
    pub fn ui_flags(&self, cache: &AccessDecisionCache, actor: &Actor) -> BTreeMap<String, bool> {
        self.actions
            .iter()
            .map(|action| {
                let mut capabilities = action.capabilities.iter().map(|c| Capability::new(c.as_str()));
                let granted = match action.mode {
                    ActionMode::Any => capabilities.any(|c| cache.get(actor, &c)),
                    ActionMode::All => capabilities.all(|c| cache.get(actor, &c)),
                };
                (action.id.clone(), granted)
            })
            .collect()
    }
}
