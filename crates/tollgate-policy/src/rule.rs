//! Action rule types and configuration schema.
//!
//! A `PolicyConfig` is deserialized from TOML. It declares the host's
//! capability vocabulary and the named UI actions built from it. Each action
//! combines its capabilities with `any` (OR) or `all` (AND) semantics, which
//! is how hosts express rules like "delete content = delete OR supervise".

use serde::{Deserialize, Serialize};

use tollgate_contracts::capability::Capability;

/// How an action combines its capabilities.
///
/// Example in TOML:
/// ```toml
/// mode = "any"
/// mode = "all"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionMode {
    /// Granted when at least one capability is granted.
    Any,
    /// Granted when every capability is granted.
    All,
}

/// A single named action loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRule {
    /// Stable identifier the host queries by, e.g. `"delete_content"`.
    pub id: String,

    /// Human-readable explanation of the control this action backs.
    #[serde(default)]
    pub description: String,

    /// Combination semantics. Defaults to `all`.
    #[serde(default = "default_mode")]
    pub mode: ActionMode,

    /// The capabilities combined by `mode`. Every entry must appear in the
    /// vocabulary.
    pub capabilities: Vec<String>,
}

fn default_mode() -> ActionMode {
    ActionMode::All
}

impl ActionRule {
    /// The rule's capabilities as typed values, in declaration order.
    pub fn capability_list(&self) -> Vec<Capability> {
        self.capabilities.iter().map(|c| Capability::new(c.as_str())).collect()
    }
}

/// The `[vocabulary]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Every capability name the host issues.
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// The top-level structure deserialized from a TOML policy file.
///
/// Example:
/// ```toml
/// [vocabulary]
/// capabilities = ["content_management_delete", "content_management_supervise"]
///
/// [[actions]]
/// id = "delete_content"
/// description = "Delete a listing or review"
/// mode = "any"
/// capabilities = ["content_management_delete", "content_management_supervise"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub vocabulary: VocabularyConfig,

    /// Declared actions. Ids are unique.
    #[serde(default)]
    pub actions: Vec<ActionRule>,
}
