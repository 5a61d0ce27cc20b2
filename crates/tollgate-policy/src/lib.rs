//! # tollgate-policy
//!
//! TOML-driven host action policy for TOLLGATE.
//!
//! ## Overview
//!
//! The gate only knows single capabilities and generic `any`/`all`
//! composition. Which capabilities back which dashboard control is a host
//! decision, declared here in a TOML file and validated against the host's
//! capability vocabulary. Unknown actions are denied.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use tollgate_policy::ActionPolicy;
//!
//! let policy = ActionPolicy::from_file(Path::new("policies/admin_dashboard.toml"))?;
//! let flags = policy.ui_flags(&cache, &actor);
//! policy.enforce(&gate, &actor, "delete_content", "delete listing 7")?;
//! ```

pub mod engine;
pub mod rule;

pub use engine::ActionPolicy;
pub use rule::{ActionMode, ActionRule, PolicyConfig, VocabularyConfig};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use tollgate_contracts::{
        actor::Actor,
        denial::{DenialRecord, RecentDenials},
        error::{TollgateError, TollgateResult},
    };
    use tollgate_core::{traits::AuditTrail, AccessDecisionCache, CapabilityGate};

    use crate::{ActionMode, ActionPolicy};

    // ── Helpers ───────────────────────────────────────────────────────────────

    const CONTENT_POLICY: &str = r#"
        [vocabulary]
        capabilities = [
            "content_management_view",
            "content_management_delete",
            "content_management_supervise",
            "user_management_view",
            "user_management_edit",
        ]

        [[actions]]
        id = "delete_content"
        description = "Delete a listing or review"
        mode = "any"
        capabilities = ["content_management_delete", "content_management_supervise"]

        [[actions]]
        id = "edit_users"
        description = "Edit another user's profile"
        mode = "all"
        capabilities = ["user_management_view", "user_management_edit"]

        [[actions]]
        id = "view_content"
        capabilities = ["content_management_view"]
    "#;

    #[derive(Default)]
    struct MockAudit {
        records: Mutex<Vec<DenialRecord>>,
    }

    impl AuditTrail for MockAudit {
        fn record(&self, denial: &DenialRecord) -> TollgateResult<()> {
            self.records.lock().unwrap().push(denial.clone());
            Ok(())
        }

        fn recent(&self, limit: usize) -> RecentDenials {
            let records = self.records.lock().unwrap();
            let start = records.len().saturating_sub(limit);
            RecentDenials::from_chronological(records[start..].to_vec())
        }
    }

    fn gate() -> (CapabilityGate, Arc<MockAudit>) {
        let audit = Arc::new(MockAudit::default());
        (CapabilityGate::with_role_resolver(audit.clone()), audit)
    }

    fn admin(permissions: serde_json::Value) -> Actor {
        Actor::from_session("admin-1", "admin", &permissions).unwrap()
    }

    fn expect_config_error(toml: &str, needle: &str) {
        match ActionPolicy::from_toml_str(toml) {
            Err(TollgateError::ConfigError { reason }) => {
                assert!(reason.contains(needle), "expected '{needle}' in: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 1. parsing ────────────────────────────────────────────────────────────

    #[test]
    fn test_policy_parses_and_defaults_mode_to_all() {
        let policy = ActionPolicy::from_toml_str(CONTENT_POLICY).unwrap();

        assert_eq!(policy.vocabulary().len(), 5);
        assert_eq!(policy.actions().len(), 3);
        assert_eq!(policy.action("delete_content").unwrap().mode, ActionMode::Any);
        assert_eq!(policy.action("view_content").unwrap().mode, ActionMode::All);
        assert!(policy.action("missing").is_none());
    }

    #[test]
    fn test_toml_parse_error() {
        expect_config_error("this is not valid toml ][[[", "failed to parse policy TOML");
    }

    #[test]
    fn test_reserved_vocabulary_entry_rejected() {
        expect_config_error(
            r#"
            [vocabulary]
            capabilities = ["role"]
            "#,
            "reserved",
        );
    }

    #[test]
    fn test_duplicate_action_rejected() {
        expect_config_error(
            r#"
            [vocabulary]
            capabilities = ["a"]

            [[actions]]
            id = "x"
            capabilities = ["a"]

            [[actions]]
            id = "x"
            capabilities = ["a"]
            "#,
            "declared more than once",
        );
    }

    #[test]
    fn test_action_outside_vocabulary_rejected() {
        expect_config_error(
            r#"
            [vocabulary]
            capabilities = ["a"]

            [[actions]]
            id = "x"
            capabilities = ["a", "b"]
            "#,
            "capability 'b'",
        );
    }

    #[test]
    fn test_action_without_capabilities_rejected() {
        expect_config_error(
            r#"
            [vocabulary]
            capabilities = ["a"]

            [[actions]]
            id = "x"
            mode = "all"
            capabilities = []
            "#,
            "lists no capabilities",
        );
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = ActionPolicy::from_file(std::path::Path::new("/nonexistent/policy.toml"));
        assert!(matches!(result, Err(TollgateError::ConfigError { .. })));
    }

    // ── 2. passive checks ─────────────────────────────────────────────────────

    #[test]
    fn test_any_action_granted_by_supervise_alone() {
        let policy = ActionPolicy::from_toml_str(CONTENT_POLICY).unwrap();
        let (gate, _) = gate();
        let moderator = admin(json!({ "content_management_supervise": true }));

        assert!(policy.permits(&gate, &moderator, "delete_content"));
        assert!(!policy.permits(&gate, &moderator, "view_content"));
    }

    #[test]
    fn test_all_action_requires_every_capability() {
        let policy = ActionPolicy::from_toml_str(CONTENT_POLICY).unwrap();
        let (gate, _) = gate();

        let viewer = admin(json!({ "user_management_view": true }));
        let editor = admin(json!({ "user_management_view": true, "user_management_edit": true }));

        assert!(!policy.permits(&gate, &viewer, "edit_users"));
        assert!(policy.permits(&gate, &editor, "edit_users"));
    }

    #[test]
    fn test_unknown_action_denied_even_for_super_admin() {
        let policy = ActionPolicy::from_toml_str(CONTENT_POLICY).unwrap();
        let (gate, _) = gate();
        let root = Actor::from_session("root", "super_admin", &json!({})).unwrap();

        assert!(!policy.permits(&gate, &root, "launch_rockets"));
        assert!(matches!(
            policy.enforce(&gate, &root, "launch_rockets", "test"),
            Err(TollgateError::UnknownAction { .. })
        ));
    }

    // ── 3. enforcement ────────────────────────────────────────────────────────

    #[test]
    fn test_enforce_records_denial() {
        let policy = ActionPolicy::from_toml_str(CONTENT_POLICY).unwrap();
        let (gate, audit) = gate();
        let viewer = admin(json!({ "content_management_view": true }));

        let result = policy.enforce(&gate, &viewer, "delete_content", "delete listing 7");
        assert!(matches!(result, Err(TollgateError::PermissionDenied { .. })));

        let records = audit.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].capability.as_str(), "content_management_delete");
        assert_eq!(records[0].context, "delete listing 7");
    }

    #[test]
    fn test_enforce_passes_for_super_admin_with_empty_payload() {
        let policy = ActionPolicy::from_toml_str(CONTENT_POLICY).unwrap();
        let (gate, audit) = gate();
        let root = Actor::from_session("root", "super_admin", &json!({})).unwrap();

        for action in ["delete_content", "edit_users", "view_content"] {
            policy.enforce(&gate, &root, action, "bulk").unwrap();
        }
        assert!(audit.records.lock().unwrap().is_empty());
    }

    // ── 4. ui flags ───────────────────────────────────────────────────────────

    #[test]
    fn test_ui_flags_cover_every_action_and_use_the_cache() {
        let policy = ActionPolicy::from_toml_str(CONTENT_POLICY).unwrap();
        let (gate, _) = gate();
        let cache = AccessDecisionCache::new(Arc::new(gate));
        let moderator = admin(json!({
            "content_management_view": true,
            "content_management_supervise": true
        }));

        let flags = policy.ui_flags(&cache, &moderator);

        assert_eq!(flags.len(), 3);
        assert!(flags["delete_content"]);
        assert!(flags["view_content"]);
        assert!(!flags["edit_users"]);
        assert!(!cache.is_empty());

        // A second render yields the same flags.
        assert_eq!(policy.ui_flags(&cache, &moderator), flags);
    }
}
