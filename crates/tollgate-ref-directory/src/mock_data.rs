//! Simulated backend session payloads for the supplier directory admin.
//!
//! All data in this module is hardcoded and fictional. Each payload has the
//! shape the dashboard's `/auth/me` endpoint returns: an id, a role string,
//! and a loose permission object. Some payloads are deliberately broken the
//! ways real ones were: empty, `null`, stale, or carrying non-boolean flags.

use serde_json::{json, Value};

// ── Session payloads (mock) ───────────────────────────────────────────────────

/// Return the session payload for a known user id.
///
/// Known ids:
/// - `root-01`     super admin, empty permission object
/// - `root-02`     super admin, stale payload with explicit `false` flags
/// - `root-03`     super admin, permissions failed to load (`null`)
/// - `mod-11`      admin, content moderator (view + supervise)
/// - `ops-21`      admin, user operations (view + edit) and analytics
/// - `intern-31`   admin, malformed flags (strings and numbers)
/// - `supplier-91` supplier account, must be rejected before the gate
///
/// Any other id returns an anonymous payload.
pub fn get_session(user_id: &str) -> Value {
    match user_id {
        "root-01" => json!({
            "id": "root-01",
            "role": "super_admin",
            "permissions": {}
        }),
        "root-02" => json!({
            "id": "root-02",
            "role": "super_admin",
            "permissions": {
                "user_management_view": false,
                "user_management_delete": false,
                "system_settings_edit": false
            }
        }),
        "root-03" => json!({
            "id": "root-03",
            "role": "super_admin",
            "permissions": null
        }),
        "mod-11" => json!({
            "id": "mod-11",
            "role": "admin",
            "permissions": {
                "content_management_view": true,
                "content_management_supervise": true,
                "communications_view": true,
                "review_management_view": true
            }
        }),
        "ops-21" => json!({
            "id": "ops-21",
            "role": "admin",
            "permissions": {
                "user_management_view": true,
                "user_management_edit": true,
                "user_management_delete": false,
                "analytics_view": true
            }
        }),
        "intern-31" => json!({
            "id": "intern-31",
            "role": "admin",
            "permissions": {
                "user_management_view": "yes",
                "analytics_view": 0,
                "content_management_view": 1,
                "content_management_delete": ""
            }
        }),
        "supplier-91" => json!({
            "id": "supplier-91",
            "role": "supplier",
            "permissions": {
                "content_management_edit": true
            }
        }),
        other => json!({
            "id": other,
            "role": "anonymous",
            "permissions": null
        }),
    }
}

// ── Permission refreshes (mock) ───────────────────────────────────────────────

/// Return the permission object a refresh fetch yields for `user_id`.
///
/// `ops-21` is promoted to full user management and loses analytics;
/// `mod-11` is demoted to view-only. Everyone else gets their original
/// permissions back.
pub fn get_refreshed_permissions(user_id: &str) -> Value {
    match user_id {
        "ops-21" => json!({
            "user_management_view": true,
            "user_management_full": true,
            "analytics_view": false
        }),
        "mod-11" => json!({
            "content_management_view": true,
            "content_management_supervise": false
        }),
        other => get_session(other)["permissions"].clone(),
    }
}
