//! Capability names issued by the supplier directory backend.
//!
//! Kept in sync with `policies/admin_dashboard.toml`; the test in `lib.rs`
//! checks that every constant here is declared there.

pub const USER_MANAGEMENT_VIEW: &str = "user_management_view";
pub const USER_MANAGEMENT_EDIT: &str = "user_management_edit";
pub const USER_MANAGEMENT_DELETE: &str = "user_management_delete";
/// Implies every other user-management capability through the policy's
/// `any` groups.
pub const USER_MANAGEMENT_FULL: &str = "user_management_full";

pub const CONTENT_MANAGEMENT_VIEW: &str = "content_management_view";
pub const CONTENT_MANAGEMENT_EDIT: &str = "content_management_edit";
pub const CONTENT_MANAGEMENT_DELETE: &str = "content_management_delete";
/// Moderator grant: satisfies content, review and communications actions.
pub const CONTENT_MANAGEMENT_SUPERVISE: &str = "content_management_supervise";

pub const REVIEW_MANAGEMENT_VIEW: &str = "review_management_view";
pub const REVIEW_MANAGEMENT_APPROVE: &str = "review_management_approve";
pub const REVIEW_MANAGEMENT_DELETE: &str = "review_management_delete";

pub const ANALYTICS_VIEW: &str = "analytics_view";
pub const ANALYTICS_EXPORT: &str = "analytics_export";

pub const SYSTEM_SETTINGS_VIEW: &str = "system_settings_view";
pub const SYSTEM_SETTINGS_EDIT: &str = "system_settings_edit";
pub const MAINTENANCE_MODE_TOGGLE: &str = "maintenance_mode_toggle";

pub const COMMUNICATIONS_VIEW: &str = "communications_view";
pub const COMMUNICATIONS_SEND: &str = "communications_send";
pub const COMMUNICATIONS_MODERATE: &str = "communications_moderate";

pub const SUBSCRIPTION_MANAGEMENT_VIEW: &str = "subscription_management_view";
pub const SUBSCRIPTION_MANAGEMENT_EDIT: &str = "subscription_management_edit";

pub const ADMIN_MANAGEMENT_VIEW: &str = "admin_management_view";
pub const ADMIN_MANAGEMENT_EDIT: &str = "admin_management_edit";

/// Every capability above, in dashboard order.
pub const ALL: &[&str] = &[
    USER_MANAGEMENT_VIEW,
    USER_MANAGEMENT_EDIT,
    USER_MANAGEMENT_DELETE,
    USER_MANAGEMENT_FULL,
    CONTENT_MANAGEMENT_VIEW,
    CONTENT_MANAGEMENT_EDIT,
    CONTENT_MANAGEMENT_DELETE,
    CONTENT_MANAGEMENT_SUPERVISE,
    REVIEW_MANAGEMENT_VIEW,
    REVIEW_MANAGEMENT_APPROVE,
    REVIEW_MANAGEMENT_DELETE,
    ANALYTICS_VIEW,
    ANALYTICS_EXPORT,
    SYSTEM_SETTINGS_VIEW,
    SYSTEM_SETTINGS_EDIT,
    MAINTENANCE_MODE_TOGGLE,
    COMMUNICATIONS_VIEW,
    COMMUNICATIONS_SEND,
    COMMUNICATIONS_MODERATE,
    SUBSCRIPTION_MANAGEMENT_VIEW,
    SUBSCRIPTION_MANAGEMENT_EDIT,
    ADMIN_MANAGEMENT_VIEW,
    ADMIN_MANAGEMENT_EDIT,
];
