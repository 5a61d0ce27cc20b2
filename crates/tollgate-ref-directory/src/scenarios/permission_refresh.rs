//! Scenario 3: Permission Refresh
//!
//! Follows one admin session through a permission change:
//!
//! Sub-case A: first render fills the decision cache; second render hits it
//! Sub-case B: backend promotes ops-21 to `user_management_full`; the host
//!             swaps the permission set and invalidates, and the next render
//!             reflects the promotion
//! Sub-case C: logout evicts every cached decision for the session

use tollgate_contracts::error::TollgateResult;

use crate::{
    host::AdminHost,
    mock_data::{get_refreshed_permissions, get_session},
};

/// Run Scenario 3: Permission Refresh.
pub fn run_scenario() -> TollgateResult<()> {
    println!("=== Scenario 3: Permission Refresh ===");
    println!();

    let host = AdminHost::new()?;
    let actor = host.login(&get_session("ops-21"))?;

    // ── Sub-case A: cache fill and reuse ─────────────────────────────────────

    let before = {
        println!("  Sub-case A: ops-21 renders the dashboard twice");
        let first = host.flags(&actor);
        let cached = host.cache().len();
        let second = host.flags(&actor);

        println!("  Snapshot version:       {}", actor.snapshot_version);
        println!("  Decisions cached:       {}", cached);
        println!("  Second render cached:   {}", host.cache().len());
        println!("  Renders agree:          {}", first == second);
        println!("  delete_users:           {}", first["delete_users"]);
        println!("  view_analytics:         {}", first["view_analytics"]);
        println!();
        first
    };

    // ── Sub-case B: wholesale permission replacement ─────────────────────────

    let refreshed = {
        println!("  Sub-case B: backend promotes ops-21 to full user management");
        let refreshed = host.refresh(&actor, &get_refreshed_permissions("ops-21"));
        let after = host.flags(&refreshed);

        println!(
            "  Snapshot version:       {} -> {}",
            actor.snapshot_version, refreshed.snapshot_version
        );
        println!(
            "  delete_users:           {} -> {}",
            before["delete_users"], after["delete_users"]
        );
        println!(
            "  view_analytics:         {} -> {}",
            before["view_analytics"], after["view_analytics"]
        );
        host.perform(&refreshed, "delete_users", "delete user intern-31")?;
        println!("  Enforced delete_users:  ALLOWED after refresh");
        println!();
        refreshed
    };

    // ── Sub-case C: logout ───────────────────────────────────────────────────

    {
        println!("  Sub-case C: ops-21 logs out");
        println!("  Cached before logout:   {}", host.cache().decisions(&refreshed.id).len());
        host.logout(&refreshed);
        println!("  Cached after logout:    {}", host.cache().decisions(&refreshed.id).len());
        println!();
    }

    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
