//! Scenario 2: Content Moderation
//!
//! A moderator holding `content_management_supervise` but not the specific
//! delete/approve capabilities works through the moderation queue:
//!
//! Sub-case A: passive checks render the queue controls (no audit records)
//! Sub-case B: enforced delete and review approval succeed via `supervise`
//! Sub-case C: enforced user deletion and maintenance toggle are denied and
//!             audited; the denials are read back newest first

use tollgate_contracts::{
    capability::Capability,
    error::{TollgateError, TollgateResult},
};
use tollgate_core::traits::AuditTrail;

use crate::{host::AdminHost, mock_data::get_session, vocabulary};

/// Run Scenario 2: Content Moderation.
pub fn run_scenario() -> TollgateResult<()> {
    println!("=== Scenario 2: Content Moderation ===");
    println!();

    let host = AdminHost::new()?;
    let moderator = host.login(&get_session("mod-11"))?;

    // ── Sub-case A: passive UI checks ────────────────────────────────────────

    {
        println!("  Sub-case A: render the moderation queue for mod-11");
        let gate = host.gate();
        let delete = Capability::new(vocabulary::CONTENT_MANAGEMENT_DELETE);
        let supervise = Capability::new(vocabulary::CONTENT_MANAGEMENT_SUPERVISE);

        println!("  can(content_management_delete):     {}", gate.can(&moderator, &delete));
        println!(
            "  can_any(delete, supervise):         {}",
            gate.can_any(&moderator, &[delete.clone(), supervise.clone()])
        );
        println!(
            "  can_all(delete, supervise):         {}",
            gate.can_all(&moderator, &[delete, supervise])
        );
        for action in ["view_content", "delete_content", "approve_reviews", "delete_users"] {
            println!("  action {:<28} {}", format!("{}:", action), host.can(&moderator, action));
        }
        println!("  Denials recorded by rendering:      {}", host.trail().len());
        println!();
    }

    // ── Sub-case B: enforced actions covered by supervise ────────────────────

    {
        println!("  Sub-case B: moderator removes a listing and approves a review");
        host.perform(&moderator, "delete_content", "delete listing acme-steel-042")?;
        println!("  delete_content (listing acme-steel-042): ALLOWED");
        host.perform(&moderator, "approve_reviews", "approve review r-7781")?;
        println!("  approve_reviews (review r-7781):         ALLOWED");
        println!();
    }

    // ── Sub-case C: enforced actions outside the moderator's grant ───────────

    {
        println!("  Sub-case C: moderator attempts admin-only actions");
        for (action, context) in [
            ("delete_users", "delete user ops-21"),
            ("toggle_maintenance", "enable maintenance mode"),
        ] {
            match host.perform(&moderator, action, context) {
                Err(TollgateError::PermissionDenied { capability, .. }) => {
                    println!("  {:<20} DENIED (missing '{}')", action, capability);
                }
                Err(e) => println!("  {:<20} unexpected error: {}", action, e),
                Ok(()) => println!("  {:<20} unexpectedly allowed", action),
            }
        }

        let recent = host.trail().recent(10);
        println!("  Audit trail {}, newest first:", host.trail().trail_id());
        for denial in &recent {
            println!(
                "    {} | {} lacked {} | {}",
                denial.timestamp.format("%H:%M:%S%.3f"),
                denial.actor_id,
                denial.capability,
                denial.context
            );
        }
        println!(
            "  Audit chain integrity: {} ({} denial(s))",
            if host.trail().verify_integrity() { "VERIFIED" } else { "FAILED" },
            recent.len()
        );
        println!();
    }

    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
