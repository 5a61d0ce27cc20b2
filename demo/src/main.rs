//! TOLLGATE Supplier Directory Admin: Demo CLI
//!
//! Runs one or all of the three admin dashboard scenarios, or checks an
//! ad-hoc role and permission payload against the gate.  Each scenario uses
//! real TOLLGATE components (gate, decision cache, audit trail, action policy)
//! wired together with mock session payloads.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- super-admin-override
//!   cargo run -p demo -- content-moderation
//!   cargo run -p demo -- permission-refresh
//!   cargo run -p demo -- check --role admin --permissions '{"analytics_view":true}' analytics_view

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tollgate_contracts::{
    actor::Actor,
    capability::Capability,
    error::{TollgateError, TollgateResult},
};
use tollgate_ref_directory::{
    scenarios::{content_moderation, permission_refresh, super_admin_override},
    AdminHost,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// TOLLGATE: capability-gated admin dashboard demo.
///
/// Each subcommand runs one or all of the three admin scenarios, or evaluates
/// a role and permission payload supplied on the command line.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "TOLLGATE supplier directory admin demo",
    long_about = "Runs TOLLGATE admin dashboard scenarios showing the super-admin\n\
                  override, grouped capability checks, decision caching, and the\n\
                  hash-chained denial audit trail."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three admin scenarios in sequence.
    RunAll,
    /// Scenario 1: Super-Admin Override (empty, stale, and null payloads).
    SuperAdminOverride,
    /// Scenario 2: Content Moderation (supervise groups and audited denials).
    ContentModeration,
    /// Scenario 3: Permission Refresh (cache fill, invalidation, logout).
    PermissionRefresh,
    /// Check capabilities for an ad-hoc role and permission payload.
    Check {
        /// Role string as the backend reports it (`admin` or `super_admin`).
        #[arg(long, default_value = "admin")]
        role: String,
        /// Permission object as JSON.
        #[arg(long, default_value = "{}")]
        permissions: String,
        /// Capabilities to check.
        #[arg(required = true)]
        capabilities: Vec<String>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::SuperAdminOverride => super_admin_override::run_scenario(),
        Command::ContentModeration => content_moderation::run_scenario(),
        Command::PermissionRefresh => permission_refresh::run_scenario(),
        Command::Check {
            role,
            permissions,
            capabilities,
        } => run_check(&role, &permissions, &capabilities),
    };

    match result {
        Ok(()) => {
            println!("All selected commands completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> TollgateResult<()> {
    super_admin_override::run_scenario()?;
    content_moderation::run_scenario()?;
    permission_refresh::run_scenario()?;
    Ok(())
}

// ── Ad-hoc check ──────────────────────────────────────────────────────────────

fn run_check(role: &str, permissions: &str, capabilities: &[String]) -> TollgateResult<()> {
    let payload: serde_json::Value =
        serde_json::from_str(permissions).map_err(|e| TollgateError::MalformedSession {
            reason: format!("--permissions is not valid JSON: {e}"),
        })?;
    let actor = Actor::from_session("cli", role, &payload)?;
    debug!(role = %actor.role, granted = actor.permissions.len(), "ad-hoc actor built");

    let host = AdminHost::new()?;
    let gate = host.gate();

    println!("Role: {}", actor.role);
    println!();
    println!("Capabilities:");
    for name in capabilities {
        let capability = Capability::new(name.as_str());
        capability.validate()?;
        let granted = gate.can(&actor, &capability);
        println!("  {:<34} {}", name, if granted { "GRANTED" } else { "DENIED" });
    }
    println!();

    println!("Dashboard actions:");
    for (action, granted) in host.flags(&actor) {
        println!("  {:<34} {}", action, if granted { "visible" } else { "hidden" });
    }
    println!();

    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("TOLLGATE — Capability-Gated Admin Authorization");
    println!("Supplier Directory Admin Demo");
    println!("===============================================");
    println!();
    println!("TOLLGATE check per action:");
    println!("  [1] Role resolver: super_admin is granted everything, no lookup");
    println!("  [2] Admin capabilities looked up in the session's permission set");
    println!("  [3] Dashboard actions combine capabilities with any / all");
    println!("  [4] Passive checks are cached per actor and snapshot version");
    println!("  [5] Enforced denials are written to a SHA-256 chained audit trail");
    println!();
}
