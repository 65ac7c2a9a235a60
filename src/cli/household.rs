//! CLI commands for setup and household inspection

use super::{parse_month, CliContext};
use crate::display::tables;
use crate::error::FoyerResult;
use crate::services::validate_snapshot;
use crate::storage::SnapshotSource;

/// Handle `foyer init`
pub fn handle_init_command(ctx: &CliContext) -> FoyerResult<()> {
    println!("Initializing Foyer at: {}", ctx.paths.base_dir().display());

    ctx.paths.ensure_directories()?;
    ctx.settings.save(&ctx.paths)?;

    if ctx.store().initialize()? {
        println!("Created empty household snapshot: {}", ctx.snapshot_path().display());
    } else {
        println!("Household snapshot already exists: {}", ctx.snapshot_path().display());
    }

    println!("Initialization complete!");
    Ok(())
}

/// Handle `foyer config`
pub fn handle_config_command(ctx: &CliContext) {
    println!("Foyer Configuration");
    println!("===================");
    println!("Base directory:  {}", ctx.paths.base_dir().display());
    println!("Settings file:   {}", ctx.paths.settings_file().display());
    println!("Snapshot file:   {}", ctx.snapshot_path().display());
    println!();
    println!("Currency symbol: {}", ctx.settings.currency_symbol);
    match &ctx.settings.default_member {
        Some(member) => println!("Default member:  {}", member),
        None => println!("Default member:  (none)"),
    }
    println!(
        "Initialized:     {}",
        if ctx.paths.is_initialized() { "yes" } else { "no" }
    );
}

/// Handle `foyer members`
pub fn handle_members_command(ctx: &CliContext, month: Option<String>) -> FoyerResult<()> {
    let month = parse_month(month.as_deref())?;
    let snapshot = ctx.load_snapshot()?;
    let household = &snapshot.household;

    if household.members.is_empty() {
        println!("No members in this household.");
        return Ok(());
    }

    println!("Members for {}", month.label());
    println!("{}", tables::member_salary_table(household, month, ctx.currency()));
    Ok(())
}

/// Handle `foyer validate`
///
/// Findings never make the command fail.
pub fn handle_validate_command(ctx: &CliContext) -> FoyerResult<()> {
    let snapshot = ctx.store().load_snapshot()?;
    let warnings = validate_snapshot(&snapshot);

    if warnings.is_empty() {
        println!("No problems found in {}", ctx.snapshot_path().display());
        return Ok(());
    }

    println!("{} warning(s) in {}:", warnings.len(), ctx.snapshot_path().display());
    for warning in &warnings {
        tracing::warn!("{}", warning);
        println!("  - {}", warning);
    }
    Ok(())
}
