//! `crw profiles` — org directory listing and seeding.
//!
//! Profile lifecycle is owned by the org's admin tooling, not the
//! visibility core; `add` exists so a deployment can be seeded.

use anyhow::bail;
use crew_core::enums::Role;

use crate::cli::{Cli, ProfileCommands};
use crate::context::AppContext;

pub async fn handle(
    action: &ProfileCommands,
    ctx: &mut AppContext,
    cli: &Cli,
) -> anyhow::Result<()> {
    let org_id = ctx.org_id(cli)?;

    match action {
        ProfileCommands::List => list(&org_id, ctx, cli).await,
        ProfileCommands::Add {
            name,
            role,
            manager,
        } => add(&org_id, name, role, manager.as_deref(), ctx, cli).await,
    }
}

async fn list(org_id: &str, ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    let directory = ctx.workbench.store().active_directory(org_id).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&directory)?);
        return Ok(());
    }
    if directory.is_empty() {
        println!("No active profiles in {org_id}.");
    }
    for profile in &directory {
        println!("{}  {}  ({})", profile.id, profile.display_name(), profile.role);
    }
    Ok(())
}

async fn add(
    org_id: &str,
    name: &str,
    role: &str,
    manager: Option<&str>,
    ctx: &AppContext,
    cli: &Cli,
) -> anyhow::Result<()> {
    let role = parse_role(role)?;
    let profile = ctx
        .workbench
        .store()
        .create_profile(org_id, Some(name), role, manager)
        .await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        println!("created {}  {}  ({})", profile.id, profile.display_name(), profile.role);
    }
    Ok(())
}

fn parse_role(s: &str) -> anyhow::Result<Role> {
    match s {
        "admin" => Ok(Role::Admin),
        "manager" => Ok(Role::Manager),
        "contractor" => Ok(Role::Contractor),
        other => bail!("unknown role '{other}' (expected admin, manager, or contractor)"),
    }
}
