//! `crw members` — membership management and the assignment picker.

use anyhow::bail;
use crew_core::entities::Profile;

use crate::cli::{Cli, MemberCommands};
use crate::context::AppContext;

pub async fn handle(
    action: &MemberCommands,
    ctx: &mut AppContext,
    cli: &Cli,
) -> anyhow::Result<()> {
    if ctx.workbench.viewer().is_none() {
        bail!("members commands require a viewer — pass --as <profile-id>");
    }
    // Load the directory (for name resolution) and the visible projects.
    ctx.workbench.resolve_visibility().await;

    match action {
        MemberCommands::List { project_id } => {
            ctx.workbench.refresh_members(project_id).await;
            print_members(ctx, project_id, cli)
        }
        MemberCommands::Add {
            project_id,
            profile_id,
        } => {
            ctx.workbench.add_member(project_id, profile_id).await;
            print_members(ctx, project_id, cli)
        }
        MemberCommands::Remove {
            project_id,
            member_id,
        } => {
            ctx.workbench.remove_member(project_id, member_id).await;
            print_members(ctx, project_id, cli)
        }
        MemberCommands::Candidates { project_id } => {
            ctx.workbench.refresh_members(project_id).await;
            print_candidates(ctx, project_id, cli)
        }
    }
}

fn print_members(ctx: &AppContext, project_id: &str, cli: &Cli) -> anyhow::Result<()> {
    let Some(members) = ctx.workbench.loaded_members(project_id) else {
        // The load failed; the workbench message buffer carries the error.
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(members)?);
        return Ok(());
    }
    if members.is_empty() {
        println!("No active members.");
    }
    for member in members {
        let name = display_name(ctx.workbench.directory(), &member.profile_id);
        println!("{}  {}  {name}", member.id, member.profile_id);
    }
    Ok(())
}

fn print_candidates(ctx: &AppContext, project_id: &str, cli: &Cli) -> anyhow::Result<()> {
    let candidates = ctx.workbench.candidates_for(project_id);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }
    if candidates.is_empty() {
        println!("No eligible profiles.");
    }
    for profile in candidates {
        println!("{}  {}  ({})", profile.id, profile.display_name(), profile.role);
    }
    Ok(())
}

fn display_name<'a>(directory: &'a [Profile], profile_id: &str) -> &'a str {
    directory
        .iter()
        .find(|profile| profile.id == profile_id)
        .map_or("(unknown)", |profile| profile.display_name())
}
