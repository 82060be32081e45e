//! `crw projects` — visibility listing and creation.

use crate::cli::{Cli, ProjectCommands};
use crate::context::AppContext;

pub async fn handle(
    action: &ProjectCommands,
    ctx: &mut AppContext,
    cli: &Cli,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List => list(ctx, cli).await,
        ProjectCommands::Create { name } => create(name, ctx, cli).await,
    }
}

async fn list(ctx: &mut AppContext, cli: &Cli) -> anyhow::Result<()> {
    if ctx.workbench.viewer().is_none() {
        // Identity unresolved: login prompt, no store calls.
        println!("Not signed in. Pass --as <profile-id> to act as a viewer.");
        return Ok(());
    }

    ctx.workbench.resolve_visibility().await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(ctx.workbench.projects())?);
        return Ok(());
    }
    if ctx.workbench.projects().is_empty() {
        println!("No visible projects.");
    }
    for project in ctx.workbench.projects() {
        let marker = if project.is_effectively_active() {
            ""
        } else {
            "  (retired)"
        };
        println!("{}  {}{marker}", project.id, project.name);
    }
    Ok(())
}

async fn create(name: &str, ctx: &mut AppContext, cli: &Cli) -> anyhow::Result<()> {
    // Creation merges into the current visible list, so resolve first.
    ctx.workbench.resolve_visibility().await;

    let Some(project) = ctx.workbench.create_project(name).await else {
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&project)?);
    } else {
        println!("created {}  {}", project.id, project.name);
    }
    Ok(())
}
