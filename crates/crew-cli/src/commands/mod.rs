//! Command handlers.

pub mod members;
pub mod profiles;
pub mod projects;

use crate::cli::{Cli, Commands};
use crate::context::AppContext;

pub async fn dispatch(cli: &Cli, ctx: &mut AppContext) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Projects { action } => projects::handle(action, ctx, cli).await,
        Commands::Members { action } => members::handle(action, ctx, cli).await,
        Commands::Profiles { action } => profiles::handle(action, ctx, cli).await,
    }
}
