//! Command-line definition for `crw`.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "crw", about = "Project and crew membership manager", version)]
pub struct Cli {
    /// Local database path (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<String>,

    /// Profile ID to act as (the signed-in viewer)
    #[arg(long = "as", global = true, value_name = "PROFILE_ID")]
    pub viewer: Option<String>,

    /// Organization for commands that run without a signed-in viewer
    #[arg(long, global = true, value_name = "ORG_ID")]
    pub org: Option<String>,

    /// Narrow assignment candidates to a single profile
    #[arg(long, global = true, value_name = "PROFILE_ID")]
    pub focus: Option<String>,

    /// Emit JSON instead of plain lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Project visibility and creation
    Projects {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Membership management for a project
    Members {
        #[command(subcommand)]
        action: MemberCommands,
    },
    /// The org's profile directory
    Profiles {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// List the projects visible to the viewer
    List,
    /// Create a project (admins and managers only)
    Create {
        /// Project name (trimmed; empty is a no-op)
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum MemberCommands {
    /// List a project's active members
    List { project_id: String },
    /// Assign a profile to a project
    Add {
        project_id: String,
        profile_id: String,
    },
    /// Revoke a membership by its row ID (soft-delete)
    Remove {
        project_id: String,
        member_id: String,
    },
    /// List profiles eligible for assignment to a project
    Candidates { project_id: String },
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommands {
    /// List the active org directory
    List,
    /// Add a profile (org admin tooling)
    Add {
        /// Display name
        #[arg(long)]
        name: String,
        /// Role: admin, manager, or contractor
        #[arg(long)]
        role: String,
        /// Manager's profile ID
        #[arg(long, value_name = "PROFILE_ID")]
        manager: Option<String>,
    },
}
