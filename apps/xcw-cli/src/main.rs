//! # xcw
//!
//! Command-line front end for Xcode workspace documents.
//!
//! - `xcw list <workspace>` — project paths referenced anywhere in the tree
//! - `xcw contains <workspace> <project>` — membership check (exit 1 on no)
//! - `xcw add <workspace> <project>...` — append project references and save
//! - `xcw show <workspace>` — print the normalized document
//!
//! `<workspace>` may be a `*.xcworkspace` bundle or the
//! `contents.xcworkspacedata` file inside one. A missing workspace reads as
//! empty, so `add` also creates new workspaces.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xcw_workspace::{XcwConfig, CONFIG_FILE};

/// Inspect and edit Xcode workspaces.
#[derive(Parser)]
#[command(name = "xcw", version, about)]
struct Cli {
    /// Config file (defaults to .xcw.toml in the current directory).
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every project path in the workspace.
    List {
        /// Workspace bundle or document.
        workspace: PathBuf,
        /// Print a JSON array instead of one path per line.
        #[arg(long)]
        json: bool,
    },
    /// Check whether the workspace references a project.
    Contains {
        /// Workspace bundle or document.
        workspace: PathBuf,
        /// Project path as written in the workspace (e.g. Pods/Pods.xcodeproj).
        project: String,
    },
    /// Add project references and save the workspace.
    Add {
        /// Workspace bundle or document (created if missing).
        workspace: PathBuf,
        /// Project paths to add.
        #[arg(required = true)]
        projects: Vec<String>,
        /// Put the new references in a top-level group with this name.
        #[arg(long)]
        group: Option<String>,
        /// Location type for the new references (group, absolute, developer, container, self).
        #[arg(long)]
        location: Option<String>,
    },
    /// Print the workspace as XML.
    Show {
        /// Workspace bundle or document.
        workspace: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interfere with command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("xcw_workspace=warn".parse()?)
                .add_directive("xcw=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = XcwConfig::load_or_default(&cli.config);

    match &cli.command {
        Commands::List { workspace, json } => commands::list::execute(workspace, *json),
        Commands::Contains { workspace, project } => {
            commands::list::contains(workspace, project)
        }
        Commands::Add {
            workspace,
            projects,
            group,
            location,
        } => commands::add::execute(
            &config,
            workspace,
            projects,
            group.as_deref(),
            location.as_deref(),
        ),
        Commands::Show { workspace } => commands::show::execute(&config, workspace),
    }
}
