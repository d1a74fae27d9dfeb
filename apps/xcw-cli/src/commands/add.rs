// add.rs — Append project references to a workspace and save it.
//
// Projects the workspace already references (at any depth) are left alone,
// so running `xcw add` twice is a no-op the second time.

use std::path::Path;

use anyhow::Context;
use xcw_workspace::{FileRef, Group, LocationType, Workspace, WorkspaceItem, XcwConfig};

pub fn execute(
    config: &XcwConfig,
    workspace_path: &Path,
    projects: &[String],
    group: Option<&str>,
    location: Option<&str>,
) -> anyhow::Result<()> {
    let location = match location {
        Some(value) => value
            .parse::<LocationType>()
            .with_context(|| format!("--location {}", value))?,
        None => config.defaults.location,
    };

    let mut workspace = Workspace::from_file(workspace_path);
    let added = add_projects(&mut workspace, projects, group, location);

    for project in projects {
        if added.contains(project) {
            println!("Added {}", project);
        } else {
            println!("Already present: {}", project);
        }
    }

    if added.is_empty() {
        return Ok(());
    }

    let written = workspace
        .save_as_with(workspace_path, &config.format)
        .with_context(|| format!("failed to save {}", workspace_path.display()))?;
    tracing::info!("wrote {} project(s) to {}", added.len(), written.display());
    Ok(())
}

/// Add every project not yet referenced. Returns the ones added.
fn add_projects(
    workspace: &mut Workspace,
    projects: &[String],
    group: Option<&str>,
    location: LocationType,
) -> Vec<String> {
    let mut added: Vec<String> = Vec::new();
    let mut refs: Vec<FileRef> = Vec::new();
    for project in projects {
        if workspace.contains(project) || added.contains(project) {
            continue;
        }
        refs.push(FileRef::new(project.as_str()).with_location_type(location));
        added.push(project.clone());
    }

    match group {
        None => {
            for file_ref in refs {
                workspace.push(file_ref);
            }
        }
        Some(name) => {
            if refs.is_empty() {
                return added;
            }
            let target = WorkspaceItem::Group(Group::new(name));
            let existing = workspace
                .contents_mut()
                .iter_mut()
                .find(|item| **item == target);
            match existing {
                Some(WorkspaceItem::Group(group)) => {
                    for file_ref in refs {
                        group.push(file_ref);
                    }
                }
                _ => {
                    let mut group = Group::new(name);
                    for file_ref in refs {
                        group.push(file_ref);
                    }
                    workspace.push(group);
                }
            }
        }
    }

    added
}
