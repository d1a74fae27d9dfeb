// list.rs — Read-only queries: list project paths, membership check.

use std::path::Path;

use xcw_workspace::Workspace;

pub fn execute(workspace_path: &Path, json: bool) -> anyhow::Result<()> {
    let workspace = Workspace::from_file(workspace_path);
    print!("{}", render(&workspace, json)?);
    Ok(())
}

pub fn contains(workspace_path: &Path, project: &str) -> anyhow::Result<()> {
    let workspace = Workspace::from_file(workspace_path);
    if workspace.contains(project) {
        println!("yes");
        Ok(())
    } else {
        println!("no");
        anyhow::bail!(
            "{} does not reference {}",
            workspace_path.display(),
            project
        )
    }
}

fn render(workspace: &Workspace, json: bool) -> anyhow::Result<String> {
    let paths: Vec<&str> = workspace.project_paths().collect();
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&paths)?));
    }
    Ok(paths.iter().map(|p| format!("{}\n", p)).collect())
}
