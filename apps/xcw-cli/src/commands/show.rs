// show.rs — Print the normalized workspace document.

use std::path::Path;

use xcw_workspace::{Workspace, XcwConfig};

pub fn execute(config: &XcwConfig, workspace_path: &Path) -> anyhow::Result<()> {
    let workspace = Workspace::from_file(workspace_path);
    print!("{}", workspace.to_xml_string_with(&config.format)?);
    Ok(())
}
