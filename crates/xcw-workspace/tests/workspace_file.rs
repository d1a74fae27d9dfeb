// workspace_file.rs — Loading and saving real workspace bundles.
//
// The libPusher fixture is written in Xcode's own layout (attributes on
// separate lines, `name = "value"` spacing) with projects nested two groups
// deep, the way a CocoaPods-integrated workspace looks on disk.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use xcw_workspace::{FileRef, Group, LocationType, Workspace, CONTENTS_FILE};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn libpusher_lists_all_projects() {
    let workspace = Workspace::from_file(fixture("libPusher.xcworkspace"));
    let paths: Vec<_> = workspace.project_paths().collect();

    assert!(paths.contains(&"libPusher.xcodeproj"));
    assert!(paths.contains(&"libPusher-OSX/libPusher-OSX.xcodeproj"));
    assert!(paths.contains(&"Pods/Pods.xcodeproj"));
    assert_eq!(paths.len(), 3);
}

#[test]
fn libpusher_keeps_group_structure() {
    let workspace = Workspace::read(fixture("libPusher.xcworkspace")).unwrap();
    let groups: Vec<_> = workspace
        .contents()
        .iter()
        .map(|item| item.as_group().and_then(Group::name))
        .collect();
    assert_eq!(groups, vec![Some("Library"), Some("Dependencies")]);

    assert!(workspace.contains("libPusher-OSX/libPusher-OSX.xcodeproj"));
    assert!(!workspace.contains("Platforms"));
}

#[test]
fn libpusher_document_path_is_accepted_directly() {
    let document = fixture("libPusher.xcworkspace").join(CONTENTS_FILE);
    let workspace = Workspace::read(&document).unwrap();
    assert_eq!(workspace.project_paths().count(), 3);
}

#[test]
fn libpusher_round_trips_through_disk() {
    let original = Workspace::read(fixture("libPusher.xcworkspace")).unwrap();
    let dir = TempDir::new().unwrap();
    let bundle = dir.path().join("libPusher.xcworkspace");

    original.save_as(&bundle).unwrap();
    let reloaded = Workspace::read(&bundle).unwrap();

    assert_eq!(
        reloaded.project_paths().collect::<Vec<_>>(),
        original.project_paths().collect::<Vec<_>>()
    );
    assert_eq!(reloaded.contents(), original.contents());
}

#[test]
fn libpusher_group_locations_survive_save() {
    let original = Workspace::read(fixture("libPusher.xcworkspace")).unwrap();
    let library = original.contents()[0].as_group().unwrap();
    assert_eq!(library.location_type(), LocationType::Container);
    assert_eq!(library.location().as_deref(), Some("container:"));

    let dir = TempDir::new().unwrap();
    let bundle = dir.path().join("libPusher.xcworkspace");
    original.save_as(&bundle).unwrap();

    let xml = fs::read_to_string(bundle.join(CONTENTS_FILE)).unwrap();
    assert!(xml.contains("<Group location=\"container:\" name=\"Library\">"));
    assert!(xml.contains("<Group location=\"container:\" name=\"Platforms\">"));
    assert!(xml.contains("<Group location=\"container:\" name=\"Dependencies\">"));

    let reloaded = Workspace::read(&bundle).unwrap();
    let locations: Vec<_> = reloaded
        .contents()
        .iter()
        .filter_map(|item| item.as_group())
        .map(|group| (group.location_type(), group.path().map(str::to_string)))
        .collect();
    assert_eq!(
        locations,
        vec![
            (LocationType::Container, Some(String::new())),
            (LocationType::Container, Some(String::new())),
        ]
    );
}

#[test]
fn groups_without_location_stay_plain() {
    let mut group = Group::new("Nested");
    group.push("Other.xcodeproj");
    let mut workspace = Workspace::from_paths(["App.xcodeproj"]);
    workspace.push(group);

    let dir = TempDir::new().unwrap();
    let written = workspace.save_as(dir.path().join("App.xcworkspace")).unwrap();
    let xml = fs::read_to_string(written).unwrap();
    assert!(xml.contains("\n   <Group name=\"Nested\">\n"));
    assert!(!xml.contains("<Group location"));
}

#[test]
fn nonexistent_workspace_is_empty() {
    let workspace = Workspace::from_file("doesn't exist");
    assert_eq!(workspace.project_paths().count(), 0);
}

#[test]
fn empty_bundle_directory_is_empty() {
    let dir = TempDir::new().unwrap();
    let bundle = dir.path().join("Empty.xcworkspace");
    fs::create_dir_all(&bundle).unwrap();

    assert!(Workspace::from_file(&bundle).is_empty());
}

#[test]
fn truncated_document_is_empty() {
    let dir = TempDir::new().unwrap();
    let bundle = dir.path().join("Partial.xcworkspace");
    fs::create_dir_all(&bundle).unwrap();
    fs::write(
        bundle.join(CONTENTS_FILE),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Workspace version=\"1.0\">\n   <FileRef location=\"group:App.xcodeproj\">",
    )
    .unwrap();

    assert!(Workspace::from_file(&bundle).is_empty());
}

#[test]
fn pods_injection_flow() {
    // An app workspace gains a generated Pods project and is written back.
    let dir = TempDir::new().unwrap();
    let bundle = dir.path().join("App.xcworkspace");

    let mut workspace = Workspace::from_file(&bundle);
    assert!(workspace.is_empty());
    workspace.push("App.xcodeproj");
    workspace.save_as(&bundle).unwrap();

    let mut workspace = Workspace::from_file(&bundle);
    if !workspace.contains("Pods/Pods.xcodeproj") {
        workspace.push(FileRef::new("Pods/Pods.xcodeproj"));
    }
    workspace.save_as(&bundle).unwrap();

    let xml = fs::read_to_string(bundle.join(CONTENTS_FILE)).unwrap();
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<Workspace version=\"1.0\">\n\
\x20\x20\x20<FileRef location=\"group:App.xcodeproj\"></FileRef>\n\
\x20\x20\x20<FileRef location=\"group:Pods/Pods.xcodeproj\"></FileRef>\n\
</Workspace>\n"
    );

    let reloaded = Workspace::from_file(&bundle);
    for item in reloaded.contents() {
        assert_eq!(item.location_type(), LocationType::RelativeToGroup);
    }
}
