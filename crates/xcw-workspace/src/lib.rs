//! # xcw-workspace
//!
//! In-memory model and XML codec for Xcode workspaces
//! (`*.xcworkspace/contents.xcworkspacedata`).
//!
//! A workspace is an ordered tree: top-level [`WorkspaceItem`]s, each either
//! a [`Group`] (a named container) or a [`FileRef`] (a path plus a
//! [`LocationType`]). Tooling uses it to find which `.xcodeproj` bundles a
//! workspace references and to add new ones, e.g. a generated
//! `Pods/Pods.xcodeproj` next to the app project.
//!
//! ## Key components
//!
//! - [`Workspace`] — root aggregate. Lookup (`contains`), listing
//!   (`project_paths`), append (`push`), and the document round trip.
//!   [`Workspace::from_file`] never fails: a missing or unreadable document
//!   loads as an empty workspace.
//! - [`WorkspaceItem`] — the tree node sum type. Equality is variant-scoped,
//!   and groups compare by name only.
//! - [`xml`] — the small element tree both directions of the codec use.
//! - [`XcwConfig`] — output layout and defaults, read from `.xcw.toml`.

pub mod config;
pub mod error;
pub mod item;
pub mod location;
pub mod workspace;
pub mod xml;

pub use config::{DefaultsConfig, FormatConfig, XcwConfig, CONFIG_FILE};
pub use error::WorkspaceError;
pub use item::{FileRef, FileRefs, Group, WorkspaceItem};
pub use location::LocationType;
pub use workspace::{Workspace, CONTENTS_FILE, FORMAT_VERSION};
