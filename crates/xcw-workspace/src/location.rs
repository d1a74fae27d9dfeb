// location.rs — How a workspace reference's path is resolved.
//
// Every item in the tree carries a LocationType. In the XML document it
// shows up as the prefix of a FileRef's `location` attribute, e.g.
// `group:Pods/Pods.xcodeproj` or `absolute:/tmp/Other.xcodeproj`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorkspaceError;

/// The base a reference's path is relative to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    /// `absolute:` — an absolute filesystem path.
    #[serde(rename = "absolute")]
    AbsolutePath,
    /// `group:` — relative to the enclosing group (or the workspace itself).
    #[default]
    #[serde(rename = "group")]
    RelativeToGroup,
    /// `developer:` — relative to the active developer directory.
    #[serde(rename = "developer")]
    RelativeToDeveloperDir,
    /// `container:` — relative to the directory containing the workspace.
    #[serde(rename = "container")]
    Container,
    /// `self:` — the workspace embedded in a project refers to that project.
    #[serde(rename = "self")]
    SelfReference,
}

impl LocationType {
    /// Every member, in declaration order.
    pub const ALL: [LocationType; 5] = [
        LocationType::AbsolutePath,
        LocationType::RelativeToGroup,
        LocationType::RelativeToDeveloperDir,
        LocationType::Container,
        LocationType::SelfReference,
    ];

    /// Prefix used in the `location` attribute (without the trailing `:`).
    pub fn token(self) -> &'static str {
        match self {
            LocationType::AbsolutePath => "absolute",
            LocationType::RelativeToGroup => "group",
            LocationType::RelativeToDeveloperDir => "developer",
            LocationType::Container => "container",
            LocationType::SelfReference => "self",
        }
    }

    /// Descriptive snake_case name, also accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            LocationType::AbsolutePath => "absolute_path",
            LocationType::RelativeToGroup => "relative_to_group",
            LocationType::RelativeToDeveloperDir => "relative_to_developer_dir",
            LocationType::Container => "container",
            LocationType::SelfReference => "self_reference",
        }
    }

    /// Look up a member by its XML token only. Used by the document reader,
    /// which must not accept the descriptive names.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lt| lt.token() == token)
    }
}

/// Accepts the XML token or the descriptive name, ASCII case-insensitively.
/// Surrounding whitespace is not stripped; `" group "` is invalid.
impl FromStr for LocationType {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lt| lt.token().eq_ignore_ascii_case(s) || lt.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| WorkspaceError::InvalidArgument {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
