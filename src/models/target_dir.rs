use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Logical user directory a file operation may target. The set is closed;
/// anything else coming over the wire is rejected before it reaches the
/// file system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetDir {
    Documents,
    Desktop,
    Downloads,
}

impl TargetDir {
    /// Subfolder name under the user's home (and under the cloud-sync
    /// root on Windows, where one exists).
    pub fn folder_name(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Desktop => "Desktop",
            Self::Downloads => "Downloads",
        }
    }

    /// Whether a cloud-sync (OneDrive) variant of this folder exists on
    /// Windows. Downloads is never redirected.
    pub fn has_cloud_sync_variant(self) -> bool {
        !matches!(self, Self::Downloads)
    }

    /// Resolves an optional wire value, applying the Downloads default
    /// for an absent field. A present-but-unrecognized value (including
    /// the empty string) is an error, not the default.
    pub fn from_optional(value: Option<&str>) -> Result<Self, AppError> {
        match value {
            Some(name) => name.parse(),
            None => Ok(Self::default()),
        }
    }
}

impl Default for TargetDir {
    fn default() -> Self {
        Self::Downloads
    }
}

impl std::fmt::Display for TargetDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.folder_name())
    }
}

impl std::str::FromStr for TargetDir {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Documents" => Ok(Self::Documents),
            "Desktop" => Ok(Self::Desktop),
            "Downloads" => Ok(Self::Downloads),
            other => Err(AppError::InvalidDirectory(other.to_string())),
        }
    }
}
