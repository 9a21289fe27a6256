use std::path::{Path, PathBuf};

use crate::models::target_dir::TargetDir;

/// Folder under the user profile that OneDrive redirects known folders
/// into on Windows.
const CLOUD_SYNC_FOLDER: &str = "OneDrive";

/// Windows resolution: Documents and Desktop prefer the OneDrive-rooted
/// folder when it exists on disk, otherwise the profile-rooted one.
/// Downloads always resolves locally. The profile root is a parameter so
/// the OneDrive branch is exercisable from tests on any platform.
pub fn resolve_with_cloud_sync(profile: &Path, dir: TargetDir) -> PathBuf {
    if dir.has_cloud_sync_variant() {
        let synced = profile.join(CLOUD_SYNC_FOLDER).join(dir.folder_name());
        if synced.is_dir() {
            return synced;
        }
    }
    profile.join(dir.folder_name())
}

/// macOS/Linux resolution: the logical name is the subfolder name under
/// the home directory.
pub fn resolve_local(home: &Path, dir: TargetDir) -> PathBuf {
    home.join(dir.folder_name())
}

/// Resolves a logical directory to an absolute path rooted at `home`.
/// Pure path computation apart from the single OneDrive existence check;
/// never creates anything and never escapes the home hierarchy.
pub fn resolve(home: &Path, dir: TargetDir) -> PathBuf {
    if cfg!(windows) {
        resolve_with_cloud_sync(home, dir)
    } else {
        resolve_local(home, dir)
    }
}
