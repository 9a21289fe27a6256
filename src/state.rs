use std::path::PathBuf;

/// Process-wide state managed by the Tauri app. Holds the home directory
/// resolved once at startup; every directory resolution is rooted here,
/// which keeps the services pure and testable against a scratch root.
pub struct AppState {
    pub home_dir: PathBuf,
}
