use tauri::AppHandle;
use tauri_plugin_dialog::DialogExt;

/// Presents the native open-file picker, restricted to a single file.
/// Cancellation is not an error; it yields an empty list.
pub fn pick_file(app: &AppHandle) -> Vec<String> {
    match app.dialog().file().blocking_pick_file() {
        Some(path) => vec![path.to_string()],
        None => Vec::new(),
    }
}
