use tauri::{command, AppHandle};

use crate::services::dialog_service;

#[command]
pub async fn open_file_dialog(app: AppHandle) -> Vec<String> {
    dialog_service::pick_file(&app)
}
