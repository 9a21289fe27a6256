use tauri::{command, State};

use crate::models::requests::{CreateFileRequest, DeleteFileRequest, FileOpResult};
use crate::services::file_service;
use crate::state::AppState;

#[command]
pub fn create_file(
    state: State<'_, AppState>,
    filename: String,
    content: Option<String>,
    target_dir: Option<String>,
) -> FileOpResult {
    let request = CreateFileRequest {
        filename,
        content: content.unwrap_or_default(),
        target_dir,
    };
    file_service::create_file(&state.home_dir, &request)
}

#[command]
pub fn delete_file(
    state: State<'_, AppState>,
    filename: String,
    target_dir: Option<String>,
) -> FileOpResult {
    let request = DeleteFileRequest {
        filename,
        target_dir,
    };
    file_service::delete_file(&state.home_dir, &request)
}
