use std::path::Path;

use serde_json::Value;
use tauri::{command, AppHandle, State};
use tracing::debug;

use crate::error::AppError;
use crate::models::requests::FileOpResult;
use crate::services::{dialog_service, file_service};
use crate::state::AppState;

/// The fixed set of channels the rendering context may invoke. This is
/// the sole security boundary: an unauthorized name is rejected before
/// any payload is parsed or any file-system code runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    CreateFile,
    DeleteFile,
    OpenFileDialog,
}

impl Channel {
    pub fn authorize(name: &str) -> Result<Self, AppError> {
        match name {
            "create-file" => Ok(Self::CreateFile),
            "delete-file" => Ok(Self::DeleteFile),
            "open-file-dialog" => Ok(Self::OpenFileDialog),
            other => Err(AppError::UnauthorizedChannel(other.to_string())),
        }
    }
}

fn handle_create(home: &Path, payload: Value) -> FileOpResult {
    match serde_json::from_value(payload) {
        Ok(req) => file_service::create_file(home, &req),
        Err(err) => FileOpResult::failure(format!("Error creating file: {err}")),
    }
}

fn handle_delete(home: &Path, payload: Value) -> FileOpResult {
    match serde_json::from_value(payload) {
        Ok(req) => file_service::delete_file(home, &req),
        Err(err) => FileOpResult::failure(format!("Error deleting file: {err}")),
    }
}

/// Entry point for the untrusted rendering context. Authorization happens
/// first and an `UnauthorizedChannel` failure is the only error returned
/// as a rejected call; every file-operation failure comes back as a
/// `{success: false, message}` payload.
#[command]
pub async fn invoke_channel(
    app: AppHandle,
    state: State<'_, AppState>,
    channel: String,
    payload: Option<Value>,
) -> Result<Value, AppError> {
    let channel = Channel::authorize(&channel)?;
    debug!(?channel, "bridge dispatch");

    let payload = payload.unwrap_or(Value::Null);
    let response = match channel {
        Channel::CreateFile => serde_json::to_value(handle_create(&state.home_dir, payload)),
        Channel::DeleteFile => serde_json::to_value(handle_delete(&state.home_dir, payload)),
        Channel::OpenFileDialog => serde_json::to_value(dialog_service::pick_file(&app)),
    };
    Ok(response?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn authorizes_exactly_the_three_channels() {
        assert_eq!(Channel::authorize("create-file").unwrap(), Channel::CreateFile);
        assert_eq!(Channel::authorize("delete-file").unwrap(), Channel::DeleteFile);
        assert_eq!(
            Channel::authorize("open-file-dialog").unwrap(),
            Channel::OpenFileDialog
        );
    }

    #[test]
    fn rejects_unknown_channels_before_dispatch() {
        for name in ["run-shell", "create_file", "CREATE-FILE", "", "delete-file "] {
            let err = Channel::authorize(name).unwrap_err();
            assert!(
                matches!(err, AppError::UnauthorizedChannel(_)),
                "expected rejection for {name:?}"
            );
        }
    }

    #[test]
    fn create_payload_round_trips_through_the_bridge() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join("Downloads")).unwrap();

        let result = handle_create(
            home.path(),
            json!({"filename": "from-bridge.txt", "content": "hi"}),
        );

        assert!(result.success);
        assert_eq!(
            fs::read_to_string(home.path().join("Downloads/from-bridge.txt")).unwrap(),
            "hi"
        );
    }

    #[test]
    fn malformed_payload_is_a_soft_failure_not_a_fault() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join("Downloads")).unwrap();

        let result = handle_create(home.path(), json!({"content": "no filename"}));

        assert!(!result.success);
        assert!(result.message.starts_with("Error creating file:"));
        assert_eq!(fs::read_dir(home.path().join("Downloads")).unwrap().count(), 0);
    }

    #[test]
    fn delete_payload_dispatches_to_the_file_service() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join("Desktop")).unwrap();
        fs::write(home.path().join("Desktop/old.txt"), "x").unwrap();

        let result = handle_delete(
            home.path(),
            json!({"filename": "old.txt", "targetDir": "Desktop"}),
        );

        assert!(result.success);
        assert!(!home.path().join("Desktop/old.txt").exists());
    }
}
