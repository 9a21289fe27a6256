use serde::Serialize;

use crate::models::target_dir::TargetDir;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid directory '{0}'. Please use one of: Documents, Desktop, Downloads")]
    InvalidDirectory(String),

    #[error("Invalid filename '{0}'")]
    InvalidFilename(String),

    #[error("Directory '{0}' not found. Please make sure the directory exists.")]
    DirectoryNotFound(TargetDir),

    #[error("File '{filename}' not found in {dir}")]
    FileNotFound { filename: String, dir: TargetDir },

    #[error("Unauthorized IPC channel: {0}")]
    UnauthorizedChannel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
