use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::requests::{CreateFileRequest, DeleteFileRequest, FileOpResult};
use crate::models::target_dir::TargetDir;
use crate::services::dir_service;

/// A filename must stay inside the resolved directory: one plain path
/// component, no separators, no traversal.
fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.trim().is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename == "."
        || filename == ".."
    {
        return Err(AppError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}

/// Resolves the target directory and requires it to exist on disk. The
/// resolver never creates directories.
fn resolve_existing(home: &Path, dir: TargetDir) -> Result<PathBuf, AppError> {
    let path = dir_service::resolve(home, dir);
    if !path.is_dir() {
        return Err(AppError::DirectoryNotFound(dir));
    }
    Ok(path)
}

fn try_create(home: &Path, req: &CreateFileRequest) -> Result<TargetDir, AppError> {
    let dir = TargetDir::from_optional(req.target_dir.as_deref())?;
    validate_filename(&req.filename)?;
    let target = resolve_existing(home, dir)?;

    let file_path = target.join(&req.filename);
    debug!(path = %file_path.display(), "creating file");

    // Overwrites an existing file; last write wins.
    fs::write(&file_path, &req.content)?;
    Ok(dir)
}

fn try_delete(home: &Path, req: &DeleteFileRequest) -> Result<TargetDir, AppError> {
    let dir = TargetDir::from_optional(req.target_dir.as_deref())?;
    validate_filename(&req.filename)?;

    let file_path = dir_service::resolve(home, dir).join(&req.filename);
    if !file_path.exists() {
        return Err(AppError::FileNotFound {
            filename: req.filename.clone(),
            dir,
        });
    }

    debug!(path = %file_path.display(), "deleting file");
    fs::remove_file(&file_path)?;
    Ok(dir)
}

/// Creates or overwrites `req.filename` in the target directory. Every
/// expected failure comes back as `success: false`; nothing crosses this
/// boundary as a fault.
pub fn create_file(home: &Path, req: &CreateFileRequest) -> FileOpResult {
    match try_create(home, req) {
        Ok(dir) => FileOpResult::ok(format!(
            "File '{}' created successfully in {dir}",
            req.filename
        )),
        Err(err) => {
            warn!(filename = %req.filename, error = %err, "create file failed");
            FileOpResult::failure(format!("Error creating file: {err}"))
        }
    }
}

/// Removes `req.filename` from the target directory.
pub fn delete_file(home: &Path, req: &DeleteFileRequest) -> FileOpResult {
    match try_delete(home, req) {
        Ok(dir) => FileOpResult::ok(format!(
            "File '{}' deleted successfully from {dir}",
            req.filename
        )),
        Err(err) => {
            warn!(filename = %req.filename, error = %err, "delete file failed");
            FileOpResult::failure(format!("Error deleting file: {err}"))
        }
    }
}
