pub mod dialog_service;
pub mod dir_service;
pub mod file_service;
