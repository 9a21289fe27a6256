pub mod dialog_commands;
pub mod file_commands;
