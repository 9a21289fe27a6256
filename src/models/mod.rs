pub mod requests;
pub mod target_dir;
