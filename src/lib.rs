mod bridge;
mod commands;
mod error;
mod models;
mod services;
mod state;

use commands::{dialog_commands, file_commands};
use state::AppState;
use tauri::Manager;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let home_dir = dirs::home_dir().ok_or("failed to resolve home directory")?;
            tracing::info!(home = %home_dir.display(), "resolved user home");
            app.manage(AppState { home_dir });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            file_commands::create_file,
            file_commands::delete_file,
            dialog_commands::open_file_dialog,
            bridge::invoke_channel,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
