mod commands;
mod core;
mod shared;

use tauri::Manager;

use crate::core::session::Session;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // Session state lives exactly as long as the app process
            app.manage(Session::new());
            println!("✅ Unit Converter initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_categories,
            commands::convert_units,
            commands::get_selection,
            commands::submit_selection,
            commands::get_history,
            commands::clear_history,
            commands::add_favorite,
            commands::remove_favorite,
            commands::get_favorites,
            commands::export_history,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("FATAL: Failed to start Tauri application: {}", e);
            std::process::exit(1);
        });
}
