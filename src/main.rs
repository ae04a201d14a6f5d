// Prevents additional console window on Windows (silent launch).
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod commands;
mod errors;
mod models;
mod services;
mod utils;

fn main() {
    utils::config::load_dotenv();
    env_logger::init();

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            // Entry commands
            commands::entry::list_entries,
            commands::entry::query_entries,
            commands::entry::collection_stats,
            commands::entry::create_entry,
            commands::entry::update_entry,
            commands::entry::delete_entry,
            // Toolbar option lists
            commands::options::catalog_options,
            // Preference commands
            commands::preferences::get_preferences,
            commands::preferences::update_preferences,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
