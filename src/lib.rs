pub mod board;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use std::sync::{Arc, Mutex};

    logging::init_logging();

    let config_path = config::config_path();
    let registry = config::load_config(&config_path).into_registry();
    log::info!(
        "Starting bugboard with {} bugs and {} team members",
        registry.len(),
        registry.roster().len()
    );

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(Arc::new(Mutex::new(registry)))
        .invoke_handler(tauri::generate_handler![
            commands::bugs::desktop::create_bug,
            commands::bugs::desktop::submit_draft,
            commands::bugs::desktop::update_bug,
            commands::bugs::desktop::set_bug_status,
            commands::bugs::desktop::set_bug_assignee,
            commands::bugs::desktop::list_bugs,
            commands::bugs::desktop::group_bugs,
            commands::bugs::desktop::get_board,
            commands::bugs::desktop::list_team_members,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
